use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::Column;

use super::{alert, confirm, reload_board};

/// Confirm, delete, reload.
pub fn delete_task_with_confirm(task_id: String, set_columns: WriteSignal<Vec<Column>>) {
    if !confirm("Are you sure you want to delete this task?") {
        return;
    }

    spawn_local(async move {
        match api::delete_task(&task_id).await {
            Ok(()) => {
                reload_board(set_columns);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to delete task: {}", e).into());
                alert("The task could not be deleted");
            }
        }
    });
}

/// Issue the move request for a dropped task and reload the board.
pub fn move_task(task_id: String, column_id: String, set_columns: WriteSignal<Vec<Column>>) {
    spawn_local(async move {
        match api::move_task(&task_id, &column_id).await {
            Ok(()) => {
                reload_board(set_columns);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to move task: {}", e).into());
                alert("The task could not be moved");
            }
        }
    });
}
