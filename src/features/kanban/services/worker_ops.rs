use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::{Column, Worker};

use super::{alert, confirm, reload_board, reload_workers};

/// Confirm and delete a worker. The server unassigns the worker from every
/// task, so the board is reloaded along with the worker list.
pub fn delete_worker_with_confirm(
    worker_id: String,
    set_workers: WriteSignal<Vec<Worker>>,
    set_columns: WriteSignal<Vec<Column>>,
) {
    if !confirm("Are you sure you want to delete this worker? Assigned tasks will become unassigned.") {
        return;
    }

    spawn_local(async move {
        match api::delete_worker(&worker_id).await {
            Ok(()) => {
                reload_workers(set_workers);
                reload_board(set_columns);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to delete worker: {}", e).into());
                alert("The worker could not be deleted");
            }
        }
    });
}
