use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::{Column, Worker};

/// Re-fetch the full board and replace the rendered columns. Every mutation
/// is followed by one of these; overlapping reloads race benignly since the
/// last response to resolve fully replaces the signal.
pub fn reload_board(set_columns: WriteSignal<Vec<Column>>) {
    spawn_local(async move {
        match api::fetch_board().await {
            Ok(board) => {
                set_columns.set(board.columns);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to load board: {}", e).into());
            }
        }
    });
}

/// Refresh the cached worker list used for name lookups and the assignee
/// select. On failure the cache is cleared rather than left stale.
pub fn reload_workers(set_workers: WriteSignal<Vec<Worker>>) {
    spawn_local(async move {
        match api::fetch_workers().await {
            Ok(workers) => {
                set_workers.set(workers);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to load workers: {}", e).into());
                set_workers.set(Vec::new());
            }
        }
    });
}
