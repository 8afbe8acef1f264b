pub mod board_ops;
pub mod task_ops;
pub mod worker_ops;

pub use board_ops::{reload_board, reload_workers};
pub use task_ops::{delete_task_with_confirm, move_task};
pub use worker_ops::delete_worker_with_confirm;

/// Blocking browser alert. Failures are reported this way at every call
/// site; nothing is fatal to the page.
pub(crate) fn alert(message: &str) {
    let _ = web_sys::window().map(|w| w.alert_with_message(message));
}

/// Blocking browser confirm. A missing window counts as "no".
pub(crate) fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
