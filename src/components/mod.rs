pub mod git_push;
pub mod task_modal;
pub mod workers_modal;

pub use git_push::GitPushButton;
pub use task_modal::{EditorRequest, TaskModal};
pub use workers_modal::WorkersModal;
