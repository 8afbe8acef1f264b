use std::path::PathBuf;

use tokio::sync::Mutex;

use crate::store::BoardStore;

/// Shared server state: the mutex-serialized board store plus what the
/// publish endpoint needs to run git.
pub struct AppState {
    pub store: Mutex<BoardStore>,
    /// Repository the publish endpoint commits and pushes from.
    pub repo_dir: PathBuf,
    /// Path handed to `git add`, as configured.
    pub data_file: String,
}
