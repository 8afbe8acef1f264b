//! JSON-file persistence for the board.
//!
//! Every operation is one load → mutate → save cycle over the whole data
//! file; the HTTP layer serializes access through a mutex. Nothing is
//! persisted when an operation fails.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::model::{BoardFile, NewTask, NewWorker, Task, TaskPatch, Worker, WorkerPatch};

#[derive(Debug, Error)]
pub enum StoreError {
    /// Task not found.
    #[error("Task not found: {0}")]
    TaskNotFound(String),

    /// Column not found.
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// Worker not found.
    #[error("Worker not found: {0}")]
    WorkerNotFound(String),

    /// Data file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Data file is not valid board JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::TaskNotFound(_)
                | StoreError::ColumnNotFound(_)
                | StoreError::WorkerNotFound(_)
        )
    }
}

pub struct BoardStore {
    path: PathBuf,
}

impl BoardStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the data file, or start from the default board (three empty
    /// columns, no workers) when it does not exist yet.
    pub fn load(&self) -> Result<BoardFile, StoreError> {
        if !self.path.exists() {
            return Ok(BoardFile::default());
        }
        let text = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&text)?)
    }

    fn save(&self, board: &BoardFile) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(board)?;
        fs::write(&self.path, text)?;
        debug!(path = %self.path.display(), "board saved");
        Ok(())
    }

    pub fn create_task(&self, column_id: &str, input: NewTask) -> Result<Task, StoreError> {
        let mut board = self.load()?;

        let column = board
            .columns
            .iter_mut()
            .find(|c| c.id == column_id)
            .ok_or_else(|| StoreError::ColumnNotFound(column_id.to_string()))?;

        let task = Task {
            id: Uuid::new_v4().to_string(),
            title: input.title,
            description: input.description,
            assigned_to: input.assigned_to,
            created: chrono::Utc::now(),
        };
        column.tasks.push(task.clone());

        self.save(&board)?;
        Ok(task)
    }

    pub fn update_task(&self, task_id: &str, patch: TaskPatch) -> Result<Task, StoreError> {
        let mut board = self.load()?;

        let task = board
            .columns
            .iter_mut()
            .find_map(|c| c.tasks.iter_mut().find(|t| t.id == task_id))
            .ok_or_else(|| StoreError::TaskNotFound(task_id.to_string()))?;

        if let Some(title) = patch.title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = description;
        }
        if let Some(assigned_to) = patch.assigned_to {
            task.assigned_to = assigned_to;
        }
        let task = task.clone();

        self.save(&board)?;
        Ok(task)
    }

    pub fn delete_task(&self, task_id: &str) -> Result<(), StoreError> {
        let mut board = self.load()?;

        let column = board
            .columns
            .iter_mut()
            .find(|c| c.tasks.iter().any(|t| t.id == task_id))
            .ok_or_else(|| StoreError::TaskNotFound(task_id.to_string()))?;
        column.tasks.retain(|t| t.id != task_id);

        self.save(&board)
    }

    /// Move a task to the end of another column. Moving within a column is
    /// allowed and sends the task to the end of it.
    pub fn move_task(&self, task_id: &str, column_id: &str) -> Result<(), StoreError> {
        let mut board = self.load()?;

        if !board.columns.iter().any(|c| c.id == column_id) {
            return Err(StoreError::ColumnNotFound(column_id.to_string()));
        }

        let source = board
            .columns
            .iter_mut()
            .find(|c| c.tasks.iter().any(|t| t.id == task_id))
            .ok_or_else(|| StoreError::TaskNotFound(task_id.to_string()))?;
        let index = source
            .tasks
            .iter()
            .position(|t| t.id == task_id)
            .ok_or_else(|| StoreError::TaskNotFound(task_id.to_string()))?;
        let task = source.tasks.remove(index);

        let target = board
            .columns
            .iter_mut()
            .find(|c| c.id == column_id)
            .ok_or_else(|| StoreError::ColumnNotFound(column_id.to_string()))?;
        target.tasks.push(task);

        self.save(&board)
    }

    pub fn workers(&self) -> Result<Vec<Worker>, StoreError> {
        Ok(self.load()?.workers)
    }

    pub fn create_worker(&self, input: NewWorker) -> Result<Worker, StoreError> {
        let mut board = self.load()?;

        let worker = Worker {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            email: input.email,
            created: chrono::Utc::now(),
        };
        board.workers.push(worker.clone());

        self.save(&board)?;
        Ok(worker)
    }

    pub fn update_worker(&self, worker_id: &str, patch: WorkerPatch) -> Result<Worker, StoreError> {
        let mut board = self.load()?;

        let worker = board
            .workers
            .iter_mut()
            .find(|w| w.id == worker_id)
            .ok_or_else(|| StoreError::WorkerNotFound(worker_id.to_string()))?;

        if let Some(name) = patch.name {
            worker.name = name;
        }
        if let Some(email) = patch.email {
            worker.email = email;
        }
        let worker = worker.clone();

        self.save(&board)?;
        Ok(worker)
    }

    /// Delete a worker, clearing the assignment of every task that pointed
    /// at it so the board never holds dangling references after a delete.
    pub fn delete_worker(&self, worker_id: &str) -> Result<(), StoreError> {
        let mut board = self.load()?;

        if !board.workers.iter().any(|w| w.id == worker_id) {
            return Err(StoreError::WorkerNotFound(worker_id.to_string()));
        }

        for column in &mut board.columns {
            for task in &mut column.tasks {
                if task.assigned_to == worker_id {
                    task.assigned_to.clear();
                }
            }
        }
        board.workers.retain(|w| w.id != worker_id);

        self.save(&board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn tmp_store() -> BoardStore {
        let n = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        BoardStore::new(std::env::temp_dir().join(format!("task-board-test-{n}.json")))
    }

    fn cleanup(store: &BoardStore) {
        let _ = fs::remove_file(&store.path);
    }

    fn new_task(title: &str) -> NewTask {
        NewTask {
            title: title.to_string(),
            description: String::new(),
            assigned_to: String::new(),
        }
    }

    #[test]
    fn missing_file_yields_default_board() {
        let store = tmp_store();
        let board = store.load().unwrap();

        assert!(board.workers.is_empty());
        let ids: Vec<_> = board.columns.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["todo", "doing", "done"]);
        assert!(board.columns.iter().all(|c| c.tasks.is_empty()));
    }

    #[test]
    fn create_task_appends_to_column_and_persists() {
        let store = tmp_store();

        let task = store.create_task("doing", new_task("Write docs")).unwrap();
        assert_eq!(task.title, "Write docs");

        let board = store.load().unwrap();
        let doing = board.columns.iter().find(|c| c.id == "doing").unwrap();
        assert_eq!(doing.tasks.len(), 1);
        assert_eq!(doing.tasks[0].id, task.id);

        cleanup(&store);
    }

    #[test]
    fn create_task_rejects_unknown_column() {
        let store = tmp_store();
        let err = store.create_task("nope", new_task("T")).unwrap_err();
        assert!(matches!(err, StoreError::ColumnNotFound(_)));
        assert!(err.is_not_found());
        // Nothing was persisted
        assert!(!store.path.exists());
    }

    #[test]
    fn update_task_patches_only_provided_fields() {
        let store = tmp_store();
        let task = store.create_task("todo", new_task("Original")).unwrap();

        let updated = store
            .update_task(
                &task.id,
                TaskPatch {
                    title: Some("Renamed".to_string()),
                    description: None,
                    assigned_to: Some("w-1".to_string()),
                },
            )
            .unwrap();
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.description, "");
        assert_eq!(updated.assigned_to, "w-1");

        let err = store
            .update_task("missing", TaskPatch::default())
            .unwrap_err();
        assert!(matches!(err, StoreError::TaskNotFound(_)));

        cleanup(&store);
    }

    #[test]
    fn delete_task_removes_it_from_its_column() {
        let store = tmp_store();
        let task = store.create_task("todo", new_task("Gone soon")).unwrap();

        store.delete_task(&task.id).unwrap();

        let board = store.load().unwrap();
        assert!(board.columns.iter().all(|c| c.tasks.is_empty()));
        assert!(matches!(
            store.delete_task(&task.id),
            Err(StoreError::TaskNotFound(_))
        ));

        cleanup(&store);
    }

    #[test]
    fn move_task_appends_to_target_column() {
        let store = tmp_store();
        let task = store.create_task("todo", new_task("Mobile")).unwrap();
        let anchor = store.create_task("done", new_task("Anchor")).unwrap();

        store.move_task(&task.id, "done").unwrap();

        let board = store.load().unwrap();
        let todo = board.columns.iter().find(|c| c.id == "todo").unwrap();
        let done = board.columns.iter().find(|c| c.id == "done").unwrap();
        assert!(todo.tasks.is_empty());
        let ids: Vec<_> = done.tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, [anchor.id.as_str(), task.id.as_str()]);

        cleanup(&store);
    }

    #[test]
    fn move_task_to_unknown_column_changes_nothing() {
        let store = tmp_store();
        let task = store.create_task("todo", new_task("Stays")).unwrap();

        let err = store.move_task(&task.id, "nope").unwrap_err();
        assert!(matches!(err, StoreError::ColumnNotFound(_)));

        let board = store.load().unwrap();
        let todo = board.columns.iter().find(|c| c.id == "todo").unwrap();
        assert_eq!(todo.tasks.len(), 1);

        cleanup(&store);
    }

    #[test]
    fn worker_create_update_delete_round() {
        let store = tmp_store();

        let worker = store
            .create_worker(NewWorker {
                name: "Ada".to_string(),
                email: String::new(),
            })
            .unwrap();
        assert_eq!(store.workers().unwrap().len(), 1);

        let updated = store
            .update_worker(
                &worker.id,
                WorkerPatch {
                    name: None,
                    email: Some("ada@example.com".to_string()),
                },
            )
            .unwrap();
        assert_eq!(updated.name, "Ada");
        assert_eq!(updated.email, "ada@example.com");

        store.delete_worker(&worker.id).unwrap();
        assert!(store.workers().unwrap().is_empty());
        assert!(matches!(
            store.delete_worker(&worker.id),
            Err(StoreError::WorkerNotFound(_))
        ));

        cleanup(&store);
    }

    #[test]
    fn deleting_worker_unassigns_dependent_tasks() {
        let store = tmp_store();
        let worker = store
            .create_worker(NewWorker {
                name: "Grace".to_string(),
                email: String::new(),
            })
            .unwrap();
        let assigned = store
            .create_task(
                "todo",
                NewTask {
                    title: "Assigned".to_string(),
                    description: String::new(),
                    assigned_to: worker.id.clone(),
                },
            )
            .unwrap();
        let other = store
            .create_task(
                "doing",
                NewTask {
                    title: "Other".to_string(),
                    description: String::new(),
                    assigned_to: "someone-else".to_string(),
                },
            )
            .unwrap();

        store.delete_worker(&worker.id).unwrap();

        let board = store.load().unwrap();
        let find = |id: &str| {
            board
                .columns
                .iter()
                .flat_map(|c| &c.tasks)
                .find(|t| t.id == id)
                .unwrap()
        };
        assert_eq!(find(&assigned.id).assigned_to, "");
        assert_eq!(find(&other.id).assigned_to, "someone-else");

        cleanup(&store);
    }
}
