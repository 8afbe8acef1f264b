//! Board data model, matching the JSON document on disk and on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The whole data file: assignable workers plus the columns with their
/// nested tasks. This is also the body served by `GET /api/tasks`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoardFile {
    #[serde(default)]
    pub workers: Vec<Worker>,
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl Default for BoardFile {
    fn default() -> Self {
        Self {
            workers: Vec::new(),
            columns: vec![
                Column::new("todo", "To Do"),
                Column::new("doing", "In Progress"),
                Column::new("done", "Done"),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Column {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Column {
    fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            tasks: Vec::new(),
        }
    }
}

/// `description` and `assignedTo` use the empty string for "not set".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "assignedTo")]
    pub assigned_to: String,
    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Worker {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,
}

/// Input for task creation. Ids and timestamps are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub assigned_to: String,
}

/// Partial task update; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub assigned_to: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewWorker {
    pub name: String,
    pub email: String,
}

/// Partial worker update; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct WorkerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}
