use serde::{Deserialize, Serialize};

/// Full board payload as returned by `GET /api/tasks`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BoardData {
    #[serde(default)]
    pub columns: Vec<Column>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Column {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// A task card. `description` and `assigned_to` use the empty string for
/// "not set", matching the wire format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "assignedTo")]
    pub assigned_to: String,
}

impl BoardData {
    /// Locate a task by id, returning it with its column id. The board has
    /// no single-task endpoint, so the edit modal scans a fresh board fetch.
    pub fn find_task(&self, task_id: &str) -> Option<(&Column, &Task)> {
        self.columns.iter().find_map(|column| {
            column
                .tasks
                .iter()
                .find(|t| t.id == task_id)
                .map(|t| (column, t))
        })
    }
}

/// How a form submission is dispatched to the API: an empty entity id means
/// the form was opened in create mode. Shared by the task and worker forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveAction {
    Create,
    Update { id: String },
}

impl SaveAction {
    pub fn for_id(id: &str) -> Self {
        if id.is_empty() {
            SaveAction::Create
        } else {
            SaveAction::Update { id: id.to_string() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_task() -> BoardData {
        BoardData {
            columns: vec![
                Column {
                    id: "todo".into(),
                    title: "To Do".into(),
                    tasks: vec![],
                },
                Column {
                    id: "doing".into(),
                    title: "In Progress".into(),
                    tasks: vec![Task {
                        id: "t-1".into(),
                        title: "Write docs".into(),
                        description: String::new(),
                        assigned_to: "w-1".into(),
                    }],
                },
            ],
        }
    }

    #[test]
    fn find_task_returns_owning_column() {
        let board = board_with_task();
        let (column, task) = board.find_task("t-1").unwrap();
        assert_eq!(column.id, "doing");
        assert_eq!(task.title, "Write docs");
        assert!(board.find_task("missing").is_none());
    }

    #[test]
    fn empty_id_creates_nonempty_updates() {
        assert_eq!(SaveAction::for_id(""), SaveAction::Create);
        assert_eq!(
            SaveAction::for_id("t-9"),
            SaveAction::Update { id: "t-9".into() }
        );
    }

    #[test]
    fn task_wire_format_uses_camel_case() {
        let task: Task =
            serde_json::from_str(r#"{"id":"a","title":"T","assignedTo":"w-2"}"#).unwrap();
        assert_eq!(task.assigned_to, "w-2");
        assert_eq!(task.description, "");

        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"assignedTo\":\"w-2\""));
    }
}
