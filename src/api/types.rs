//! Request and response types for the board API.

use serde::{Deserialize, Serialize};

/// Body for `POST /api/tasks`.
#[derive(Debug, Clone, Serialize)]
pub struct NewTaskPayload {
    pub title: String,
    pub description: String,
    #[serde(rename = "columnId")]
    pub column_id: String,
    #[serde(rename = "assignedTo")]
    pub assigned_to: String,
}

/// Body for `PUT /api/tasks/:id`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateTaskPayload {
    pub title: String,
    pub description: String,
    #[serde(rename = "assignedTo")]
    pub assigned_to: String,
}

/// Body for `POST /api/tasks/:id/move`.
#[derive(Debug, Clone, Serialize)]
pub struct MoveTaskPayload {
    #[serde(rename = "columnId")]
    pub column_id: String,
}

/// Body for worker create and update.
#[derive(Debug, Clone, Serialize)]
pub struct WorkerPayload {
    pub name: String,
    pub email: String,
}

/// Response body of `POST /api/git/push`. Every field is optional; which
/// ones are present depends on how far the push got server-side.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PushResponse {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    pub commit_message: Option<String>,
    pub branch: Option<String>,
    pub error: Option<String>,
    pub details: Option<String>,
    pub help: Option<String>,
    pub info: Option<String>,
}

/// Compose the user-facing alert for a publish response. `ok` is the HTTP
/// success flag; the three shapes are: pushed (or nothing to commit),
/// informational retry hint, and structured error.
pub fn compose_push_alert(ok: bool, resp: &PushResponse) -> String {
    if ok {
        if resp.success {
            let mut message = format!(
                "\u{2705} {}",
                resp.message.as_deref().unwrap_or("Changes pushed to the remote repository")
            );
            if let Some(commit_message) = &resp.commit_message {
                message.push_str(&format!("\n\nCommit: {}", commit_message));
            }
            if let Some(branch) = &resp.branch {
                message.push_str(&format!("\nBranch: {}", branch));
            }
            message
        } else if let Some(msg) = &resp.message {
            match &resp.info {
                Some(info) => format!("\u{2139}\u{fe0f} {}\n\n{}", msg, info),
                None => format!("\u{2139}\u{fe0f} {}", msg),
            }
        } else {
            "\u{2705} Operation completed".to_string()
        }
    } else {
        let mut message = format!(
            "\u{274c} Error: {}",
            resp.error.as_deref().unwrap_or("Unknown error")
        );
        if let Some(details) = &resp.details {
            message.push_str(&format!("\n\nDetails: {}", details));
        }
        if let Some(help) = &resp.help {
            message.push_str(&format!("\n\nHelp: {}", help));
        }
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_includes_commit_and_branch() {
        let resp = PushResponse {
            success: true,
            message: Some("Changes pushed".into()),
            commit_message: Some("Task board update - 2024-01-01 10:00:00".into()),
            branch: Some("main".into()),
            ..Default::default()
        };
        let alert = compose_push_alert(true, &resp);
        assert!(alert.starts_with('\u{2705}'));
        assert!(alert.contains("Commit: Task board update"));
        assert!(alert.contains("Branch: main"));
    }

    #[test]
    fn message_without_success_flag_is_informational() {
        let resp = PushResponse {
            message: Some("Unstaged changes found".into()),
            info: Some("Try again to commit and push.".into()),
            ..Default::default()
        };
        let alert = compose_push_alert(true, &resp);
        assert!(alert.starts_with('\u{2139}'));
        assert!(!alert.contains("Error"));
        assert!(alert.contains("Try again"));
    }

    #[test]
    fn http_error_includes_details_and_help() {
        let resp = PushResponse {
            error: Some("No \"origin\" remote is configured.".into()),
            details: Some("git remote add origin <url>".into()),
            help: Some("Example: git remote add origin https://github.com/user/repo.git".into()),
            ..Default::default()
        };
        let alert = compose_push_alert(false, &resp);
        assert!(alert.contains("Error: No \"origin\" remote"));
        assert!(alert.contains("Details: git remote add origin <url>"));
        assert!(alert.contains("Help: Example: git remote add origin"));
    }

    #[test]
    fn parses_sparse_response_bodies() {
        let resp: PushResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(resp.success);
        assert!(resp.message.is_none());

        let resp: PushResponse =
            serde_json::from_str(r#"{"error":"boom","details":"d"}"#).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.error.as_deref(), Some("boom"));
    }
}
