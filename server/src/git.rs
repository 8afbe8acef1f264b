//! Commit-and-push of the board data file.
//!
//! Runs git as a subprocess, step by step, turning each way the sequence
//! can stop into a structured failure the client renders as an alert.

use std::io;
use std::path::Path;
use std::process::{Command, Output};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

/// How a completed publish attempt ended.
#[derive(Debug, PartialEq)]
pub enum PushOutcome {
    /// A commit was created and pushed.
    Pushed {
        commit_message: String,
        branch: String,
    },
    /// Nothing staged and the data file is clean.
    UpToDate,
    /// The data file had unstaged changes; they are staged now and a retry
    /// will commit and push them.
    Retry,
}

/// A rejected or failed publish attempt, shaped like the response body.
/// `setup` failures are problems the user must fix (missing git, no
/// repository, no remote) and map to a client error status.
#[derive(Debug, Serialize)]
pub struct PushFailure {
    #[serde(skip)]
    pub setup: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl PushFailure {
    fn setup(error: &str, details: Option<&str>, help: Option<&str>) -> Self {
        Self {
            setup: true,
            error: error.to_string(),
            details: details.map(str::to_string),
            help: help.map(str::to_string),
        }
    }

    fn command(error: &str, details: Option<&str>, help: Option<&str>) -> Self {
        Self {
            setup: false,
            error: error.to_string(),
            details: details.map(str::to_string),
            help: help.map(str::to_string),
        }
    }
}

/// The timestamped message used for publish commits.
pub fn commit_message_for(now: DateTime<Utc>) -> String {
    format!("Task board update - {}", now.format("%Y-%m-%d %H:%M:%S"))
}

fn run_git(repo_dir: &Path, args: &[&str]) -> io::Result<Output> {
    Command::new("git").args(args).current_dir(repo_dir).output()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).trim().to_string()
}

/// Stage, commit, and push the data file from `repo_dir`.
pub fn push_data_file(repo_dir: &Path, data_file: &str) -> Result<PushOutcome, PushFailure> {
    // Git present at all?
    let version = run_git(repo_dir, &["--version"]).map_err(|e| {
        warn!("git not runnable: {}", e);
        PushFailure::setup(
            "Git is not installed or not on the PATH.",
            None,
            Some("Install it from https://git-scm.com/"),
        )
    })?;
    if !version.status.success() {
        return Err(PushFailure::setup(
            "Git is not installed or not on the PATH.",
            Some(&stderr_of(&version)),
            None,
        ));
    }

    // Inside a repository?
    let inside = run_git(repo_dir, &["rev-parse", "--git-dir"]).map_err(io_failure)?;
    if !inside.status.success() {
        return Err(PushFailure::setup(
            "No git repository found in this directory.",
            Some("Initialize one with: git init"),
            Some("Then configure the remote with: git remote add origin <url>"),
        ));
    }

    // With an origin remote?
    let remote = run_git(repo_dir, &["remote", "get-url", "origin"]).map_err(io_failure)?;
    if !remote.status.success() {
        return Err(PushFailure::setup(
            "No \"origin\" remote is configured.",
            Some("Configure it with: git remote add origin <repository-url>"),
            Some("Example: git remote add origin https://github.com/user/repo.git"),
        ));
    }

    // Stage the data file
    let add = run_git(repo_dir, &["add", data_file]).map_err(io_failure)?;
    if !add.status.success() {
        return Err(PushFailure::command(
            "Failed to stage the data file.",
            Some(&stderr_of(&add)),
            None,
        ));
    }

    // Anything staged? Exit code 0 means the index matches HEAD.
    let staged = run_git(repo_dir, &["diff", "--cached", "--quiet"]).map_err(io_failure)?;
    if staged.status.success() {
        let dirty = run_git(repo_dir, &["diff", "--quiet", data_file]).map_err(io_failure)?;
        if !dirty.status.success() {
            return Ok(PushOutcome::Retry);
        }
        return Ok(PushOutcome::UpToDate);
    }

    // Commit
    let commit_message = commit_message_for(Utc::now());
    let commit = run_git(repo_dir, &["commit", "-m", &commit_message]).map_err(io_failure)?;
    if !commit.status.success() {
        return Err(PushFailure::command(
            "Failed to create the commit.",
            Some(&stderr_of(&commit)),
            None,
        ));
    }

    // Resolve the branch to push
    let branch_out = run_git(repo_dir, &["branch", "--show-current"]).map_err(io_failure)?;
    let branch = if branch_out.status.success() {
        let name = String::from_utf8_lossy(&branch_out.stdout).trim().to_string();
        if name.is_empty() {
            "main".to_string()
        } else {
            name
        }
    } else {
        "main".to_string()
    };

    // Push, trying -u first so a fresh branch gets an upstream
    let push = run_git(repo_dir, &["push", "-u", "origin", &branch]).map_err(io_failure)?;
    if !push.status.success() {
        let retry = run_git(repo_dir, &["push"]).map_err(io_failure)?;
        if !retry.status.success() {
            return Err(PushFailure::command(
                "Failed to push to the remote.",
                Some(&stderr_of(&retry)),
                Some("Check your credentials or SSH configuration."),
            ));
        }
    }

    info!(%branch, "board changes pushed");
    Ok(PushOutcome::Pushed {
        commit_message,
        branch,
    })
}

fn io_failure(e: io::Error) -> PushFailure {
    PushFailure::command(&format!("Failed to run git: {}", e), None, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn commit_message_carries_the_timestamp() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 14, 30, 5).unwrap();
        assert_eq!(
            commit_message_for(now),
            "Task board update - 2024-03-09 14:30:05"
        );
    }

    #[test]
    fn failure_body_omits_absent_fields() {
        let failure = PushFailure::setup("broken", Some("how"), None);
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["error"], "broken");
        assert_eq!(json["details"], "how");
        assert!(json.get("help").is_none());
        assert!(json.get("setup").is_none());
    }
}
