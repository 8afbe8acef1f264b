//! HTTP client for the board API.

use gloo_net::http::Request;

use crate::models::{BoardData, Worker};

use super::types::{
    MoveTaskPayload, NewTaskPayload, PushResponse, UpdateTaskPayload, WorkerPayload,
};

/// Fetch the full board (columns with nested tasks).
pub async fn fetch_board() -> Result<BoardData, String> {
    Request::get("/api/tasks")
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())
}

/// Create a task in the payload's column.
pub async fn create_task(payload: &NewTaskPayload) -> Result<(), String> {
    Request::post("/api/tasks")
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    Ok(())
}

/// Update an existing task's title, description, and assignee.
pub async fn update_task(task_id: &str, payload: &UpdateTaskPayload) -> Result<(), String> {
    Request::put(&format!("/api/tasks/{}", task_id))
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    Ok(())
}

/// Delete a task.
pub async fn delete_task(task_id: &str) -> Result<(), String> {
    Request::delete(&format!("/api/tasks/{}", task_id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    Ok(())
}

/// Move a task to another column.
pub async fn move_task(task_id: &str, column_id: &str) -> Result<(), String> {
    let payload = MoveTaskPayload {
        column_id: column_id.to_string(),
    };
    Request::post(&format!("/api/tasks/{}/move", task_id))
        .json(&payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    Ok(())
}

/// Fetch the list of assignable workers.
pub async fn fetch_workers() -> Result<Vec<Worker>, String> {
    Request::get("/api/workers")
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())
}

/// Create a worker.
pub async fn create_worker(payload: &WorkerPayload) -> Result<(), String> {
    Request::post("/api/workers")
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    Ok(())
}

/// Update a worker's name and email.
pub async fn update_worker(worker_id: &str, payload: &WorkerPayload) -> Result<(), String> {
    Request::put(&format!("/api/workers/{}", worker_id))
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    Ok(())
}

/// Delete a worker. The server clears the worker from any assigned tasks.
pub async fn delete_worker(worker_id: &str) -> Result<(), String> {
    Request::delete(&format!("/api/workers/{}", worker_id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    Ok(())
}

/// Trigger the commit-and-push of the board data file. Returns the HTTP
/// success flag alongside the parsed body; the caller composes the alert.
pub async fn push_to_remote() -> Result<(bool, PushResponse), String> {
    let response = Request::post("/api/git/push")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let ok = response.ok();
    let body = response.json().await.map_err(|e| e.to_string())?;
    Ok((ok, body))
}
