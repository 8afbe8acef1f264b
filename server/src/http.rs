//! HTTP interface: the board REST API, the publish endpoint, and static
//! serving of the embedded client build.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use mime_guess::from_path;
use rust_embed::RustEmbed;
use serde::Deserialize;
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::error;

use crate::git::{self, PushOutcome};
use crate::model::{NewTask, NewWorker, TaskPatch, WorkerPatch};
use crate::state::AppState;
use crate::store::StoreError;

#[derive(RustEmbed)]
#[folder = "../dist"]
struct Frontend;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/tasks", get(get_board).post(create_task))
        .route("/api/tasks/:id", put(update_task).delete(delete_task))
        .route("/api/tasks/:id/move", post(move_task))
        .route("/api/workers", get(list_workers).post(create_worker))
        .route("/api/workers/:id", put(update_worker).delete(delete_worker))
        .route("/api/git/push", post(git_push))
        .route("/", get(index))
        .route("/*path", get(static_asset))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

fn store_error_response(err: StoreError) -> Response {
    let status = if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        error!("store operation failed: {}", err);
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(json!({ "error": err.to_string() }))).into_response()
}

// ---- Tasks ----

async fn get_board(State(state): State<Arc<AppState>>) -> Response {
    let store = state.store.lock().await;
    match store.load() {
        Ok(board) => Json(board).into_response(),
        Err(err) => store_error_response(err),
    }
}

#[derive(Debug, Deserialize)]
struct NewTaskBody {
    #[serde(default = "default_task_title")]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default = "default_column_id", rename = "columnId")]
    column_id: String,
    #[serde(default, rename = "assignedTo")]
    assigned_to: String,
}

fn default_task_title() -> String {
    "New task".to_string()
}

fn default_column_id() -> String {
    "todo".to_string()
}

async fn create_task(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewTaskBody>,
) -> Response {
    let store = state.store.lock().await;
    let input = NewTask {
        title: body.title,
        description: body.description,
        assigned_to: body.assigned_to,
    };
    match store.create_task(&body.column_id, input) {
        Ok(task) => (StatusCode::CREATED, Json(task)).into_response(),
        Err(err) => store_error_response(err),
    }
}

#[derive(Debug, Deserialize)]
struct UpdateTaskBody {
    title: Option<String>,
    description: Option<String>,
    #[serde(rename = "assignedTo")]
    assigned_to: Option<String>,
}

async fn update_task(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<String>,
    Json(body): Json<UpdateTaskBody>,
) -> Response {
    let store = state.store.lock().await;
    let patch = TaskPatch {
        title: body.title,
        description: body.description,
        assigned_to: body.assigned_to,
    };
    match store.update_task(&task_id, patch) {
        Ok(task) => Json(task).into_response(),
        Err(err) => store_error_response(err),
    }
}

async fn delete_task(State(state): State<Arc<AppState>>, Path(task_id): Path<String>) -> Response {
    let store = state.store.lock().await;
    match store.delete_task(&task_id) {
        Ok(()) => Json(json!({ "success": true })).into_response(),
        Err(err) => store_error_response(err),
    }
}

#[derive(Debug, Deserialize)]
struct MoveTaskBody {
    #[serde(rename = "columnId")]
    column_id: String,
}

async fn move_task(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<String>,
    Json(body): Json<MoveTaskBody>,
) -> Response {
    let store = state.store.lock().await;
    match store.move_task(&task_id, &body.column_id) {
        Ok(()) => Json(json!({ "success": true })).into_response(),
        Err(err) => store_error_response(err),
    }
}

// ---- Workers ----

async fn list_workers(State(state): State<Arc<AppState>>) -> Response {
    let store = state.store.lock().await;
    match store.workers() {
        Ok(workers) => Json(workers).into_response(),
        Err(err) => store_error_response(err),
    }
}

#[derive(Debug, Deserialize)]
struct NewWorkerBody {
    #[serde(default = "default_worker_name")]
    name: String,
    #[serde(default)]
    email: String,
}

fn default_worker_name() -> String {
    "New worker".to_string()
}

async fn create_worker(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewWorkerBody>,
) -> Response {
    let store = state.store.lock().await;
    match store.create_worker(NewWorker {
        name: body.name,
        email: body.email,
    }) {
        Ok(worker) => (StatusCode::CREATED, Json(worker)).into_response(),
        Err(err) => store_error_response(err),
    }
}

#[derive(Debug, Deserialize)]
struct UpdateWorkerBody {
    name: Option<String>,
    email: Option<String>,
}

async fn update_worker(
    State(state): State<Arc<AppState>>,
    Path(worker_id): Path<String>,
    Json(body): Json<UpdateWorkerBody>,
) -> Response {
    let store = state.store.lock().await;
    match store.update_worker(
        &worker_id,
        WorkerPatch {
            name: body.name,
            email: body.email,
        },
    ) {
        Ok(worker) => Json(worker).into_response(),
        Err(err) => store_error_response(err),
    }
}

async fn delete_worker(
    State(state): State<Arc<AppState>>,
    Path(worker_id): Path<String>,
) -> Response {
    let store = state.store.lock().await;
    match store.delete_worker(&worker_id) {
        Ok(()) => Json(json!({ "success": true })).into_response(),
        Err(err) => store_error_response(err),
    }
}

// ---- Publish ----

async fn git_push(State(state): State<Arc<AppState>>) -> Response {
    // Keep the store locked so the data file is not rewritten mid-commit
    let _store = state.store.lock().await;

    let repo_dir = state.repo_dir.clone();
    let data_file = state.data_file.clone();
    let result =
        tokio::task::spawn_blocking(move || git::push_data_file(&repo_dir, &data_file)).await;

    match result {
        Ok(Ok(PushOutcome::Pushed {
            commit_message,
            branch,
        })) => Json(json!({
            "success": true,
            "message": "Changes pushed to the remote repository",
            "commit_message": commit_message,
            "branch": branch,
        }))
        .into_response(),
        Ok(Ok(PushOutcome::UpToDate)) => Json(json!({
            "success": true,
            "message": "Nothing to commit. Everything is up to date.",
        }))
        .into_response(),
        Ok(Ok(PushOutcome::Retry)) => Json(json!({
            "message": "The data file had unstaged changes; they are staged now.",
            "info": "Push again to commit and push them.",
        }))
        .into_response(),
        Ok(Err(failure)) => {
            let status = if failure.setup {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, Json(failure)).into_response()
        }
        Err(err) => {
            error!("publish task panicked: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": format!("Unexpected error: {}", err) })),
            )
                .into_response()
        }
    }
}

// ---- Static frontend ----

async fn index() -> impl IntoResponse {
    asset_to_response("index.html")
}

async fn static_asset(uri: Uri) -> impl IntoResponse {
    let path = uri.path().trim_start_matches('/');
    if path.is_empty() {
        return asset_to_response("index.html");
    }
    if Frontend::get(path).is_some() {
        return asset_to_response(path);
    }
    // SPA fallback
    asset_to_response("index.html")
}

fn asset_to_response(path: &str) -> Response {
    if let Some(content) = Frontend::get(path) {
        let body = Body::from(content.data.into_owned());
        let mime = from_path(path).first_or_octet_stream();
        return Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, mime.as_ref())
            .body(body)
            .unwrap();
    }

    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .body(Body::from("Not Found"))
        .unwrap()
}
