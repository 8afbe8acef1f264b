//! Task board server: board REST API, JSON-file persistence, the git
//! publish endpoint, and static serving of the built client.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::sync::Mutex;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod git;
mod http;
mod model;
mod state;
mod store;

use state::AppState;
use store::BoardStore;

#[derive(Debug, Parser)]
#[command(name = "task-board-server", about = "Kanban task board server")]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:5000")]
    bind: SocketAddr,

    /// Board data file; also what the publish endpoint stages
    #[arg(long, default_value = "tasks.json")]
    data_file: String,

    /// Repository the publish endpoint commits and pushes from
    #[arg(long, default_value = ".")]
    repo_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let state = Arc::new(AppState {
        store: Mutex::new(BoardStore::new(PathBuf::from(&args.data_file))),
        repo_dir: args.repo_dir,
        data_file: args.data_file,
    });

    let router = http::build_router(state);

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    info!("task board server listening on http://{}", args.bind);
    axum::serve(listener, router).await?;

    Ok(())
}
