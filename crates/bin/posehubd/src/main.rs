//! # posehubd — posehub daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize tracing
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct the repository and snapshot adapters
//! - Construct application services, injecting adapters via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use posehub_adapter_http_axum::state::AppState;
use posehub_adapter_snapshot_fs::FileSnapshotStore;
use posehub_adapter_storage_sqlite_sqlx::{Database, SqlitePoseRepository};
use posehub_app::services::pose_service::PoseService;
use posehub_app::services::snapshot_service::SnapshotService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = Database::connect(config.database_url()).await?;
    let pose_repo = SqlitePoseRepository::new(db.pool().clone());

    // Snapshot file
    let snapshot_store = FileSnapshotStore::new(config.snapshot_path());

    // Services
    let pose_service = PoseService::new(pose_repo);
    let snapshot_service = SnapshotService::new(snapshot_store);

    // HTTP
    let state = AppState::new(pose_service, snapshot_service);
    let app = posehub_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "posehubd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
