//! # posehub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the [`PoseRepository`](posehub_app::ports::PoseRepository) port
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `posehub-app` (for the port trait) and `posehub-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

mod error;
mod pool;
mod pose_repo;

pub use error::StorageError;
pub use pool::Database;
pub use pose_repo::SqlitePoseRepository;
