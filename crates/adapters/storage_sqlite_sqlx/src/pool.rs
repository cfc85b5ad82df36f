//! `SQLite` connection handling and schema setup.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

use crate::error::StorageError;

/// Owns the `SQLite` connection pool for the pose store.
///
/// [`connect`](Database::connect) creates the database file when it does not
/// exist yet and brings the schema up to date before handing the pool out, so
/// a repository built from [`pool`](Database::pool) can assume the poses
/// table is present.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the database at `database_url` (e.g. `sqlite:posehub.db` or
    /// `sqlite::memory:`) and run pending migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the URL is invalid, the connection
    /// cannot be established, or a migration fails.
    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Borrow the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
