//! Storage-specific error type wrapping sqlx errors.

use posehub_domain::error::PoseHubError;

/// Errors originating from the `SQLite` storage layer.
///
/// Variants are `transparent` so the database's own error text reaches the
/// failure envelope the HTTP layer builds.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for PoseHubError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
