//! # posehub-adapter-snapshot-fs
//!
//! Filesystem adapter for the current-angle snapshot.
//!
//! The embedded controller polls a flat file instead of hitting the database,
//! so this adapter does one thing: fully replace that file's content with the
//! comma-joined angle line on every write. A single overwrite, no locking, no
//! temp-file-and-rename — the contract promises nothing stronger and the
//! reader tolerates it.
//!
//! ## Dependency rule
//! Depends on `posehub-app` (for the port trait) and `posehub-domain`.

use std::future::Future;
use std::path::{Path, PathBuf};

use posehub_app::ports::SnapshotStore;
use posehub_domain::angles::ServoAngles;
use posehub_domain::error::PoseHubError;

/// Writes the current angle tuple to a flat file.
///
/// The file holds a single line such as `90,45,135,0` — no trailing newline,
/// no framing. The polling controller reads it verbatim.
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    /// Create a store targeting the given file path.
    ///
    /// The file is created on first write; parent directories are not.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The snapshot file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn write(
        &self,
        angles: ServoAngles,
    ) -> impl Future<Output = Result<(), PoseHubError>> + Send {
        let path = self.path.clone();
        async move {
            tokio::fs::write(&path, angles.to_line())
                .await
                .map_err(|err| PoseHubError::Snapshot(Box::new(err)))?;

            Ok(())
        }
    }
}
