//! Snapshot service — use-case for the fast-path angle file write.

use posehub_domain::angles::ServoAngles;
use posehub_domain::error::PoseHubError;

use crate::ports::SnapshotStore;

/// Application service for the current-angle snapshot.
pub struct SnapshotService<W> {
    store: W,
}

impl<W: SnapshotStore> SnapshotService<W> {
    /// Create a new service backed by the given snapshot store.
    pub fn new(store: W) -> Self {
        Self { store }
    }

    /// Overwrite the snapshot with the given angles.
    ///
    /// # Errors
    ///
    /// Returns a snapshot error propagated from the store.
    pub async fn write_angles(&self, angles: ServoAngles) -> Result<(), PoseHubError> {
        self.store.write(angles).await
    }
}
