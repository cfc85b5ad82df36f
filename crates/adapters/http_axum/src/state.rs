//! Shared application state for axum handlers.

use std::sync::Arc;

use posehub_app::ports::{PoseRepository, SnapshotStore};
use posehub_app::services::pose_service::PoseService;
use posehub_app::services::snapshot_service::SnapshotService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository and snapshot store types to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<PR, SW> {
    /// Pose persistence service.
    pub pose_service: Arc<PoseService<PR>>,
    /// Angle snapshot service.
    pub snapshot_service: Arc<SnapshotService<SW>>,
}

impl<PR, SW> Clone for AppState<PR, SW> {
    fn clone(&self) -> Self {
        Self {
            pose_service: Arc::clone(&self.pose_service),
            snapshot_service: Arc::clone(&self.snapshot_service),
        }
    }
}

impl<PR, SW> AppState<PR, SW>
where
    PR: PoseRepository + Send + Sync + 'static,
    SW: SnapshotStore + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(pose_service: PoseService<PR>, snapshot_service: SnapshotService<SW>) -> Self {
        Self {
            pose_service: Arc::new(pose_service),
            snapshot_service: Arc::new(snapshot_service),
        }
    }
}
