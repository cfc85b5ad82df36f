//! Snapshot port — the fast-path angle file polled by the controller.

use std::future::Future;

use posehub_domain::angles::ServoAngles;
use posehub_domain::error::PoseHubError;

/// Write boundary for the current-angle snapshot.
///
/// Every accepted write fully replaces the previous snapshot; at most one
/// snapshot exists at any time. The snapshot is read only by external
/// collaborators, never through this port.
pub trait SnapshotStore {
    /// Overwrite the snapshot with the given angle tuple.
    fn write(&self, angles: ServoAngles)
    -> impl Future<Output = Result<(), PoseHubError>> + Send;
}
