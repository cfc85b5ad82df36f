//! Storage port — repository trait for pose persistence.

use std::future::Future;

use posehub_domain::angles::ServoAngles;
use posehub_domain::error::PoseHubError;
use posehub_domain::id::PoseId;
use posehub_domain::pose::Pose;

/// Persistence boundary for stored poses.
///
/// Implementations must bind the identifier and angle values as statement
/// parameters — they never appear in query text. This is an invariant of the
/// port contract, not an implementation detail.
pub trait PoseRepository {
    /// Insert one pose; the store assigns the identifier.
    fn insert(&self, angles: ServoAngles)
    -> impl Future<Output = Result<(), PoseHubError>> + Send;

    /// All stored poses, most recently inserted first (identifier descending).
    ///
    /// An empty store yields an empty vector, not an error.
    fn list(&self) -> impl Future<Output = Result<Vec<Pose>, PoseHubError>> + Send;

    /// Delete the pose with the given identifier.
    ///
    /// Deleting an identifier that does not exist is not an error; the
    /// operation succeeds having affected zero rows.
    fn delete(&self, id: PoseId) -> impl Future<Output = Result<(), PoseHubError>> + Send;
}
