//! Pose service — use-cases for saving, listing, and deleting poses.

use posehub_domain::angles::ServoAngles;
use posehub_domain::error::PoseHubError;
use posehub_domain::id::PoseId;
use posehub_domain::pose::Pose;

use crate::ports::PoseRepository;

/// Application service for pose persistence operations.
pub struct PoseService<R> {
    repo: R,
}

impl<R: PoseRepository> PoseService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persist one pose. The store assigns the identifier; it is not
    /// returned to the caller.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn save_pose(&self, angles: ServoAngles) -> Result<(), PoseHubError> {
        self.repo.insert(angles).await
    }

    /// List all stored poses, newest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_poses(&self) -> Result<Vec<Pose>, PoseHubError> {
        self.repo.list().await
    }

    /// Delete a pose by identifier. Unknown identifiers succeed silently.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn delete_pose(&self, id: PoseId) -> Result<(), PoseHubError> {
        self.repo.delete(id).await
    }
}
