//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`PoseHubError`]
//! at the boundary. Variants are `transparent` so the collaborator's error
//! text survives into the response message the handlers build.

/// Error for operations against the external collaborators.
///
/// Validation failures never reach the collaborators; they are rejected at
/// the transport boundary as [`ValidationError`] before any effect runs.
#[derive(Debug, thiserror::Error)]
pub enum PoseHubError {
    /// The relational store rejected an operation.
    #[error(transparent)]
    Storage(Box<dyn std::error::Error + Send + Sync>),

    /// The angle snapshot file could not be written.
    #[error(transparent)]
    Snapshot(Box<dyn std::error::Error + Send + Sync>),
}

/// Request validation failures, with the exact messages the clients expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// One or more of `servo1..servo4` was not submitted.
    #[error("Missing servo parameters.")]
    MissingServoParameters,

    /// The `id` field was not submitted.
    #[error("Missing ID parameter.")]
    MissingId,
}
