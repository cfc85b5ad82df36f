//! Handlers for listing, saving, and deleting stored poses.

use axum::Json;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};

use posehub_app::ports::{PoseRepository, SnapshotStore};
use posehub_domain::pose::Pose;

use crate::error::{ApiError, Envelope};
use crate::params::{IdField, ServoFields};
use crate::state::AppState;

/// `GET /api/poses` (any method) — all stored poses, newest first.
///
/// Returns a bare JSON array, not the envelope; the frontend consumes the
/// array directly.
pub async fn list<PR, SW>(
    State(state): State<AppState<PR, SW>>,
) -> Result<Json<Vec<Pose>>, ApiError>
where
    PR: PoseRepository + Send + Sync + 'static,
    SW: SnapshotStore + Send + Sync + 'static,
{
    let poses = state.pose_service.list_poses().await.map_err(|err| {
        tracing::error!(error = %err, "failed to list poses");
        ApiError::internal(format!("Failed to fetch poses: {err}"))
    })?;

    Ok(Json(poses))
}

/// `POST /api/poses/save` — insert one pose row.
pub async fn save<PR, SW>(
    State(state): State<AppState<PR, SW>>,
    form: Result<Form<ServoFields>, FormRejection>,
) -> Result<Envelope, ApiError>
where
    PR: PoseRepository + Send + Sync + 'static,
    SW: SnapshotStore + Send + Sync + 'static,
{
    let angles = ServoFields::from_form(form).map_err(ApiError::from)?;

    state.pose_service.save_pose(angles).await.map_err(|err| {
        tracing::error!(error = %err, "failed to save pose");
        ApiError::internal(format!("Failed to save pose: {err}"))
    })?;

    Ok(Envelope::success("Pose saved."))
}

/// `POST /api/poses/delete` — delete one pose by identifier.
///
/// An identifier with no matching row still reports success.
pub async fn delete<PR, SW>(
    State(state): State<AppState<PR, SW>>,
    form: Result<Form<IdField>, FormRejection>,
) -> Result<Envelope, ApiError>
where
    PR: PoseRepository + Send + Sync + 'static,
    SW: SnapshotStore + Send + Sync + 'static,
{
    let id = IdField::from_form(form).map_err(ApiError::from)?;

    state.pose_service.delete_pose(id).await.map_err(|err| {
        tracing::error!(error = %err, "failed to delete pose");
        ApiError::internal(format!("Failed to delete pose: {err}"))
    })?;

    Ok(Envelope::success("Pose deleted."))
}
