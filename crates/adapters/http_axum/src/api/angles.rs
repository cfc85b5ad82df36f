//! Handler for the fast-path angle snapshot write.

use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};

use posehub_app::ports::{PoseRepository, SnapshotStore};

use crate::error::{ApiError, Envelope};
use crate::params::ServoFields;
use crate::state::AppState;

/// `POST /api/angles` — overwrite the snapshot file with the submitted
/// angles. Bypasses the database entirely; this is the path the controller
/// polls against.
pub async fn update<PR, SW>(
    State(state): State<AppState<PR, SW>>,
    form: Result<Form<ServoFields>, FormRejection>,
) -> Result<Envelope, ApiError>
where
    PR: PoseRepository + Send + Sync + 'static,
    SW: SnapshotStore + Send + Sync + 'static,
{
    let angles = ServoFields::from_form(form).map_err(ApiError::from)?;

    state
        .snapshot_service
        .write_angles(angles)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "failed to write angle snapshot");
            ApiError::internal("Failed to write to file.")
        })?;

    Ok(Envelope::success("Angles updated in file."))
}
