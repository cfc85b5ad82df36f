//! JSON handlers for the pose and angle-snapshot endpoints.

#[allow(clippy::missing_errors_doc)]
pub mod angles;
#[allow(clippy::missing_errors_doc)]
pub mod poses;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{any, post};

use posehub_app::ports::{PoseRepository, SnapshotStore};

use crate::error::Envelope;
use crate::state::AppState;

/// Build the `/api` sub-router.
///
/// The list route is registered for any method — reads are never rejected on
/// method grounds. The three mutation routes are POST-only; other methods hit
/// the method-not-allowed fallback below.
pub fn routes<PR, SW>() -> Router<AppState<PR, SW>>
where
    PR: PoseRepository + Send + Sync + 'static,
    SW: SnapshotStore + Send + Sync + 'static,
{
    Router::new()
        .route("/poses", any(poses::list))
        .route("/poses/save", post(poses::save))
        .route("/poses/delete", post(poses::delete))
        .route("/angles", post(angles::update))
        .method_not_allowed_fallback(method_not_allowed)
}

/// Mutations only accept form submissions; anything else is rejected before
/// field validation.
async fn method_not_allowed() -> (StatusCode, Envelope) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Envelope::error("Invalid request method."),
    )
}
