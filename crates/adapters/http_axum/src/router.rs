//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use posehub_app::ports::{PoseRepository, SnapshotStore};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// API routes live under `/api`. A permissive [`CorsLayer`] allows the
/// frontend and the controller to call from any origin without credentials,
/// and a [`TraceLayer`] logs each HTTP request/response at the `DEBUG` level
/// using the `tracing` ecosystem.
pub fn build<PR, SW>(state: AppState<PR, SW>) -> Router
where
    PR: PoseRepository + Send + Sync + 'static,
    SW: SnapshotStore + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::header::CONTENT_TYPE;
    use axum::http::{Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use posehub_app::services::pose_service::PoseService;
    use posehub_app::services::snapshot_service::SnapshotService;
    use posehub_domain::angles::ServoAngles;
    use posehub_domain::error::PoseHubError;
    use posehub_domain::id::PoseId;
    use posehub_domain::pose::Pose;
    use std::future::Future;
    use tower::ServiceExt;

    struct StubPoseRepo;
    struct StubSnapshot;
    struct FailingPoseRepo;
    struct FailingSnapshot;

    fn locked() -> PoseHubError {
        PoseHubError::Storage(Box::new(std::io::Error::other("database is locked")))
    }

    impl posehub_app::ports::PoseRepository for StubPoseRepo {
        fn insert(
            &self,
            _angles: ServoAngles,
        ) -> impl Future<Output = Result<(), PoseHubError>> + Send {
            async { Ok(()) }
        }
        fn list(&self) -> impl Future<Output = Result<Vec<Pose>, PoseHubError>> + Send {
            async { Ok(vec![]) }
        }
        fn delete(&self, _id: PoseId) -> impl Future<Output = Result<(), PoseHubError>> + Send {
            async { Ok(()) }
        }
    }

    impl posehub_app::ports::SnapshotStore for StubSnapshot {
        fn write(
            &self,
            _angles: ServoAngles,
        ) -> impl Future<Output = Result<(), PoseHubError>> + Send {
            async { Ok(()) }
        }
    }

    impl posehub_app::ports::PoseRepository for FailingPoseRepo {
        fn insert(
            &self,
            _angles: ServoAngles,
        ) -> impl Future<Output = Result<(), PoseHubError>> + Send {
            async { Err(locked()) }
        }
        fn list(&self) -> impl Future<Output = Result<Vec<Pose>, PoseHubError>> + Send {
            async { Err(locked()) }
        }
        fn delete(&self, _id: PoseId) -> impl Future<Output = Result<(), PoseHubError>> + Send {
            async { Err(locked()) }
        }
    }

    impl posehub_app::ports::SnapshotStore for FailingSnapshot {
        fn write(
            &self,
            _angles: ServoAngles,
        ) -> impl Future<Output = Result<(), PoseHubError>> + Send {
            async {
                Err(PoseHubError::Snapshot(Box::new(std::io::Error::other(
                    "permission denied",
                ))))
            }
        }
    }

    fn test_state() -> AppState<StubPoseRepo, StubSnapshot> {
        AppState::new(
            PoseService::new(StubPoseRepo),
            SnapshotService::new(StubSnapshot),
        )
    }

    fn failing_state() -> AppState<FailingPoseRepo, FailingSnapshot> {
        AppState::new(
            PoseService::new(FailingPoseRepo),
            SnapshotService::new(FailingSnapshot),
        )
    }

    fn form_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_serve_pose_list_under_api() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/poses")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_500_envelope_when_save_hits_store_error() {
        let app = build(failing_state());

        let response = app
            .oneshot(form_post(
                "/api/poses/save",
                "servo1=90&servo2=90&servo3=90&servo4=90",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(
            json,
            serde_json::json!({
                "status": "error",
                "message": "Failed to save pose: database is locked",
            })
        );
    }

    #[tokio::test]
    async fn should_return_500_envelope_when_delete_hits_store_error() {
        let app = build(failing_state());

        let response = app
            .oneshot(form_post("/api/poses/delete", "id=1"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(
            json,
            serde_json::json!({
                "status": "error",
                "message": "Failed to delete pose: database is locked",
            })
        );
    }

    #[tokio::test]
    async fn should_return_500_envelope_when_list_hits_store_error() {
        let app = build(failing_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/poses")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "Failed to fetch poses: database is locked");
    }

    #[tokio::test]
    async fn should_return_500_envelope_when_snapshot_write_fails() {
        let app = build(failing_state());

        let response = app
            .oneshot(form_post(
                "/api/angles",
                "servo1=90&servo2=45&servo3=135&servo4=0",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(
            json,
            serde_json::json!({
                "status": "error",
                "message": "Failed to write to file.",
            })
        );
    }

    #[tokio::test]
    async fn should_reject_get_on_save_route_with_405() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/poses/save")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
