//! Response envelope and HTTP error mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use posehub_domain::error::ValidationError;

/// The `{status, message}` JSON body shared by every mutation response.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub status: &'static str,
    pub message: String,
}

impl Envelope {
    /// A `status: "success"` envelope.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: message.into(),
        }
    }

    /// A `status: "error"` envelope.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
        }
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// An error outcome carrying the HTTP status it maps to.
///
/// Status mapping: missing parameters → 400, wrong method → 405,
/// persistence or file failure → 500. Success is a plain 200.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// A persistence or filesystem failure (HTTP 500).
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Envelope::error(self.message)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_success_envelope() {
        let json = serde_json::to_value(Envelope::success("Pose saved.")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "success", "message": "Pose saved."})
        );
    }

    #[test]
    fn should_map_missing_params_to_bad_request() {
        let err = ApiError::from(ValidationError::MissingServoParameters);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_internal_error_to_500() {
        let response = ApiError::internal("Failed to save pose: locked").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
