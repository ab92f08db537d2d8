// API error type mapped onto HTTP status codes and JSON error bodies

use crate::ai::AiError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// An error returned to an HTTP caller as `{"error": message}`.
///
/// The tech-stack endpoints historically wrap errors in a `success: false`
/// envelope; `with_success_flag` opts into that shape.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    success_envelope: bool,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            success_envelope: false,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
            success_envelope: false,
        }
    }

    /// Include `"success": false` in the error body
    pub fn with_success_flag(mut self) -> Self {
        self.success_envelope = true;
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = if self.success_envelope {
            json!({ "success": false, "error": self.message })
        } else {
            json!({ "error": self.message })
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<AiError> for ApiError {
    fn from(err: AiError) -> Self {
        // Config, transport, and upstream failures all surface as 500s; the
        // upstream message is preserved so callers see the provider's reason
        log::error!("AI pipeline error: {}", err);
        ApiError::internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_status() {
        let err = ApiError::bad_request("Domain is required");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Domain is required");
    }

    #[test]
    fn test_ai_error_maps_to_internal() {
        let err = ApiError::from(AiError::Upstream("rate limited".to_string()));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.message.contains("rate limited"));
    }
}
