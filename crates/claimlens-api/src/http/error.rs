//! Application error type mapping to HTTP status codes.
//!
//! Error bodies are the flat `{"error": message}` shape the browser
//! client expects. Local validation maps to 4xx; upstream failures are
//! logged with cause and surfaced as 5xx.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use claimlens_types::error::{ChatError, RelayError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Request validation failure (missing field, empty upload).
    Validation(String),
    /// Chat or analysis exchange failure.
    Chat(ChatError),
    /// Upload relay failure.
    Relay(RelayError),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl From<RelayError> for AppError {
    fn from(e: RelayError) -> Self {
        AppError::Relay(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Chat(ChatError::ModelUnavailable) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "No available model. Check server logs.".to_string(),
            ),
            AppError::Chat(e @ ChatError::Upstream(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            AppError::Relay(e @ RelayError::LocalIo(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            AppError::Relay(e @ RelayError::Upstream(_)) => {
                (StatusCode::BAD_GATEWAY, e.to_string())
            }
        };

        if status.is_server_error() {
            tracing::error!(status = %status, error = %message, "request failed");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_validation_maps_to_400() {
        assert_eq!(
            status_of(AppError::Validation("Session ID required".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_model_unavailable_maps_to_503() {
        assert_eq!(
            status_of(AppError::Chat(ChatError::ModelUnavailable)),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_upstream_chat_failure_maps_to_500() {
        assert_eq!(
            status_of(AppError::Chat(ChatError::Upstream("boom".into()))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_relay_upstream_maps_to_502() {
        assert_eq!(
            status_of(AppError::Relay(RelayError::Upstream("rejected".into()))),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_relay_local_io_maps_to_500() {
        assert_eq!(
            status_of(AppError::Relay(RelayError::LocalIo("disk full".into()))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
