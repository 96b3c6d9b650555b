//! HTTP error response conversion
//!
//! This module provides HTTP-specific error response conversion for AppError.
//!
//! **Preferred handler pattern:** Return `Result<impl IntoResponse, HttpAppError>` and
//! use `?` on `AppError` results so every failure renders the same way (status, body,
//! logging).

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::OnceLock;
use stowage_core::{AppError, ErrorMetadata, LogLevel};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    /// Machine-readable error code for programmatic handling
    pub code: String,
    /// Whether this error is recoverable (can be retried)
    pub recoverable: bool,
    /// Suggested action for the client
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_action: Option<String>,
}

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from stowage-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<MultipartError> for HttpAppError {
    fn from(err: MultipartError) -> Self {
        HttpAppError(AppError::InvalidInput(format!(
            "Failed to read multipart: {}",
            err.body_text()
        )))
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type = error_type, "Error occurred");
        }
        LogLevel::Error => {
            tracing::error!(
                error = %error.detailed_message(),
                error_type = error_type,
                "Error occurred"
            );
        }
    }
}

static PRODUCTION: OnceLock<bool> = OnceLock::new();

/// Record whether error responses are rendered for production.
///
/// Called once at startup from [`Config::is_production`](stowage_core::Config::is_production);
/// later calls are ignored. Until set, responses are rendered as in development.
pub fn set_production_mode(production: bool) {
    if PRODUCTION.set(production).is_err() {
        tracing::debug!("Production mode already set; ignoring");
    }
}

fn production_mode() -> bool {
    PRODUCTION.get().copied().unwrap_or(false)
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        error_response(&self.0, production_mode())
    }
}

fn error_response(app_error: &AppError, production: bool) -> Response {
    let status = StatusCode::from_u16(app_error.http_status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    log_error(app_error);

    // Details are never shown in production, nor for sensitive errors.
    let show_details = !production && !app_error.is_sensitive();
    let body = ErrorResponse {
        error: app_error.client_message(),
        details: show_details.then(|| app_error.detailed_message()),
        error_type: show_details.then(|| app_error.error_type().to_string()),
        code: app_error.error_code().to_string(),
        recoverable: app_error.is_recoverable(),
        suggested_action: app_error.suggested_action().map(String::from),
    };

    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_unsupported_file_type_response() {
        let response = HttpAppError(AppError::unsupported("text/plain")).into_response();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

        let body = body_json(response).await;
        assert_eq!(body["code"], "UNSUPPORTED_FILE_TYPE");
        assert_eq!(body["error"], "file is not support");
        assert_eq!(body["recoverable"], false);
    }

    #[tokio::test]
    async fn test_storage_write_response_hides_details() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "/srv/static");
        let response = HttpAppError(AppError::storage_write(io_err)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["code"], "STORAGE_WRITE_ERROR");
        assert_eq!(body["error"], "Failed to store file");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_details_shown_outside_production() {
        let err = AppError::InvalidInput("Unknown destination: avatars".to_string());
        let body = body_json(error_response(&err, false)).await;

        assert_eq!(body["code"], "INVALID_INPUT");
        assert_eq!(body["error_type"], "InvalidInput");
        assert!(body["details"]
            .as_str()
            .unwrap()
            .contains("Unknown destination: avatars"));
    }

    #[tokio::test]
    async fn test_details_hidden_in_production() {
        let err = AppError::InvalidInput("Unknown destination: avatars".to_string());
        let response = error_response(&err, true);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["code"], "INVALID_INPUT");
        assert!(body.get("details").is_none());
        assert!(body.get("error_type").is_none());
    }
}
