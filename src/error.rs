use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::client::history::HistoryError;
use crate::proxy::ApiResponse;

/// Errors raised while the proxy executes an upstream request.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Short machine-readable classification, used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::RequestFailed(e) => {
                if e.is_timeout() {
                    "TIMEOUT"
                } else if e.is_connect() {
                    "CONNECTION_FAILED"
                } else if e.is_body() || e.is_decode() {
                    "BODY_READ_ERROR"
                } else {
                    "REQUEST_FAILED"
                }
            }
            AppError::InvalidUrl(_) => "INVALID_URL",
            AppError::InvalidHeader(_) => "INVALID_HEADER",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(ApiResponse::failure(
            StatusCode::BAD_REQUEST.as_u16(),
            format!("Failed to execute request: {}", self),
        ));

        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

/// Errors surfaced to the user of the request composer.
///
/// The `Display` text of the first three variants is the inline message
/// shown in place of a response.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid JSON format in Body input.")]
    InvalidBody(#[source] serde_json::Error),

    #[error("Invalid JSON format in Headers or Body input.")]
    InvalidHeaders(#[source] serde_json::Error),

    #[error("Failed to connect to the backend proxy.")]
    Connection(#[source] reqwest::Error),

    #[error("History store error: {0}")]
    History(#[from] HistoryError),

    #[error("No history entry with id {0}")]
    UnknownHistoryEntry(i64),

    #[error("{0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_app_error_renders_failure_envelope() {
        let response = AppError::InvalidUrl("not a url".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["statusCode"], 400);
        assert_eq!(
            body["body"],
            "Failed to execute request: Invalid URL: not a url"
        );
        assert_eq!(body["headers"], serde_json::json!({}));
    }

    #[test]
    fn test_client_error_messages() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(
            ClientError::InvalidBody(parse_err).to_string(),
            "Invalid JSON format in Body input."
        );
        assert_eq!(ClientError::UnknownHistoryEntry(7).to_string(), "No history entry with id 7");
    }
}
