use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    BadRequest(String),

    #[error("Text too large: {0}")]
    PayloadTooLarge(String),

    #[error("{0}")]
    NotConfigured(String),

    #[error("{message}")]
    Upstream { status: StatusCode, message: String },

    #[error("{0}")]
    InvalidUpstreamResponse(String),

    #[error("Request timeout")]
    GatewayTimeout,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Uniform error body: `{"status": "error", "message": ...}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Upstream { status, .. } => *status,
            Self::GatewayTimeout => StatusCode::GATEWAY_TIMEOUT,
            Self::NotConfigured(_)
            | Self::InvalidUpstreamResponse(_)
            | Self::Network(_)
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the client. Transport and internal failures stay generic.
    pub fn client_message(&self) -> String {
        match self {
            Self::Network(_) => "Network error".to_string(),
            Self::Internal(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            status: "error".to_string(),
            message: self.client_message(),
        }
    }
}

/// Implement IntoResponse for automatic conversion in handlers
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(
                error = %self,
                status = %status.as_u16(),
                "Request failed"
            );
        } else {
            tracing::warn!(
                error = %self,
                status = %status.as_u16(),
                "Request rejected"
            );
        }

        (status, Json(self.to_response())).into_response()
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
