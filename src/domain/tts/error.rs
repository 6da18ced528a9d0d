use axum::http::StatusCode;

use crate::error::AppError;
use crate::infrastructure::repositories::UpstreamError;

#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("text too large: {0}")]
    TooLarge(String),
    #[error("upstream credentials not configured")]
    NotConfigured,
    #[error("upstream returned {status}: {detail}")]
    Upstream { status: u16, detail: String },
    #[error("invalid upstream response: {0}")]
    InvalidUpstreamResponse(String),
    #[error("upstream request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<UpstreamError> for TtsServiceError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::MissingCredentials => TtsServiceError::NotConfigured,
            UpstreamError::Status { status, body } => TtsServiceError::Upstream {
                status,
                detail: body,
            },
            UpstreamError::InvalidResponse(reason) => TtsServiceError::InvalidUpstreamResponse(reason),
            UpstreamError::Timeout => TtsServiceError::Timeout,
            UpstreamError::Network(msg) => TtsServiceError::Network(msg),
            UpstreamError::Internal(msg) => TtsServiceError::Other(anyhow::anyhow!(msg)),
        }
    }
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::Invalid(msg) => AppError::BadRequest(msg),
            TtsServiceError::TooLarge(msg) => AppError::PayloadTooLarge(msg),
            TtsServiceError::NotConfigured => {
                AppError::NotConfigured("MiniMax API credentials not configured".to_string())
            }
            TtsServiceError::Upstream { status, detail } => AppError::Upstream {
                status: upstream_status(status),
                message: format!("MiniMax API error ({}): {}", status, detail),
            },
            TtsServiceError::InvalidUpstreamResponse(reason) => {
                if reason.is_empty() {
                    AppError::InvalidUpstreamResponse("Invalid response from MiniMax API".to_string())
                } else {
                    AppError::InvalidUpstreamResponse(format!(
                        "Invalid response from MiniMax API: {}",
                        reason
                    ))
                }
            }
            TtsServiceError::Timeout => AppError::GatewayTimeout,
            TtsServiceError::Network(msg) => AppError::Network(msg),
            TtsServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}

/// Upstream statuses are relayed unless they would read as success to the client
fn upstream_status(status: u16) -> StatusCode {
    match StatusCode::from_u16(status) {
        Ok(code) if code.is_client_error() || code.is_server_error() => code,
        _ => StatusCode::BAD_GATEWAY,
    }
}
