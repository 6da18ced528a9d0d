use crate::domain::tts::{SynthesisCommand, SynthesizedAudio};
use async_trait::async_trait;

/// Failure of a single upstream synthesis call
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("upstream credentials not configured")]
    MissingCredentials,
    #[error("upstream returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid upstream response: {0}")]
    InvalidResponse(String),
    #[error("upstream request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("internal error: {0}")]
    Internal(String),
}

/// Repository for TTS synthesis operations.
/// Abstracts the upstream TTS provider behind a single call.
///
/// Implementations must:
/// - Fail with `MissingCredentials` before any network activity when unconfigured
/// - Issue at most one upstream request per call, with no retries
/// - Classify timeouts separately from other transport failures
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize a validated command
    ///
    /// Returns the opaque audio payload and the upstream trace id, if any
    async fn synthesize(&self, command: &SynthesisCommand) -> Result<SynthesizedAudio, UpstreamError>;

    /// Whether credentials are available to reach the provider
    fn is_configured(&self) -> bool;
}
