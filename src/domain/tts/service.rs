use super::dto::SynthesisRequest;
use super::error::TtsServiceError;
use super::model::{SynthesisCommand, SynthesizedAudio};
use super::profile::DeploymentProfile;
use crate::domain::catalog::CatalogService;
use crate::infrastructure::repositories::TtsRepository;
use async_trait::async_trait;
use std::ops::RangeInclusive;
use std::sync::Arc;

/// Upstream rejects longer inputs
const MAX_TEXT_CHARS: usize = 10_000;

pub struct TtsService {
    tts_repo: Arc<dyn TtsRepository>,
    catalog: Arc<CatalogService>,
    profile: DeploymentProfile,
}

impl TtsService {
    pub fn new(
        tts_repo: Arc<dyn TtsRepository>,
        catalog: Arc<CatalogService>,
        profile: DeploymentProfile,
    ) -> Self {
        Self {
            tts_repo,
            catalog,
            profile,
        }
    }

    /// Whether the upstream provider can be called at all
    pub fn is_upstream_configured(&self) -> bool {
        self.tts_repo.is_configured()
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Synthesize text to speech through the upstream provider
    ///
    /// This operation:
    /// - Validates the request against the deployment profile bounds
    /// - Resolves defaults (voice, optional fields)
    /// - Issues exactly one upstream call, without retries
    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesizedAudio, TtsServiceError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesizedAudio, TtsServiceError> {
        let command = self.validate(request)?;

        tracing::info!(
            model = %command.model,
            voice_id = %command.voice_id,
            text_length = command.text.chars().count(),
            profile = %self.profile,
            "TTS synthesis request"
        );

        let audio = self.tts_repo.synthesize(&command).await?;

        tracing::info!(
            trace_id = audio.trace_id.as_deref().unwrap_or("-"),
            audio_size = audio.audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(audio)
    }
}

impl TtsService {
    fn validate(&self, request: SynthesisRequest) -> Result<SynthesisCommand, TtsServiceError> {
        if request.text.is_empty() {
            return Err(TtsServiceError::Invalid("Text cannot be empty".to_string()));
        }

        if request.text.chars().count() > MAX_TEXT_CHARS {
            return Err(TtsServiceError::TooLarge(
                "Text must be 10,000 characters or less".to_string(),
            ));
        }

        let limits = self.profile.limits();
        check_range("speed", request.speed, &limits.speed)?;
        check_range("volume", request.volume, &limits.volume)?;
        check_range("pitch", request.pitch, &limits.pitch)?;

        if !self.catalog.is_known_model(&request.model) {
            return Err(TtsServiceError::Invalid(format!(
                "Unknown model: {}",
                request.model
            )));
        }

        let voice_id = non_blank(request.voice_id)
            .unwrap_or_else(|| self.profile.default_voice_id().to_string());

        Ok(SynthesisCommand {
            text: request.text,
            model: request.model,
            voice_id,
            speed: request.speed,
            volume: request.volume,
            pitch: request.pitch,
            emotion: non_blank(request.emotion),
            language_boost: non_blank(request.language_boost),
        })
    }
}

fn check_range(field: &str, value: f64, range: &RangeInclusive<f64>) -> Result<(), TtsServiceError> {
    if value.is_finite() && range.contains(&value) {
        Ok(())
    } else {
        Err(TtsServiceError::Invalid(format!(
            "{} must be between {} and {}, got {}",
            field,
            range.start(),
            range.end(),
            value
        )))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
