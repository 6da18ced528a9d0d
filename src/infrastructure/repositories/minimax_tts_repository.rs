use super::tts_repository::{TtsRepository, UpstreamError};
use crate::domain::tts::{NumericEncoding, SynthesisCommand, SynthesizedAudio};
use crate::infrastructure::config::{AudioSettings, Config, UpstreamCredentials};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

const T2A_PATH: &str = "t2a_v2";
const TRACE_ID_HEADER: &str = "Trace-Id";

/// Request body for `POST /t2a_v2`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct T2aRequest {
    pub model: String,
    pub text: String,
    pub stream: bool,
    pub voice_setting: VoiceSetting,
    pub audio_setting: AudioSetting,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_boost: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VoiceSetting {
    pub voice_id: String,
    pub speed: f64,
    pub vol: Level,
    pub pitch: Level,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AudioSetting {
    pub sample_rate: u32,
    pub format: String,
    pub channel: u8,
}

/// Volume or pitch, sent as a JSON float or integer depending on the region
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Level {
    Float(f64),
    Integer(i64),
}

impl Level {
    pub fn encode(value: f64, encoding: NumericEncoding) -> Self {
        match encoding {
            NumericEncoding::Float => Level::Float(value),
            NumericEncoding::Integer => Level::Integer(value.trunc() as i64),
        }
    }
}

/// Builds a [`T2aRequest`], keeping optional keys absent unless set
#[derive(Debug, Clone)]
pub struct T2aRequestBuilder {
    model: String,
    text: String,
    voice_id: String,
    speed: f64,
    volume: f64,
    pitch: f64,
    encoding: NumericEncoding,
    emotion: Option<String>,
    language_boost: Option<String>,
    audio: AudioSettings,
}

impl T2aRequestBuilder {
    pub fn new(model: impl Into<String>, text: impl Into<String>, voice_id: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            text: text.into(),
            voice_id: voice_id.into(),
            speed: 1.0,
            volume: 1.0,
            pitch: 0.0,
            encoding: NumericEncoding::Float,
            emotion: None,
            language_boost: None,
            audio: AudioSettings::default(),
        }
    }

    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn volume(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }

    pub fn pitch(mut self, pitch: f64) -> Self {
        self.pitch = pitch;
        self
    }

    pub fn level_encoding(mut self, encoding: NumericEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn emotion(mut self, emotion: Option<String>) -> Self {
        self.emotion = emotion;
        self
    }

    pub fn language_boost(mut self, language_boost: Option<String>) -> Self {
        self.language_boost = language_boost;
        self
    }

    pub fn audio(mut self, audio: &AudioSettings) -> Self {
        self.audio = audio.clone();
        self
    }

    pub fn build(self) -> T2aRequest {
        T2aRequest {
            model: self.model,
            text: self.text,
            stream: false,
            voice_setting: VoiceSetting {
                voice_id: self.voice_id,
                speed: self.speed,
                vol: Level::encode(self.volume, self.encoding),
                pitch: Level::encode(self.pitch, self.encoding),
                emotion: self.emotion,
            },
            audio_setting: AudioSetting {
                sample_rate: self.audio.sample_rate,
                format: self.audio.format,
                channel: self.audio.channel,
            },
            language_boost: self.language_boost,
        }
    }
}

/// Success body of `POST /t2a_v2`; only the fields the gateway reads
#[derive(Debug, Deserialize)]
struct T2aResponse {
    data: Option<T2aData>,
    trace_id: Option<String>,
    base_resp: Option<BaseResp>,
}

#[derive(Debug, Deserialize)]
struct T2aData {
    audio: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BaseResp {
    status_code: i64,
    status_msg: Option<String>,
}

/// MiniMax `t2a_v2` implementation of TTS repository
pub struct MinimaxTtsRepository {
    http_client: reqwest::Client,
    base_url: String,
    credentials: Option<UpstreamCredentials>,
    audio: AudioSettings,
    level_encoding: NumericEncoding,
}

impl MinimaxTtsRepository {
    /// Build the repository and its pooled HTTP client with the configured timeout
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(config.upstream_timeout())
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.minimax_base_url.trim_end_matches('/').to_string(),
            credentials: config.credentials(),
            audio: config.audio.clone(),
            level_encoding: config.profile.level_encoding(),
        })
    }

    fn build_payload(&self, command: &SynthesisCommand) -> T2aRequest {
        T2aRequestBuilder::new(&command.model, &command.text, &command.voice_id)
            .speed(command.speed)
            .volume(command.volume)
            .pitch(command.pitch)
            .level_encoding(self.level_encoding)
            .emotion(command.emotion.clone())
            .language_boost(command.language_boost.clone())
            .audio(&self.audio)
            .build()
    }

    /// Call MiniMax once; no retries
    async fn call_minimax(
        &self,
        credentials: &UpstreamCredentials,
        payload: &T2aRequest,
    ) -> Result<SynthesizedAudio, UpstreamError> {
        let url = format!("{}/{}", self.base_url, T2A_PATH);

        tracing::info!(
            model = %payload.model,
            voice_id = %payload.voice_setting.voice_id,
            text_length = payload.text.chars().count(),
            "Calling MiniMax TTS API"
        );

        let response = self
            .http_client
            .post(&url)
            .query(&[("GroupId", credentials.group_id.as_str())])
            .bearer_auth(&credentials.api_key)
            .json(payload)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        let header_trace_id = response
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response.text().await.map_err(classify_transport_error)?;

        if status != StatusCode::OK {
            tracing::error!(
                status = status.as_u16(),
                body = %body,
                trace_id = header_trace_id.as_deref().unwrap_or("-"),
                "MiniMax API error"
            );
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        parse_success_body(&body, header_trace_id)
    }
}

fn parse_success_body(
    body: &str,
    header_trace_id: Option<String>,
) -> Result<SynthesizedAudio, UpstreamError> {
    let parsed: T2aResponse = serde_json::from_str(body).map_err(|e| {
        tracing::error!(error = %e, "MiniMax API returned a malformed body");
        UpstreamError::InvalidResponse(String::new())
    })?;

    let trace_id = header_trace_id.or(parsed.trace_id);

    match parsed.data.and_then(|d| d.audio).filter(|a| !a.is_empty()) {
        Some(audio_data) => Ok(SynthesizedAudio {
            audio_data,
            trace_id,
        }),
        None => {
            // A 200 without audio usually carries the reason in base_resp
            let reason = parsed
                .base_resp
                .filter(|r| r.status_code != 0)
                .map(|r| match r.status_msg {
                    Some(msg) => format!("{} (code {})", msg, r.status_code),
                    None => format!("code {}", r.status_code),
                })
                .unwrap_or_default();

            tracing::error!(
                reason = %reason,
                trace_id = trace_id.as_deref().unwrap_or("-"),
                "MiniMax API response has no audio"
            );
            Err(UpstreamError::InvalidResponse(reason))
        }
    }
}

fn classify_transport_error(e: reqwest::Error) -> UpstreamError {
    if e.is_timeout() {
        tracing::error!(error = %e, "MiniMax API request timed out");
        UpstreamError::Timeout
    } else if e.is_builder() {
        tracing::error!(error = %e, "Failed to build MiniMax API request");
        UpstreamError::Internal(e.to_string())
    } else {
        tracing::error!(error = %e, "MiniMax API request error");
        UpstreamError::Network(e.to_string())
    }
}

#[async_trait]
impl TtsRepository for MinimaxTtsRepository {
    async fn synthesize(&self, command: &SynthesisCommand) -> Result<SynthesizedAudio, UpstreamError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(UpstreamError::MissingCredentials)?;

        let start_time = std::time::Instant::now();
        let payload = self.build_payload(command);
        let result = self.call_minimax(credentials, &payload).await;
        let duration = start_time.elapsed();

        match &result {
            Ok(audio) => tracing::info!(
                provider = "minimax",
                model = %payload.model,
                voice_id = %payload.voice_setting.voice_id,
                latency_ms = duration.as_millis(),
                characters_count = payload.text.chars().count(),
                audio_size = audio.audio_data.len(),
                trace_id = audio.trace_id.as_deref().unwrap_or("-"),
                "MiniMax synthesis completed"
            ),
            Err(e) => tracing::warn!(
                provider = "minimax",
                latency_ms = duration.as_millis(),
                error = %e,
                "MiniMax synthesis failed"
            ),
        }

        result
    }

    fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }
}
