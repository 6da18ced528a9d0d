use serde::{Deserialize, Serialize};

const DEFAULT_MODEL: &str = "speech-02-hd";

/// Request for POST /api/tts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisRequest {
    pub text: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Falls back to the deployment profile's voice when absent or blank
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,
    #[serde(default = "default_speed")]
    pub speed: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<String>,
    /// Defaults to `"auto"`; an explicit `null` disables it
    #[serde(default = "default_language_boost")]
    pub language_boost: Option<String>,
    #[serde(default = "default_volume")]
    pub volume: f64,
    #[serde(default)]
    pub pitch: f64,
}

impl SynthesisRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model: default_model(),
            voice_id: None,
            speed: default_speed(),
            emotion: None,
            language_boost: default_language_boost(),
            volume: default_volume(),
            pitch: 0.0,
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_speed() -> f64 {
    1.0
}

fn default_volume() -> f64 {
    1.0
}

fn default_language_boost() -> Option<String> {
    Some("auto".to_string())
}

/// Response for POST /api/tts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisResponse {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

impl SynthesisResponse {
    pub fn success(audio_data: String, trace_id: Option<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: "Text converted to speech successfully".to_string(),
            audio_data: Some(audio_data),
            trace_id,
        }
    }
}
