/// A synthesis request that passed validation, with defaults resolved
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisCommand {
    pub text: String,
    pub model: String,
    pub voice_id: String,
    pub speed: f64,
    pub volume: f64,
    pub pitch: f64,
    pub emotion: Option<String>,
    pub language_boost: Option<String>,
}

/// Audio returned by the upstream provider for one call
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizedAudio {
    /// Opaque audio payload, relayed as-is
    pub audio_data: String,
    pub trace_id: Option<String>,
}
