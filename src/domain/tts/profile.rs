use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Regional parameter set the gateway is deployed with.
///
/// Both regions talk to the same `t2a_v2` API but disagree on the default
/// voice, on the accepted ranges for speed/volume/pitch and on whether
/// volume and pitch are sent as floats or integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentProfile {
    International,
    Mainland,
}

/// How `vol` and `pitch` are encoded in the upstream `voice_setting`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericEncoding {
    Float,
    /// Truncated toward zero
    Integer,
}

/// Inclusive bounds applied to a synthesis request before dispatch
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisLimits {
    pub speed: RangeInclusive<f64>,
    pub volume: RangeInclusive<f64>,
    pub pitch: RangeInclusive<f64>,
}

impl DeploymentProfile {
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Self::International => "https://api.minimaxi.chat/v1",
            Self::Mainland => "https://api.minimax.chat/v1",
        }
    }

    pub fn default_voice_id(&self) -> &'static str {
        match self {
            Self::International => "English_Graceful_Lady",
            Self::Mainland => "male-qn-qingse",
        }
    }

    pub fn limits(&self) -> SynthesisLimits {
        match self {
            Self::International => SynthesisLimits {
                speed: 0.1..=3.0,
                volume: 0.0..=2.0,
                pitch: -20.0..=20.0,
            },
            Self::Mainland => SynthesisLimits {
                speed: 0.5..=2.0,
                volume: 0.0..=10.0,
                pitch: -12.0..=12.0,
            },
        }
    }

    pub fn level_encoding(&self) -> NumericEncoding {
        match self {
            Self::International => NumericEncoding::Float,
            Self::Mainland => NumericEncoding::Integer,
        }
    }
}

impl FromStr for DeploymentProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "international" | "global" => Ok(Self::International),
            "mainland" | "china" | "cn" => Ok(Self::Mainland),
            other => Err(format!("unknown deployment profile: {}", other)),
        }
    }
}

impl fmt::Display for DeploymentProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::International => write!(f, "international"),
            Self::Mainland => write!(f, "mainland"),
        }
    }
}
