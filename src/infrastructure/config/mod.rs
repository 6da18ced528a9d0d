use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::tts::DeploymentProfile;

const DEFAULT_APP_NAME: &str = "MiniMax TTS Gateway";

#[derive(Debug, Clone)]
pub struct Config {
    pub app_name: String,
    pub debug: bool,
    pub host: String,
    pub port: u16,
    // MiniMax upstream
    pub minimax_group_id: Option<String>,
    pub minimax_api_key: Option<String>,
    pub minimax_base_url: String,
    pub upstream_timeout_secs: u64,
    pub profile: DeploymentProfile,
    // Fixed audio_setting sent with every synthesis
    pub audio: AudioSettings,
    // Feature flags
    pub enable_cors: bool,
    // Paths
    pub static_dir: PathBuf,
    pub logs_dir: PathBuf,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AudioSettings {
    pub sample_rate: u32,
    pub format: String,
    pub channel: u8,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            sample_rate: 32000,
            format: "mp3".to_string(),
            channel: 1,
        }
    }
}

/// Group id and API key, only available when both are set
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamCredentials {
    pub group_id: String,
    pub api_key: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from any variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Box<dyn std::error::Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let profile: DeploymentProfile = var("TTS_PROFILE")
            .unwrap_or_else(|| "international".to_string())
            .parse()?;
        let defaults = AudioSettings::default();

        let config = Config {
            app_name: var("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            debug: parse_flag(var("DEBUG").as_deref(), false),
            host: var("SERVER_HOST").unwrap_or_else(|| "localhost".to_string()),
            port: var("SERVER_PORT")
                .unwrap_or_else(|| "8001".to_string())
                .trim()
                .parse()?,
            minimax_group_id: var("MINIMAX_GROUP_ID"),
            minimax_api_key: var("MINIMAX_API_KEY"),
            minimax_base_url: var("MINIMAX_BASE_URL")
                .unwrap_or_else(|| profile.default_base_url().to_string()),
            upstream_timeout_secs: var("MINIMAX_TIMEOUT_SECS")
                .unwrap_or_else(|| "30".to_string())
                .trim()
                .parse()?,
            profile,
            audio: AudioSettings {
                sample_rate: match var("AUDIO_SAMPLE_RATE") {
                    Some(v) => v.trim().parse()?,
                    None => defaults.sample_rate,
                },
                format: var("AUDIO_FORMAT").unwrap_or(defaults.format),
                channel: match var("AUDIO_CHANNEL") {
                    Some(v) => v.trim().parse()?,
                    None => defaults.channel,
                },
            },
            enable_cors: parse_flag(var("ENABLE_CORS").as_deref(), true),
            static_dir: PathBuf::from(var("STATIC_DIR").unwrap_or_else(|| "static".to_string())),
            logs_dir: PathBuf::from(var("LOGS_DIR").unwrap_or_else(|| "logs".to_string())),
            log_format: match var("LOG_FORMAT").as_deref().map(str::trim) {
                Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        Ok(config)
    }

    /// Create the local directories and report missing credentials.
    ///
    /// Missing credentials are not fatal: only `/api/tts` depends on them.
    pub fn prepare(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.static_dir)?;
        std::fs::create_dir_all(&self.logs_dir)?;

        if self.minimax_group_id.is_none() {
            tracing::warn!("MINIMAX_GROUP_ID not set in environment");
        }
        if self.minimax_api_key.is_none() {
            tracing::warn!("MINIMAX_API_KEY not set in environment");
        }

        Ok(())
    }

    pub fn credentials(&self) -> Option<UpstreamCredentials> {
        match (&self.minimax_group_id, &self.minimax_api_key) {
            (Some(group_id), Some(api_key)) => Some(UpstreamCredentials {
                group_id: group_id.clone(),
                api_key: api_key.clone(),
            }),
            _ => None,
        }
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}

fn parse_flag(value: Option<&str>, default: bool) -> bool {
    match value {
        Some(v) => v.trim().eq_ignore_ascii_case("true"),
        None => default,
    }
}
