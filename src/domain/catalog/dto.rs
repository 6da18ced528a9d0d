use serde::{Deserialize, Serialize};

use super::{ModelDescriptor, VoiceDescriptor};

/// Response for GET /api/voices
#[derive(Debug, Serialize, Deserialize)]
pub struct VoicesResponse {
    pub status: String,
    pub message: String,
    pub voices: Vec<VoiceDescriptor>,
}

/// Response for GET /api/models
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelsResponse {
    pub status: String,
    pub message: String,
    pub models: Vec<ModelDescriptor>,
}

impl VoicesResponse {
    pub fn new(voices: Vec<VoiceDescriptor>) -> Self {
        Self {
            status: "success".to_string(),
            message: "Available voices retrieved".to_string(),
            voices,
        }
    }
}

impl ModelsResponse {
    pub fn new(models: Vec<ModelDescriptor>) -> Self {
        Self {
            status: "success".to_string(),
            message: "Available models retrieved".to_string(),
            models,
        }
    }
}
