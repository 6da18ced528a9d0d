use serde::{Deserialize, Serialize};

/// A selectable synthesis voice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VoiceDescriptor {
    pub id: String,
    pub name: String,
    pub language: String,
}

/// A selectable synthesis model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelDescriptor {
    pub id: String,
    pub name: String,
    pub quality: String,
}

/// Repository trait for the static voice and model lists
pub trait CatalogRepository: Send + Sync {
    fn get_all_voices(&self) -> Vec<VoiceDescriptor>;
    fn get_all_models(&self) -> Vec<ModelDescriptor>;
}

pub mod dto;
pub mod service;

pub use dto::{ModelsResponse, VoicesResponse};
pub use service::CatalogService;
