use super::{CatalogRepository, ModelDescriptor, VoiceDescriptor};
use std::sync::Arc;

pub struct CatalogService {
    repository: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }

    /// Returns every configured voice, in catalog order
    pub fn get_voices(&self) -> Vec<VoiceDescriptor> {
        self.repository.get_all_voices()
    }

    /// Returns every supported model, in catalog order
    pub fn get_models(&self) -> Vec<ModelDescriptor> {
        self.repository.get_all_models()
    }

    pub fn is_known_model(&self, model_id: &str) -> bool {
        self.repository
            .get_all_models()
            .iter()
            .any(|model| model.id == model_id)
    }
}
