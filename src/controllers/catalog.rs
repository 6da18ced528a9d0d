use axum::{extract::State, Json};
use std::sync::Arc;

use crate::domain::catalog::{CatalogService, ModelsResponse, VoicesResponse};

pub struct CatalogController {
    service: Arc<CatalogService>,
}

impl CatalogController {
    pub fn new(service: Arc<CatalogService>) -> Self {
        Self { service }
    }

    /// GET /api/voices - List available voice ids
    pub async fn list_voices(State(controller): State<Arc<CatalogController>>) -> Json<VoicesResponse> {
        Json(VoicesResponse::new(controller.service.get_voices()))
    }

    /// GET /api/models - List available TTS models
    pub async fn list_models(State(controller): State<Arc<CatalogController>>) -> Json<ModelsResponse> {
        Json(ModelsResponse::new(controller.service.get_models()))
    }
}
