use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::domain::tts::TtsService;

pub struct HealthController {
    app_name: String,
    tts_service: Arc<TtsService>,
}

impl HealthController {
    pub fn new(app_name: String, tts_service: Arc<TtsService>) -> Self {
        Self {
            app_name,
            tts_service,
        }
    }

    /// GET / - Service metadata
    pub async fn root(State(controller): State<Arc<HealthController>>) -> Json<Value> {
        Json(json!({
            "app": controller.app_name,
            "version": env!("CARGO_PKG_VERSION"),
            "docs": "/docs",
            "status": "running"
        }))
    }

    /// GET /health - Liveness, independent of upstream configuration
    pub async fn health(State(controller): State<Arc<HealthController>>) -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "app": controller.app_name
        }))
    }

    /// GET /health/ready - Reports whether synthesis can reach the upstream
    pub async fn health_ready(State(controller): State<Arc<HealthController>>) -> Json<Value> {
        let upstream = if controller.tts_service.is_upstream_configured() {
            "configured"
        } else {
            "unconfigured"
        };

        Json(json!({
            "status": "ready",
            "upstream": upstream
        }))
    }
}
