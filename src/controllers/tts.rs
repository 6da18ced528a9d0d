use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::{
    domain::tts::{SynthesisRequest, SynthesisResponse, TtsService, TtsServiceApi},
    error::{AppError, AppResult},
};

pub struct TtsController {
    tts_service: Arc<TtsService>,
}

impl TtsController {
    pub fn new(tts_service: Arc<TtsService>) -> Self {
        Self { tts_service }
    }

    /// POST /api/tts - Convert text to speech through MiniMax
    pub async fn synthesize(
        State(controller): State<Arc<TtsController>>,
        request: Result<Json<SynthesisRequest>, JsonRejection>,
    ) -> AppResult<Json<SynthesisResponse>> {
        let Json(request) = request.map_err(|e| AppError::BadRequest(e.body_text()))?;

        let audio = controller
            .tts_service
            .synthesize(request)
            .await
            .map_err(AppError::from)?;

        Ok(Json(SynthesisResponse::success(audio.audio_data, audio.trace_id)))
    }
}
