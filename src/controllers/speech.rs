use axum::{
    body::Body,
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Extension, Json,
};
use std::sync::Arc;

use crate::{
    domain::{
        auth::BearerToken,
        speech::{SpeechRequest, SpeechService, SpeechServiceApi},
    },
    error::{AppError, AppResult},
    infrastructure::auth::RequestId,
};

pub struct SpeechController {
    speech_service: Arc<SpeechService>,
}

impl SpeechController {
    pub fn new(speech_service: Arc<SpeechService>) -> Self {
        Self { speech_service }
    }

    /// POST /audio/speech - OpenAI-compatible text to speech
    pub async fn create_speech(
        State(controller): State<Arc<SpeechController>>,
        Extension(_token): Extension<BearerToken>,
        Extension(request_id): Extension<RequestId>,
        payload: Result<Json<SpeechRequest>, JsonRejection>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let Json(request) =
            payload.map_err(|rejection| AppError::UnprocessableEntity(rejection.body_text()))?;

        let artifact = controller.speech_service.create_speech(request).await?;

        tracing::debug!(
            request_id = %request_id.0,
            format = %artifact.format,
            bytes = artifact.size_bytes(),
            "Sending speech"
        );

        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(artifact.media_type()),
        );
        headers.insert(
            header::CONTENT_DISPOSITION,
            HeaderValue::from_static(artifact.format.content_disposition()),
        );

        Ok((StatusCode::OK, headers, Body::from(artifact.data)))
    }
}
