use super::audio::AudioArtifact;
use super::dto::SpeechRequest;
use super::error::SpeechServiceError;
use super::format::FormatNegotiator;
use super::language::{LanguageDetector, LanguageResolver};
use super::params::SynthesisParameters;
use super::voices::VoiceRegistry;
use crate::infrastructure::repositories::{AudioTranscoder, SpeechSynthesizer};
use async_trait::async_trait;
use std::sync::Arc;

pub struct SpeechService {
    resolver: LanguageResolver,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    negotiator: FormatNegotiator,
}

impl SpeechService {
    pub fn new(
        registry: Arc<VoiceRegistry>,
        detector: Arc<dyn LanguageDetector>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        transcoder: Arc<dyn AudioTranscoder>,
    ) -> Self {
        Self {
            resolver: LanguageResolver::new(registry, detector),
            synthesizer,
            negotiator: FormatNegotiator::new(transcoder),
        }
    }
}

#[async_trait]
pub trait SpeechServiceApi: Send + Sync {
    /// Turn a speech request into finished audio
    ///
    /// This operation:
    /// - Validates the text and speed
    /// - Picks a voice (detected language, else the requested one)
    /// - Synthesizes canonical WAV audio
    /// - Transcodes it when the requested format is not WAV
    async fn create_speech(
        &self,
        request: SpeechRequest,
    ) -> Result<AudioArtifact, SpeechServiceError>;
}

#[async_trait]
impl SpeechServiceApi for SpeechService {
    async fn create_speech(
        &self,
        request: SpeechRequest,
    ) -> Result<AudioArtifact, SpeechServiceError> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            model = %request.model,
            voice = %request.voice,
            response_format = %request.response_format,
            speed = request.speed,
            auto_detect_language = request.auto_detect_language,
            text_length = request.input.len(),
            "Speech request"
        );

        // 1. Validate before touching any collaborator
        if request.input.trim().is_empty() {
            return Err(SpeechServiceError::Invalid(
                "input must not be empty".to_string(),
            ));
        }
        let params = SynthesisParameters::for_speed(request.speed)?;

        // 2. Pick the voice
        let voice_path = self
            .resolver
            .resolve_voice(&request.input, &request.voice, request.auto_detect_language)
            .await;

        // 3. Synthesize canonical WAV
        let canonical = self
            .synthesizer
            .synthesize(&request.input, &voice_path, &params)
            .await?;

        // 4. Convert to the requested container
        let artifact = self
            .negotiator
            .finalize(canonical, request.response_format)
            .await?;

        tracing::info!(
            voice = %voice_path,
            format = %artifact.format,
            audio_size_bytes = artifact.size_bytes(),
            latency_ms = start_time.elapsed().as_millis(),
            "Speech generated"
        );

        Ok(artifact)
    }
}
