use crate::domain::speech::SynthesisParameters;
use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
#[error("{cause}")]
pub struct SynthesisError {
    pub cause: String,
}

impl SynthesisError {
    pub fn new(cause: impl Into<String>) -> Self {
        Self {
            cause: cause.into(),
        }
    }
}

/// Repository for speech synthesis.
/// Abstracts the engine that turns text into audio for a given voice model.
///
/// Implementations are responsible for:
/// - Loading (and optionally caching) the voice model
/// - Running synthesis to completion before returning
/// - Wrapping the PCM output in a WAV container
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `text` with the voice model at `voice_path`
    ///
    /// Returns a complete WAV file. Nothing is returned on failure, not even
    /// a partial buffer.
    async fn synthesize(
        &self,
        text: &str,
        voice_path: &str,
        params: &SynthesisParameters,
    ) -> Result<Vec<u8>, SynthesisError>;
}
