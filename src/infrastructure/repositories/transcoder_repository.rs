use crate::domain::speech::AudioFormat;
use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
#[error("{cause}")]
pub struct TranscodeError {
    pub cause: String,
}

impl TranscodeError {
    pub fn new(cause: impl Into<String>) -> Self {
        Self {
            cause: cause.into(),
        }
    }
}

/// Repository for audio transcoding between containers
#[async_trait]
pub trait AudioTranscoder: Send + Sync {
    /// Re-encode a WAV buffer into `target`
    async fn transcode(&self, wav: &[u8], target: AudioFormat) -> Result<Vec<u8>, TranscodeError>;
}
