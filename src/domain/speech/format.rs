use super::audio::{AudioArtifact, AudioFormat};
use crate::infrastructure::repositories::{AudioTranscoder, TranscodeError};
use std::sync::Arc;

/// Turns canonical WAV audio into the format the client asked for
pub struct FormatNegotiator {
    transcoder: Arc<dyn AudioTranscoder>,
}

impl FormatNegotiator {
    pub fn new(transcoder: Arc<dyn AudioTranscoder>) -> Self {
        Self { transcoder }
    }

    pub async fn finalize(
        &self,
        canonical_wav: Vec<u8>,
        requested: AudioFormat,
    ) -> Result<AudioArtifact, TranscodeError> {
        match requested {
            AudioFormat::Wav => Ok(AudioArtifact::new(canonical_wav, AudioFormat::Wav)),
            AudioFormat::Mp3 => {
                let mp3 = self
                    .transcoder
                    .transcode(&canonical_wav, AudioFormat::Mp3)
                    .await?;
                Ok(AudioArtifact::new(mp3, AudioFormat::Mp3))
            }
        }
    }
}
