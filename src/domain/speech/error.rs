use crate::error::AppError;
use crate::infrastructure::repositories::{SynthesisError, TranscodeError};

#[derive(Debug, thiserror::Error)]
pub enum SpeechServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
    #[error(transparent)]
    Transcode(#[from] TranscodeError),
}

impl From<SpeechServiceError> for AppError {
    fn from(err: SpeechServiceError) -> Self {
        match err {
            SpeechServiceError::Invalid(msg) => AppError::BadRequest(msg),
            SpeechServiceError::Synthesis(e) => AppError::SpeechGeneration(e.to_string()),
            SpeechServiceError::Transcode(e) => AppError::SpeechGeneration(e.to_string()),
        }
    }
}
