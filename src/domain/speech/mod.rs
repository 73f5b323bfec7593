pub mod audio;
pub mod dto;
pub mod error;
pub mod format;
pub mod language;
pub mod params;
pub mod service;
pub mod voices;

pub use audio::{AudioArtifact, AudioFormat};
pub use dto::SpeechRequest;
pub use error::SpeechServiceError;
pub use format::FormatNegotiator;
pub use language::{LanguageDetector, LanguageResolver, LinguaLanguageDetector};
pub use params::SynthesisParameters;
pub use service::{SpeechService, SpeechServiceApi};
pub use voices::{VoiceRegistry, VoiceRegistryError, DEFAULT_LANGUAGE};
