use super::audio::AudioFormat;
use serde::{Deserialize, Serialize};

/// Request for POST /audio/speech, mirroring OpenAI's speech endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechRequest {
    /// Accepted for compatibility; has no effect
    pub model: String,
    /// Language hint used when detection is off or fails
    pub voice: String,
    pub input: String,
    #[serde(default)]
    pub response_format: AudioFormat,
    #[serde(default = "default_speed")]
    pub speed: f32,
    #[serde(default = "default_auto_detect_language")]
    pub auto_detect_language: bool,
}

fn default_speed() -> f32 {
    1.0
}

fn default_auto_detect_language() -> bool {
    true
}
