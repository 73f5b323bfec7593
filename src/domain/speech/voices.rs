use std::collections::HashMap;

pub const DEFAULT_LANGUAGE: &str = "da";

/// Voices shipped with the service image
const BUILT_IN_VOICES: &[(&str, &str)] = &[
    ("da", "./voices/da_DK-talesyntese-medium.onnx"),
    ("en", "./voices/en_US-amy-medium.onnx"),
    ("gb", "./voices/en_GB-alan-medium.onnx"),
];

#[derive(Debug, thiserror::Error)]
pub enum VoiceRegistryError {
    #[error("voice mapping has no entry for default language '{0}'")]
    MissingDefault(String),
}

/// Language code to voice model lookup, fixed at startup
#[derive(Debug, Clone)]
pub struct VoiceRegistry {
    voices: HashMap<String, String>,
    default_language: String,
}

impl VoiceRegistry {
    /// Build a registry, lower-casing codes. Fails when the default language has no voice.
    pub fn new(
        voices: HashMap<String, String>,
        default_language: &str,
    ) -> Result<Self, VoiceRegistryError> {
        let voices: HashMap<String, String> = voices
            .into_iter()
            .map(|(code, path)| (code.trim().to_lowercase(), path))
            .collect();
        let default_language = default_language.trim().to_lowercase();

        if !voices.contains_key(&default_language) {
            return Err(VoiceRegistryError::MissingDefault(default_language));
        }

        Ok(Self {
            voices,
            default_language,
        })
    }

    pub fn built_in_voices() -> HashMap<String, String> {
        BUILT_IN_VOICES
            .iter()
            .map(|(code, path)| (code.to_string(), path.to_string()))
            .collect()
    }

    /// Build from the optional `LANGUAGE_VOICE_MAPPING` JSON object.
    ///
    /// An override that is not a JSON object of strings is logged and replaced
    /// by the built-in voices.
    pub fn from_override(
        raw_override: Option<&str>,
        default_language: &str,
    ) -> Result<Self, VoiceRegistryError> {
        let voices = match raw_override.map(str::trim).filter(|raw| !raw.is_empty()) {
            Some(raw) => match serde_json::from_str::<HashMap<String, String>>(raw) {
                Ok(voices) => {
                    tracing::info!(
                        languages = voices.len(),
                        "Using voice mapping from LANGUAGE_VOICE_MAPPING"
                    );
                    voices
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "Error parsing LANGUAGE_VOICE_MAPPING, using built-in voices"
                    );
                    Self::built_in_voices()
                }
            },
            None => Self::built_in_voices(),
        };

        Self::new(voices, default_language)
    }

    /// Voice path for a language code, or the default language's voice when unknown
    pub fn resolve(&self, language: &str) -> &str {
        let code = language.trim().to_lowercase();
        self.voices
            .get(&code)
            .map(String::as_str)
            .unwrap_or_else(|| self.default_voice())
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    pub fn default_voice(&self) -> &str {
        // Presence is checked in `new`
        self.voices
            .get(&self.default_language)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.voices.keys().map(String::as_str)
    }
}
