use super::voices::VoiceRegistry;
use lingua::LanguageDetectorBuilder;
use std::sync::Arc;

/// Best-guess language identification. `None` means detection failed.
pub trait LanguageDetector: Send + Sync {
    /// Returns a lower-case ISO 639-1 code
    fn detect(&self, text: &str) -> Option<String>;
}

/// Detector backed by lingua, considering every language it ships models for
pub struct LinguaLanguageDetector {
    detector: lingua::LanguageDetector,
}

impl LinguaLanguageDetector {
    pub fn new() -> Self {
        let detector = LanguageDetectorBuilder::from_all_languages().build();
        Self { detector }
    }
}

impl Default for LinguaLanguageDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetector for LinguaLanguageDetector {
    fn detect(&self, text: &str) -> Option<String> {
        self.detector
            .detect_language_of(text)
            .map(|language| language.iso_code_639_1().to_string().to_lowercase())
    }
}

/// Picks the voice model for a request
pub struct LanguageResolver {
    registry: Arc<VoiceRegistry>,
    detector: Arc<dyn LanguageDetector>,
}

impl LanguageResolver {
    pub fn new(registry: Arc<VoiceRegistry>, detector: Arc<dyn LanguageDetector>) -> Self {
        Self { registry, detector }
    }

    /// With `auto_detect`, the detected language wins; if detection fails the
    /// hinted voice is used instead. Unknown codes resolve to the default voice.
    pub async fn resolve_voice(&self, text: &str, hinted_voice: &str, auto_detect: bool) -> String {
        if !auto_detect {
            return self.registry.resolve(hinted_voice).to_string();
        }

        match self.detect(text).await {
            Some(language) => {
                let voice_path = self.registry.resolve(&language);
                tracing::info!(
                    language_detected = %language,
                    voice = %voice_path,
                    "Detected language"
                );
                voice_path.to_string()
            }
            None => {
                let voice_path = self.registry.resolve(hinted_voice);
                tracing::warn!(
                    hinted_voice = %hinted_voice,
                    voice = %voice_path,
                    "Language detection failed, using requested voice"
                );
                voice_path.to_string()
            }
        }
    }

    async fn detect(&self, text: &str) -> Option<String> {
        let detector = self.detector.clone();
        let text = text.to_string();

        // Detection is CPU-bound; a panicking detector counts as a failed detection
        match tokio::task::spawn_blocking(move || detector.detect(&text)).await {
            Ok(language) => language,
            Err(e) => {
                tracing::warn!(error = %e, "Language detection task failed");
                None
            }
        }
    }
}
