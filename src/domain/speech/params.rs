use super::error::SpeechServiceError;

/// Engine knobs derived from a request. Only `length_scale` varies per request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthesisParameters {
    pub volume: f32,
    pub length_scale: f32,
    pub noise_scale: f32,
    pub noise_w_scale: f32,
    pub normalize_audio: bool,
}

impl SynthesisParameters {
    /// Parameters for the requested speaking rate; `length_scale = 1 / speed`.
    pub fn for_speed(speed: f32) -> Result<Self, SpeechServiceError> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(SpeechServiceError::Invalid(format!(
                "speed must be a positive number, got {}",
                speed
            )));
        }

        Ok(Self {
            volume: 1.0,
            length_scale: 1.0 / speed,
            // Zero noise keeps output deterministic for identical input
            noise_scale: 0.0,
            noise_w_scale: 0.0,
            normalize_audio: true,
        })
    }
}
