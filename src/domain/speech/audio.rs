use serde::{Deserialize, Serialize};

/// Container formats the gateway can return
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AudioFormat {
    Wav,
    #[default]
    Mp3,
}

impl AudioFormat {
    /// Lenient parse: `wav` in any case selects WAV, everything else falls back to MP3
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("wav") {
            AudioFormat::Wav
        } else {
            AudioFormat::Mp3
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AudioFormat::Wav => "wav",
            AudioFormat::Mp3 => "mp3",
        }
    }

    pub fn media_type(&self) -> &'static str {
        match self {
            AudioFormat::Wav => "audio/wav",
            AudioFormat::Mp3 => "audio/mpeg",
        }
    }

    pub fn content_disposition(&self) -> &'static str {
        match self {
            AudioFormat::Wav => "attachment; filename=speech.wav",
            AudioFormat::Mp3 => "attachment; filename=speech.mp3",
        }
    }
}

impl From<String> for AudioFormat {
    fn from(value: String) -> Self {
        AudioFormat::parse(&value)
    }
}

impl From<AudioFormat> for String {
    fn from(format: AudioFormat) -> Self {
        format.as_str().to_string()
    }
}

impl std::fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Finished audio, owned by the response that sends it
#[derive(Debug, Clone)]
pub struct AudioArtifact {
    pub data: Vec<u8>,
    pub format: AudioFormat,
}

impl AudioArtifact {
    pub fn new(data: Vec<u8>, format: AudioFormat) -> Self {
        Self { data, format }
    }

    pub fn media_type(&self) -> &'static str {
        self.format.media_type()
    }

    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}
