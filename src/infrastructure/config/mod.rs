use crate::domain::speech::DEFAULT_LANGUAGE;
use serde::Deserialize;
use std::env;

pub const DEFAULT_API_KEY: &str = "CHANGE_ME";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub api_key: String,
    pub log_format: LogFormat,
    // Speech engine
    pub cuda_enabled: bool,
    pub piper_binary: String,
    pub ffmpeg_binary: String,
    pub model_cache_enabled: bool,
    // Voices
    pub language_voice_mapping: Option<String>,
    pub default_language: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()?,
            api_key: env::var("API_KEY").unwrap_or_else(|_| DEFAULT_API_KEY.to_string()),
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            cuda_enabled: parse_flag(env::var("CUDA_ENABLED").ok(), false),
            piper_binary: env::var("PIPER_BINARY").unwrap_or_else(|_| "piper".to_string()),
            ffmpeg_binary: env::var("FFMPEG_BINARY").unwrap_or_else(|_| "ffmpeg".to_string()),
            model_cache_enabled: parse_flag(env::var("MODEL_CACHE_ENABLED").ok(), true),
            language_voice_mapping: env::var("LANGUAGE_VOICE_MAPPING").ok(),
            default_language: env::var("DEFAULT_LANGUAGE")
                .unwrap_or_else(|_| DEFAULT_LANGUAGE.to_string()),
        };

        Ok(config)
    }

    pub fn uses_default_api_key(&self) -> bool {
        self.api_key == DEFAULT_API_KEY
    }
}

/// `true` in any case enables a flag; anything else disables it
fn parse_flag(value: Option<String>, default: bool) -> bool {
    value
        .map(|v| v.trim().to_lowercase() == "true")
        .unwrap_or(default)
}
