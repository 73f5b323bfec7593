use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tts_gateway::controllers::speech::SpeechController;
use tts_gateway::domain::auth::ApiKeyGate;
use tts_gateway::domain::speech::{LinguaLanguageDetector, SpeechService, VoiceRegistry};
use tts_gateway::infrastructure::config::{Config, LogFormat};
use tts_gateway::infrastructure::http::{create_app, start_http_server};
use tts_gateway::infrastructure::repositories::{
    FfmpegTranscoderRepository, PiperSynthesisRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting TTS Gateway on {}:{}",
        config.host,
        config.port
    );

    if config.uses_default_api_key() {
        tracing::warn!("API_KEY is not set, the default key is in use. Set API_KEY before exposing this service.");
    }

    // Voices are fixed for the lifetime of the process
    let registry = VoiceRegistry::from_override(
        config.language_voice_mapping.as_deref(),
        &config.default_language,
    )?;
    tracing::info!(
        default_language = %registry.default_language(),
        default_voice = %registry.default_voice(),
        languages = ?registry.languages().collect::<Vec<_>>(),
        "Voice registry loaded"
    );

    tracing::info!(
        piper = %config.piper_binary,
        ffmpeg = %config.ffmpeg_binary,
        cuda_enabled = config.cuda_enabled,
        model_cache_enabled = config.model_cache_enabled,
        "Speech engine configured"
    );

    let config = Arc::new(config);
    let registry = Arc::new(registry);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories (external engines)
    let synthesizer = Arc::new(PiperSynthesisRepository::new(
        config.piper_binary.clone(),
        config.cuda_enabled,
        config.model_cache_enabled,
    ));
    let transcoder = Arc::new(FfmpegTranscoderRepository::new(config.ffmpeg_binary.clone()));

    // 2. Language detector (builds lingua models once)
    tracing::info!("Building language detector...");
    let detector = Arc::new(LinguaLanguageDetector::new());

    // 3. Instantiate services
    let speech_service = Arc::new(SpeechService::new(
        registry,
        detector,
        synthesizer,
        transcoder,
    ));

    // 4. Instantiate controllers and the auth gate
    let speech_controller = Arc::new(SpeechController::new(speech_service));
    let gate = Arc::new(ApiKeyGate::new(config.api_key.clone()));

    // Start HTTP server with all routes
    let app = create_app(gate, speech_controller);
    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "tts_gateway=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "tts_gateway=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
