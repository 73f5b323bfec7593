use super::pcm;
use super::synthesis_repository::{SpeechSynthesizer, SynthesisError};
use crate::domain::speech::SynthesisParameters;
use async_trait::async_trait;
use moka::future::Cache;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Voice model config written next to every piper model as `<model>.onnx.json`
#[derive(Debug, Deserialize)]
struct PiperVoiceConfig {
    audio: PiperAudioConfig,
}

#[derive(Debug, Deserialize)]
struct PiperAudioConfig {
    sample_rate: u32,
}

/// A voice model that has been located and whose config has been read
#[derive(Debug, Clone)]
pub struct VoiceModel {
    pub model_path: PathBuf,
    pub sample_rate: u32,
}

/// Piper implementation of the speech synthesizer.
/// Runs the `piper` binary per request, reading raw PCM from its stdout.
pub struct PiperSynthesisRepository {
    binary: PathBuf,
    use_cuda: bool,
    voice_cache: Option<Cache<String, Arc<VoiceModel>>>,
}

impl PiperSynthesisRepository {
    pub fn new(binary: impl Into<PathBuf>, use_cuda: bool, cache_enabled: bool) -> Self {
        let voice_cache = if cache_enabled {
            Some(
                Cache::builder()
                    .max_capacity(32)
                    .time_to_idle(Duration::from_secs(60 * 60))
                    .build(),
            )
        } else {
            None
        };

        Self {
            binary: binary.into(),
            use_cuda,
            voice_cache,
        }
    }

    /// Load a voice, going through the cache when enabled.
    /// Concurrent first requests for one voice share a single load.
    async fn load_voice(&self, voice_path: &str) -> Result<Arc<VoiceModel>, SynthesisError> {
        match &self.voice_cache {
            Some(cache) => cache
                .try_get_with(voice_path.to_string(), async {
                    read_voice_model(Path::new(voice_path)).await.map(Arc::new)
                })
                .await
                .map_err(|e| (*e).clone()),
            None => read_voice_model(Path::new(voice_path)).await.map(Arc::new),
        }
    }

    fn build_command(&self, voice: &VoiceModel, params: &SynthesisParameters) -> Command {
        let mut command = Command::new(&self.binary);
        command
            .arg("--model")
            .arg(&voice.model_path)
            .arg("--output-raw")
            .arg("--length_scale")
            .arg(params.length_scale.to_string())
            .arg("--noise_scale")
            .arg(params.noise_scale.to_string())
            .arg("--noise_w")
            .arg(params.noise_w_scale.to_string());

        if self.use_cuda {
            command.arg("--cuda");
        }

        command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        command
    }

    /// Run piper to completion and return its raw PCM output
    async fn call_piper(
        &self,
        text: &str,
        voice: &VoiceModel,
        params: &SynthesisParameters,
    ) -> Result<Vec<u8>, SynthesisError> {
        let mut child = self.build_command(voice, params).spawn().map_err(|e| {
            SynthesisError::new(format!(
                "failed to start {}: {}",
                self.binary.display(),
                e
            ))
        })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| SynthesisError::new("piper stdin unavailable"))?;

        // piper treats each line as an utterance; one request is one utterance
        let input = format!("{}\n", text.replace(['\r', '\n'], " "));
        let writer = tokio::spawn(async move {
            stdin.write_all(input.as_bytes()).await?;
            stdin.shutdown().await
        });

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| SynthesisError::new(format!("piper did not finish: {}", e)))?;

        if let Ok(Err(e)) = writer.await {
            tracing::debug!(error = %e, "piper closed stdin early");
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::error!(
                status = %output.status,
                stderr = %stderr.trim(),
                model = %voice.model_path.display(),
                "piper synthesis failed"
            );
            return Err(SynthesisError::new(format!(
                "piper exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(output.stdout)
    }
}

/// Locate the model file and read its sample rate from the adjacent config
async fn read_voice_model(model_path: &Path) -> Result<VoiceModel, SynthesisError> {
    tokio::fs::metadata(model_path).await.map_err(|e| {
        SynthesisError::new(format!(
            "voice model {} is not available: {}",
            model_path.display(),
            e
        ))
    })?;

    let config_path = voice_config_path(model_path);
    let raw = tokio::fs::read_to_string(&config_path).await.map_err(|e| {
        SynthesisError::new(format!(
            "voice config {} is not readable: {}",
            config_path.display(),
            e
        ))
    })?;

    let config = parse_voice_config(&raw).map_err(|e| {
        SynthesisError::new(format!(
            "voice config {} is invalid: {}",
            config_path.display(),
            e
        ))
    })?;

    tracing::info!(
        model = %model_path.display(),
        sample_rate = config.audio.sample_rate,
        "Voice model loaded"
    );

    Ok(VoiceModel {
        model_path: model_path.to_path_buf(),
        sample_rate: config.audio.sample_rate,
    })
}

fn voice_config_path(model_path: &Path) -> PathBuf {
    let mut config_path = model_path.as_os_str().to_owned();
    config_path.push(".json");
    PathBuf::from(config_path)
}

fn parse_voice_config(raw: &str) -> Result<PiperVoiceConfig, serde_json::Error> {
    serde_json::from_str(raw)
}

#[async_trait]
impl SpeechSynthesizer for PiperSynthesisRepository {
    async fn synthesize(
        &self,
        text: &str,
        voice_path: &str,
        params: &SynthesisParameters,
    ) -> Result<Vec<u8>, SynthesisError> {
        let start_time = std::time::Instant::now();

        let voice = self.load_voice(voice_path).await?;

        tracing::info!(
            voice = %voice_path,
            length_scale = params.length_scale,
            use_cuda = self.use_cuda,
            text_length = text.len(),
            "Starting piper synthesis"
        );

        let raw = self.call_piper(text, &voice, params).await?;
        let samples = pcm::decode_s16le(&raw);
        if samples.is_empty() {
            return Err(SynthesisError::new("piper produced no audio"));
        }

        let samples = pcm::shape(&samples, params.volume, params.normalize_audio);
        let wav = pcm::encode_wav(&samples, voice.sample_rate)
            .map_err(|e| SynthesisError::new(format!("failed to write WAV: {}", e)))?;

        let duration = start_time.elapsed();
        tracing::info!(
            provider = "piper",
            voice = %voice_path,
            latency_ms = duration.as_millis(),
            samples = samples.len(),
            audio_seconds = format!("{:.2}", samples.len() as f64 / voice.sample_rate as f64),
            audio_size_bytes = wav.len(),
            "TTS synthesis completed"
        );

        Ok(wav)
    }
}
