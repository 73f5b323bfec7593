use super::transcoder_repository::{AudioTranscoder, TranscodeError};
use crate::domain::speech::AudioFormat;
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// ffmpeg implementation of the transcoder, piping audio through stdin/stdout
pub struct FfmpegTranscoderRepository {
    binary: PathBuf,
}

impl FfmpegTranscoderRepository {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    fn build_command(&self, target: AudioFormat) -> Command {
        let mut command = Command::new(&self.binary);
        command
            .args(["-hide_banner", "-loglevel", "error"])
            .args(["-f", "wav", "-i", "pipe:0"])
            .args(["-f", target.as_str(), "pipe:1"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }
}

#[async_trait]
impl AudioTranscoder for FfmpegTranscoderRepository {
    async fn transcode(&self, wav: &[u8], target: AudioFormat) -> Result<Vec<u8>, TranscodeError> {
        let start_time = std::time::Instant::now();

        let mut child = self.build_command(target).spawn().map_err(|e| {
            TranscodeError::new(format!(
                "failed to start {}: {}",
                self.binary.display(),
                e
            ))
        })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| TranscodeError::new("ffmpeg stdin unavailable"))?;

        // Feed input from a separate task so a full stdout pipe cannot stall us
        let input = wav.to_vec();
        let writer = tokio::spawn(async move {
            stdin.write_all(&input).await?;
            stdin.shutdown().await
        });

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| TranscodeError::new(format!("ffmpeg did not finish: {}", e)))?;

        if let Ok(Err(e)) = writer.await {
            tracing::debug!(error = %e, "ffmpeg closed stdin early");
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::error!(
                status = %output.status,
                stderr = %stderr.trim(),
                target = %target,
                "ffmpeg transcoding failed"
            );
            return Err(TranscodeError::new(format!(
                "ffmpeg exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        if output.stdout.is_empty() {
            return Err(TranscodeError::new("ffmpeg produced no output"));
        }

        tracing::info!(
            target = %target,
            input_size_bytes = wav.len(),
            output_size_bytes = output.stdout.len(),
            latency_ms = start_time.elapsed().as_millis(),
            "Audio transcoded"
        );

        Ok(output.stdout)
    }
}
