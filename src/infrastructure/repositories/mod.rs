pub mod ffmpeg_transcoder_repository;
pub mod pcm;
pub mod piper_synthesis_repository;
pub mod synthesis_repository;
pub mod transcoder_repository;

pub use ffmpeg_transcoder_repository::FfmpegTranscoderRepository;
pub use piper_synthesis_repository::PiperSynthesisRepository;
pub use synthesis_repository::{SpeechSynthesizer, SynthesisError};
pub use transcoder_repository::{AudioTranscoder, TranscodeError};
