// End-to-end tests for the TTS gateway
//
// Each test boots the real router on an ephemeral port. The speech engine,
// transcoder and language detector are replaced by deterministic fakes, so
// neither piper nor ffmpeg needs to be installed.

mod helpers;
mod test_auth;
mod test_health;
