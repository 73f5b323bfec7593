//! Raw PCM helpers for engines that emit headerless 16-bit mono audio.

use std::io::Cursor;

/// Peak normalization never amplifies by more than this factor
const MIN_PEAK: f32 = 0.01;

/// Interpret little-endian signed 16-bit samples; a trailing odd byte is dropped.
pub fn decode_s16le(raw: &[u8]) -> Vec<i16> {
    raw.chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}

/// Apply optional peak normalization, then volume, clipping to the i16 range.
pub fn shape(samples: &[i16], volume: f32, normalize: bool) -> Vec<i16> {
    let gain = if normalize {
        let peak = samples
            .iter()
            .map(|s| (*s as f32 / i16::MAX as f32).abs())
            .fold(0.0_f32, f32::max);
        volume / peak.max(MIN_PEAK)
    } else {
        volume
    };

    samples
        .iter()
        .map(|s| {
            let scaled = (*s as f32 / i16::MAX as f32) * gain;
            (scaled.clamp(-1.0, 1.0) * i16::MAX as f32) as i16
        })
        .collect()
}

/// Wrap mono 16-bit samples in a WAV container
pub fn encode_wav(samples: &[i16], sample_rate: u32) -> Result<Vec<u8>, hound::Error> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::with_capacity(44 + samples.len() * 2));
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec)?;
        for sample in samples {
            writer.write_sample(*sample)?;
        }
        writer.finalize()?;
    }

    Ok(cursor.into_inner())
}
