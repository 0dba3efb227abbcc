use std::{io::Read, path::Path};

use crate::{
    foundation::error::{WaveformError, WaveformResult},
    source::buffer::SampleBuffer,
};

/// Decode a WAV file into normalized interleaved `f32` frames.
pub fn read_wav(path: &Path) -> WaveformResult<SampleBuffer> {
    let reader = hound::WavReader::open(path)
        .map_err(|e| WaveformError::decode(format!("open wav '{}': {e}", path.display())))?;
    decode(reader)
}

impl SampleBuffer {
    /// Decode WAV data from any reader. Integer PCM is scaled by its bit depth.
    pub fn from_wav_reader<R: Read>(reader: R) -> WaveformResult<Self> {
        let reader =
            hound::WavReader::new(reader).map_err(|e| WaveformError::decode(e.to_string()))?;
        decode(reader)
    }
}

fn decode<R: Read>(mut reader: hound::WavReader<R>) -> WaveformResult<SampleBuffer> {
    let spec = reader.spec();
    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<Result<_, _>>()
            .map_err(|e| WaveformError::decode(e.to_string()))?,
        hound::SampleFormat::Int => {
            if spec.bits_per_sample == 0 || spec.bits_per_sample > 32 {
                return Err(WaveformError::decode(format!(
                    "unsupported bit depth {}",
                    spec.bits_per_sample
                )));
            }
            let scale = (1u64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<Result<_, _>>()
                .map_err(|e| WaveformError::decode(e.to_string()))?
        }
    };

    tracing::debug!(
        sample_rate = spec.sample_rate,
        channels = spec.channels,
        bits = spec.bits_per_sample,
        values = interleaved.len(),
        "decoded wav"
    );

    SampleBuffer::new(spec.sample_rate, spec.channels, interleaved)
}

#[cfg(test)]
#[path = "../../tests/unit/source/wav.rs"]
mod tests;
