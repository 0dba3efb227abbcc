use crate::{
    foundation::error::{WaveformError, WaveformResult},
    source::{SampleSource, out_of_range},
};

/// Owned PCM, interleaved `f32` frames.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleBuffer {
    sample_rate: u32,
    channels: u16,
    interleaved: Vec<f32>,
}

impl SampleBuffer {
    pub fn new(sample_rate: u32, channels: u16, interleaved: Vec<f32>) -> WaveformResult<Self> {
        if channels == 0 {
            return Err(WaveformError::validation("sample buffer needs at least one channel"));
        }
        if !interleaved.len().is_multiple_of(usize::from(channels)) {
            return Err(WaveformError::validation(format!(
                "interleaved length {} is not a multiple of {channels} channels",
                interleaved.len()
            )));
        }
        Ok(Self {
            sample_rate,
            channels,
            interleaved,
        })
    }

    /// Single-channel buffer.
    pub fn mono(sample_rate: u32, samples: Vec<f32>) -> Self {
        Self {
            sample_rate,
            channels: 1,
            interleaved: samples,
        }
    }

    pub fn interleaved(&self) -> &[f32] {
        &self.interleaved
    }

    /// Copy one channel out as a contiguous vector.
    pub fn channel(&self, channel: u16) -> WaveformResult<Vec<f32>> {
        if channel >= self.channels {
            return Err(out_of_range(self, channel, 0));
        }
        Ok(self
            .interleaved
            .iter()
            .skip(usize::from(channel))
            .step_by(usize::from(self.channels))
            .copied()
            .collect())
    }
}

impl SampleSource for SampleBuffer {
    fn total_samples(&self) -> u64 {
        (self.interleaved.len() / usize::from(self.channels)) as u64
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn channel_count(&self) -> u16 {
        self.channels
    }

    fn sample_at(&self, channel: u16, offset: u64) -> WaveformResult<f32> {
        if channel >= self.channels || offset >= self.total_samples() {
            return Err(out_of_range(self, channel, offset));
        }
        let idx = offset as usize * usize::from(self.channels) + usize::from(channel);
        Ok(self.interleaved[idx])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/buffer.rs"]
mod tests;
