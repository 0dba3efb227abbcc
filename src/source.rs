pub(crate) mod buffer;
pub(crate) mod wav;

use crate::foundation::error::{WaveformError, WaveformResult};

/// Random-access audio samples, addressed by channel and frame offset.
///
/// Implementations must stay immutable for the duration of a render call.
/// Values are expected in `[-1.0, 1.0]`; nothing downstream enforces it, so
/// louder input simply draws a taller envelope that gets clamped to the canvas.
pub trait SampleSource {
    /// Number of frames along the time axis.
    fn total_samples(&self) -> u64;

    fn sample_rate(&self) -> u32;

    fn channel_count(&self) -> u16;

    /// Fails with [`WaveformError::OutOfRange`] when `offset >= total_samples()`
    /// or `channel >= channel_count()`.
    fn sample_at(&self, channel: u16, offset: u64) -> WaveformResult<f32>;

    fn duration_secs(&self) -> f64 {
        let rate = self.sample_rate();
        if rate == 0 {
            0.0
        } else {
            self.total_samples() as f64 / f64::from(rate)
        }
    }

    /// Restrict to frames `[start, end)`.
    fn slice(&self, start: u64, end: u64) -> WaveformResult<SampleRange<'_, Self>>
    where
        Self: Sized,
    {
        SampleRange::new(self, start, end)
    }

    /// Restrict to the time span `[t0, t1]` (seconds from the start of this source).
    fn slice_secs(&self, t0: f64, t1: f64) -> WaveformResult<SampleRange<'_, Self>>
    where
        Self: Sized,
    {
        let (start, end) = secs_to_frame_span(self, t0, t1)?;
        SampleRange::new(self, start, end)
    }
}

impl<S: SampleSource + ?Sized> SampleSource for &S {
    fn total_samples(&self) -> u64 {
        (**self).total_samples()
    }

    fn sample_rate(&self) -> u32 {
        (**self).sample_rate()
    }

    fn channel_count(&self) -> u16 {
        (**self).channel_count()
    }

    fn sample_at(&self, channel: u16, offset: u64) -> WaveformResult<f32> {
        (**self).sample_at(channel, offset)
    }
}

/// Borrowed view of a contiguous frame range of another source.
#[derive(Debug)]
pub struct SampleRange<'a, S: ?Sized> {
    source: &'a S,
    start: u64,
    end: u64,
}

impl<S: ?Sized> Clone for SampleRange<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for SampleRange<'_, S> {}

impl<'a, S: SampleSource + ?Sized> SampleRange<'a, S> {
    pub fn new(source: &'a S, start: u64, end: u64) -> WaveformResult<Self> {
        let total = source.total_samples();
        if end < start {
            return Err(WaveformError::invalid_range(format!(
                "slice end {end} < start {start}"
            )));
        }
        if end > total {
            return Err(WaveformError::invalid_range(format!(
                "slice end {end} exceeds total_samples {total}"
            )));
        }
        Ok(Self { source, start, end })
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }
}

impl<S: SampleSource + ?Sized> SampleSource for SampleRange<'_, S> {
    fn total_samples(&self) -> u64 {
        self.end - self.start
    }

    fn sample_rate(&self) -> u32 {
        self.source.sample_rate()
    }

    fn channel_count(&self) -> u16 {
        self.source.channel_count()
    }

    fn sample_at(&self, channel: u16, offset: u64) -> WaveformResult<f32> {
        if offset >= self.total_samples() || channel >= self.channel_count() {
            return Err(out_of_range(self, channel, offset));
        }
        self.source.sample_at(channel, self.start + offset)
    }
}

pub(crate) fn out_of_range<S: SampleSource + ?Sized>(
    source: &S,
    channel: u16,
    offset: u64,
) -> WaveformError {
    WaveformError::OutOfRange {
        channel,
        offset,
        total_samples: source.total_samples(),
        channel_count: source.channel_count(),
    }
}

fn secs_to_frame_span<S: SampleSource + ?Sized>(
    source: &S,
    t0: f64,
    t1: f64,
) -> WaveformResult<(u64, u64)> {
    let duration = source.duration_secs();
    if !t0.is_finite() || !t1.is_finite() {
        return Err(WaveformError::invalid_range("slice times must be finite"));
    }
    if t0 < 0.0 || t0 > duration {
        return Err(WaveformError::invalid_range(format!(
            "invalid start {t0:.2}s (duration: {duration:.2}s)"
        )));
    }
    if t1 > duration {
        return Err(WaveformError::invalid_range(format!(
            "invalid end {t1:.2}s (duration: {duration:.2}s)"
        )));
    }
    if t1 < t0 {
        return Err(WaveformError::invalid_range("end < start"));
    }

    let total = source.total_samples();
    if duration <= 0.0 {
        return Ok((0, 0));
    }
    let to_frame = |t: f64| ((t * total as f64 / duration).floor() as u64).min(total);
    Ok((to_frame(t0), to_frame(t1)))
}

#[cfg(test)]
#[path = "../tests/unit/source/range.rs"]
mod tests;
