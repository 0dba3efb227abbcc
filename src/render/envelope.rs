use crate::{
    config::RenderConfig,
    foundation::error::{WaveformError, WaveformResult},
    render::{
        geometry::{column_windows, envelope_rows},
        raster::RasterLayer,
    },
    source::{SampleSource, out_of_range},
};

/// Per-column amplitude summary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EnvelopeSample {
    /// Signed extrema of the window.
    Peaks { low: f32, high: f32 },
    /// Unsigned level in `[0, 1]`.
    Magnitude(f32),
}

impl EnvelopeSample {
    /// Half-extent driving the drawn span.
    pub fn extent(self) -> f32 {
        match self {
            Self::Peaks { low, high } => low.abs().max(high.abs()),
            Self::Magnitude(m) => m,
        }
    }
}

/// Running reduction of one column window, fed one sample at a time.
pub trait WindowAccumulator {
    /// Drop everything pushed since the last reset.
    fn reset(&mut self);

    fn push(&mut self, sample: f32);

    /// Only meaningful after at least one [`push`](Self::push).
    fn finish(&self) -> EnvelopeSample;
}

/// Reduces a column window of raw samples to an [`EnvelopeSample`].
///
/// Implementations only aggregate; [`render_envelope`] owns geometry and pixels.
/// Windows are streamed through an accumulator; nothing is buffered per column.
pub trait EnvelopeExtractor: Send + Sync {
    fn name(&self) -> &'static str;

    fn accumulator(&self) -> Box<dyn WindowAccumulator>;

    /// Reduce an in-memory window. `window` must not be empty.
    fn sample(&self, window: &[f32]) -> EnvelopeSample {
        let mut acc = self.accumulator();
        for &s in window {
            acc.push(s);
        }
        acc.finish()
    }
}

/// Signed min/max of each window.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinMax;

/// Largest absolute sample of each window.
#[derive(Clone, Copy, Debug, Default)]
pub struct AbsMax;

/// Root-mean-square energy of each window.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rms;

struct PeakWindow {
    low: f32,
    high: f32,
}

impl WindowAccumulator for PeakWindow {
    fn reset(&mut self) {
        self.low = f32::INFINITY;
        self.high = f32::NEG_INFINITY;
    }

    fn push(&mut self, sample: f32) {
        self.low = self.low.min(sample);
        self.high = self.high.max(sample);
    }

    fn finish(&self) -> EnvelopeSample {
        EnvelopeSample::Peaks {
            low: self.low,
            high: self.high,
        }
    }
}

#[derive(Default)]
struct AbsPeakWindow {
    peak: f32,
}

impl WindowAccumulator for AbsPeakWindow {
    fn reset(&mut self) {
        self.peak = 0.0;
    }

    fn push(&mut self, sample: f32) {
        self.peak = self.peak.max(sample.abs());
    }

    fn finish(&self) -> EnvelopeSample {
        EnvelopeSample::Magnitude(self.peak)
    }
}

// Squares accumulate in f64.
#[derive(Default)]
struct EnergyWindow {
    sum_sq: f64,
    count: u64,
}

impl WindowAccumulator for EnergyWindow {
    fn reset(&mut self) {
        self.sum_sq = 0.0;
        self.count = 0;
    }

    fn push(&mut self, sample: f32) {
        self.sum_sq += f64::from(sample) * f64::from(sample);
        self.count += 1;
    }

    fn finish(&self) -> EnvelopeSample {
        if self.count == 0 {
            return EnvelopeSample::Magnitude(0.0);
        }
        EnvelopeSample::Magnitude((self.sum_sq / self.count as f64).sqrt() as f32)
    }
}

impl EnvelopeExtractor for MinMax {
    fn name(&self) -> &'static str {
        "minmax"
    }

    fn accumulator(&self) -> Box<dyn WindowAccumulator> {
        Box::new(PeakWindow {
            low: f32::INFINITY,
            high: f32::NEG_INFINITY,
        })
    }
}

impl EnvelopeExtractor for AbsMax {
    fn name(&self) -> &'static str {
        "absmax"
    }

    fn accumulator(&self) -> Box<dyn WindowAccumulator> {
        Box::new(AbsPeakWindow::default())
    }
}

impl EnvelopeExtractor for Rms {
    fn name(&self) -> &'static str {
        "rms"
    }

    fn accumulator(&self) -> Box<dyn WindowAccumulator> {
        Box::new(EnergyWindow::default())
    }
}

/// Selects one of the built-in extractors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnvelopeKind {
    MinMax,
    AbsMax,
    Rms,
}

impl EnvelopeKind {
    pub fn extractor(self) -> &'static dyn EnvelopeExtractor {
        match self {
            Self::MinMax => &MinMax,
            Self::AbsMax => &AbsMax,
            Self::Rms => &Rms,
        }
    }
}

/// Rasterize one channel of `source` with `extractor`.
///
/// Columns whose window is empty, or whose span rounds to nothing, stay
/// background. A sample lookup failing inside a computed window means the
/// column geometry is wrong and surfaces as
/// [`WaveformError::InternalInvariantViolation`].
#[tracing::instrument(
    skip_all,
    fields(
        extractor = extractor.name(),
        channel = channel,
        width = config.width,
        height = config.height
    )
)]
pub fn render_envelope<S: SampleSource + ?Sized>(
    extractor: &dyn EnvelopeExtractor,
    source: &S,
    channel: u16,
    config: &RenderConfig,
) -> WaveformResult<RasterLayer> {
    if channel >= source.channel_count() {
        return Err(out_of_range(source, channel, 0));
    }

    let mut layer = RasterLayer::filled(config.width, config.height, config.background);
    let area = config.draw_area();
    if area.is_empty() {
        return Ok(layer);
    }

    let total = source.total_samples();
    let fg = config.foreground.premultiplied();
    let mut acc = extractor.accumulator();
    let mut drawn = 0u32;

    for (x, span) in column_windows(total, area.width) {
        if span.is_empty() {
            continue;
        }

        acc.reset();
        for offset in span.clone() {
            let v = source.sample_at(channel, offset).map_err(|e| match e {
                WaveformError::OutOfRange { .. } => WaveformError::invariant(format!(
                    "column {x} window {}..{} escaped the source: {e}",
                    span.start, span.end
                )),
                other => other,
            })?;
            acc.push(v);
        }

        let extent = acc.finish().extent();
        let rows = envelope_rows(extent, config.zoom, area.height, config.mirrored);
        if rows.is_empty() {
            continue;
        }
        layer.fill_column(area.x + x, area.y + rows.start..area.y + rows.end, fg);
        drawn += 1;
    }

    tracing::debug!(total_samples = total, columns = area.width, drawn, "envelope rendered");
    Ok(layer)
}

pub fn render_minmax<S: SampleSource + ?Sized>(
    source: &S,
    channel: u16,
    config: &RenderConfig,
) -> WaveformResult<RasterLayer> {
    render_envelope(&MinMax, source, channel, config)
}

pub fn render_absmax<S: SampleSource + ?Sized>(
    source: &S,
    channel: u16,
    config: &RenderConfig,
) -> WaveformResult<RasterLayer> {
    render_envelope(&AbsMax, source, channel, config)
}

pub fn render_rms<S: SampleSource + ?Sized>(
    source: &S,
    channel: u16,
    config: &RenderConfig,
) -> WaveformResult<RasterLayer> {
    render_envelope(&Rms, source, channel, config)
}

pub fn render_envelope_kind<S: SampleSource + ?Sized>(
    kind: EnvelopeKind,
    source: &S,
    channel: u16,
    config: &RenderConfig,
) -> WaveformResult<RasterLayer> {
    render_envelope(kind.extractor(), source, channel, config)
}

#[cfg(test)]
#[path = "../../tests/unit/render/envelope.rs"]
mod tests;
