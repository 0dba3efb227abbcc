//! Wavyform renders static waveform previews from audio samples.
//!
//! A long sample stream is reduced onto a fixed-width pixel grid: each pixel
//! column aggregates its window of samples into an envelope (min/max,
//! absolute peak or RMS energy) that is drawn as a vertical span. Layers are
//! then stacked on a [`Canvas`] and annotated with a highlighted time range,
//! a segment grid and numeric labels.
//!
//! # Pipeline overview
//!
//! 1. **Source**: any [`SampleSource`] (an in-memory [`SampleBuffer`], a
//!    [`SampleRange`] view, or a caller's own decoder)
//! 2. **Configure**: [`RenderOptions`] → [`RenderConfig`] (defaults filled in)
//! 3. **Extract**: [`render_minmax`], [`render_absmax`], [`render_rms`] →
//!    [`RasterLayer`]
//! 4. **Compose**: [`draw_layer`] onto a [`Canvas`], then [`highlight_range`],
//!    [`draw_segment_grid`] and [`draw_label`]
//!
//! Pixels are **premultiplied RGBA8** end to end; [`Canvas::to_rgba_image`]
//! converts to straight alpha for encoding.
//!
//! ```
//! use wavyform::{BlendMode, Canvas, RenderConfig, SampleBuffer, draw_layer, render_rms};
//!
//! let samples: Vec<f32> = (0..48_000).map(|i| (i as f32 * 0.01).sin() * 0.5).collect();
//! let source = SampleBuffer::mono(48_000, samples);
//! let config = RenderConfig::default().with_size(400, 100);
//!
//! let layer = render_rms(&source, 0, &config)?;
//! let mut canvas = Canvas::for_config(&config, 1.0);
//! draw_layer(&mut canvas, &layer, BlendMode::Over)?;
//! # Ok::<(), wavyform::WaveformError>(())
//! ```
#![forbid(unsafe_code)]

mod annotate;
mod config;
mod foundation;
mod render;
mod source;

pub use annotate::canvas::{
    BlendMode, Canvas, Checkerboard, draw_layer, fill_checkerboard, new_canvas,
};
pub use annotate::font::{ADVANCE as FONT_ADVANCE, measure as measure_label};
pub use annotate::overlay::{
    HighlightStyle, LABEL_THRESHOLD_PX, draw_label, draw_segment_grid, highlight_range,
    highlight_range_styled, segment_width, time_to_x,
};
pub use config::{
    DEFAULT_BACKGROUND, DEFAULT_FOREGROUND, DEFAULT_HEIGHT, DEFAULT_WIDTH, DEFAULT_ZOOM,
    RenderConfig, RenderOptions,
};
pub use foundation::core::{DrawArea, Margins, PremulRgba8, Rgba8};
pub use foundation::error::{WaveformError, WaveformResult};
pub use render::composite::{over, over_in_place};
pub use render::envelope::{
    AbsMax, EnvelopeExtractor, EnvelopeKind, EnvelopeSample, MinMax, Rms, WindowAccumulator,
    render_absmax, render_envelope, render_envelope_kind, render_minmax, render_rms,
};
pub use render::geometry::{ColumnWindows, column_window, column_windows, envelope_rows};
pub use render::pipeline::{LayerSpec, RenderThreading, render_layers};
pub use render::raster::RasterLayer;
pub use source::buffer::SampleBuffer;
pub use source::wav::read_wav;
pub use source::{SampleRange, SampleSource};
