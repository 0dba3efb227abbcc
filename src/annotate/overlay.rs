use crate::{
    annotate::{
        canvas::Canvas,
        font::{draw_text, measure},
    },
    foundation::{
        core::{DrawArea, Rgba8},
        error::{WaveformError, WaveformResult},
    },
};

/// Minimum segment width, in pixels, for boundary labels and the ruler to be drawn.
pub const LABEL_THRESHOLD_PX: u32 = 50;

const STRIP_HEIGHT: u32 = 3;
const STRIP_EVEN: Rgba8 = Rgba8::gray(100);
const STRIP_ODD: Rgba8 = Rgba8::gray(200);
const TICK_LEN: u32 = 5;
const BOUNDARY_LABEL_DROP: i64 = 20;
const RANGE_LABEL_LIFT: i64 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HighlightStyle {
    /// Band color, normally translucent.
    pub fill: Rgba8,
    pub label: Rgba8,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            fill: Rgba8::new(50, 150, 150, 100),
            label: Rgba8::new(250, 150, 100, 220),
        }
    }
}

/// Draw `text` horizontally centered on `x`, baseline at `y`.
pub fn draw_label(canvas: &mut Canvas, color: Rgba8, x: i64, y: i64, text: &str) {
    let left = x - i64::from(measure(text) / 2);
    draw_text(canvas.pixels_mut(), color.premultiplied(), left, y, text);
}

/// Column offset (within the drawable area) of time `t`.
pub fn time_to_x(t: f64, duration_secs: f64, drawable_width: u32) -> i64 {
    (t * f64::from(drawable_width) / duration_secs).floor() as i64
}

/// Pixels per segment, `floor(drawable_width / (duration / seg))`, at least 1.
pub fn segment_width(drawable_width: u32, duration_secs: f64, seg_secs: f64) -> u32 {
    let segments = duration_secs / seg_secs;
    let tx = (f64::from(drawable_width) / segments).floor();
    if tx.is_finite() && tx >= 1.0 {
        tx.min(f64::from(u32::MAX)) as u32
    } else {
        1
    }
}

/// Shade `[t0, t1]` of the clip with `color` and label both bounds.
pub fn highlight_range(canvas: &mut Canvas, t0: f64, t1: f64, color: Rgba8) -> WaveformResult<()> {
    highlight_range_styled(
        canvas,
        t0,
        t1,
        &HighlightStyle {
            fill: color,
            ..HighlightStyle::default()
        },
    )
}

/// Like [`highlight_range`] with an explicit label color.
///
/// Fails with [`WaveformError::InvalidRange`] before touching any pixel when
/// the range is reversed, outside `[0, duration]`, or the canvas has no duration.
pub fn highlight_range_styled(
    canvas: &mut Canvas,
    t0: f64,
    t1: f64,
    style: &HighlightStyle,
) -> WaveformResult<()> {
    let duration = canvas.duration_secs();
    validate_range(t0, t1, duration)?;

    let area = canvas.draw_area();
    let x0 = time_to_x(t0, duration, area.width);
    let x1 = time_to_x(t1, duration, area.width);
    let (left, top) = (i64::from(area.x), i64::from(area.y));
    tracing::debug!(t0, t1, x0, x1, "highlight range");

    canvas.pixels_mut().blend_rect(
        left + x0..left + x1,
        top..top + i64::from(area.height),
        style.fill.premultiplied(),
    );

    let label_y = top - RANGE_LABEL_LIFT;
    draw_label(canvas, style.label, left + x0, label_y, &format!("{t0:.3}"));
    draw_label(canvas, style.label, left + x1, label_y, &format!("{t1:.3}"));
    Ok(())
}

fn validate_range(t0: f64, t1: f64, duration: f64) -> WaveformResult<()> {
    if !duration.is_finite() || duration <= 0.0 {
        return Err(WaveformError::invalid_range(
            "canvas has no clip duration to map times onto",
        ));
    }
    if !t0.is_finite() || !t1.is_finite() {
        return Err(WaveformError::invalid_range("range bounds must be finite"));
    }
    if t0 > t1 {
        return Err(WaveformError::invalid_range(format!(
            "range start {t0:.3}s > range end {t1:.3}s"
        )));
    }
    if t0 < 0.0 {
        return Err(WaveformError::invalid_range(format!(
            "range start {t0:.3}s is negative"
        )));
    }
    if t1 > duration {
        return Err(WaveformError::invalid_range(format!(
            "range end {t1:.3}s exceeds clip duration {duration:.3}s"
        )));
    }
    Ok(())
}

/// Segment ticks along the bottom of the drawable area, one tone flip per
/// `seg_secs`. Wide segments also get time labels and a left-edge ruler.
pub fn draw_segment_grid(canvas: &mut Canvas, seg_secs: f64, color: Rgba8) -> WaveformResult<()> {
    let duration = canvas.duration_secs();
    if !seg_secs.is_finite() || seg_secs <= 0.0 {
        return Err(WaveformError::invalid_range(format!(
            "segment length must be positive, got {seg_secs}"
        )));
    }
    if !duration.is_finite() || duration <= 0.0 {
        return Err(WaveformError::invalid_range(
            "canvas has no clip duration to segment",
        ));
    }

    let area = canvas.draw_area();
    if area.is_empty() {
        return Ok(());
    }
    let tx = segment_width(area.width, duration, seg_secs);
    tracing::debug!(seg_secs, tx, labelled = tx > LABEL_THRESHOLD_PX, "segment grid");

    draw_tick_strip(canvas, area, tx);
    if tx > LABEL_THRESHOLD_PX {
        draw_boundaries(canvas, area, tx, seg_secs, color);
        draw_ruler(canvas, area, color);
    }
    Ok(())
}

fn draw_tick_strip(canvas: &mut Canvas, area: DrawArea, tx: u32) {
    let even = STRIP_EVEN.premultiplied();
    let odd = STRIP_ODD.premultiplied();
    let rows = area.height.saturating_sub(STRIP_HEIGHT)..area.height;
    let pixels = canvas.pixels_mut();
    for x in 0..area.width {
        let px = if (x / tx) % 2 != 0 { odd } else { even };
        for y in rows.clone() {
            pixels.put(i64::from(area.x + x), i64::from(area.y + y), px);
        }
    }
}

fn draw_boundaries(canvas: &mut Canvas, area: DrawArea, tx: u32, seg_secs: f64, color: Rgba8) {
    let px = color.premultiplied();
    let bottom = i64::from(area.y) + i64::from(area.height);
    let mut x = 0u32;
    let mut n = 0u32;
    while x <= area.width {
        let at = i64::from(area.x) + i64::from(x);
        let t = f64::from(n) * seg_secs;
        draw_label(canvas, color, at, bottom + BOUNDARY_LABEL_DROP, &format!("{t:.3}"));
        for y in 0..i64::from(TICK_LEN) {
            canvas.pixels_mut().put(at, bottom + y, px);
        }
        let Some(next) = x.checked_add(tx) else {
            break;
        };
        x = next;
        n += 1;
    }
}

fn draw_ruler(canvas: &mut Canvas, area: DrawArea, color: Rgba8) {
    let px = color.premultiplied();
    let (left, top) = (i64::from(area.x), i64::from(area.y));
    let decile = i64::from(area.height / 10);
    let pixels = canvas.pixels_mut();
    for y in -1..=i64::from(area.height) {
        pixels.put(left, top + y, px);
        if decile > 0 && (y + 1) % decile == 0 {
            for x in 0..i64::from(TICK_LEN) {
                pixels.put(left - x, top + y, px);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/annotate/overlay.rs"]
mod tests;
