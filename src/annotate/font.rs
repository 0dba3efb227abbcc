//! Fixed-width 8×8 bitmap labels backed by the `font8x8` Basic Latin set.
//!
//! Characters outside that set render as `?`.

use font8x8::{BASIC_FONTS, UnicodeFonts as _};

use crate::{foundation::core::PremulRgba8, render::raster::RasterLayer};

/// Horizontal distance between consecutive glyph origins.
pub const ADVANCE: u32 = 8;
/// Glyphs sit on the baseline and extend this many rows above it.
pub const GLYPH_HEIGHT: u32 = 8;

// Rows top to bottom, bit 0 = leftmost column.
type Glyph = [u8; 8];

fn glyph(c: char) -> Glyph {
    BASIC_FONTS
        .get(c)
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

/// Width in pixels `text` occupies when drawn.
pub fn measure(text: &str) -> u32 {
    (text.chars().count() as u32).saturating_mul(ADVANCE)
}

/// Blend `text` starting at `x` with its baseline on row `baseline`. Clipped.
pub(crate) fn draw_text(
    pixels: &mut RasterLayer,
    color: PremulRgba8,
    x: i64,
    baseline: i64,
    text: &str,
) {
    let top = baseline - i64::from(GLYPH_HEIGHT);
    for (i, c) in text.chars().enumerate() {
        let origin = x + (i as i64) * i64::from(ADVANCE);
        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..8 {
                if bits & (1 << col) != 0 {
                    pixels.blend(origin + col, top + row as i64, color);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/annotate/font.rs"]
mod tests;
