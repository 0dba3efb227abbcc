use crate::{
    config::RenderConfig,
    foundation::{
        core::{DrawArea, Margins, PremulRgba8, Rgba8},
        error::WaveformResult,
    },
    render::{composite::over_in_place, raster::RasterLayer},
};

/// Composite target: a raster plus the frame geometry overlays are laid out against.
///
/// `duration_secs` is the length of the clip spanning the drawable width; the
/// time-based overlays refuse to draw while it is zero.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    pixels: RasterLayer,
    margins: Margins,
    duration_secs: f64,
}

/// Transparent canvas without margins or duration.
pub fn new_canvas(width: u32, height: u32) -> Canvas {
    Canvas::new(width, height)
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RasterLayer::filled(width, height, Rgba8::TRANSPARENT),
            margins: Margins::default(),
            duration_secs: 0.0,
        }
    }

    /// Canvas sized and framed like the layers rendered from `config`.
    pub fn for_config(config: &RenderConfig, duration_secs: f64) -> Self {
        Self::new(config.width, config.height)
            .with_margins(config.margins)
            .with_duration(duration_secs)
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn with_duration(mut self, duration_secs: f64) -> Self {
        self.duration_secs = duration_secs;
        self
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    pub fn draw_area(&self) -> DrawArea {
        DrawArea::within(self.width(), self.height(), self.margins)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<PremulRgba8> {
        self.pixels.pixel(x, y)
    }

    pub fn pixels(&self) -> &RasterLayer {
        &self.pixels
    }

    pub fn to_rgba_image(&self) -> image::RgbaImage {
        self.pixels.to_rgba_image()
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut RasterLayer {
        &mut self.pixels
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// Premultiplied source-over.
    #[default]
    Over,
    /// Copy source pixels, alpha included.
    Replace,
}

/// Draw `layer` at the canvas origin. Only the overlapping region is touched.
pub fn draw_layer(
    canvas: &mut Canvas,
    layer: &RasterLayer,
    blend: BlendMode,
) -> WaveformResult<()> {
    let w = canvas.width().min(layer.width()) as usize;
    let h = canvas.height().min(layer.height()) as usize;
    let dst_stride = canvas.width() as usize * 4;
    let src_stride = layer.width() as usize * 4;

    let dst = canvas.pixels_mut().data_mut();
    for y in 0..h {
        let d = &mut dst[y * dst_stride..y * dst_stride + w * 4];
        let s = &layer.data()[y * src_stride..y * src_stride + w * 4];
        match blend {
            BlendMode::Over => over_in_place(d, s)?,
            BlendMode::Replace => d.copy_from_slice(s),
        }
    }
    Ok(())
}

/// Two-tone square tiling used behind layers with transparent backgrounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Checkerboard {
    pub tile: u32,
    /// Tiles where `(col + row)` is even.
    pub even: Rgba8,
    pub odd: Rgba8,
}

impl Default for Checkerboard {
    fn default() -> Self {
        Self {
            tile: 10,
            even: Rgba8::gray(30),
            odd: Rgba8::gray(20),
        }
    }
}

/// Overwrite every pixel with the checkerboard.
pub fn fill_checkerboard(canvas: &mut Canvas, pattern: &Checkerboard) {
    let tile = pattern.tile.max(1);
    let even = pattern.even.premultiplied();
    let odd = pattern.odd.premultiplied();
    let (w, h) = (canvas.width(), canvas.height());
    let pixels = canvas.pixels_mut();
    for y in 0..h {
        for x in 0..w {
            let px = if (x / tile + y / tile).is_multiple_of(2) {
                even
            } else {
                odd
            };
            pixels.put(i64::from(x), i64::from(y), px);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/annotate/canvas.rs"]
mod tests;
