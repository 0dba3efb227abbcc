use std::ops::Range;

use crate::{
    foundation::core::{PremulRgba8, Rgba8},
    render::composite::over,
};

/// A `width × height` grid of premultiplied RGBA8 pixels, row-major, top-left origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterLayer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterLayer {
    /// Allocate a layer with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: Rgba8) -> Self {
        let px = color.premultiplied();
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            data: px.repeat(len),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw premultiplied RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<PremulRgba8> {
        let idx = self.index(x, y)?;
        Some([
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ])
    }

    /// Overwrite a pixel; coordinates outside the layer are ignored.
    pub fn put(&mut self, x: i64, y: i64, px: PremulRgba8) {
        if let Some(idx) = self.signed_index(x, y) {
            self.data[idx..idx + 4].copy_from_slice(&px);
        }
    }

    /// Source-over a pixel; coordinates outside the layer are ignored.
    pub fn blend(&mut self, x: i64, y: i64, px: PremulRgba8) {
        if let Some(idx) = self.signed_index(x, y) {
            let dst = [
                self.data[idx],
                self.data[idx + 1],
                self.data[idx + 2],
                self.data[idx + 3],
            ];
            self.data[idx..idx + 4].copy_from_slice(&over(dst, px));
        }
    }

    /// Overwrite rows `rows` of column `x`, clamped to the layer.
    pub fn fill_column(&mut self, x: u32, rows: Range<u32>, px: PremulRgba8) {
        if x >= self.width {
            return;
        }
        let end = rows.end.min(self.height);
        for y in rows.start.min(end)..end {
            let idx = self.offset(x, y);
            self.data[idx..idx + 4].copy_from_slice(&px);
        }
    }

    /// Source-over `px` onto the rectangle `[x0, x1) × [y0, y1)`, clipped.
    pub fn blend_rect(&mut self, xs: Range<i64>, ys: Range<i64>, px: PremulRgba8) {
        let x0 = xs.start.max(0);
        let x1 = xs.end.min(i64::from(self.width));
        let y0 = ys.start.max(0);
        let y1 = ys.end.min(i64::from(self.height));
        for y in y0..y1 {
            for x in x0..x1 {
                self.blend(x, y, px);
            }
        }
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Straight-alpha copy for image encoders.
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        let mut straight = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            let c = Rgba8::from_premultiplied([px[0], px[1], px[2], px[3]]);
            straight.extend_from_slice(&[c.r, c.g, c.b, c.a]);
        }
        image::RgbaImage::from_raw(self.width, self.height, straight)
            .unwrap_or_else(|| image::RgbaImage::new(self.width, self.height))
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| self.offset(x, y))
    }

    fn signed_index(&self, x: i64, y: i64) -> Option<usize> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        self.index(x, y)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
