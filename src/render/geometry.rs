//! Column-to-sample and amplitude-to-row mapping shared by every extractor.

use std::ops::Range;

/// Half-open sample window assigned to pixel column `x`.
///
/// `start(x) = floor(x * total / width)`, `end(x) = floor((x + 1) * total / width)`.
/// Windows tile `[0, total)` exactly. Empty when `width > total` leaves a
/// column without samples.
pub fn column_window(total_samples: u64, width: u32, x: u32) -> Range<u64> {
    if width == 0 || x >= width {
        return total_samples..total_samples;
    }
    let at = |col: u32| -> u64 {
        ((u128::from(col) * u128::from(total_samples)) / u128::from(width)) as u64
    };
    at(x)..at(x + 1)
}

/// Iterator over `(x, window)` for every column of a `width`-pixel area.
pub fn column_windows(total_samples: u64, width: u32) -> ColumnWindows {
    ColumnWindows {
        total_samples,
        width,
        x: 0,
    }
}

#[derive(Clone, Debug)]
pub struct ColumnWindows {
    total_samples: u64,
    width: u32,
    x: u32,
}

impl Iterator for ColumnWindows {
    type Item = (u32, Range<u64>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.x >= self.width {
            return None;
        }
        let x = self.x;
        self.x += 1;
        Some((x, column_window(self.total_samples, self.width, x)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.width - self.x) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for ColumnWindows {}

/// Rows of a `height`-pixel area covered by an envelope of the given extent.
///
/// With `H = extent * zoom`, the span is `[c - H*h/2, c + H*h/2)` around the
/// center `c = h/2`, or `[h - H*h/2, h)` when mirrored. Bounds are floored and
/// clamped to `[0, height)`.
pub fn envelope_rows(extent: f32, zoom: f32, height: u32, mirrored: bool) -> Range<u32> {
    let reach = f64::from(extent) * f64::from(zoom);
    if reach.is_nan() || reach <= 0.0 {
        return 0..0;
    }

    let h = f64::from(height);
    let half = reach * h / 2.0;
    let (top, bottom) = if mirrored {
        (h - half, h)
    } else {
        let c = h / 2.0;
        (c - half, c + half)
    };

    let clamp_row = |v: f64| v.floor().clamp(0.0, h) as u32;
    let (top, bottom) = (clamp_row(top), clamp_row(bottom));
    if top >= bottom { top..top } else { top..bottom }
}

#[cfg(test)]
#[path = "../../tests/unit/render/geometry.rs"]
mod tests;
