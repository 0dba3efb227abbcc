/// Premultiplied RGBA8 pixel (r,g,b already multiplied by a).
pub type PremulRgba8 = [u8; 4];

/// Straight (non-premultiplied) RGBA8 color, as supplied by callers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v, 255)
    }

    pub fn premultiplied(self) -> PremulRgba8 {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        [
            premul(self.r, self.a),
            premul(self.g, self.a),
            premul(self.b, self.a),
            self.a,
        ]
    }

    pub fn from_premultiplied(px: PremulRgba8) -> Self {
        let a = px[3];
        if a == 0 {
            return Self::TRANSPARENT;
        }
        let unpremul = |c: u8| -> u8 {
            let v = (u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a);
            v.min(255) as u8
        };
        Self::new(unpremul(px[0]), unpremul(px[1]), unpremul(px[2]), a)
    }
}

/// Reserved border around the drawable area, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Margins {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Margins {
    pub const fn uniform(px: u32) -> Self {
        Self {
            left: px,
            right: px,
            top: px,
            bottom: px,
        }
    }

    pub fn horizontal(self) -> u32 {
        self.left.saturating_add(self.right)
    }

    pub fn vertical(self) -> u32 {
        self.top.saturating_add(self.bottom)
    }
}

/// The part of a canvas left over once margins are removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawArea {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl DrawArea {
    pub fn within(width: u32, height: u32, margins: Margins) -> Self {
        let x = margins.left.min(width);
        let y = margins.top.min(height);
        Self {
            x,
            y,
            width: width.saturating_sub(margins.horizontal()),
            height: height.saturating_sub(margins.vertical()),
        }
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
