use crate::foundation::{
    core::{DrawArea, Margins, Rgba8},
    error::{WaveformError, WaveformResult},
};

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 250;
pub const DEFAULT_ZOOM: f32 = 1.0;
pub const DEFAULT_FOREGROUND: Rgba8 = Rgba8::WHITE;
pub const DEFAULT_BACKGROUND: Rgba8 = Rgba8::BLACK;

/// Partially specified rendering options. Anything left `None` falls back to
/// the documented default when normalized.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// `0.0` counts as unset.
    pub zoom: Option<f32>,
    pub mirrored: Option<bool>,
    pub margins: Option<Margins>,
    pub foreground: Option<Rgba8>,
    pub background: Option<Rgba8>,
}

impl RenderOptions {
    pub fn from_json_str(s: &str) -> WaveformResult<Self> {
        serde_json::from_str(s).map_err(|e| WaveformError::serde(e.to_string()))
    }

    pub fn normalize(&self) -> RenderConfig {
        RenderConfig::from_options(Some(self))
    }

    /// Fields set on `other` win.
    pub fn merged_with(&self, other: &RenderOptions) -> RenderOptions {
        RenderOptions {
            width: other.width.or(self.width),
            height: other.height.or(self.height),
            zoom: other.zoom.or(self.zoom),
            mirrored: other.mirrored.or(self.mirrored),
            margins: other.margins.or(self.margins),
            foreground: other.foreground.or(self.foreground),
            background: other.background.or(self.background),
        }
    }
}

/// Fully populated, immutable rendering configuration.
///
/// Deserializes through [`RenderOptions`], so serialized configs get the same
/// defaulting as user options.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "RenderOptions")]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub zoom: f32,
    pub mirrored: bool,
    pub margins: Margins,
    pub foreground: Rgba8,
    pub background: Rgba8,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            zoom: DEFAULT_ZOOM,
            mirrored: false,
            margins: Margins::default(),
            foreground: DEFAULT_FOREGROUND,
            background: DEFAULT_BACKGROUND,
        }
    }
}

impl From<RenderOptions> for RenderConfig {
    fn from(options: RenderOptions) -> Self {
        Self::from_options(Some(&options))
    }
}

impl RenderConfig {
    /// Fill every unset field with its default. Never fails.
    pub fn from_options(options: Option<&RenderOptions>) -> Self {
        let mut cfg = Self::default();
        let Some(o) = options else {
            return cfg;
        };

        if let Some(w) = o.width.filter(|&w| w > 0) {
            cfg.width = w;
        }
        if let Some(h) = o.height.filter(|&h| h > 0) {
            cfg.height = h;
        }
        if let Some(z) = o.zoom.filter(|z| z.is_finite() && *z > 0.0) {
            cfg.zoom = z;
        }
        if let Some(m) = o.mirrored {
            cfg.mirrored = m;
        }
        if let Some(m) = o.margins {
            cfg.margins = m;
        }
        if let Some(c) = o.foreground {
            cfg.foreground = c;
        }
        if let Some(c) = o.background {
            cfg.background = c;
        }
        cfg
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        if width > 0 {
            self.width = width;
        }
        if height > 0 {
            self.height = height;
        }
        self
    }

    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = if zoom.is_finite() && zoom > 0.0 {
            zoom
        } else {
            DEFAULT_ZOOM
        };
        self
    }

    pub fn with_mirrored(mut self, mirrored: bool) -> Self {
        self.mirrored = mirrored;
        self
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn with_colors(mut self, foreground: Rgba8, background: Rgba8) -> Self {
        self.foreground = foreground;
        self.background = background;
        self
    }

    /// Region the envelope is drawn into.
    pub fn draw_area(&self) -> DrawArea {
        DrawArea::within(self.width, self.height, self.margins)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
