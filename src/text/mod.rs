//! Pluggable text rendering.
//!
//! A [`Typeface`] turns [`FontOptions`] into a [`FontFace`], and the face rasterizes
//! strings onto a framebuffer. The drawing context only talks to these two traits, so
//! no particular font library is required. Two typefaces ship with the crate:
//!
//! - [`BitmapTypeface`]: a built-in 5×7 ASCII face scaled by whole pixels (the default).
//! - `OutlineTypeface`: TrueType/OpenType fonts through `fontdue` (feature `fontdue`).

mod bitmap;
#[cfg(feature = "fontdue")]
#[cfg_attr(docsrs, doc(cfg(feature = "fontdue")))]
mod outline;

use std::fmt;

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;

pub use bitmap::{BitmapFace, BitmapTypeface};
#[cfg(feature = "fontdue")]
pub use outline::{OutlineFace, OutlineTypeface, MAX_OUTLINE_PIXEL_SIZE};

/// Resolution at which one point equals one pixel.
pub const BASE_DPI: f32 = 72.0;

/// Size and resolution a face is built for.
///
/// Deserialized values go through [`FontOptions::new`], so invalid configs are rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawFontOptions"))]
pub struct FontOptions {
    size: f32,
    dpi: f32,
}

/// Unchecked wire form of [`FontOptions`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawFontOptions {
    size: f32,
    #[serde(default = "base_dpi")]
    dpi: f32,
}

#[cfg(feature = "serde")]
const fn base_dpi() -> f32 {
    BASE_DPI
}

#[cfg(feature = "serde")]
impl TryFrom<RawFontOptions> for FontOptions {
    type Error = Error;

    fn try_from(raw: RawFontOptions) -> Result<Self> {
        Self::new(raw.size, raw.dpi)
    }
}

impl Default for FontOptions {
    fn default() -> Self {
        Self {
            size: 10.0,
            dpi: BASE_DPI,
        }
    }
}

impl FontOptions {
    /// Create options for a point size at a given resolution.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFontOptions`] unless both values are finite and positive
    /// and their pixel size is finite.
    pub fn new(size: f32, dpi: f32) -> Result<Self> {
        let valid = size.is_finite()
            && size > 0.0
            && dpi.is_finite()
            && dpi > 0.0
            && (size * dpi / BASE_DPI).is_finite();
        if !valid {
            return Err(Error::InvalidFontOptions { size, dpi });
        }
        Ok(Self { size, dpi })
    }

    /// Same options with a different point size.
    pub fn with_size(self, size: f32) -> Result<Self> {
        Self::new(size, self.dpi)
    }

    /// Point size.
    #[must_use]
    pub const fn size(&self) -> f32 {
        self.size
    }

    /// Resolution in dots per inch.
    #[must_use]
    pub const fn dpi(&self) -> f32 {
        self.dpi
    }

    /// Em size in pixels.
    #[must_use]
    pub fn pixel_size(&self) -> f32 {
        self.size * self.dpi / BASE_DPI
    }
}

/// Vertical metrics of a face, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FaceMetrics {
    /// Distance from the baseline to the top of the tallest glyph.
    pub ascent: i32,
    /// Distance from the baseline to the bottom of the lowest descender.
    pub descent: i32,
    /// Baseline-to-baseline distance.
    pub line_height: i32,
}

/// A typeface configured for one size, able to rasterize text.
pub trait FontFace: fmt::Debug {
    /// Draw `text` with its pen origin (left end of the baseline) at `origin`.
    ///
    /// Returns the pen position after the last glyph.
    fn draw_text(&self, fb: &mut Framebuffer, origin: Point, color: Rgba, text: &str) -> Point;

    /// Horizontal advance of `text` in pixels.
    fn measure(&self, text: &str) -> i32;

    /// Vertical metrics.
    fn metrics(&self) -> FaceMetrics;
}

/// A font family that can produce faces.
pub trait Typeface: fmt::Debug {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// Build a face for the given options.
    fn build_face(&self, options: &FontOptions) -> Box<dyn FontFace>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_options() {
        let opts = FontOptions::default();
        assert_relative_eq!(opts.size(), 10.0);
        assert_relative_eq!(opts.dpi(), 72.0);
        assert_relative_eq!(opts.pixel_size(), 10.0);
    }

    #[test]
    fn test_pixel_size_scales_with_dpi() {
        let opts = FontOptions::new(12.0, 144.0).unwrap();
        assert_relative_eq!(opts.pixel_size(), 24.0);
    }

    #[test]
    fn test_with_size_keeps_dpi() {
        let opts = FontOptions::new(12.0, 96.0).unwrap().with_size(20.0).unwrap();
        assert_relative_eq!(opts.size(), 20.0);
        assert_relative_eq!(opts.dpi(), 96.0);
    }

    #[test]
    fn test_invalid_options() {
        assert!(FontOptions::new(0.0, 72.0).is_err());
        assert!(FontOptions::new(-3.0, 72.0).is_err());
        assert!(FontOptions::new(12.0, 0.0).is_err());
        assert!(FontOptions::new(f32::NAN, 72.0).is_err());
        assert!(FontOptions::new(12.0, f32::INFINITY).is_err());
        assert!(FontOptions::default().with_size(f32::NAN).is_err());
        assert!(FontOptions::new(f32::MAX, f32::MAX).is_err());
    }
}
