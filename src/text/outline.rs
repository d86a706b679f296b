//! TrueType/OpenType typefaces rasterized with `fontdue`.

use std::fmt;
use std::sync::Arc;

use fontdue::{Font, FontSettings};

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;

use super::{FaceMetrics, FontFace, FontOptions, Typeface};

/// Largest em size an outline face rasterizes at; glyph bitmaps grow with its square.
pub const MAX_OUTLINE_PIXEL_SIZE: f32 = 2048.0;

/// A parsed outline font.
#[derive(Clone)]
pub struct OutlineTypeface {
    name: String,
    font: Arc<Font>,
}

impl OutlineTypeface {
    /// Parse font file contents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Font`] if the data is not a usable TrueType/OpenType font.
    pub fn from_bytes(name: impl Into<String>, data: &[u8]) -> Result<Self> {
        let font = Font::from_bytes(data, FontSettings::default())
            .map_err(|e| Error::Font(e.to_string()))?;
        Ok(Self {
            name: name.into(),
            font: Arc::new(font),
        })
    }
}

impl fmt::Debug for OutlineTypeface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutlineTypeface")
            .field("name", &self.name)
            .field("glyphs", &self.font.glyph_count())
            .finish()
    }
}

impl Typeface for OutlineTypeface {
    fn name(&self) -> &str {
        &self.name
    }

    fn build_face(&self, options: &FontOptions) -> Box<dyn FontFace> {
        let requested = options.pixel_size();
        let px = requested.min(MAX_OUTLINE_PIXEL_SIZE);
        if px < requested {
            log::warn!("{}: {requested}px clamped to {px}px", self.name);
        }
        Box::new(OutlineFace {
            font: Arc::clone(&self.font),
            px,
        })
    }
}

/// An outline font at one pixel size.
#[derive(Clone)]
pub struct OutlineFace {
    font: Arc<Font>,
    px: f32,
}

impl fmt::Debug for OutlineFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutlineFace").field("px", &self.px).finish()
    }
}

impl FontFace for OutlineFace {
    fn draw_text(&self, fb: &mut Framebuffer, origin: Point, color: Rgba, text: &str) -> Point {
        let mut pen_x = origin.x as f32;

        for ch in text.chars() {
            let (metrics, coverage) = self.font.rasterize(ch, self.px);
            // fontdue places ymin relative to the baseline, y up
            let left = (pen_x.round() as i32).saturating_add(metrics.xmin);
            let top = origin
                .y
                .saturating_sub(metrics.ymin)
                .saturating_sub(metrics.height as i32);

            for (i, &alpha) in coverage.iter().enumerate() {
                if alpha == 0 {
                    continue;
                }
                let col = (i % metrics.width) as i32;
                let row = (i / metrics.width) as i32;
                fb.blend_pixel(
                    left.saturating_add(col),
                    top.saturating_add(row),
                    color.with_coverage(f32::from(alpha) / 255.0),
                );
            }

            pen_x += metrics.advance_width;
        }

        Point::new(pen_x.round() as i32, origin.y)
    }

    fn measure(&self, text: &str) -> i32 {
        text.chars()
            .map(|ch| self.font.metrics(ch, self.px).advance_width)
            .sum::<f32>()
            .round() as i32
    }

    fn metrics(&self) -> FaceMetrics {
        self.font
            .horizontal_line_metrics(self.px)
            .map(|m| FaceMetrics {
                ascent: m.ascent.ceil() as i32,
                descent: (-m.descent).ceil() as i32,
                line_height: m.new_line_size.ceil() as i32,
            })
            .unwrap_or_default()
    }
}
