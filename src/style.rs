//! Drawing style configuration.

use crate::color::Rgba;

/// Colors used by a drawing context.
///
/// A `Style` is an immutable value; the context replaces it wholesale whenever a color
/// changes, so a drawing call always sees one consistent set of colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Style {
    /// Outline color for dots, lines and shape borders.
    pub pen: Rgba,
    /// Interior color for rectangles and polygons.
    pub fill: Rgba,
    /// Glyph color for text.
    pub text: Rgba,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            pen: Rgba::BLACK,
            fill: Rgba::TRANSPARENT,
            text: Rgba::BLACK,
        }
    }
}

impl Style {
    /// Same style with a different pen color.
    #[must_use]
    pub const fn with_pen(self, pen: Rgba) -> Self {
        Self { pen, ..self }
    }

    /// Same style with a different fill color.
    #[must_use]
    pub const fn with_fill(self, fill: Rgba) -> Self {
        Self { fill, ..self }
    }

    /// Same style with a different text color.
    #[must_use]
    pub const fn with_text(self, text: Rgba) -> Self {
        Self { text, ..self }
    }

    /// Whether outlines are drawn.
    #[must_use]
    pub fn strokes(&self) -> bool {
        !self.pen.is_transparent()
    }

    /// Whether interiors are filled.
    #[must_use]
    pub fn fills(&self) -> bool {
        !self.fill.is_transparent()
    }
}
