//! The drawing context: style state bound to one framebuffer.
//!
//! Every call draws immediately; there is no retained scene or commit step. Changing a
//! color or font only affects calls made afterwards.
//!
//! # Conventions
//!
//! - [`Context::line`] and [`Context::path`] are half-open: the higher endpoint along
//!   the dominant axis is not plotted, so chained segments meet without overdraw.
//! - [`Context::rect`] and [`Context::cross`] are inclusive of their extents.
//! - [`Context::rect`] and [`Context::polygon`] skip their outline phase when the pen is
//!   [`Rgba::TRANSPARENT`] and their fill phase when the fill is. Single-pixel primitives
//!   write the pen color as-is.

use std::fmt;
use std::sync::Arc;

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{dedup_points, Bounds, Point};
use crate::render::{fill_polygon, is_in_polygon, LinePixels, Parabola};
use crate::shapes::Drawable;
use crate::style::Style;
use crate::text::{BitmapTypeface, FontFace, FontOptions, Typeface};

/// Drawing state bound to one framebuffer.
///
/// # Example
///
/// ```
/// use pixel_overlay::prelude::*;
///
/// let mut fb = Framebuffer::with_background(32, 32, Rgba::WHITE).unwrap();
/// let mut ctx = Context::new(&mut fb);
/// ctx.set_pen(Rgba::RED);
/// ctx.cross(16, 16, 4);
/// assert_eq!(fb.get_pixel(16, 20), Some(Rgba::RED));
/// ```
pub struct Context<'a> {
    fb: &'a mut Framebuffer,
    style: Style,
    typeface: Arc<dyn Typeface>,
    font_options: FontOptions,
    face: Box<dyn FontFace>,
}

impl fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("width", &self.fb.width())
            .field("height", &self.fb.height())
            .field("style", &self.style)
            .field("typeface", &self.typeface.name())
            .field("font_options", &self.font_options)
            .finish_non_exhaustive()
    }
}

impl<'a> Context<'a> {
    /// Bind a context with the default style and the built-in bitmap font.
    pub fn new(fb: &'a mut Framebuffer) -> Self {
        Self::with_style(fb, Style::default())
    }

    /// Bind a context with an explicit style.
    pub fn with_style(fb: &'a mut Framebuffer, style: Style) -> Self {
        let typeface: Arc<dyn Typeface> = Arc::new(BitmapTypeface);
        let font_options = FontOptions::default();
        let face = typeface.build_face(&font_options);
        Self {
            fb,
            style,
            typeface,
            font_options,
            face,
        }
    }

    // ========================================================================
    // Surface
    // ========================================================================

    /// The bound framebuffer.
    #[must_use]
    pub fn surface(&self) -> &Framebuffer {
        &*self.fb
    }

    /// The bound framebuffer, mutably.
    pub fn surface_mut(&mut self) -> &mut Framebuffer {
        &mut *self.fb
    }

    /// Bounds of the bound framebuffer.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.fb.bounds()
    }

    // ========================================================================
    // Style
    // ========================================================================

    /// Current colors.
    #[must_use]
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Replace all colors at once.
    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    /// Change the pen (outline) color.
    pub fn set_pen(&mut self, color: Rgba) {
        self.style = self.style.with_pen(color);
    }

    /// Change the fill color.
    pub fn set_fill(&mut self, color: Rgba) {
        self.style = self.style.with_fill(color);
    }

    /// Change the text color.
    pub fn set_text_color(&mut self, color: Rgba) {
        self.style = self.style.with_text(color);
    }

    // ========================================================================
    // Pixels
    // ========================================================================

    /// Set one pixel to the pen color.
    pub fn dot(&mut self, x: i32, y: i32) {
        self.fb.set_pixel(x, y, self.style.pen);
    }

    /// Set one pixel to the fill color.
    pub fn fill_pixel(&mut self, x: i32, y: i32) {
        self.fb.set_pixel(x, y, self.style.fill);
    }

    /// [`Context::dot`] each point in order.
    pub fn dots(&mut self, points: &[Point]) {
        for p in points {
            self.dot(p.x, p.y);
        }
    }

    // ========================================================================
    // Lines and outlines
    // ========================================================================

    /// Bresenham line from `(x0, y0)` toward `(x1, y1)`, excluding the higher endpoint
    /// along the dominant axis. A zero-length line plots nothing.
    ///
    /// Only the part of the segment over the surface is walked.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let bounds = self.bounds();
        for p in LinePixels::new(x0, y0, x1, y1).clipped(bounds) {
            self.dot(p.x, p.y);
        }
    }

    /// Lines between consecutive points. The path is not closed.
    pub fn path(&mut self, points: &[Point]) {
        for pair in points.windows(2) {
            self.line(pair[0].x, pair[0].y, pair[1].x, pair[1].y);
        }
    }

    /// Horizontal run covering `x0..=x1`.
    fn span_x(&mut self, x0: i32, x1: i32, y: i32) {
        let (lo, hi) = (x0.min(x1), x0.max(x1));
        self.line(lo, y, hi.saturating_add(1), y);
    }

    /// Vertical run covering `y0..=y1`.
    fn span_y(&mut self, x: i32, y0: i32, y1: i32) {
        let (lo, hi) = (y0.min(y1), y0.max(y1));
        self.line(x, lo, x, hi.saturating_add(1));
    }

    /// Rectangle with corners `(x0, y0)` and `(x1, y1)`, both inclusive.
    ///
    /// The interior (border included) is filled first when the fill color is set, then
    /// the four edges are drawn when the pen is set.
    pub fn rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let area = Bounds::from_inclusive(x0, y0, x1, y1);

        if self.style.fills() {
            self.fb.fill_rect(area, self.style.fill);
        }

        if self.style.strokes() {
            let (left, top) = (area.min.x, area.min.y);
            let (right, bottom) = (x0.max(x1), y0.max(y1));
            self.span_x(left, right, top);
            self.span_x(left, right, bottom);
            self.span_y(left, top, bottom);
            self.span_y(right, top, bottom);
        }
    }

    /// Plus-shaped marker centered on `(x, y)` with arms `size` pixels long.
    pub fn cross(&mut self, x: i32, y: i32, size: i32) {
        let size = size.saturating_abs();
        self.span_y(x, y.saturating_sub(size), y.saturating_add(size));
        self.span_x(x.saturating_sub(size), x.saturating_add(size), y);
    }

    // ========================================================================
    // Polygons
    // ========================================================================

    /// Even-odd membership of `(x, y)` in the polygon; see [`is_in_polygon`].
    #[must_use]
    pub fn is_in_polygon(&self, x: i32, y: i32, points: &[Point]) -> bool {
        is_in_polygon(x, y, points)
    }

    /// Outline and fill a polygon.
    ///
    /// Repeated vertices are dropped (first occurrence wins). The outline is closed back
    /// to the first vertex. Filling scans the vertices' bounding box clipped to the
    /// surface, and is drawn after the outline.
    pub fn polygon(&mut self, points: &[Point]) {
        let vertices = dedup_points(points);
        if vertices.is_empty() {
            log::trace!("polygon skipped: no vertices");
            return;
        }

        if self.style.strokes() {
            self.path(&vertices);
            if let (Some(last), Some(first)) = (vertices.last(), vertices.first()) {
                self.line(last.x, last.y, first.x, first.y);
            }
        }

        if self.style.fills() {
            fill_polygon(self.fb, &vertices, self.style.fill);
        }
    }

    // ========================================================================
    // Curves
    // ========================================================================

    /// `y = a·x² + b·x + c` across the full surface width.
    pub fn parabola(&mut self, a: f64, b: f64, c: f64) {
        let bounds = self.bounds();
        self.parabola_arc(a, b, c, bounds.min.x, bounds.max.x);
    }

    /// `y = a·x² + b·x + c` for `x` in `[x1, x2)`, clamped to the surface.
    pub fn parabola_arc(&mut self, a: f64, b: f64, c: f64, x1: i32, x2: i32) {
        let curve = Parabola::new(a, b, c);
        let bounds = self.bounds();
        for p in curve.samples(bounds, x1, x2) {
            self.dot(p.x, p.y);
        }
    }

    // ========================================================================
    // Text
    // ========================================================================

    /// Current typeface.
    #[must_use]
    pub fn typeface(&self) -> &Arc<dyn Typeface> {
        &self.typeface
    }

    /// Current font options.
    #[must_use]
    pub const fn font_options(&self) -> FontOptions {
        self.font_options
    }

    /// Replace the typeface and its options, rebuilding the face.
    pub fn set_font_face(&mut self, typeface: Arc<dyn Typeface>, options: FontOptions) {
        self.typeface = typeface;
        self.font_options = options;
        self.rebuild_face();
    }

    /// Change only the point size, keeping the typeface and resolution.
    ///
    /// Sizes that are not finite and positive are ignored.
    pub fn set_font_size(&mut self, size: f32) {
        match self.font_options.with_size(size) {
            Ok(options) => {
                self.font_options = options;
                self.rebuild_face();
            }
            Err(err) => log::warn!("font size unchanged: {err}"),
        }
    }

    fn rebuild_face(&mut self) {
        self.face = self.typeface.build_face(&self.font_options);
        log::debug!(
            "built face {} at {}px",
            self.typeface.name(),
            self.font_options.pixel_size()
        );
    }

    /// Draw `text` in the text color with its baseline starting at `(x, y)`.
    ///
    /// Returns the pen position after the last glyph.
    pub fn text(&mut self, x: i32, y: i32, text: &str) -> Point {
        self.face
            .draw_text(self.fb, Point::new(x, y), self.style.text, text)
    }

    /// Horizontal advance `text` would occupy in the current face.
    #[must_use]
    pub fn measure_text(&self, text: &str) -> i32 {
        self.face.measure(text)
    }

    // ========================================================================
    // Shapes
    // ========================================================================

    /// Draw a shape value with the current style.
    pub fn draw<D: Drawable + ?Sized>(&mut self, shape: &D) {
        shape.draw(self);
    }
}
