//! Shape values that can be drawn through a [`Context`].
//!
//! These mirror the context's drawing calls, so overlays can be built up as data (for
//! example a `Vec<Cross>` of detected keypoints) and drawn in one go.

use crate::context::Context;
use crate::geometry::Point;
use crate::render::Parabola;

/// Trait for drawable shapes.
pub trait Drawable {
    /// Draw this shape with the context's current style.
    fn draw(&self, ctx: &mut Context<'_>);
}

/// A line segment; the far endpoint is excluded (see [`Context::line`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a line from coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }
}

impl Drawable for Line {
    fn draw(&self, ctx: &mut Context<'_>) {
        ctx.line(self.start.x, self.start.y, self.end.x, self.end.y);
    }
}

/// A rectangle between two inclusive corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// One corner.
    pub a: Point,
    /// The opposite corner.
    pub b: Point,
}

impl Rect {
    /// Create a rectangle from two corners.
    #[must_use]
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Create a rectangle from an origin and a size in pixels.
    #[must_use]
    pub fn from_origin_size(origin: Point, width: u32, height: u32) -> Self {
        let far = |start: i32, len: u32| start.saturating_add_unsigned(len.saturating_sub(1));
        Self::new(
            origin,
            Point::new(far(origin.x, width), far(origin.y, height)),
        )
    }
}

impl Drawable for Rect {
    fn draw(&self, ctx: &mut Context<'_>) {
        ctx.rect(self.a.x, self.a.y, self.b.x, self.b.y);
    }
}

/// A plus-shaped marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cross {
    /// Center pixel.
    pub center: Point,
    /// Arm length in pixels.
    pub size: i32,
}

impl Cross {
    /// Create a cross marker.
    #[must_use]
    pub const fn new(center: Point, size: i32) -> Self {
        Self { center, size }
    }
}

impl Drawable for Cross {
    fn draw(&self, ctx: &mut Context<'_>) {
        ctx.cross(self.center.x, self.center.y, self.size);
    }
}

/// An open polyline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Path(pub Vec<Point>);

impl Drawable for Path {
    fn draw(&self, ctx: &mut Context<'_>) {
        ctx.path(&self.0);
    }
}

/// A closed, optionally filled polygon.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Polygon(pub Vec<Point>);

impl Polygon {
    /// Even-odd membership of a pixel.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        crate::render::is_in_polygon(p.x, p.y, &self.0)
    }
}

impl Drawable for Polygon {
    fn draw(&self, ctx: &mut Context<'_>) {
        ctx.polygon(&self.0);
    }
}

/// Text anchored at a baseline origin.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Label {
    /// Left end of the baseline.
    pub origin: Point,
    /// Text to draw.
    pub text: String,
}

impl Label {
    /// Create a label.
    #[must_use]
    pub fn new(origin: Point, text: impl Into<String>) -> Self {
        Self {
            origin,
            text: text.into(),
        }
    }
}

impl Drawable for Label {
    fn draw(&self, ctx: &mut Context<'_>) {
        ctx.text(self.origin.x, self.origin.y, &self.text);
    }
}

impl Drawable for Parabola {
    fn draw(&self, ctx: &mut Context<'_>) {
        ctx.parabola(self.a, self.b, self.c);
    }
}

impl Drawable for Point {
    fn draw(&self, ctx: &mut Context<'_>) {
        ctx.dot(self.x, self.y);
    }
}

impl<D: Drawable> Drawable for [D] {
    fn draw(&self, ctx: &mut Context<'_>) {
        for shape in self {
            shape.draw(ctx);
        }
    }
}

impl<D: Drawable> Drawable for Vec<D> {
    fn draw(&self, ctx: &mut Context<'_>) {
        self.as_slice().draw(ctx);
    }
}
