//! Integer geometry for pixel addressing.
//!
//! All coordinates are surface-relative pixel positions.

use std::collections::HashSet;

/// A pixel location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Axis-aligned pixel rectangle; `min` is inclusive, `max` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    /// Top-left corner (inclusive).
    pub min: Point,
    /// Bottom-right corner (exclusive).
    pub max: Point,
}

impl Bounds {
    /// Create bounds from corner coordinates.
    #[must_use]
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0, y0),
            max: Point::new(x1, y1),
        }
    }

    /// Bounds covering the inclusive pixel range `[x0, x1] × [y0, y1]`, corners in any order.
    #[must_use]
    pub fn from_inclusive(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(
            x0.min(x1),
            y0.min(y1),
            x0.max(x1).saturating_add(1),
            y0.max(y1).saturating_add(1),
        )
    }

    /// Smallest bounds enclosing every point, or `None` for an empty slice.
    #[must_use]
    pub fn enclosing(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let mut min = *first;
        let mut max = *first;
        for p in &points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(Self::from_inclusive(min.x, min.y, max.x, max.y))
    }

    /// Width in pixels (zero when empty).
    #[must_use]
    pub fn width(&self) -> u32 {
        (i64::from(self.max.x) - i64::from(self.min.x)).max(0) as u32
    }

    /// Height in pixels (zero when empty).
    #[must_use]
    pub fn height(&self) -> u32 {
        (i64::from(self.max.y) - i64::from(self.min.y)).max(0) as u32
    }

    /// Whether the bounds contain no pixel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether the pixel at `(x, y)` lies inside.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.min.x && x < self.max.x && y >= self.min.y && y < self.max.y
    }

    /// Overlap of two bounds; may be empty.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        Self::new(
            self.min.x.max(other.min.x),
            self.min.y.max(other.min.y),
            self.max.x.min(other.max.x),
            self.max.y.min(other.max.y),
        )
    }

    /// Clamp a half-open x range `[x0, x1)` to these bounds.
    #[must_use]
    pub fn clamp_x(&self, x0: i32, x1: i32) -> std::ops::Range<i32> {
        x0.max(self.min.x)..x1.min(self.max.x)
    }
}

/// Remove coincident points, keeping the first occurrence of each in order.
#[must_use]
pub fn dedup_points(points: &[Point]) -> Vec<Point> {
    let mut seen = HashSet::with_capacity(points.len());
    points.iter().copied().filter(|p| seen.insert(*p)).collect()
}
