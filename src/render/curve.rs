//! Sampled parabolic curves.

use crate::geometry::{Bounds, Point};

/// Coefficients of `y = a·x² + b·x + c`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Parabola {
    /// Quadratic coefficient.
    pub a: f64,
    /// Linear coefficient.
    pub b: f64,
    /// Constant term.
    pub c: f64,
}

impl Parabola {
    /// Create a parabola from its coefficients.
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Evaluate at `x` and round half up to a pixel row.
    ///
    /// Returns `None` when the value is not finite or does not fit a pixel coordinate.
    #[must_use]
    pub fn row_at(&self, x: i32) -> Option<i32> {
        let fx = f64::from(x);
        let y = (self.a * fx * fx + self.b * fx + self.c + 0.5).floor();
        if y.is_finite() && y >= f64::from(i32::MIN) && y <= f64::from(i32::MAX) {
            Some(y as i32)
        } else {
            None
        }
    }

    /// Pixels of the curve for every column in `[x1, x2)` that land inside `bounds`.
    pub fn samples(&self, bounds: Bounds, x1: i32, x2: i32) -> impl Iterator<Item = Point> + '_ {
        bounds.clamp_x(x1, x2).filter_map(move |x| {
            self.row_at(x)
                .filter(|&y| bounds.contains(x, y))
                .map(|y| Point::new(x, y))
        })
    }
}
