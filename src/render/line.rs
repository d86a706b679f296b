//! Bresenham line rasterization.

use std::iter::FusedIterator;

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Bounds, Point};

/// Pixels of a line segment, produced with integer Bresenham stepping.
///
/// Iteration always runs from the lower to the higher coordinate along the dominant axis
/// (y when `|dy| >= |dx|`, x otherwise), and the higher endpoint is excluded. Swapping the
/// endpoints therefore yields the same pixels, and a zero-length segment yields none.
#[derive(Debug, Clone)]
pub struct LinePixels {
    /// Axes transposed: `major` walks y and `minor` walks x.
    steep: bool,
    /// First pixel of the segment, for seeking.
    origin: (i64, i64),
    major: i64,
    major_end: i64,
    minor: i64,
    minor_step: i64,
    d_major: i64,
    d_minor: i64,
    err: i64,
}

impl LinePixels {
    /// Rasterize the segment from `(x0, y0)` to `(x1, y1)`.
    #[must_use]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (x0, y0, x1, y1) = (
            i64::from(x0),
            i64::from(y0),
            i64::from(x1),
            i64::from(y1),
        );
        let steep = (y1 - y0).abs() >= (x1 - x0).abs();

        // Map onto (major, minor) so the loop below is axis-agnostic.
        let (mut a0, mut b0, mut a1, mut b1) = if steep {
            (y0, x0, y1, x1)
        } else {
            (x0, y0, x1, y1)
        };
        if a0 > a1 {
            std::mem::swap(&mut a0, &mut a1);
            std::mem::swap(&mut b0, &mut b1);
        }

        let d_major = a1 - a0;
        let (d_minor, minor_step) = if b1 < b0 { (b0 - b1, -1) } else { (b1 - b0, 1) };

        Self {
            steep,
            origin: (a0, b0),
            major: a0,
            major_end: a1,
            minor: b0,
            minor_step,
            d_major,
            d_minor,
            err: 2 * d_minor - d_major,
        }
    }

    /// Pixels of the segment between two points.
    #[must_use]
    pub fn between(start: Point, end: Point) -> Self {
        Self::new(start.x, start.y, end.x, end.y)
    }

    /// Drop the pixels whose dominant coordinate falls outside `bounds`.
    ///
    /// The remaining pixels are the same ones the full walk produces, but the walk starts
    /// at the first visible column (or row) instead of the segment's start, so at most
    /// `max(width, height)` pixels are left.
    #[must_use]
    pub fn clipped(mut self, bounds: Bounds) -> Self {
        let (lo, hi) = if self.steep {
            (bounds.min.y, bounds.max.y)
        } else {
            (bounds.min.x, bounds.max.x)
        };
        self.major_end = self.major_end.min(i64::from(hi));
        self.seek(i64::from(lo));
        self
    }

    /// Jump forward to dominant coordinate `target` without stepping.
    fn seek(&mut self, target: i64) {
        if target <= self.major {
            return;
        }
        if target >= self.major_end {
            self.major = self.major_end;
            return;
        }

        // After k steps the minor offset is k·d_minor/d_major rounded half down, and the
        // error term is 2·d_minor·(k+1) - d_major - 2·d_major·offset.
        let (a0, b0) = self.origin;
        let k = i128::from(target - a0);
        let d_major = i128::from(self.d_major);
        let d_minor = i128::from(self.d_minor);
        let offset = (2 * k * d_minor + d_major - 1).div_euclid(2 * d_major);

        self.major = target;
        self.minor = b0 + self.minor_step * offset as i64;
        self.err = (2 * d_minor * (k + 1) - d_major - 2 * d_major * offset) as i64;
    }
}

impl Iterator for LinePixels {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.major >= self.major_end {
            return None;
        }

        // Both coordinates stay between the i32 endpoints passed in.
        let point = if self.steep {
            Point::new(self.minor as i32, self.major as i32)
        } else {
            Point::new(self.major as i32, self.minor as i32)
        };

        if self.err > 0 {
            self.minor += self.minor_step;
            self.err -= 2 * self.d_major;
        }
        self.err += 2 * self.d_minor;
        self.major += 1;

        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.major_end - self.major).max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LinePixels {}

impl FusedIterator for LinePixels {}

/// Draw a line using Bresenham's algorithm (non-antialiased).
///
/// The higher endpoint along the dominant axis is not plotted, so chained segments do
/// not paint shared vertices twice.
///
/// # Arguments
///
/// * `fb` - Target framebuffer
/// * `x0`, `y0` - Start coordinates
/// * `x1`, `y1` - End coordinates
/// * `color` - Line color
pub fn draw_line(fb: &mut Framebuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    for p in LinePixels::new(x0, y0, x1, y1).clipped(fb.bounds()) {
        fb.set_pixel(p.x, p.y, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn pixels(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<Point> {
        LinePixels::new(x0, y0, x1, y1).collect()
    }

    #[test]
    fn test_horizontal_excludes_far_end() {
        let pts = pixels(10, 50, 14, 50);
        assert_eq!(
            pts,
            vec![
                Point::new(10, 50),
                Point::new(11, 50),
                Point::new(12, 50),
                Point::new(13, 50)
            ]
        );
    }

    #[test]
    fn test_vertical_is_steep() {
        let pts = pixels(5, 3, 5, 6);
        assert_eq!(pts, vec![Point::new(5, 3), Point::new(5, 4), Point::new(5, 5)]);
    }

    #[test]
    fn test_reversed_horizontal_normalizes_direction() {
        // Iteration starts at the lower x, so (14, 50) is the excluded end either way.
        assert_eq!(pixels(14, 50, 10, 50), pixels(10, 50, 14, 50));
    }

    #[test]
    fn test_zero_length_draws_nothing() {
        assert!(pixels(7, 7, 7, 7).is_empty());
        assert_eq!(LinePixels::new(7, 7, 7, 7).len(), 0);
    }

    #[test]
    fn test_diagonal() {
        let pts = pixels(0, 0, 4, 4);
        assert_eq!(
            pts,
            vec![
                Point::new(0, 0),
                Point::new(1, 1),
                Point::new(2, 2),
                Point::new(3, 3)
            ]
        );
    }

    #[test]
    fn test_shallow_slope_steps_minor_axis() {
        // dx = 6, dy = 2
        let pts = pixels(0, 0, 6, 2);
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Point::new(0, 0));
        // y never decreases and never passes the end
        assert!(pts.windows(2).all(|w| w[1].y >= w[0].y && w[1].x == w[0].x + 1));
        assert!(pts.iter().all(|p| p.y <= 2));
        assert!(pts.iter().any(|p| p.y == 1));
    }

    #[test]
    fn test_negative_minor_direction() {
        let pts = pixels(0, 4, 8, 0);
        assert_eq!(pts.len(), 8);
        assert_eq!(pts[0], Point::new(0, 4));
        assert!(pts.windows(2).all(|w| w[1].y <= w[0].y));
    }

    #[test]
    fn test_steep_negative() {
        let pts = pixels(3, 10, 1, 0);
        // Steep: iterates y from 0 to 9
        assert_eq!(pts.len(), 10);
        assert_eq!(pts[0], Point::new(1, 0));
        assert!(pts.windows(2).all(|w| w[1].y == w[0].y + 1));
    }

    #[test]
    fn test_equal_deltas_are_steep() {
        // |dy| == |dx| walks y
        let pts = pixels(0, 3, 3, 0);
        assert_eq!(pts, vec![Point::new(3, 0), Point::new(2, 1), Point::new(1, 2)]);
    }

    #[test]
    fn test_size_hint_is_exact() {
        let mut it = LinePixels::new(0, 0, 10, 3);
        assert_eq!(it.size_hint(), (10, Some(10)));
        it.next();
        assert_eq!(it.len(), 9);
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        let it = LinePixels::new(i32::MIN, 0, i32::MAX, 1);
        assert_eq!(it.len(), u32::MAX as usize);
    }

    #[test]
    fn test_draw_line_out_of_bounds() {
        let mut fb = Framebuffer::with_background(100, 100, Rgba::WHITE)
            .expect("framebuffer creation should succeed");

        // Line that goes out of bounds should not panic
        draw_line(&mut fb, -10, -10, 110, 110, Rgba::BLACK);

        // Only in-bounds pixels should be affected
        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::BLACK));
        assert_eq!(fb.count_color(Rgba::BLACK), 100);
    }

    #[test]
    fn test_clipped_skips_to_visible_range() {
        let bounds = Bounds::new(0, 0, 16, 16);
        let full: Vec<Point> = pixels(-40, -9, 60, 25)
            .into_iter()
            .filter(|p| bounds.contains(p.x, p.y))
            .collect();
        let clipped = LinePixels::new(-40, -9, 60, 25).clipped(bounds);
        assert_eq!(clipped.len(), 16);
        let visible: Vec<Point> = clipped.filter(|p| bounds.contains(p.x, p.y)).collect();
        assert_eq!(visible, full);
    }

    #[test]
    fn test_clipped_extreme_span_is_short() {
        let bounds = Bounds::new(0, 0, 16, 16);
        let it = LinePixels::new(i32::MIN, 0, i32::MAX, 0).clipped(bounds);
        assert_eq!(it.len(), 16);
        let steep = LinePixels::new(3, i32::MAX, -2, i32::MIN).clipped(bounds);
        assert_eq!(steep.len(), 16);
        assert!(steep.clone().all(|p| (-2..=3).contains(&p.x)));
    }

    #[test]
    fn test_clipped_outside_is_empty() {
        let bounds = Bounds::new(0, 0, 16, 16);
        assert_eq!(LinePixels::new(20, 1, 40, 3).clipped(bounds).count(), 0);
        assert_eq!(LinePixels::new(-40, 1, -20, 3).clipped(bounds).count(), 0);
    }

    #[test]
    fn test_swap_symmetry_sample() {
        let a: HashSet<Point> = pixels(2, 9, 17, 3).into_iter().collect();
        let b: HashSet<Point> = pixels(17, 3, 2, 9).into_iter().collect();
        assert_eq!(a, b);
    }
}
