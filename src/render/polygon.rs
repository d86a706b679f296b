//! Even-odd polygon membership and fill.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Bounds, Point};

/// Test whether the pixel `(x, y)` lies inside the polygon with the given vertices.
///
/// Casts a horizontal ray and toggles on every edge it crosses (even-odd rule). Edges
/// with no vertical extent never satisfy the straddle test, so the intersection
/// division is never by zero. Points exactly on the boundary may land on either side.
///
/// # References
///
/// Franklin, W. R. "PNPOLY - Point Inclusion in Polygon Test."
#[must_use]
pub fn is_in_polygon(x: i32, y: i32, points: &[Point]) -> bool {
    let Some(last) = points.last() else {
        return false;
    };

    let fx = f64::from(x);
    let fy = f64::from(y);

    let mut inside = false;
    let mut prev = *last;
    for &cur in points {
        let (ix, iy) = (f64::from(cur.x), f64::from(cur.y));
        let (jx, jy) = (f64::from(prev.x), f64::from(prev.y));
        if (iy > fy) != (jy > fy) && fx < (jx - ix) * (fy - iy) / (jy - iy) + ix {
            inside = !inside;
        }
        prev = cur;
    }

    inside
}

/// Area a polygon fill has to scan: the vertices' bounding box clipped to `clip`.
#[must_use]
pub fn fill_bounds(points: &[Point], clip: Bounds) -> Option<Bounds> {
    let area = Bounds::enclosing(points)?.intersect(&clip);
    (!area.is_empty()).then_some(area)
}

/// Fill every pixel inside the polygon with `color`.
///
/// Cost is proportional to the bounding box area times the vertex count.
pub fn fill_polygon(fb: &mut Framebuffer, points: &[Point], color: Rgba) {
    let Some(area) = fill_bounds(points, fb.bounds()) else {
        log::trace!("polygon fill skipped: no pixels in bounds");
        return;
    };
    log::trace!(
        "polygon fill over {}x{} at ({}, {}) with {} vertices",
        area.width(),
        area.height(),
        area.min.x,
        area.min.y,
        points.len()
    );

    for y in area.min.y..area.max.y {
        for x in area.min.x..area.max.x {
            if is_in_polygon(x, y, points) {
                fb.set_pixel(x, y, color);
            }
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Convex polygon: regular n-gon around (cx, cy)
    fn regular(n: usize, cx: i32, cy: i32, r: f64) -> Vec<Point> {
        (0..n)
            .map(|i| {
                let t = std::f64::consts::TAU * i as f64 / n as f64;
                Point::new(cx + (r * t.cos()).round() as i32, cy + (r * t.sin()).round() as i32)
            })
            .collect()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        /// Centroid of a convex polygon is inside
        #[test]
        fn prop_centroid_inside(
            n in 3usize..12,
            cx in -500i32..500,
            cy in -500i32..500,
            r in 10.0f64..200.0
        ) {
            let poly = regular(n, cx, cy, r);
            prop_assert!(is_in_polygon(cx, cy, &poly));
        }

        /// Points beyond the bounding box are outside
        #[test]
        fn prop_far_point_outside(
            n in 3usize..12,
            r in 10.0f64..200.0,
            dx in 300i32..1000,
            dy in -1000i32..1000
        ) {
            let poly = regular(n, 0, 0, r);
            prop_assert!(!is_in_polygon(dx, dy, &poly));
            prop_assert!(!is_in_polygon(-dx, dy, &poly));
        }

        /// Rotating the vertex list does not change the answer
        #[test]
        fn prop_rotation_invariant(
            n in 3usize..10,
            shift in 0usize..10,
            x in -60i32..60,
            y in -60i32..60
        ) {
            let poly = regular(n, 0, 0, 50.0);
            let mut rotated = poly.clone();
            rotated.rotate_left(shift % n);
            prop_assert_eq!(is_in_polygon(x, y, &poly), is_in_polygon(x, y, &rotated));
        }
    }
}
