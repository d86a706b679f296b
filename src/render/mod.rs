//! Rasterization algorithms.
//!
//! Every shape the drawing context offers is built from these pieces.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: Integer-only, half-open line stepping
//! - **Even-odd Ray Casting**: Point-in-polygon membership for fills
//! - **Sampled Parabola**: One pixel per column of `y = a·x² + b·x + c`
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Franklin, W. R. "PNPOLY - Point Inclusion in Polygon Test."

mod curve;
mod line;
mod polygon;

pub use curve::Parabola;
pub use line::{draw_line, LinePixels};
pub use polygon::{fill_bounds, fill_polygon, is_in_polygon};
