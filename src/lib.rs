//! # pixel-overlay
//!
//! Minimal 2D drawing toolkit for annotating in-memory raster images.
//!
//! A [`Context`](context::Context) binds a pen, fill and text color plus a font to one
//! [`Framebuffer`](framebuffer::Framebuffer) and draws dots, lines, rectangles, crosses,
//! paths, polygons, parabolas and text straight into it. It is meant for overlays such
//! as marking detected points or visualizing algorithm output, not for general vector
//! graphics: there is no anti-aliasing of geometry, no transforms and no clipping paths.
//!
//! ## Features
//!
//! - **Integer rasterization**: Bresenham lines and even-odd polygon fills
//! - **Never fails while drawing**: out-of-bounds pixels are dropped, degenerate shapes
//!   draw nothing
//! - **Pluggable text**: built-in bitmap font, or any [`Typeface`](text::Typeface)
//!
//! ## Quick Start
//!
//! ```rust
//! use pixel_overlay::prelude::*;
//!
//! let mut fb = Framebuffer::with_background(64, 64, Rgba::WHITE)?;
//! let mut ctx = Context::new(&mut fb);
//!
//! ctx.set_fill(Rgba::YELLOW);
//! ctx.polygon(&[Point::new(8, 8), Point::new(40, 12), Point::new(20, 40)]);
//! ctx.set_pen(Rgba::RED);
//! ctx.cross(50, 50, 3);
//! ctx.text(4, 60, "pt 1");
//!
//! assert_eq!(fb.get_pixel(50, 53), Some(Rgba::RED));
//! # Ok::<(), pixel_overlay::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialize/deserialize colors, points, styles and font options
//! - `fontdue`: TrueType/OpenType typefaces
//! - `full`: All features enabled
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//!   *IBM Systems Journal*, 4(1), 25-30.
//! - Franklin, W. R. "PNPOLY - Point Inclusion in Polygon Test."

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in raster code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color type and the transparent sentinel.
pub mod color;

/// In-memory raster surface.
pub mod framebuffer;

/// Integer points and bounds.
pub mod geometry;

/// Drawing style configuration.
pub mod style;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Line, polygon and curve rasterization.
pub mod render;

/// Pluggable text rendering.
pub mod text;

/// The drawing context.
pub mod context;

/// Drawable shape values.
pub mod shapes;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for pixel-overlay operations.
pub mod error;

pub use context::Context;
pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use pixel_overlay::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::context::Context;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Bounds, Point};
    pub use crate::render::Parabola;
    pub use crate::shapes::{Cross, Drawable, Label, Line, Path, Polygon, Rect};
    pub use crate::style::Style;
    pub use crate::text::{BitmapTypeface, FontFace, FontOptions, Typeface};
}
