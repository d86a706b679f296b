//! In-memory raster surface.
//!
//! An RGBA pixel buffer addressed by signed pixel coordinates. Writes outside the
//! surface are silently ignored, which lets drawing code hand it unclipped geometry.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::Bounds;

/// RGBA framebuffer in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// Each pixel is 4 bytes: [R, G, B, A].
    pixels: Vec<u8>,
}

impl Framebuffer {
    /// Create a new framebuffer with the given dimensions, cleared to transparent.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero, or if a dimension does not fit the
    /// signed coordinate space.
    ///
    /// # Example
    ///
    /// ```
    /// use pixel_overlay::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(800, 600).unwrap();
    /// assert_eq!(fb.width(), 800);
    /// assert_eq!(fb.height(), 600);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 || i32::try_from(width).is_err() || i32::try_from(height).is_err()
        {
            return Err(Error::InvalidDimensions { width, height });
        }

        let size = (width as usize) * (height as usize) * 4;

        Ok(Self {
            width,
            height,
            pixels: vec![0; size],
        })
    }

    /// Create a framebuffer filled with a solid color.
    pub fn with_background(width: u32, height: u32, color: Rgba) -> Result<Self> {
        let mut fb = Self::new(width, height)?;
        fb.clear(color);
        Ok(fb)
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// The addressable area, `(0, 0)` to `(width, height)` exclusive.
    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        Bounds::new(0, 0, self.width as i32, self.height as i32)
    }

    /// Get the raw pixel data as a slice.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Rgba) {
        let rgba = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
    }

    /// Fill a rectangular region with a solid color.
    ///
    /// The region is clamped to the framebuffer bounds.
    pub fn fill_rect(&mut self, region: Bounds, color: Rgba) {
        let clipped = region.intersect(&self.bounds());
        if clipped.is_empty() {
            return;
        }

        let rgba = color.to_array();
        let rect_width = clipped.width() as usize;

        for row_y in clipped.min.y..clipped.max.y {
            let row_start = self.pixel_index(clipped.min.x, row_y);
            let row = &mut self.pixels[row_start..row_start + rect_width * 4];

            for chunk in row.chunks_exact_mut(4) {
                chunk.copy_from_slice(&rgba);
            }
        }
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        if !self.bounds().contains(x, y) {
            return None;
        }

        let idx = self.pixel_index(x, y);
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Set the color at a specific pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if !self.bounds().contains(x, y) {
            return;
        }

        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
    }

    /// Blend a color at a specific pixel coordinate using alpha blending.
    ///
    /// Uses the standard "over" compositing operation:
    /// `out = src * src_alpha + dst * dst_alpha * (1 - src_alpha)`
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if !self.bounds().contains(x, y) {
            return;
        }

        let idx = self.pixel_index(x, y);
        let src_a = f32::from(color.a) / 255.0;
        let dst_a = f32::from(self.pixels[idx + 3]) / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);

        if out_a > 0.0 {
            let blend = |src: u8, dst: u8| -> u8 {
                let src_f = f32::from(src) / 255.0;
                let dst_f = f32::from(dst) / 255.0;
                let out = (src_f * src_a + dst_f * dst_a * (1.0 - src_a)) / out_a;
                (out * 255.0).round() as u8
            };

            self.pixels[idx] = blend(color.r, self.pixels[idx]);
            self.pixels[idx + 1] = blend(color.g, self.pixels[idx + 1]);
            self.pixels[idx + 2] = blend(color.b, self.pixels[idx + 2]);
            self.pixels[idx + 3] = (out_a * 255.0).round() as u8;
        }
    }

    /// Count pixels equal to `color`.
    #[must_use]
    pub fn count_color(&self, color: Rgba) -> usize {
        let rgba = color.to_array();
        self.pixels.chunks_exact(4).filter(|px| *px == rgba).count()
    }

    /// Calculate the byte index for an in-bounds pixel coordinate.
    #[inline]
    fn pixel_index(&self, x: i32, y: i32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }
}
