//! Color type used for pens, fills and text.
//!
//! [`Rgba::TRANSPARENT`] doubles as the "disabled" sentinel: a context whose pen or fill
//! equals it skips the corresponding drawing phase.

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black. Disables outline or fill drawing when used as pen or fill.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0, 255, 0, 255);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);
    /// Opaque yellow.
    pub const YELLOW: Self = Self::new(255, 255, 0, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Whether this color is the [`Rgba::TRANSPARENT`] sentinel.
    ///
    /// Only exact equality counts; `Rgba::new(255, 0, 0, 0)` is not the sentinel.
    #[must_use]
    pub fn is_transparent(self) -> bool {
        self == Self::TRANSPARENT
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Scale the alpha channel by a coverage value in `0.0..=1.0`.
    #[must_use]
    pub fn with_coverage(self, coverage: f32) -> Self {
        let coverage = coverage.clamp(0.0, 1.0);
        self.with_alpha((f32::from(self.a) * coverage).round() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_constants() {
        assert_eq!(Rgba::BLACK, Rgba::rgb(0, 0, 0));
        assert_eq!(Rgba::WHITE, Rgba::rgb(255, 255, 255));
        assert_eq!(Rgba::RED.r, 255);
        assert_eq!(Rgba::GREEN.g, 255);
        assert_eq!(Rgba::BLUE.b, 255);
    }

    #[test]
    fn test_rgba_transparent_sentinel() {
        assert!(Rgba::TRANSPARENT.is_transparent());
        assert!(Rgba::default().is_transparent());
        assert!(!Rgba::BLACK.is_transparent());
        // Zero alpha alone does not make a color the sentinel
        assert!(!Rgba::new(255, 0, 0, 0).is_transparent());
    }

    #[test]
    fn test_rgba_with_alpha() {
        let semi_red = Rgba::RED.with_alpha(128);
        assert_eq!(semi_red.r, 255);
        assert_eq!(semi_red.a, 128);
    }

    #[test]
    fn test_rgba_with_coverage() {
        assert_eq!(Rgba::BLACK.with_coverage(1.0), Rgba::BLACK);
        assert_eq!(Rgba::BLACK.with_coverage(0.0).a, 0);
        assert_eq!(Rgba::BLACK.with_coverage(0.5).a, 128);
        // Out-of-range coverage is clamped
        assert_eq!(Rgba::BLACK.with_coverage(3.0), Rgba::BLACK);
    }

    #[test]
    fn test_rgba_to_array_from_array() {
        let color = Rgba::new(10, 20, 30, 40);
        let arr = color.to_array();
        assert_eq!(arr, [10, 20, 30, 40]);
        assert_eq!(Rgba::from_array(arr), color);
    }
}
