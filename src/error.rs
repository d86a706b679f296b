//! Error types for pixel-overlay operations.
//!
//! Drawing itself never fails; only construction of surfaces and fonts does.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when constructing drawing resources.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid dimensions for a framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Font size or resolution that cannot produce a face.
    #[error("Invalid font options: size {size}, dpi {dpi}")]
    InvalidFontOptions {
        /// Requested point size.
        size: f32,
        /// Requested resolution.
        dpi: f32,
    },

    /// Font data could not be parsed.
    #[error("Font error: {0}")]
    Font(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
        assert!(err.to_string().contains("0x100"));
    }

    #[test]
    fn test_font_options_display() {
        let err = Error::InvalidFontOptions {
            size: -1.0,
            dpi: 72.0,
        };
        assert!(err.to_string().contains("-1"));
        assert!(err.to_string().contains("72"));
    }

    #[test]
    fn test_font_error_display() {
        let err = Error::Font("bad magic".to_string());
        assert_eq!(err.to_string(), "Font error: bad magic");
    }
}
