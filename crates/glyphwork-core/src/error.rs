// this_file: crates/glyphwork-core/src/error.rs

//! Error types for glyphwork.
//!
//! Every public operation in the workspace returns
//! `Result<T, GlyphworkError>`. Failures are raised before any output is
//! produced: a decomposition that fails has emitted nothing, and a
//! composite that fails has not touched the destination.
//!
//! # Examples
//!
//! ```
//! use glyphwork_core::GlyphworkError;
//!
//! let err = GlyphworkError::malformed(0, 3, "cubic run of length 3");
//! assert_eq!(
//!     err.to_string(),
//!     "Malformed outline: contour 0, point 3: cubic run of length 3"
//! );
//! ```

use thiserror::Error;

/// Result type for glyphwork operations
pub type Result<T> = std::result::Result<T, GlyphworkError>;

/// Main error type for glyphwork operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GlyphworkError {
    /// The tag sequence of an outline violates curve-order rules, or the
    /// contour table does not describe the point array.
    #[error("Malformed outline: contour {contour}, point {point}: {reason}")]
    MalformedOutline {
        /// Index of the offending contour.
        contour: usize,
        /// Index of the offending point within the whole outline.
        point: usize,
        /// What was wrong.
        reason: String,
    },

    /// The source pixel mode, the destination format, or the pair of them
    /// is not handled by the compositor.
    #[error("Unsupported pixel format: cannot convert {mode} to {target}")]
    UnsupportedPixelFormat {
        /// Source pixel mode (or raw value).
        mode: String,
        /// Requested destination format.
        target: String,
    },

    /// A buffer is too small for the geometry it claims, or a composite
    /// rectangle does not fit inside the destination.
    #[error("Incompatible geometry: {reason}")]
    IncompatibleGeometry {
        /// Explanation of the size mismatch.
        reason: String,
    },

    /// Bottom-up bitmaps cannot go through bit-order reversal.
    #[error("Negative pitch {pitch} is not supported for bit-order reversal")]
    NegativePitch {
        /// The offending pitch.
        pitch: i32,
    },
}

impl GlyphworkError {
    /// Create a malformed outline error
    pub fn malformed(contour: usize, point: usize, reason: impl Into<String>) -> Self {
        Self::MalformedOutline {
            contour,
            point,
            reason: reason.into(),
        }
    }

    /// Create an unsupported format error
    ///
    /// # Example
    ///
    /// ```
    /// # use glyphwork_core::GlyphworkError;
    /// let err = GlyphworkError::unsupported("Lcd", "A8");
    /// assert!(err.to_string().contains("Lcd to A8"));
    /// ```
    pub fn unsupported(mode: impl Into<String>, target: impl Into<String>) -> Self {
        Self::UnsupportedPixelFormat {
            mode: mode.into(),
            target: target.into(),
        }
    }

    /// Create a geometry error
    pub fn geometry(reason: impl Into<String>) -> Self {
        Self::IncompatibleGeometry {
            reason: reason.into(),
        }
    }
}
