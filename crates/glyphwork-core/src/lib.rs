// this_file: crates/glyphwork-core/src/lib.rs

//! Glyphwork Core: the data both halves of glyphwork agree on
//!
//! A font engine produces two things per glyph that callers usually want
//! to post-process: an outline (contours of tagged control points) and a
//! rendered bitmap (a pixel buffer with width, rows, pitch and pixel mode).
//! This crate describes both, validates them on construction, and defines
//! the single error type used across the workspace.
//!
//! - [`outline`] - points, tags, contours, [`Outline`] and [`OwnedOutline`]
//! - [`bitmap`] - [`PixelMode`] and the borrowed [`Bitmap`] view
//! - [`surface`] - destination [`PixelFormat`]s, [`Surface`] and [`PixelBuffer`]
//! - [`fixed`] - 26.6 fixed point, the engine's native coordinate unit
//!
//! Nothing here copies engine memory: [`Outline`] and [`Bitmap`] borrow it,
//! so they cannot outlive the glyph slot they were taken from.

pub mod bitmap;
pub mod error;
pub mod fixed;
pub mod outline;
pub mod surface;

pub use bitmap::{Bitmap, PixelMode};
pub use error::{GlyphworkError, Result};
pub use fixed::F26Dot6;
pub use outline::{
    BBox, Contour, FillRule, Orientation, Outline, OutlineBuilder, OutlineFlags, OwnedOutline,
    Point, PointTag, StrokeBorder,
};
pub use surface::{ByteOrder, PixelBuffer, PixelFormat, Surface};

#[cfg(test)]
mod proptests;
