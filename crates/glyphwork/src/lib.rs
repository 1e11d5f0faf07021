// this_file: crates/glyphwork/src/lib.rs

//! Glyphwork: post-processing for font engine glyph output
//!
//! A glyph comes out of a font engine either as a tagged outline or as a
//! rendered bitmap. Glyphwork turns the first into drawing commands and
//! moves the second into the pixel layout of your surface.
//!
//! ```
//! use glyphwork::prelude::*;
//!
//! let outline = OwnedOutline::builder()
//!     .on(0.0, 0.0)
//!     .on(0.0, 8.0)
//!     .on(8.0, 8.0)
//!     .on(8.0, 0.0)
//!     .build()?;
//! let path = GlyphPath::from_outline(&outline.as_outline(), &DecomposeOptions::default())?;
//! assert_eq!(path.contour_count(), 1);
//!
//! let coverage = [0xff; 4];
//! let bitmap = Bitmap::new(2, 2, 2, PixelMode::Gray, &coverage)?;
//! let mut canvas = PixelBuffer::new(4, 4, PixelFormat::Rgba8888);
//! composite(&bitmap, &mut canvas.as_surface_mut(), 1, 1)?;
//! assert_eq!(&canvas.row(1)[4..8], &[0, 0, 0, 0xff]);
//! # Ok::<(), GlyphworkError>(())
//! ```
//!
//! [`outline`] and [`bitmap`] are the member crates, for anything the
//! prelude leaves out.

pub use glyphwork_core::{
    error, fixed, surface, Bitmap, GlyphworkError, Outline, OwnedOutline, PixelBuffer,
    PixelFormat, PixelMode, Result, Surface,
};

pub use glyphwork_bitmap as bitmap;
pub use glyphwork_outline as outline;

/// Common imports for typical usage
pub mod prelude {
    pub use glyphwork_bitmap::{composite, composite_with, convert, Blend, CompositeOptions};
    #[cfg(feature = "parallel")]
    pub use glyphwork_bitmap::convert_many;
    pub use glyphwork_core::{
        Bitmap, ByteOrder, GlyphworkError, Outline, OwnedOutline, PixelBuffer, PixelFormat,
        PixelMode, Point, PointTag, Result, Surface,
    };
    pub use glyphwork_outline::{
        commands, decompose, decompose_into, DecomposeOptions, GlyphPath, OffCurveStart,
        OutlineSink, PathCommand,
    };
}
