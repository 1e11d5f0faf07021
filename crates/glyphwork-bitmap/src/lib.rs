// this_file: crates/glyphwork-bitmap/src/lib.rs

//! Glyphwork Bitmap: glyph bitmaps into whatever layout you draw with
//!
//! The font engine rasterizes a glyph into its own layout: 1-bit rows
//! most significant bit first, 8-bit coverage, subpixel triples, or
//! premultiplied BGRA, each with a pitch that may include padding or run
//! bottom-up. Drawing code wants A1 in host bit order, A8, or 32-bit
//! colour in a particular byte order. This crate moves pixels between the
//! two without ever assuming that a pitch equals a width.
//!
//! | source   | A1Msb / A1Lsb   | A8         | 32-bit formats          |
//! |----------|-----------------|------------|-------------------------|
//! | Mono     | bit copy        | 0x00/0xff  | black, alpha 0 or 255   |
//! | Gray     | threshold 0x80  | byte copy  | black, alpha = coverage |
//! | Lcd/LcdV | no              | no         | opaque R, G, B          |
//! | Bgra     | no              | alpha      | channel reorder         |
//!
//! ```
//! use glyphwork_core::{Bitmap, PixelFormat, PixelMode};
//! use glyphwork_bitmap::convert;
//!
//! // 2x2 gray glyph with one byte of row padding
//! let data = [0x10, 0x20, 0, 0x30, 0x40, 0];
//! let bitmap = Bitmap::new(2, 2, 3, PixelMode::Gray, &data)?;
//! let a8 = convert(&bitmap, PixelFormat::A8)?;
//! assert_eq!(a8.data(), &[0x10, 0x20, 0x30, 0x40]);
//! # Ok::<(), glyphwork_core::GlyphworkError>(())
//! ```

#[cfg(feature = "parallel")]
pub mod batch;
pub mod composite;
pub mod lcd;
pub mod mono;
pub mod pixel;

#[cfg(feature = "parallel")]
pub use batch::{convert_many, convert_many_with_threads};
pub use composite::{composite, composite_with, convert, CompositeOptions};
pub use lcd::{planes, SubpixelPlanes};
pub use pixel::{Blend, Pixel};

#[cfg(test)]
mod proptests;
