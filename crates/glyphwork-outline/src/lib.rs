// this_file: crates/glyphwork-outline/src/lib.rs

//! Glyphwork Outline: tagged glyph outlines to path commands
//!
//! Font engines describe a glyph as contours of control points, each
//! tagged on-curve, conic (quadratic) off-curve or cubic off-curve.
//! Drawing libraries want move/line/quad/cubic commands instead. This
//! crate does that translation, inserting the implied on-curve points
//! between consecutive conic points, and rejects tag sequences no font
//! engine would accept.
//!
//! Three ways in, one set of rules:
//!
//! ```
//! use glyphwork_core::OwnedOutline;
//! use glyphwork_outline::{commands, decompose, DecomposeOptions, GlyphPath};
//!
//! let outline = OwnedOutline::builder()
//!     .on(0.0, 0.0)
//!     .conic(0.0, 10.0)
//!     .conic(10.0, 10.0)
//!     .on(10.0, 0.0)
//!     .build()?;
//! let view = outline.as_outline();
//! let options = DecomposeOptions::default();
//!
//! let collected = decompose(&view, &options)?;
//! let streamed: Vec<_> = commands(&view, &options)?.collect();
//! assert_eq!(collected, streamed);
//!
//! let path = GlyphPath::from_outline(&view, &options)?;
//! assert_eq!(path.to_svg_path_data(), "M 0,0 Q 0,10 5,10 Q 10,10 10,0 L 0,0");
//! # Ok::<(), glyphwork_core::GlyphworkError>(())
//! ```
//!
//! [`flatten`] turns the commands into polygons when straight edges are
//! all a consumer can handle.

pub mod decompose;
pub mod flatten;
pub mod path;

pub use decompose::{
    commands, decompose, decompose_into, validate, DecomposeOptions, OffCurveStart, OutlineSink,
    PathCommand, PathCommands,
};
pub use flatten::{flatten, FlattenOptions, Polygon};
pub use path::GlyphPath;

#[cfg(test)]
mod proptests;
