// this_file: crates/glyphwork-bitmap/src/composite.rs

//! Writing glyph bitmaps into destination surfaces.
//!
//! Every call validates first and writes second: an unsupported format
//! pair, a bottom-up bitmap that would need bit reversal, or a rectangle
//! that does not fit leaves the destination untouched.

use glyphwork_core::{
    Bitmap, GlyphworkError, PixelBuffer, PixelFormat, PixelMode, Result, Surface,
};

use crate::mono;
use crate::pixel::{self, Blend, SourceRow};

/// Compositing settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompositeOptions {
    pub blend: Blend,
}

impl CompositeOptions {
    pub fn with_blend(mut self, blend: Blend) -> Self {
        self.blend = blend;
        self
    }
}

/// Replace the pixels of `surface` covered by `bitmap` placed at `(x, y)`.
pub fn composite(bitmap: &Bitmap<'_>, surface: &mut Surface<'_>, x: u32, y: u32) -> Result<()> {
    composite_with(bitmap, surface, x, y, &CompositeOptions::default())
}

/// Like [`composite`], with a choice of blend.
pub fn composite_with(
    bitmap: &Bitmap<'_>,
    surface: &mut Surface<'_>,
    x: u32,
    y: u32,
    options: &CompositeOptions,
) -> Result<()> {
    let mode = bitmap.mode();
    let format = surface.format();
    pixel::check_supported(mode, format)?;
    if mode == PixelMode::Mono && format == PixelFormat::A1Lsb && bitmap.pitch() < 0 {
        return Err(GlyphworkError::NegativePitch {
            pitch: bitmap.pitch(),
        });
    }

    let width = bitmap.logical_width();
    let height = bitmap.logical_height();
    let fits = x as u64 + width as u64 <= surface.width() as u64
        && y as u64 + height as u64 <= surface.height() as u64;
    if !fits {
        return Err(GlyphworkError::geometry(format!(
            "{width}x{height} bitmap at ({x}, {y}) does not fit a {}x{} surface",
            surface.width(),
            surface.height()
        )));
    }
    if width == 0 || height == 0 {
        return Ok(());
    }

    if options.blend == Blend::Replace && bulk_copy_allowed(bitmap, surface, x) {
        log::debug!("bulk copy of {height} {mode} rows into {format} at row {y}");
        let stride = surface.stride();
        let len = (height as usize - 1) * stride + bitmap.row_bytes();
        let start = y as usize * stride;
        surface.data_mut()[start..start + len].copy_from_slice(&bitmap.buffer()[..len]);
        return Ok(());
    }

    log::debug!(
        "row copy of {width}x{height} {mode} bitmap into {format} at ({x}, {y}), {:?}",
        options.blend
    );
    let or = options.blend == Blend::Add;
    for row in 0..height {
        let source = SourceRow::new(bitmap, row);
        let dst = surface.row_mut(y + row);
        match (mode, format) {
            (PixelMode::Mono, PixelFormat::A1Msb | PixelFormat::A1Lsb) => mono::blit_row(
                source.bytes(),
                dst,
                x as usize,
                width as usize,
                format == PixelFormat::A1Lsb,
                or,
            ),
            (PixelMode::Gray, PixelFormat::A8) if !or => {
                let start = x as usize;
                dst[start..start + width as usize].copy_from_slice(source.bytes());
            }
            (PixelMode::Mono, PixelFormat::A8) if !or => {
                let start = x as usize;
                mono::unpack_row(
                    source.bytes(),
                    width as usize,
                    &mut dst[start..start + width as usize],
                );
            }
            // whole bytes only, so neighbouring bits stay untouched
            (PixelMode::Gray, PixelFormat::A1Msb | PixelFormat::A1Lsb)
                if !or && x % 8 == 0 && width % 8 == 0 =>
            {
                let start = x as usize / 8;
                let bytes = &mut dst[start..start + width as usize / 8];
                mono::pack_row(source.bytes(), bytes);
                if format == PixelFormat::A1Lsb {
                    mono::reverse_bits_in_place(bytes);
                }
            }
            _ => {
                for i in 0..width as usize {
                    pixel::write(format, dst, x as usize + i, source.pixel(i), options.blend);
                }
            }
        }
    }
    Ok(())
}

/// One `memcpy` for the whole bitmap: same layout, same positive pitch,
/// flush left and as wide as the surface. Padding bytes between rows are
/// carried along.
fn bulk_copy_allowed(bitmap: &Bitmap<'_>, surface: &Surface<'_>, x: u32) -> bool {
    surface.format().same_layout_mode() == Some(bitmap.mode())
        && bitmap.pitch() > 0
        && bitmap.pitch() as usize == surface.stride()
        && x == 0
        && bitmap.width() == surface.width()
}

/// Convert `bitmap` into a new, tightly packed buffer.
///
/// The result is `logical_width × logical_height` pixels: subpixel
/// triples become one pixel each.
pub fn convert(bitmap: &Bitmap<'_>, format: PixelFormat) -> Result<PixelBuffer> {
    let mut buffer = PixelBuffer::new(bitmap.logical_width(), bitmap.logical_height(), format);
    composite(bitmap, &mut buffer.as_surface_mut(), 0, 0)?;
    Ok(buffer)
}
