// this_file: crates/glyphwork-core/src/surface.rs

//! Destination pixel buffers for bitmap conversion and compositing.

use std::fmt;

use crate::bitmap::{Bitmap, PixelMode};
use crate::error::{GlyphworkError, Result};

/// Byte order of a packed 32-bit pixel in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    Little,
    Big,
}

impl ByteOrder {
    /// The byte order of the machine we are running on.
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            ByteOrder::Big
        } else {
            ByteOrder::Little
        }
    }

    #[inline]
    pub fn write_u32(self, value: u32, out: &mut [u8]) {
        let bytes = match self {
            ByteOrder::Little => value.to_le_bytes(),
            ByteOrder::Big => value.to_be_bytes(),
        };
        out[..4].copy_from_slice(&bytes);
    }

    #[inline]
    pub fn read_u32(self, bytes: &[u8]) -> u32 {
        let quad = [bytes[0], bytes[1], bytes[2], bytes[3]];
        match self {
            ByteOrder::Little => u32::from_le_bytes(quad),
            ByteOrder::Big => u32::from_be_bytes(quad),
        }
    }
}

/// Pixel layout of a destination surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// 1 bit per pixel, bit 7 leftmost
    A1Msb,
    /// 1 bit per pixel, bit 0 leftmost
    A1Lsb,
    /// 8-bit coverage
    A8,
    /// `0xAARRGGBB` words stored in the given byte order
    Argb32(ByteOrder),
    /// Bytes B, G, R, A
    Bgra8888,
    /// Bytes R, G, B, A
    Rgba8888,
}

impl PixelFormat {
    /// `Argb32` in host byte order, the layout most image libraries use.
    pub const fn argb32_native() -> Self {
        PixelFormat::Argb32(ByteOrder::native())
    }

    /// Tightly packed row size for `width` pixels.
    pub fn min_stride(self, width: u32) -> usize {
        let width = width as usize;
        match self {
            PixelFormat::A1Msb | PixelFormat::A1Lsb => width.div_ceil(8),
            PixelFormat::A8 => width,
            PixelFormat::Argb32(_) | PixelFormat::Bgra8888 | PixelFormat::Rgba8888 => width * 4,
        }
    }

    /// Bytes per pixel, `None` for bit-packed formats.
    pub fn bytes_per_pixel(self) -> Option<usize> {
        match self {
            PixelFormat::A1Msb | PixelFormat::A1Lsb => None,
            PixelFormat::A8 => Some(1),
            PixelFormat::Argb32(_) | PixelFormat::Bgra8888 | PixelFormat::Rgba8888 => Some(4),
        }
    }

    /// The source pixel mode with an identical memory layout, if any.
    pub fn same_layout_mode(self) -> Option<PixelMode> {
        match self {
            PixelFormat::A1Msb => Some(PixelMode::Mono),
            PixelFormat::A8 => Some(PixelMode::Gray),
            PixelFormat::Bgra8888 => Some(PixelMode::Bgra),
            PixelFormat::Argb32(ByteOrder::Little) => Some(PixelMode::Bgra),
            _ => None,
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelFormat::A1Msb => f.write_str("A1Msb"),
            PixelFormat::A1Lsb => f.write_str("A1Lsb"),
            PixelFormat::A8 => f.write_str("A8"),
            PixelFormat::Argb32(order) => write!(f, "Argb32({order:?})"),
            PixelFormat::Bgra8888 => f.write_str("Bgra8888"),
            PixelFormat::Rgba8888 => f.write_str("Rgba8888"),
        }
    }
}

/// Caller-owned destination buffer.
///
/// The compositor writes only inside the rectangle it was asked to fill and
/// never grows the buffer.
#[derive(Debug)]
pub struct Surface<'a> {
    data: &'a mut [u8],
    width: u32,
    height: u32,
    stride: usize,
    format: PixelFormat,
}

impl<'a> Surface<'a> {
    pub fn new(
        data: &'a mut [u8],
        width: u32,
        height: u32,
        stride: usize,
        format: PixelFormat,
    ) -> Result<Self> {
        let row_bytes = format.min_stride(width);
        if height > 0 && stride < row_bytes {
            return Err(GlyphworkError::geometry(format!(
                "stride {stride} is smaller than {row_bytes} bytes needed for {width} {format} pixels"
            )));
        }
        let needed = if height == 0 {
            0
        } else {
            (height as usize - 1) * stride + row_bytes
        };
        if data.len() < needed {
            return Err(GlyphworkError::geometry(format!(
                "surface buffer holds {} bytes, {width}x{height} at stride {stride} needs {needed}",
                data.len()
            )));
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
            format,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn data(&self) -> &[u8] {
        self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        self.data
    }

    /// Row `y` without padding.
    ///
    /// # Panics
    ///
    /// If `y >= height`.
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.stride;
        &self.data[start..start + self.format.min_stride(self.width)]
    }

    /// Mutable row `y` without padding.
    ///
    /// # Panics
    ///
    /// If `y >= height`.
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let start = y as usize * self.stride;
        let len = self.format.min_stride(self.width);
        &mut self.data[start..start + len]
    }
}

/// Owned, tightly packed pixel buffer returned by conversions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    stride: usize,
    format: PixelFormat,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Zero-filled buffer with the tight stride for `format`.
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Self {
        let stride = format.min_stride(width);
        Self {
            width,
            height,
            stride,
            format,
            data: vec![0; stride * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.stride;
        &self.data[start..start + self.stride]
    }

    /// Borrow as a destination for compositing.
    pub fn as_surface_mut(&mut self) -> Surface<'_> {
        Surface {
            data: &mut self.data,
            width: self.width,
            height: self.height,
            stride: self.stride,
            format: self.format,
        }
    }

    /// Reinterpret as a source bitmap, for formats that share a layout with
    /// a pixel mode (`A1Msb`, `A8`, `Bgra8888`, little-endian `Argb32`).
    pub fn as_bitmap(&self) -> Result<Bitmap<'_>> {
        let mode = self
            .format
            .same_layout_mode()
            .ok_or_else(|| GlyphworkError::unsupported(self.format.to_string(), "bitmap"))?;
        let pitch = i32::try_from(self.stride)
            .map_err(|_| GlyphworkError::geometry(format!("stride {} too large", self.stride)))?;
        Bitmap::new(self.width, self.height, pitch, mode, &self.data)
    }
}
