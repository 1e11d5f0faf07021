// this_file: crates/glyphwork-core/src/bitmap.rs

//! Rasterized glyph bitmaps as the font engine hands them out.

use std::fmt;

use crate::error::{GlyphworkError, Result};

/// Pixel layout of a source bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelMode {
    /// 1 bit per pixel, most significant bit leftmost
    Mono,
    /// 8-bit coverage
    Gray,
    /// 2 bits per pixel (recognized, never converted)
    Gray2,
    /// 4 bits per pixel (recognized, never converted)
    Gray4,
    /// Horizontal subpixel: R, G, B bytes side by side in each row
    Lcd,
    /// Vertical subpixel: R, G, B in three consecutive rows
    LcdV,
    /// Premultiplied B, G, R, A bytes
    Bgra,
}

impl PixelMode {
    /// Decode the engine's pixel-mode enumeration.
    pub fn from_raw(raw: u8) -> Result<Self> {
        match raw {
            1 => Ok(PixelMode::Mono),
            2 => Ok(PixelMode::Gray),
            3 => Ok(PixelMode::Gray2),
            4 => Ok(PixelMode::Gray4),
            5 => Ok(PixelMode::Lcd),
            6 => Ok(PixelMode::LcdV),
            7 => Ok(PixelMode::Bgra),
            other => Err(GlyphworkError::unsupported(
                format!("pixel mode {other}"),
                "any format",
            )),
        }
    }

    pub fn to_raw(self) -> u8 {
        match self {
            PixelMode::Mono => 1,
            PixelMode::Gray => 2,
            PixelMode::Gray2 => 3,
            PixelMode::Gray4 => 4,
            PixelMode::Lcd => 5,
            PixelMode::LcdV => 6,
            PixelMode::Bgra => 7,
        }
    }

    /// Bytes needed to store `width` pixels (subpixel columns for `Lcd`).
    pub fn min_row_bytes(self, width: u32) -> usize {
        let width = width as usize;
        match self {
            PixelMode::Mono => width.div_ceil(8),
            PixelMode::Gray2 => width.div_ceil(4),
            PixelMode::Gray4 => width.div_ceil(2),
            PixelMode::Gray | PixelMode::Lcd | PixelMode::LcdV => width,
            PixelMode::Bgra => width * 4,
        }
    }
}

impl fmt::Display for PixelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PixelMode::Mono => "Mono",
            PixelMode::Gray => "Gray",
            PixelMode::Gray2 => "Gray2",
            PixelMode::Gray4 => "Gray4",
            PixelMode::Lcd => "Lcd",
            PixelMode::LcdV => "LcdV",
            PixelMode::Bgra => "Bgra",
        };
        f.write_str(name)
    }
}

/// Borrowed view of a glyph bitmap.
///
/// `width` and `rows` are the engine's values: for [`PixelMode::Lcd`] the
/// width counts subpixel columns, for [`PixelMode::LcdV`] the rows count
/// subpixel rows.
///
/// A negative `pitch` marks bottom-up storage. The slice then starts at
/// the lowest address, which holds the bottom row; [`Bitmap::row`] hides
/// this and always counts rows from the top.
#[derive(Debug, Clone, Copy)]
pub struct Bitmap<'a> {
    width: u32,
    rows: u32,
    pitch: i32,
    mode: PixelMode,
    buffer: &'a [u8],
}

impl<'a> Bitmap<'a> {
    pub fn new(
        width: u32,
        rows: u32,
        pitch: i32,
        mode: PixelMode,
        buffer: &'a [u8],
    ) -> Result<Self> {
        let row_bytes = mode.min_row_bytes(width);
        let abs_pitch = pitch.unsigned_abs() as usize;
        if rows > 0 && abs_pitch < row_bytes {
            return Err(GlyphworkError::geometry(format!(
                "pitch {pitch} is smaller than {row_bytes} bytes needed for {width} {mode} pixels"
            )));
        }
        let needed = rows as usize * abs_pitch;
        if buffer.len() < needed {
            return Err(GlyphworkError::geometry(format!(
                "bitmap buffer holds {} bytes, {rows} rows of pitch {pitch} need {needed}",
                buffer.len()
            )));
        }
        Ok(Self {
            width,
            rows,
            pitch,
            mode,
            buffer,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn pitch(&self) -> i32 {
        self.pitch
    }

    pub fn mode(&self) -> PixelMode {
        self.mode
    }

    pub fn buffer(&self) -> &'a [u8] {
        self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.rows == 0
    }

    /// Width in pixels after grouping subpixels.
    ///
    /// `Lcd` bitmaps whose width is not a multiple of three lose the
    /// trailing partial pixel.
    pub fn logical_width(&self) -> u32 {
        match self.mode {
            PixelMode::Lcd => self.width / 3,
            _ => self.width,
        }
    }

    /// Height in pixels after grouping subpixel rows.
    pub fn logical_height(&self) -> u32 {
        match self.mode {
            PixelMode::LcdV => self.rows / 3,
            _ => self.rows,
        }
    }

    /// Bytes of pixel data in each row, excluding padding.
    pub fn row_bytes(&self) -> usize {
        self.mode.min_row_bytes(self.width)
    }

    /// Visual row `y`, counted from the top, without padding.
    ///
    /// # Panics
    ///
    /// If `y >= rows`.
    pub fn row(&self, y: u32) -> &'a [u8] {
        let abs_pitch = self.pitch.unsigned_abs() as usize;
        let stored = if self.pitch >= 0 {
            y as usize
        } else {
            (self.rows - 1 - y) as usize
        };
        let start = stored * abs_pitch;
        &self.buffer[start..start + self.row_bytes()]
    }
}
