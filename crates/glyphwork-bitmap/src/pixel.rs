// this_file: crates/glyphwork-bitmap/src/pixel.rs

//! Per-pixel reading of source bitmaps and writing of destination rows.

use glyphwork_core::{Bitmap, GlyphworkError, PixelFormat, PixelMode, Result};

use crate::mono;

/// Straight channel values of one source pixel.
///
/// Coverage-only sources (mono, gray) read as black with the coverage in
/// `a`; subpixel sources read as opaque.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    #[inline]
    pub const fn coverage(a: u8) -> Self {
        Self { r: 0, g: 0, b: 0, a }
    }

    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// The `0xAARRGGBB` word.
    #[inline]
    pub fn argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

/// How written pixels combine with what is already in the destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Blend {
    /// Overwrite
    #[default]
    Replace,
    /// Saturating add per channel, OR for 1-bit formats
    Add,
}

/// Fail unless `mode` can be written as `format`.
pub fn check_supported(mode: PixelMode, format: PixelFormat) -> Result<()> {
    let supported = match mode {
        PixelMode::Mono | PixelMode::Gray => true,
        PixelMode::Lcd | PixelMode::LcdV => matches!(
            format,
            PixelFormat::Argb32(_) | PixelFormat::Bgra8888 | PixelFormat::Rgba8888
        ),
        PixelMode::Bgra => !matches!(format, PixelFormat::A1Msb | PixelFormat::A1Lsb),
        PixelMode::Gray2 | PixelMode::Gray4 => false,
    };
    if supported {
        Ok(())
    } else {
        Err(GlyphworkError::unsupported(mode.to_string(), format.to_string()))
    }
}

/// The source rows that make up one logical row.
#[derive(Debug, Clone, Copy)]
pub struct SourceRow<'a> {
    mode: PixelMode,
    rows: [&'a [u8]; 3],
}

impl<'a> SourceRow<'a> {
    /// Logical row `y`. For `LcdV` that is stored rows `3y`, `3y + 1` and
    /// `3y + 2`.
    pub fn new(bitmap: &Bitmap<'a>, y: u32) -> Self {
        let rows = match bitmap.mode() {
            PixelMode::LcdV => [
                bitmap.row(3 * y),
                bitmap.row(3 * y + 1),
                bitmap.row(3 * y + 2),
            ],
            _ => {
                let row = bitmap.row(y);
                [row, row, row]
            }
        };
        Self {
            mode: bitmap.mode(),
            rows,
        }
    }

    /// Raw bytes of the (first) stored row.
    pub fn bytes(&self) -> &'a [u8] {
        self.rows[0]
    }

    #[inline]
    pub fn pixel(&self, x: usize) -> Pixel {
        let row = self.rows[0];
        match self.mode {
            PixelMode::Mono => Pixel::coverage(if mono::bit(row, x) { 0xff } else { 0 }),
            PixelMode::Gray => Pixel::coverage(row[x]),
            PixelMode::Lcd => Pixel::opaque(row[3 * x], row[3 * x + 1], row[3 * x + 2]),
            PixelMode::LcdV => Pixel::opaque(self.rows[0][x], self.rows[1][x], self.rows[2][x]),
            PixelMode::Bgra => Pixel {
                b: row[4 * x],
                g: row[4 * x + 1],
                r: row[4 * x + 2],
                a: row[4 * x + 3],
            },
            // rejected by check_supported
            PixelMode::Gray2 | PixelMode::Gray4 => Pixel::default(),
        }
    }
}

/// Bytes of a 32-bit destination pixel in memory order.
#[inline]
pub fn encode32(format: PixelFormat, p: Pixel) -> [u8; 4] {
    match format {
        PixelFormat::Argb32(order) => {
            let mut out = [0u8; 4];
            order.write_u32(p.argb(), &mut out);
            out
        }
        PixelFormat::Rgba8888 => [p.r, p.g, p.b, p.a],
        _ => [p.b, p.g, p.r, p.a],
    }
}

/// Write `p` at column `x` of a destination row.
#[inline]
pub fn write(format: PixelFormat, row: &mut [u8], x: usize, p: Pixel, blend: Blend) {
    match format {
        PixelFormat::A1Msb | PixelFormat::A1Lsb => {
            let mask = match format {
                PixelFormat::A1Msb => 0x80u8 >> (x % 8),
                _ => 1u8 << (x % 8),
            };
            let byte = &mut row[x / 8];
            let on = p.a >= mono::THRESHOLD;
            match blend {
                Blend::Replace if on => *byte |= mask,
                Blend::Replace => *byte &= !mask,
                Blend::Add if on => *byte |= mask,
                Blend::Add => {}
            }
        }
        PixelFormat::A8 => {
            let dst = &mut row[x];
            *dst = match blend {
                Blend::Replace => p.a,
                Blend::Add => dst.saturating_add(p.a),
            };
        }
        PixelFormat::Argb32(_) | PixelFormat::Bgra8888 | PixelFormat::Rgba8888 => {
            let bytes = encode32(format, p);
            let dst = &mut row[4 * x..4 * x + 4];
            match blend {
                Blend::Replace => dst.copy_from_slice(&bytes),
                Blend::Add => {
                    for (d, s) in dst.iter_mut().zip(bytes) {
                        *d = d.saturating_add(s);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphwork_core::ByteOrder;

    #[test]
    fn argb_word_layout() {
        let p = Pixel {
            r: 0x11,
            g: 0x22,
            b: 0x33,
            a: 0xff,
        };
        assert_eq!(p.argb(), 0xff11_2233);
        assert_eq!(
            encode32(PixelFormat::Argb32(ByteOrder::Little), p),
            [0x33, 0x22, 0x11, 0xff]
        );
        assert_eq!(
            encode32(PixelFormat::Argb32(ByteOrder::Big), p),
            [0xff, 0x11, 0x22, 0x33]
        );
        assert_eq!(encode32(PixelFormat::Bgra8888, p), [0x33, 0x22, 0x11, 0xff]);
        assert_eq!(encode32(PixelFormat::Rgba8888, p), [0x11, 0x22, 0x33, 0xff]);
    }

    #[test]
    fn support_matrix() {
        assert!(check_supported(PixelMode::Mono, PixelFormat::A1Lsb).is_ok());
        assert!(check_supported(PixelMode::Gray, PixelFormat::A1Msb).is_ok());
        assert!(check_supported(PixelMode::Bgra, PixelFormat::A8).is_ok());
        assert!(check_supported(PixelMode::Lcd, PixelFormat::Rgba8888).is_ok());
        assert!(check_supported(PixelMode::Lcd, PixelFormat::A8).is_err());
        assert!(check_supported(PixelMode::LcdV, PixelFormat::A1Msb).is_err());
        assert!(check_supported(PixelMode::Bgra, PixelFormat::A1Lsb).is_err());
        let err = check_supported(PixelMode::Gray4, PixelFormat::A8).unwrap_err();
        assert_eq!(
            err,
            GlyphworkError::unsupported("Gray4", "A8")
        );
    }

    #[test]
    fn bit_writes() {
        let mut row = [0u8; 2];
        write(PixelFormat::A1Msb, &mut row, 1, Pixel::coverage(0x80), Blend::Replace);
        write(PixelFormat::A1Lsb, &mut row, 9, Pixel::coverage(0xff), Blend::Replace);
        assert_eq!(row, [0b0100_0000, 0b0000_0010]);
        write(PixelFormat::A1Msb, &mut row, 1, Pixel::coverage(0x7f), Blend::Add);
        assert_eq!(row[0], 0b0100_0000);
        write(PixelFormat::A1Msb, &mut row, 1, Pixel::coverage(0x7f), Blend::Replace);
        assert_eq!(row[0], 0);
    }

    #[test]
    fn additive_writes_saturate() {
        let mut row = [200u8, 0, 0, 0, 0];
        write(PixelFormat::A8, &mut row, 0, Pixel::coverage(100), Blend::Add);
        assert_eq!(row[0], 255);
        let mut quad = [10u8, 20, 30, 250];
        write(PixelFormat::Bgra8888, &mut quad, 0, Pixel::opaque(1, 2, 3), Blend::Add);
        assert_eq!(quad, [13, 22, 31, 255]);
    }
}
