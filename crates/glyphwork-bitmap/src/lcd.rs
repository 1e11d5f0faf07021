// this_file: crates/glyphwork-bitmap/src/lcd.rs

//! Subpixel (LCD) bitmaps.
//!
//! A horizontal LCD bitmap stores R, G, B samples side by side, so its
//! engine width is three times the pixel width. The vertical variant
//! stores them in three consecutive rows instead. A trailing partial
//! triple is ignored.

use glyphwork_core::{Bitmap, GlyphworkError, PixelMode, Result};

use crate::pixel::SourceRow;

/// The three colour planes of a subpixel bitmap, row-major.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubpixelPlanes {
    pub width: u32,
    pub height: u32,
    pub red: Vec<u8>,
    pub green: Vec<u8>,
    pub blue: Vec<u8>,
}

impl SubpixelPlanes {
    /// `(r, g, b)` of pixel `(x, y)`.
    ///
    /// # Panics
    ///
    /// If the pixel is outside the planes.
    pub fn get(&self, x: u32, y: u32) -> (u8, u8, u8) {
        let i = (y * self.width + x) as usize;
        (self.red[i], self.green[i], self.blue[i])
    }
}

/// Split an `Lcd` or `LcdV` bitmap into colour planes.
pub fn planes(bitmap: &Bitmap<'_>) -> Result<SubpixelPlanes> {
    if !matches!(bitmap.mode(), PixelMode::Lcd | PixelMode::LcdV) {
        return Err(GlyphworkError::unsupported(
            bitmap.mode().to_string(),
            "subpixel planes",
        ));
    }

    let width = bitmap.logical_width();
    let height = bitmap.logical_height();
    let len = width as usize * height as usize;
    let mut planes = SubpixelPlanes {
        width,
        height,
        red: Vec::with_capacity(len),
        green: Vec::with_capacity(len),
        blue: Vec::with_capacity(len),
    };

    for y in 0..height {
        let row = SourceRow::new(bitmap, y);
        for x in 0..width as usize {
            let p = row.pixel(x);
            planes.red.push(p.r);
            planes.green.push(p.g);
            planes.blue.push(p.b);
        }
    }

    log::trace!("split {} bitmap into {width}x{height} planes", bitmap.mode());
    Ok(planes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_triplets() {
        // two pixels and a stray subpixel per row, pitch 8
        let data = [
            1, 2, 3, 4, 5, 6, 99, 0, //
            7, 8, 9, 10, 11, 12, 99, 0,
        ];
        let bitmap = Bitmap::new(7, 2, 8, PixelMode::Lcd, &data).unwrap();
        let planes = planes(&bitmap).unwrap();
        assert_eq!((planes.width, planes.height), (2, 2));
        assert_eq!(planes.red, vec![1, 4, 7, 10]);
        assert_eq!(planes.green, vec![2, 5, 8, 11]);
        assert_eq!(planes.blue, vec![3, 6, 9, 12]);
        assert_eq!(planes.get(1, 1), (10, 11, 12));
    }

    #[test]
    fn vertical_rows() {
        let data = [
            1, 2, // r
            3, 4, // g
            5, 6, // b
            7, 8, // r
            9, 10, // g
            11, 12, // b
            99, 99, // partial
        ];
        let bitmap = Bitmap::new(2, 7, 2, PixelMode::LcdV, &data).unwrap();
        let planes = planes(&bitmap).unwrap();
        assert_eq!((planes.width, planes.height), (2, 2));
        assert_eq!(planes.get(0, 0), (1, 3, 5));
        assert_eq!(planes.get(1, 1), (8, 10, 12));
    }

    #[test]
    fn vertical_bottom_up() {
        // stored bottom row first
        let data = [5, 3, 1];
        let bitmap = Bitmap::new(1, 3, -1, PixelMode::LcdV, &data).unwrap();
        assert_eq!(planes(&bitmap).unwrap().get(0, 0), (1, 3, 5));
    }

    #[test]
    fn rejects_other_modes() {
        let data = [0u8; 4];
        let bitmap = Bitmap::new(2, 2, 2, PixelMode::Gray, &data).unwrap();
        assert!(matches!(
            planes(&bitmap),
            Err(GlyphworkError::UnsupportedPixelFormat { .. })
        ));
    }
}
