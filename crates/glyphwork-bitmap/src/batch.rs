// this_file: crates/glyphwork-bitmap/src/batch.rs

//! Parallel conversion of independent bitmaps.

use glyphwork_core::{Bitmap, PixelBuffer, PixelFormat, Result};
use rayon::prelude::*;

use crate::composite::convert;

/// Convert every bitmap on the rayon thread pool.
///
/// Results keep the input order. The first failure is returned and the
/// remaining buffers are dropped.
pub fn convert_many(bitmaps: &[Bitmap<'_>], format: PixelFormat) -> Result<Vec<PixelBuffer>> {
    log::debug!("converting {} bitmaps to {format} in parallel", bitmaps.len());
    bitmaps
        .par_iter()
        .map(|bitmap| convert(bitmap, format))
        .collect()
}

/// Like [`convert_many`] on a dedicated pool of `threads` workers.
pub fn convert_many_with_threads(
    bitmaps: &[Bitmap<'_>],
    format: PixelFormat,
    threads: usize,
) -> Result<Vec<PixelBuffer>> {
    match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool.install(|| convert_many(bitmaps, format)),
        Err(err) => {
            log::warn!("could not build a {threads}-thread pool ({err}), using the global one");
            convert_many(bitmaps, format)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphwork_core::{GlyphworkError, PixelMode};

    #[test]
    fn keeps_input_order() {
        let data: Vec<[u8; 4]> = (0..32u8).map(|i| [i, i, i, i]).collect();
        let bitmaps: Vec<_> = data
            .iter()
            .map(|d| Bitmap::new(2, 2, 2, PixelMode::Gray, d).unwrap())
            .collect();
        let buffers = convert_many(&bitmaps, PixelFormat::A8).unwrap();
        assert_eq!(buffers.len(), 32);
        for (i, buffer) in buffers.iter().enumerate() {
            assert_eq!(buffer.data(), &[i as u8; 4]);
        }
        let pooled = convert_many_with_threads(&bitmaps, PixelFormat::A8, 2).unwrap();
        assert_eq!(pooled, buffers);
    }

    #[test]
    fn reports_failures() {
        let data = [0u8; 3];
        let bitmaps = [
            Bitmap::new(1, 1, 1, PixelMode::Gray, &data).unwrap(),
            Bitmap::new(3, 1, 3, PixelMode::Lcd, &data).unwrap(),
        ];
        assert!(matches!(
            convert_many(&bitmaps, PixelFormat::A8),
            Err(GlyphworkError::UnsupportedPixelFormat { .. })
        ));
    }
}
