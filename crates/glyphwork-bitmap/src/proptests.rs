use super::*;
use glyphwork_core::{Bitmap, ByteOrder, PixelFormat, PixelMode, Surface};
use proptest::prelude::*;

/// Rows of `width` bytes laid out with `pitch`, padding filled with junk.
fn with_pitch(rows: &[Vec<u8>], pitch: usize) -> Vec<u8> {
    let mut data = vec![0xa5; rows.len() * pitch];
    for (y, row) in rows.iter().enumerate() {
        data[y * pitch..y * pitch + row.len()].copy_from_slice(row);
    }
    data
}

fn image(bytes_per_row: std::ops::Range<usize>) -> impl Strategy<Value = Vec<Vec<u8>>> {
    (bytes_per_row, 1usize..6).prop_flat_map(|(width, height)| {
        prop::collection::vec(prop::collection::vec(any::<u8>(), width), height)
    })
}

// Property: the pixels written do not depend on source or destination pitch
proptest! {
    #[test]
    fn prop_gray_pitch_independence(
        rows in image(1..12),
        src_pad in 0usize..5,
        dst_pad in 0usize..5,
    ) {
        let width = rows[0].len();
        let height = rows.len();

        let tight_data = with_pitch(&rows, width);
        let tight = Bitmap::new(width as u32, height as u32, width as i32, PixelMode::Gray, &tight_data).unwrap();
        let expected = convert(&tight, PixelFormat::A8).unwrap();

        let padded_data = with_pitch(&rows, width + src_pad);
        let padded = Bitmap::new(
            width as u32,
            height as u32,
            (width + src_pad) as i32,
            PixelMode::Gray,
            &padded_data,
        )
        .unwrap();
        let stride = width + dst_pad;
        let mut dst = vec![0u8; stride * height];
        let mut surface = Surface::new(&mut dst, width as u32, height as u32, stride, PixelFormat::A8).unwrap();
        composite(&padded, &mut surface, 0, 0).unwrap();

        for y in 0..height as u32 {
            prop_assert_eq!(surface.row(y), expected.row(y));
        }
    }
}

// Property: bottom-up storage reads the same as top-down storage
proptest! {
    #[test]
    fn prop_negative_pitch_matches_positive(rows in image(1..12), pad in 0usize..3) {
        let width = rows[0].len();
        let pitch = width + pad;
        let top_down = with_pitch(&rows, pitch);
        let reversed: Vec<Vec<u8>> = rows.iter().rev().cloned().collect();
        let bottom_up = with_pitch(&reversed, pitch);

        let h = rows.len() as u32;
        let a = Bitmap::new(width as u32, h, pitch as i32, PixelMode::Gray, &top_down).unwrap();
        let b = Bitmap::new(width as u32, h, -(pitch as i32), PixelMode::Gray, &bottom_up).unwrap();
        prop_assert_eq!(
            convert(&a, PixelFormat::Rgba8888).unwrap(),
            convert(&b, PixelFormat::Rgba8888).unwrap()
        );
    }
}

// Property: mono -> A8 -> mono keeps every pixel
proptest! {
    #[test]
    fn prop_mono_round_trip(rows in image(1..4), trim in 0u32..8, pad in 0usize..3) {
        let row_bytes = rows[0].len();
        let width = (row_bytes as u32 * 8).saturating_sub(trim).max(1);
        let pitch = row_bytes + pad;
        let data = with_pitch(&rows, pitch);
        let source = Bitmap::new(width, rows.len() as u32, pitch as i32, PixelMode::Mono, &data).unwrap();

        let gray = convert(&source, PixelFormat::A8).unwrap();
        prop_assert!(gray.data().iter().all(|&v| v == 0 || v == 0xff));
        let back = convert(&gray.as_bitmap().unwrap(), PixelFormat::A1Msb).unwrap();

        for y in 0..source.rows() {
            for x in 0..width as usize {
                prop_assert_eq!(mono::bit(back.row(y), x), mono::bit(source.row(y), x));
            }
        }
    }
}

// Property: LCD planes are exactly the interleaved samples
proptest! {
    #[test]
    fn prop_lcd_planes(rows in image(3..20)) {
        let subpixels = rows[0].len();
        let data = with_pitch(&rows, subpixels);
        let bitmap = Bitmap::new(subpixels as u32, rows.len() as u32, subpixels as i32, PixelMode::Lcd, &data).unwrap();
        let planes = planes(&bitmap).unwrap();

        prop_assert_eq!(planes.width as usize, subpixels / 3);
        for (y, row) in rows.iter().enumerate() {
            for x in 0..subpixels / 3 {
                prop_assert_eq!(
                    planes.get(x as u32, y as u32),
                    (row[3 * x], row[3 * x + 1], row[3 * x + 2])
                );
            }
        }
    }
}

// Property: both byte orders of Argb32 carry the same channel values
proptest! {
    #[test]
    fn prop_argb32_byte_orders_agree(pixels in prop::collection::vec(any::<[u8; 4]>(), 1..16)) {
        let data: Vec<u8> = pixels.iter().flatten().copied().collect();
        let bitmap = Bitmap::new(pixels.len() as u32, 1, data.len() as i32, PixelMode::Bgra, &data).unwrap();
        let little = convert(&bitmap, PixelFormat::Argb32(ByteOrder::Little)).unwrap();
        let big = convert(&bitmap, PixelFormat::Argb32(ByteOrder::Big)).unwrap();

        for (i, [b, g, r, a]) in pixels.iter().copied().enumerate() {
            let expected = u32::from_be_bytes([a, r, g, b]);
            prop_assert_eq!(ByteOrder::Little.read_u32(&little.data()[4 * i..]), expected);
            prop_assert_eq!(ByteOrder::Big.read_u32(&big.data()[4 * i..]), expected);
        }
    }
}
