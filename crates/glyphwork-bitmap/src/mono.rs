// this_file: crates/glyphwork-bitmap/src/mono.rs

//! 1-bit rows: bit order, packing and unpacking.
//!
//! Font engines store monochrome rows most significant bit first: pixel 0
//! is bit 7 of byte 0. Little-endian A1 surfaces expect the opposite order
//! inside each byte, which is what [`reverse_bits_in_place`] is for.

/// Coverage at or above this value packs to a set bit.
pub const THRESHOLD: u8 = 0x80;

/// Reverse the bit order of every byte.
pub fn reverse_bits_in_place(bytes: &mut [u8]) {
    for byte in bytes {
        *byte = byte.reverse_bits();
    }
}

/// Whether pixel `x` of an MSB-first row is set.
///
/// # Panics
///
/// If `x / 8` is out of bounds.
#[inline]
pub fn bit(row: &[u8], x: usize) -> bool {
    row[x / 8] & (0x80 >> (x % 8)) != 0
}

/// Expand the first `width` pixels of an MSB-first row to one byte each,
/// `0xff` for set bits and `0x00` otherwise.
///
/// # Panics
///
/// If `row` holds fewer than `width` bits or `out` fewer than `width`
/// bytes.
pub fn unpack_row(row: &[u8], width: usize, out: &mut [u8]) {
    for (x, dst) in out[..width].iter_mut().enumerate() {
        *dst = if bit(row, x) { 0xff } else { 0x00 };
    }
}

/// Pack coverage bytes into an MSB-first row, thresholding at
/// [`THRESHOLD`]. Unused bits of the last byte are cleared.
///
/// # Panics
///
/// If `out` is shorter than `coverage.len()` bits.
pub fn pack_row(coverage: &[u8], out: &mut [u8]) {
    let bytes = coverage.len().div_ceil(8);
    out[..bytes].fill(0);
    for (x, &value) in coverage.iter().enumerate() {
        if value >= THRESHOLD {
            out[x / 8] |= 0x80 >> (x % 8);
        }
    }
}

/// Copy `width` pixels of an MSB-first row into a destination row starting
/// at pixel `x`, in either bit order. `or` keeps bits that are already set.
pub(crate) fn blit_row(
    src: &[u8],
    dst: &mut [u8],
    x: usize,
    width: usize,
    lsb_first: bool,
    or: bool,
) {
    let mut done = 0;
    if x % 8 == 0 {
        let whole = width / 8;
        let start = x / 8;
        let bytes = &mut dst[start..start + whole];
        if or {
            for (d, &s) in bytes.iter_mut().zip(&src[..whole]) {
                *d |= if lsb_first { s.reverse_bits() } else { s };
            }
        } else {
            bytes.copy_from_slice(&src[..whole]);
            if lsb_first {
                reverse_bits_in_place(bytes);
            }
        }
        done = whole * 8;
    }
    for i in done..width {
        let dx = x + i;
        let mask = if lsb_first {
            1u8 << (dx % 8)
        } else {
            0x80u8 >> (dx % 8)
        };
        let byte = &mut dst[dx / 8];
        if bit(src, i) {
            *byte |= mask;
        } else if !or {
            *byte &= !mask;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverses_each_byte() {
        let mut bytes = [0b1000_0000, 0b1100_1010, 0xff, 0x00];
        reverse_bits_in_place(&mut bytes);
        assert_eq!(bytes, [0b0000_0001, 0b0101_0011, 0xff, 0x00]);
    }

    #[test]
    fn unpack_reads_msb_first() {
        let mut out = [0u8; 10];
        unpack_row(&[0b1010_0000, 0b0100_0000], 10, &mut out);
        assert_eq!(out, [0xff, 0, 0xff, 0, 0, 0, 0, 0, 0, 0xff]);
    }

    #[test]
    fn pack_thresholds_and_clears_padding() {
        let mut out = [0xffu8; 2];
        pack_row(&[0x80, 0x7f, 0xff, 0, 0, 0, 0, 0, 0xa0], &mut out);
        assert_eq!(out, [0b1010_0000, 0b1000_0000]);
    }

    #[test]
    fn blit_aligned_and_unaligned() {
        let src = [0b1111_0000, 0b1000_0000];

        let mut dst = [0u8; 3];
        blit_row(&src, &mut dst, 8, 9, false, false);
        assert_eq!(dst, [0, 0b1111_0000, 0b1000_0000]);

        let mut dst = [0u8; 3];
        blit_row(&src, &mut dst, 8, 9, true, false);
        assert_eq!(dst, [0, 0b0000_1111, 0b0000_0001]);

        let mut dst = [0xffu8; 2];
        blit_row(&src, &mut dst, 3, 9, false, false);
        assert_eq!(dst, [0b1111_1110, 0b0001_1111]);

        let mut dst = [0b0000_0001u8, 0];
        blit_row(&src, &mut dst, 0, 8, false, true);
        assert_eq!(dst[0], 0b1111_0001);
    }
}
