//! Lay out a few synthetic glyph bitmaps on a line and save the result
//!
//! Gray and mono glyphs are added into an A8 line buffer, each with its own
//! pitch, one of them stored bottom-up. A subpixel glyph is then converted
//! to RGBA on its own. Both results are written as binary PNM files.

use std::fs;

use anyhow::Context;
use glyphwork::prelude::*;

/// A filled ring as 8-bit coverage, `size` x `size`, padded to `pitch`.
fn ring(size: u32, pitch: usize) -> Vec<u8> {
    let mut data = vec![0u8; pitch * size as usize];
    let c = (size as f32 - 1.0) / 2.0;
    for y in 0..size {
        for x in 0..size {
            let d = ((x as f32 - c).powi(2) + (y as f32 - c).powi(2)).sqrt();
            let edge = (c - d).min(d - c * 0.5);
            let coverage = (edge + 0.5).clamp(0.0, 1.0);
            data[y as usize * pitch + x as usize] = (coverage * 255.0).round() as u8;
        }
    }
    data
}

/// A vertical bar as 1-bit rows, stored bottom-up.
fn bar(width: u32, height: u32) -> (Vec<u8>, i32) {
    let pitch = (width as usize).div_ceil(8) + 1;
    let mut data = vec![0u8; pitch * height as usize];
    for row in data.chunks_mut(pitch) {
        for x in width / 3..2 * width / 3 {
            row[x as usize / 8] |= 0x80 >> (x % 8);
        }
    }
    (data, -(pitch as i32))
}

/// Write an 8-bit grayscale buffer as binary PGM, ink dark on white.
fn write_pgm(path: &str, buffer: &PixelBuffer) -> anyhow::Result<()> {
    let mut out = format!("P5\n{} {}\n255\n", buffer.width(), buffer.height()).into_bytes();
    for y in 0..buffer.height() {
        out.extend(
            buffer.row(y)[..buffer.width() as usize]
                .iter()
                .map(|&v| 255 - v),
        );
    }
    fs::write(path, out).with_context(|| format!("writing {path}"))
}

/// Write an RGBA buffer as binary PPM, dropping alpha.
fn write_ppm(path: &str, buffer: &PixelBuffer) -> anyhow::Result<()> {
    let mut out = format!("P6\n{} {}\n255\n", buffer.width(), buffer.height()).into_bytes();
    for y in 0..buffer.height() {
        for px in buffer.row(y).chunks_exact(4) {
            out.extend_from_slice(&px[..3]);
        }
    }
    fs::write(path, out).with_context(|| format!("writing {path}"))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let size = 24u32;
    let ring_data = ring(size, size as usize + 3);
    let o = Bitmap::new(size, size, size as i32 + 3, PixelMode::Gray, &ring_data)?;
    let (bar_data, bar_pitch) = bar(size / 2, size);
    let stroke = Bitmap::new(size / 2, size, bar_pitch, PixelMode::Mono, &bar_data)?;

    // "o|o|o", with neighbours overlapping by two pixels
    let glyphs = [&o, &stroke, &o, &stroke, &o];
    let advance = |g: &Bitmap<'_>| g.width() - 2;
    let width = glyphs.iter().map(|&g| advance(g)).sum::<u32>() + 2 + 8;
    let mut line = PixelBuffer::new(width, size + 8, PixelFormat::A8);

    let add = CompositeOptions::default().with_blend(Blend::Add);
    let mut pen = 4;
    {
        let mut surface = line.as_surface_mut();
        for glyph in glyphs {
            composite_with(glyph, &mut surface, pen, 4, &add)?;
            pen += advance(glyph);
        }
    }
    println!("Composited {} glyphs into {}x{}", glyphs.len(), width, size + 8);
    write_pgm("line.pgm", &line)?;

    // subpixel rendering of the same ring: triple each coverage sample
    // with a slight colour fringe
    let lcd_data: Vec<u8> = ring_data
        .chunks(size as usize + 3)
        .flat_map(|row| {
            row[..size as usize]
                .iter()
                .flat_map(|&v| [v, v.saturating_sub(16), v.saturating_sub(32)])
                .collect::<Vec<_>>()
        })
        .map(|v| 255 - v)
        .collect();
    let lcd = Bitmap::new(3 * size, size, 3 * size as i32, PixelMode::Lcd, &lcd_data)?;
    let rgba = convert(&lcd, PixelFormat::Rgba8888)?;
    write_ppm("ring_lcd.ppm", &rgba)?;

    // LCD has no coverage channel, so A8 is refused
    if let Err(err) = convert(&lcd, PixelFormat::A8) {
        println!("As expected: {err}");
    }

    println!("Saved line.pgm and ring_lcd.ppm");
    Ok(())
}
