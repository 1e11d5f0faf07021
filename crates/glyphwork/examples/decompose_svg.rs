//! Turn a hand-built glyph outline into an SVG file
//!
//! The outline is a lowercase "o" drawn the way a TrueType font stores it:
//! on-curve corners joined by single conic control points on the outer
//! contour, and a run of consecutive conic points on the inner one, whose
//! implied on-curve midpoints the decomposer fills in.
//!
//! Run with `RUST_LOG=debug` to see what the decomposer logs.

use std::fmt::Write as _;
use std::fs;

use anyhow::Context;
use glyphwork::outline::flatten::contains;
use glyphwork::outline::{flatten, FlattenOptions};
use glyphwork::prelude::*;

fn letter_o() -> glyphwork::Result<OwnedOutline> {
    OwnedOutline::builder()
        // outer, clockwise with y up
        .on(300.0, 0.0)
        .conic(40.0, 0.0)
        .on(40.0, 260.0)
        .conic(40.0, 520.0)
        .on(300.0, 520.0)
        .conic(560.0, 520.0)
        .on(560.0, 260.0)
        .conic(560.0, 0.0)
        .close_contour()
        // inner, counter-clockwise, conics only
        .conic(180.0, 100.0)
        .conic(420.0, 100.0)
        .conic(420.0, 420.0)
        .conic(180.0, 420.0)
        .close_contour()
        .build()
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let outline = letter_o()?;
    let view = outline.as_outline();

    // an all-conic contour has no on-curve point to start from
    let strict = DecomposeOptions::default();
    if let Err(err) = decompose(&view, &strict) {
        println!("Rejected with default options: {err}");
    }

    let options = strict
        .with_off_curve_start(OffCurveStart::Infer)
        .with_close_contours(true);
    let path = GlyphPath::from_outline(&view, &options).context("decomposing outline")?;
    println!(
        "{} commands in {} contours",
        path.commands().len(),
        path.contour_count()
    );

    let bounds = path.bounds().context("outline has no points")?;
    println!(
        "Bounds: ({}, {}) - ({}, {})",
        bounds.x_min, bounds.y_min, bounds.x_max, bounds.y_max
    );

    let polygons = flatten(path.commands(), &FlattenOptions::default());
    let centre = Point::new(300.0, 260.0);
    println!(
        "Centre is {}",
        if contains(&polygons, centre, view.fill_rule()) {
            "ink"
        } else {
            "counter"
        }
    );

    // SVG's y axis points down: flip the outline into the view box
    let margin = 20.0;
    let mut svg = String::new();
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
        bounds.x_min - margin,
        -bounds.y_max - margin,
        bounds.width() + 2.0 * margin,
        bounds.height() + 2.0 * margin
    )?;
    writeln!(
        svg,
        r#"  <path transform="scale(1 -1)" fill-rule="nonzero" d="{}"/>"#,
        path.to_svg_path_data()
    )?;
    writeln!(svg, "</svg>")?;

    let output_path = "glyph_o.svg";
    fs::write(output_path, svg).with_context(|| format!("writing {output_path}"))?;
    println!("Saved to {output_path}");

    Ok(())
}
