// this_file: crates/glyphwork-outline/src/path.rs

//! Recorded glyph paths and their conversions.

use std::fmt::Write;

use glyphwork_core::{BBox, Outline, Point, Result};
use kurbo::{BezPath, ParamCurveExtrema, Shape};

use crate::decompose::{decompose_into, DecomposeOptions, OutlineSink, PathCommand};

/// Commands recorded from one outline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphPath {
    commands: Vec<PathCommand>,
}

impl GlyphPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decompose `outline` and keep the result.
    pub fn from_outline(outline: &Outline<'_>, options: &DecomposeOptions) -> Result<Self> {
        let mut path = GlyphPath::new();
        decompose_into(outline, options, &mut path)?;
        Ok(path)
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<PathCommand> {
        self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of contours, counted by their `MoveTo`s.
    pub fn contour_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::MoveTo(_)))
            .count()
    }

    /// Convert into a `kurbo::BezPath` without touching the coordinates.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        for command in &self.commands {
            command.apply(&mut path);
        }
        path
    }

    /// SVG `d` attribute data: `M x,y L x,y Q cx,cy x,y C ...`, one space
    /// between items, `Z` for closes.
    pub fn to_svg_path_data(&self) -> String {
        let mut data = String::with_capacity(self.commands.len() * 16);
        for command in &self.commands {
            if !data.is_empty() {
                data.push(' ');
            }
            match *command {
                PathCommand::MoveTo(p) => append_command(&mut data, 'M', &[p]),
                PathCommand::LineTo(p) => append_command(&mut data, 'L', &[p]),
                PathCommand::QuadTo(c, p) => append_command(&mut data, 'Q', &[c, p]),
                PathCommand::CubicTo(c1, c2, p) => append_command(&mut data, 'C', &[c1, c2, p]),
                PathCommand::Close => data.push('Z'),
            }
        }
        data
    }

    /// Exact bounding box, including curve extrema.
    ///
    /// Unlike [`Outline::control_box`] this does not grow to off-curve
    /// points the curve never reaches. `None` for an empty path.
    pub fn bounds(&self) -> Option<BBox> {
        let mut bbox = BBox::of_points(self.commands.iter().filter_map(PathCommand::end_point))?;
        for segment in self.to_bez_path().segments() {
            let rect = ParamCurveExtrema::bounding_box(&segment);
            bbox.include(Point::new(rect.x0 as f32, rect.y0 as f32));
            bbox.include(Point::new(rect.x1 as f32, rect.y1 as f32));
        }
        Some(bbox)
    }

    /// Area enclosed by the path, positive for counter-clockwise contours.
    pub fn area(&self) -> f64 {
        self.to_bez_path().area()
    }
}

impl OutlineSink for GlyphPath {
    fn move_to(&mut self, to: Point) {
        self.commands.move_to(to);
    }

    fn line_to(&mut self, to: Point) {
        self.commands.line_to(to);
    }

    fn quad_to(&mut self, ctrl: Point, to: Point) {
        self.commands.quad_to(ctrl, to);
    }

    fn cubic_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.commands.cubic_to(ctrl1, ctrl2, to);
    }

    fn close(&mut self) {
        self.commands.close();
    }
}

impl From<Vec<PathCommand>> for GlyphPath {
    fn from(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }
}

impl OutlineSink for BezPath {
    fn move_to(&mut self, to: Point) {
        BezPath::move_to(self, kurbo_point(to));
    }

    fn line_to(&mut self, to: Point) {
        BezPath::line_to(self, kurbo_point(to));
    }

    fn quad_to(&mut self, ctrl: Point, to: Point) {
        BezPath::quad_to(self, kurbo_point(ctrl), kurbo_point(to));
    }

    fn cubic_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        BezPath::curve_to(self, kurbo_point(ctrl1), kurbo_point(ctrl2), kurbo_point(to));
    }

    fn close(&mut self) {
        self.close_path();
    }
}

fn kurbo_point(p: Point) -> kurbo::Point {
    kurbo::Point::new(p.x as f64, p.y as f64)
}

fn append_command(buf: &mut String, cmd: char, points: &[Point]) {
    buf.push(cmd);
    for point in points {
        // writing to a String cannot fail
        let _ = write!(buf, " {},{}", point.x, point.y);
    }
}
