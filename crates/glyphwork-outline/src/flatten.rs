// this_file: crates/glyphwork-outline/src/flatten.rs

//! Curve flattening.
//!
//! Quadratic and cubic segments are split with de Casteljau's algorithm
//! until their control points sit within `tolerance` of the chord
//! midpoint. Each contour becomes one closed [`Polygon`].

use glyphwork_core::{FillRule, Point};

use crate::decompose::PathCommand;

/// Default flatness tolerance: 1/16 of a unit
pub const DEFAULT_TOLERANCE: f32 = 1.0 / 16.0;

/// Default recursion limit
pub const DEFAULT_MAX_DEPTH: u32 = 16;

/// Flattening settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlattenOptions {
    /// Largest Manhattan distance a control point may keep from the chord
    /// midpoint before the curve is split again
    pub tolerance: f32,
    /// Splits stop at this depth whatever the flatness
    pub max_depth: u32,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Closed polyline approximating one contour.
///
/// The closing edge from the last point back to the first is implicit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Shoelace area, positive when counter-clockwise.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        let mut twice = 0.0f64;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            twice += a.x as f64 * b.y as f64 - b.x as f64 * a.y as f64;
        }
        twice * 0.5
    }

    /// Point-in-polygon test for this polygon alone.
    pub fn contains(&self, p: Point, rule: FillRule) -> bool {
        is_inside(self.winding(p), rule)
    }

    /// Winding number of `p` with respect to this polygon.
    pub fn winding(&self, p: Point) -> i32 {
        let n = self.points.len();
        let mut winding = 0;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            if a.y <= p.y {
                if b.y > p.y && cross(a, b, p) > 0.0 {
                    winding += 1;
                }
            } else if b.y <= p.y && cross(a, b, p) < 0.0 {
                winding -= 1;
            }
        }
        winding
    }
}

/// Whether `p` is inside the shape described by all `polygons` together.
pub fn contains(polygons: &[Polygon], p: Point, rule: FillRule) -> bool {
    let winding: i32 = polygons.iter().map(|polygon| polygon.winding(p)).sum();
    is_inside(winding, rule)
}

fn is_inside(winding: i32, rule: FillRule) -> bool {
    match rule {
        FillRule::NonZero => winding != 0,
        FillRule::EvenOdd => winding % 2 != 0,
    }
}

/// Which side of the line `a -> b` the point lies on.
fn cross(a: Point, b: Point, p: Point) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y)
}

/// Approximate `commands` with one polygon per contour.
pub fn flatten(commands: &[PathCommand], options: &FlattenOptions) -> Vec<Polygon> {
    let mut polygons = Vec::new();
    let mut current: Vec<Point> = Vec::new();
    let mut pen = Point::default();

    for command in commands {
        match *command {
            PathCommand::MoveTo(p) => {
                finish(&mut polygons, &mut current);
                current.push(p);
                pen = p;
            }
            PathCommand::LineTo(p) => {
                current.push(p);
                pen = p;
            }
            PathCommand::QuadTo(c, p) => {
                subdivide_quadratic(pen, c, p, options, &mut |q| current.push(q), 0);
                pen = p;
            }
            PathCommand::CubicTo(c1, c2, p) => {
                subdivide_cubic(pen, c1, c2, p, options, &mut |q| current.push(q), 0);
                pen = p;
            }
            PathCommand::Close => finish(&mut polygons, &mut current),
        }
    }
    finish(&mut polygons, &mut current);

    log::trace!("flattened {} commands into {} polygons", commands.len(), polygons.len());
    polygons
}

fn finish(polygons: &mut Vec<Polygon>, current: &mut Vec<Point>) {
    if current.is_empty() {
        return;
    }
    let mut points = std::mem::take(current);
    // the decomposer returns to the start point explicitly
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    polygons.push(Polygon { points });
}

/// Manhattan distance of the control point from the chord midpoint.
pub fn quadratic_flatness(p0: Point, p1: Point, p2: Point) -> f32 {
    let mid = Point::midpoint(p0, p2);
    (p1.x - mid.x).abs() + (p1.y - mid.y).abs()
}

/// The larger of both control points' Manhattan distances from the chord
/// midpoint.
pub fn cubic_flatness(p0: Point, p1: Point, p2: Point, p3: Point) -> f32 {
    let mid = Point::midpoint(p0, p3);
    let d1 = (p1.x - mid.x).abs() + (p1.y - mid.y).abs();
    let d2 = (p2.x - mid.x).abs() + (p2.y - mid.y).abs();
    d1.max(d2)
}

/// Emit the end points of line segments approximating a quadratic curve.
/// The start point is not emitted.
pub fn subdivide_quadratic<F>(
    p0: Point,
    p1: Point,
    p2: Point,
    options: &FlattenOptions,
    output: &mut F,
    depth: u32,
) where
    F: FnMut(Point),
{
    if depth >= options.max_depth || quadratic_flatness(p0, p1, p2) <= options.tolerance {
        output(p2);
        return;
    }

    let m01 = Point::midpoint(p0, p1);
    let m12 = Point::midpoint(p1, p2);
    let m012 = Point::midpoint(m01, m12);

    subdivide_quadratic(p0, m01, m012, options, output, depth + 1);
    subdivide_quadratic(m012, m12, p2, options, output, depth + 1);
}

/// Emit the end points of line segments approximating a cubic curve.
/// The start point is not emitted.
pub fn subdivide_cubic<F>(
    p0: Point,
    p1: Point,
    p2: Point,
    p3: Point,
    options: &FlattenOptions,
    output: &mut F,
    depth: u32,
) where
    F: FnMut(Point),
{
    if depth >= options.max_depth || cubic_flatness(p0, p1, p2, p3) <= options.tolerance {
        output(p3);
        return;
    }

    let m01 = Point::midpoint(p0, p1);
    let m12 = Point::midpoint(p1, p2);
    let m23 = Point::midpoint(p2, p3);
    let m012 = Point::midpoint(m01, m12);
    let m123 = Point::midpoint(m12, m23);
    let m0123 = Point::midpoint(m012, m123);

    subdivide_cubic(p0, m01, m012, m0123, options, output, depth + 1);
    subdivide_cubic(m0123, m123, m23, p3, options, output, depth + 1);
}
