// this_file: crates/glyphwork-core/src/outline.rs

//! Glyph outlines as the font engine stores them.
//!
//! An outline is a flat array of points, a parallel array of tags, and a
//! table of inclusive contour end indices. [`Outline`] borrows those arrays
//! for the duration of a call; [`OwnedOutline`] keeps its own copy for
//! callers that need one (tests, hand-built shapes, transformed outlines).

use std::ops::{Add, Mul, Sub};

use crate::error::{GlyphworkError, Result};
use crate::fixed::F26Dot6;

/// A point in font units (or whatever unit the caller scaled to).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Decode a point stored as two 26.6 values.
    pub fn from_fixed(x: F26Dot6, y: F26Dot6) -> Self {
        Self::new(x.to_float(), y.to_float())
    }

    /// The implied on-curve point between two conic control points.
    ///
    /// Computed as `(a + b) / 2` per component; halving is exact in binary
    /// floating point, so the only rounding is the one in the sum.
    #[inline]
    pub fn midpoint(a: Point, b: Point) -> Point {
        Point::new((a.x + b.x) * 0.5, (a.y + b.y) * 0.5)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;

    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Point::new(x, y)
    }
}

/// Classification of an outline point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointTag {
    /// Anchor the curve passes through
    On,
    /// Quadratic (second order) control point
    Conic,
    /// One of the two control points of a cubic segment
    Cubic,
}

impl PointTag {
    const RAW_CONIC: u8 = 0b00;
    const RAW_ON: u8 = 0b01;
    const RAW_CUBIC: u8 = 0b10;
    const RAW_MASK: u8 = 0b11;

    /// Decode an engine tag byte.
    ///
    /// Only the two low bits carry the curve type; dropout bits above them
    /// are ignored. The combination `0b11` is reserved and rejected.
    pub fn from_raw(raw: u8) -> Result<Self> {
        match raw & Self::RAW_MASK {
            Self::RAW_ON => Ok(PointTag::On),
            Self::RAW_CONIC => Ok(PointTag::Conic),
            Self::RAW_CUBIC => Ok(PointTag::Cubic),
            _ => Err(GlyphworkError::malformed(
                0,
                0,
                format!("reserved point tag 0x{raw:02x}"),
            )),
        }
    }

    pub fn to_raw(self) -> u8 {
        match self {
            PointTag::On => Self::RAW_ON,
            PointTag::Conic => Self::RAW_CONIC,
            PointTag::Cubic => Self::RAW_CUBIC,
        }
    }

    #[inline]
    pub fn is_on_curve(self) -> bool {
        self == PointTag::On
    }
}

/// Outline flag bits, as set by the font engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OutlineFlags(u32);

impl OutlineFlags {
    pub const NONE: OutlineFlags = OutlineFlags(0x0);
    pub const OWNER: OutlineFlags = OutlineFlags(0x1);
    pub const EVEN_ODD_FILL: OutlineFlags = OutlineFlags(0x2);
    pub const REVERSE_FILL: OutlineFlags = OutlineFlags(0x4);
    pub const IGNORE_DROPOUTS: OutlineFlags = OutlineFlags(0x8);
    pub const SMART_DROPOUTS: OutlineFlags = OutlineFlags(0x10);
    pub const INCLUDE_STUBS: OutlineFlags = OutlineFlags(0x20);
    pub const HIGH_PRECISION: OutlineFlags = OutlineFlags(0x100);
    pub const SINGLE_PASS: OutlineFlags = OutlineFlags(0x200);

    const ALL: u32 = 0x33f;

    /// Keep the known bits, drop everything else.
    pub const fn from_bits_truncate(bits: u32) -> Self {
        OutlineFlags(bits & Self::ALL)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: OutlineFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn union(self, other: OutlineFlags) -> Self {
        OutlineFlags(self.0 | other.0)
    }
}

/// How the inside of an outline is decided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

/// Winding direction of an outline's contours (y axis pointing up).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// TrueType convention: filled contours run clockwise
    Clockwise,
    /// PostScript convention: filled contours run counter-clockwise
    CounterClockwise,
    /// Empty or degenerate outline
    None,
}

/// Side of a stroked path, relative to the direction of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrokeBorder {
    Left,
    Right,
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

impl BBox {
    /// Degenerate box holding a single point.
    pub fn from_point(p: Point) -> Self {
        Self {
            x_min: p.x,
            y_min: p.y,
            x_max: p.x,
            y_max: p.y,
        }
    }

    pub fn include(&mut self, p: Point) {
        self.x_min = self.x_min.min(p.x);
        self.y_min = self.y_min.min(p.y);
        self.x_max = self.x_max.max(p.x);
        self.y_max = self.y_max.max(p.y);
    }

    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    /// Smallest box containing every point, `None` if there are none.
    pub fn of_points<I: IntoIterator<Item = Point>>(points: I) -> Option<BBox> {
        let mut iter = points.into_iter();
        let mut bbox = BBox::from_point(iter.next()?);
        for p in iter {
            bbox.include(p);
        }
        Some(bbox)
    }
}

/// One closed loop of an outline.
#[derive(Debug, Clone, Copy)]
pub struct Contour<'a> {
    /// Index of this contour's first point within the whole outline
    pub first: usize,
    pub points: &'a [Point],
    pub tags: &'a [PointTag],
}

impl<'a> Contour<'a> {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Twice the signed area of the control polygon, positive when
    /// counter-clockwise.
    pub fn signed_area2(&self) -> f64 {
        let n = self.points.len();
        let mut area = 0.0f64;
        for i in 0..n {
            let prev = self.points[(i + n - 1) % n];
            let cur = self.points[i];
            area += (cur.y as f64 - prev.y as f64) * (cur.x as f64 + prev.x as f64);
        }
        area
    }
}

/// Borrowed, validated view of an outline.
#[derive(Debug, Clone, Copy)]
pub struct Outline<'a> {
    points: &'a [Point],
    tags: &'a [PointTag],
    contour_ends: &'a [usize],
    flags: OutlineFlags,
}

impl<'a> Outline<'a> {
    /// Wrap engine arrays after checking that they agree with each other.
    ///
    /// `contour_ends` holds the inclusive index of each contour's last
    /// point; the indices must increase strictly and the last one must be
    /// the last point.
    pub fn new(
        points: &'a [Point],
        tags: &'a [PointTag],
        contour_ends: &'a [usize],
        flags: OutlineFlags,
    ) -> Result<Self> {
        if points.len() != tags.len() {
            return Err(GlyphworkError::malformed(
                0,
                points.len().min(tags.len()),
                format!("{} points but {} tags", points.len(), tags.len()),
            ));
        }

        let mut next_first = 0usize;
        for (contour, &end) in contour_ends.iter().enumerate() {
            if end < next_first || end >= points.len() {
                return Err(GlyphworkError::malformed(
                    contour,
                    end,
                    format!(
                        "contour end {end} out of order or past the last point ({} points)",
                        points.len()
                    ),
                ));
            }
            next_first = end + 1;
        }
        if next_first != points.len() {
            return Err(GlyphworkError::malformed(
                contour_ends.len(),
                next_first,
                "points after the last contour end",
            ));
        }

        Ok(Self {
            points,
            tags,
            contour_ends,
            flags,
        })
    }

    pub fn points(&self) -> &'a [Point] {
        self.points
    }

    pub fn tags(&self) -> &'a [PointTag] {
        self.tags
    }

    pub fn contour_ends(&self) -> &'a [usize] {
        self.contour_ends
    }

    pub fn flags(&self) -> OutlineFlags {
        self.flags
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contour_count(&self) -> usize {
        self.contour_ends.len()
    }

    /// Contours in storage order.
    pub fn contours(&self) -> impl Iterator<Item = Contour<'a>> + 'a {
        let points = self.points;
        let tags = self.tags;
        let mut first = 0usize;
        self.contour_ends.iter().map(move |&end| {
            let contour = Contour {
                first,
                points: &points[first..=end],
                tags: &tags[first..=end],
            };
            first = end + 1;
            contour
        })
    }

    /// Contour number `index`, if there is one.
    pub fn contour(&self, index: usize) -> Option<Contour<'a>> {
        let end = *self.contour_ends.get(index)?;
        let first = match index {
            0 => 0,
            _ => self.contour_ends[index - 1] + 1,
        };
        Some(Contour {
            first,
            points: &self.points[first..=end],
            tags: &self.tags[first..=end],
        })
    }

    /// Box around every control point, on- or off-curve.
    ///
    /// Cheaper than the exact bounds and never smaller than them.
    pub fn control_box(&self) -> Option<BBox> {
        BBox::of_points(self.points.iter().copied())
    }

    /// Direction of the outline, decided by the total signed area of its
    /// control polygons.
    pub fn orientation(&self) -> Orientation {
        let area: f64 = self.contours().map(|c| c.signed_area2()).sum();
        if area > 0.0 {
            Orientation::CounterClockwise
        } else if area < 0.0 {
            Orientation::Clockwise
        } else {
            Orientation::None
        }
    }

    /// The stroke border that lies outside the filled area.
    pub fn outside_border(&self) -> StrokeBorder {
        match self.orientation() {
            Orientation::Clockwise => StrokeBorder::Left,
            _ => StrokeBorder::Right,
        }
    }

    /// The stroke border that lies inside the filled area.
    pub fn inside_border(&self) -> StrokeBorder {
        match self.outside_border() {
            StrokeBorder::Left => StrokeBorder::Right,
            StrokeBorder::Right => StrokeBorder::Left,
        }
    }

    pub fn fill_rule(&self) -> FillRule {
        if self.flags.contains(OutlineFlags::EVEN_ODD_FILL) {
            FillRule::EvenOdd
        } else {
            FillRule::NonZero
        }
    }
}

/// An outline that owns its arrays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OwnedOutline {
    points: Vec<Point>,
    tags: Vec<PointTag>,
    contour_ends: Vec<usize>,
    flags: OutlineFlags,
}

impl OwnedOutline {
    pub fn new(
        points: Vec<Point>,
        tags: Vec<PointTag>,
        contour_ends: Vec<usize>,
        flags: OutlineFlags,
    ) -> Result<Self> {
        Outline::new(&points, &tags, &contour_ends, flags)?;
        Ok(Self {
            points,
            tags,
            contour_ends,
            flags,
        })
    }

    /// Decode the engine's raw arrays: 26.6 point pairs, tag bytes and
    /// 16-bit inclusive contour ends.
    pub fn from_raw_26dot6(
        points: &[(i32, i32)],
        tags: &[u8],
        contour_ends: &[u16],
        flags: OutlineFlags,
    ) -> Result<Self> {
        let decoded_points = points
            .iter()
            .map(|&(x, y)| Point::from_fixed(F26Dot6::from_raw(x), F26Dot6::from_raw(y)))
            .collect();
        let decoded_tags = tags
            .iter()
            .enumerate()
            .map(|(index, &raw)| {
                PointTag::from_raw(raw).map_err(|_| {
                    GlyphworkError::malformed(
                        contour_of(contour_ends, index),
                        index,
                        format!("reserved point tag 0x{raw:02x}"),
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let ends = contour_ends.iter().map(|&e| e as usize).collect();

        log::trace!(
            "decoded raw outline: {} points, {} contours",
            points.len(),
            contour_ends.len()
        );
        Self::new(decoded_points, decoded_tags, ends, flags)
    }

    pub fn builder() -> OutlineBuilder {
        OutlineBuilder::default()
    }

    pub fn as_outline(&self) -> Outline<'_> {
        Outline {
            points: &self.points,
            tags: &self.tags,
            contour_ends: &self.contour_ends,
            flags: self.flags,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn tags(&self) -> &[PointTag] {
        &self.tags
    }

    /// Shift every point.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        for p in &mut self.points {
            p.x += dx;
            p.y += dy;
        }
    }

    /// Apply a 2x2 matrix `[xx xy; yx yy]` to every point.
    pub fn transform(&mut self, xx: f32, xy: f32, yx: f32, yy: f32) {
        for p in &mut self.points {
            let x = p.x * xx + p.y * xy;
            let y = p.x * yx + p.y * yy;
            *p = Point::new(x, y);
        }
    }
}

fn contour_of(contour_ends: &[u16], point: usize) -> usize {
    contour_ends
        .iter()
        .position(|&end| point <= end as usize)
        .unwrap_or(contour_ends.len())
}

/// Incremental construction of an [`OwnedOutline`].
///
/// ```
/// use glyphwork_core::OwnedOutline;
///
/// let square = OwnedOutline::builder()
///     .on(0.0, 0.0)
///     .on(0.0, 10.0)
///     .on(10.0, 10.0)
///     .on(10.0, 0.0)
///     .close_contour()
///     .build()?;
/// assert_eq!(square.as_outline().contour_count(), 1);
/// # Ok::<(), glyphwork_core::GlyphworkError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct OutlineBuilder {
    points: Vec<Point>,
    tags: Vec<PointTag>,
    contour_ends: Vec<usize>,
    flags: OutlineFlags,
}

impl OutlineBuilder {
    pub fn point(mut self, x: f32, y: f32, tag: PointTag) -> Self {
        self.points.push(Point::new(x, y));
        self.tags.push(tag);
        self
    }

    pub fn on(self, x: f32, y: f32) -> Self {
        self.point(x, y, PointTag::On)
    }

    pub fn conic(self, x: f32, y: f32) -> Self {
        self.point(x, y, PointTag::Conic)
    }

    pub fn cubic(self, x: f32, y: f32) -> Self {
        self.point(x, y, PointTag::Cubic)
    }

    /// End the current contour. Does nothing if no point was added since
    /// the previous contour.
    pub fn close_contour(mut self) -> Self {
        let started = self.contour_ends.last().map_or(0, |&end| end + 1);
        if self.points.len() > started {
            self.contour_ends.push(self.points.len() - 1);
        }
        self
    }

    pub fn flags(mut self, flags: OutlineFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Close any open contour and validate.
    pub fn build(self) -> Result<OwnedOutline> {
        let this = self.close_contour();
        OwnedOutline::new(this.points, this.tags, this.contour_ends, this.flags)
    }
}
