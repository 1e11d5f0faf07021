// this_file: crates/glyphwork-outline/src/decompose.rs

//! Outline decomposition: tagged control points in, path commands out.
//!
//! Each contour is read cyclically with its start point repeated at the
//! end, then cut into segments at every on-curve point:
//!
//! | segment               | command                              |
//! |-----------------------|--------------------------------------|
//! | `[on]`                | [`PathCommand::LineTo`]              |
//! | `[conic, on]`         | [`PathCommand::QuadTo`]              |
//! | `[conic × n, on]`     | `n` quads through implied midpoints  |
//! | `[cubic, cubic, on]`  | [`PathCommand::CubicTo`]             |
//!
//! Any other off-curve run is a [`GlyphworkError::MalformedOutline`].
//! Every contour is checked before the first command is produced, so a
//! sink never sees part of an outline that turns out to be malformed.

use std::iter::FusedIterator;
use std::ops::Range;

use glyphwork_core::{Contour, GlyphworkError, Outline, Point, PointTag, Result};

/// One drawing instruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Control point, end point
    QuadTo(Point, Point),
    /// Two control points, end point
    CubicTo(Point, Point, Point),
    /// Only emitted when [`DecomposeOptions::close_contours`] is set
    Close,
}

impl PathCommand {
    /// Where the pen ends up after this command, `None` for `Close`.
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::QuadTo(_, p) => Some(p),
            PathCommand::CubicTo(_, _, p) => Some(p),
            PathCommand::Close => None,
        }
    }

    /// Replay this command into a sink.
    pub fn apply<S: OutlineSink + ?Sized>(&self, sink: &mut S) {
        match *self {
            PathCommand::MoveTo(p) => sink.move_to(p),
            PathCommand::LineTo(p) => sink.line_to(p),
            PathCommand::QuadTo(c, p) => sink.quad_to(c, p),
            PathCommand::CubicTo(c1, c2, p) => sink.cubic_to(c1, c2, p),
            PathCommand::Close => sink.close(),
        }
    }
}

/// What to do with a contour whose first point is off-curve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OffCurveStart {
    /// Fail with `MalformedOutline`
    #[default]
    Reject,
    /// Start at the last point if it is on-curve, otherwise at the
    /// midpoint of the last and first conic points
    Infer,
}

/// Decomposition settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecomposeOptions {
    /// Emit [`PathCommand::Close`] after every contour.
    pub close_contours: bool,
    pub off_curve_start: OffCurveStart,
}

impl DecomposeOptions {
    pub fn with_close_contours(mut self, close_contours: bool) -> Self {
        self.close_contours = close_contours;
        self
    }

    pub fn with_off_curve_start(mut self, off_curve_start: OffCurveStart) -> Self {
        self.off_curve_start = off_curve_start;
        self
    }
}

/// Receiver of decomposed path commands.
pub trait OutlineSink {
    fn move_to(&mut self, to: Point);

    fn line_to(&mut self, to: Point);

    fn quad_to(&mut self, ctrl: Point, to: Point);

    fn cubic_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point);

    /// Called after each contour when closing is requested.
    fn close(&mut self) {}
}

impl OutlineSink for Vec<PathCommand> {
    fn move_to(&mut self, to: Point) {
        self.push(PathCommand::MoveTo(to));
    }

    fn line_to(&mut self, to: Point) {
        self.push(PathCommand::LineTo(to));
    }

    fn quad_to(&mut self, ctrl: Point, to: Point) {
        self.push(PathCommand::QuadTo(ctrl, to));
    }

    fn cubic_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.push(PathCommand::CubicTo(ctrl1, ctrl2, to));
    }

    fn close(&mut self) {
        self.push(PathCommand::Close);
    }
}

impl<S: OutlineSink + ?Sized> OutlineSink for &mut S {
    fn move_to(&mut self, to: Point) {
        (**self).move_to(to);
    }

    fn line_to(&mut self, to: Point) {
        (**self).line_to(to);
    }

    fn quad_to(&mut self, ctrl: Point, to: Point) {
        (**self).quad_to(ctrl, to);
    }

    fn cubic_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        (**self).cubic_to(ctrl1, ctrl2, to);
    }

    fn close(&mut self) {
        (**self).close();
    }
}

/// Sink for the validation pass.
struct Discard;

impl OutlineSink for Discard {
    fn move_to(&mut self, _to: Point) {}

    fn line_to(&mut self, _to: Point) {}

    fn quad_to(&mut self, _ctrl: Point, _to: Point) {}

    fn cubic_to(&mut self, _ctrl1: Point, _ctrl2: Point, _to: Point) {}
}

/// Decompose `outline` into a vector of commands.
///
/// ```
/// use glyphwork_core::{OwnedOutline, Point};
/// use glyphwork_outline::{decompose, DecomposeOptions, PathCommand};
///
/// let outline = OwnedOutline::builder()
///     .on(0.0, 0.0)
///     .conic(5.0, 10.0)
///     .on(10.0, 0.0)
///     .build()?;
/// let commands = decompose(&outline.as_outline(), &DecomposeOptions::default())?;
/// assert_eq!(
///     commands,
///     vec![
///         PathCommand::MoveTo(Point::new(0.0, 0.0)),
///         PathCommand::QuadTo(Point::new(5.0, 10.0), Point::new(10.0, 0.0)),
///         PathCommand::LineTo(Point::new(0.0, 0.0)),
///     ]
/// );
/// # Ok::<(), glyphwork_core::GlyphworkError>(())
/// ```
pub fn decompose(outline: &Outline<'_>, options: &DecomposeOptions) -> Result<Vec<PathCommand>> {
    let mut commands = Vec::with_capacity(outline.points().len() + 2 * outline.contour_count());
    decompose_into(outline, options, &mut commands)?;
    Ok(commands)
}

/// Decompose `outline` into a caller-supplied sink.
///
/// On error the sink has received nothing.
pub fn decompose_into<S: OutlineSink + ?Sized>(
    outline: &Outline<'_>,
    options: &DecomposeOptions,
    sink: &mut S,
) -> Result<()> {
    validate(outline, options)?;
    for (index, contour) in outline.contours().enumerate() {
        walk_contour(index, &contour, options, sink)?;
    }
    log::debug!(
        "decomposed {} contours ({} points)",
        outline.contour_count(),
        outline.points().len()
    );
    Ok(())
}

/// Lazily decompose `outline`.
///
/// The whole outline is validated up front; the returned iterator then
/// produces commands one contour at a time and cannot fail.
pub fn commands<'a>(outline: &Outline<'a>, options: &DecomposeOptions) -> Result<PathCommands<'a>> {
    validate(outline, options)?;
    Ok(PathCommands {
        outline: *outline,
        options: *options,
        next_contour: 0,
        pending: Vec::new().into_iter(),
    })
}

/// Check that every contour of `outline` can be decomposed.
pub fn validate(outline: &Outline<'_>, options: &DecomposeOptions) -> Result<()> {
    for (index, contour) in outline.contours().enumerate() {
        walk_contour(index, &contour, options, &mut Discard)?;
    }
    Ok(())
}

/// Iterator returned by [`commands`].
#[derive(Debug, Clone)]
pub struct PathCommands<'a> {
    outline: Outline<'a>,
    options: DecomposeOptions,
    next_contour: usize,
    pending: std::vec::IntoIter<PathCommand>,
}

impl Iterator for PathCommands<'_> {
    type Item = PathCommand;

    fn next(&mut self) -> Option<PathCommand> {
        loop {
            if let Some(command) = self.pending.next() {
                return Some(command);
            }
            let contour = self.outline.contour(self.next_contour)?;
            let mut buffer = Vec::with_capacity(contour.len() + 2);
            // validated in `commands`
            walk_contour(self.next_contour, &contour, &self.options, &mut buffer).ok()?;
            self.next_contour += 1;
            self.pending = buffer.into_iter();
        }
    }
}

impl FusedIterator for PathCommands<'_> {}

/// Where a contour starts and which of its points follow the start.
struct ContourStart {
    point: Point,
    /// Outline index reported for the closing point
    index: usize,
    body: Range<usize>,
}

fn contour_start(
    contour_index: usize,
    contour: &Contour<'_>,
    options: &DecomposeOptions,
) -> Result<ContourStart> {
    let n = contour.len();
    if contour.tags[0].is_on_curve() {
        return Ok(ContourStart {
            point: contour.points[0],
            index: contour.first,
            body: 1..n,
        });
    }
    if options.off_curve_start == OffCurveStart::Reject {
        return Err(GlyphworkError::malformed(
            contour_index,
            contour.first,
            "contour starts with an off-curve point",
        ));
    }

    let last = n - 1;
    match (contour.tags[last], contour.tags[0]) {
        (PointTag::On, _) => Ok(ContourStart {
            point: contour.points[last],
            index: contour.first + last,
            body: 0..last,
        }),
        (PointTag::Conic, PointTag::Conic) => Ok(ContourStart {
            point: Point::midpoint(contour.points[last], contour.points[0]),
            index: contour.first,
            body: 0..n,
        }),
        _ => Err(GlyphworkError::malformed(
            contour_index,
            contour.first,
            "no start point can be inferred next to a cubic control point",
        )),
    }
}

fn walk_contour<S: OutlineSink + ?Sized>(
    contour_index: usize,
    contour: &Contour<'_>,
    options: &DecomposeOptions,
    sink: &mut S,
) -> Result<()> {
    if contour.is_empty() {
        return Ok(());
    }
    let start = contour_start(contour_index, contour, options)?;

    sink.move_to(start.point);
    let mut segment = Segment::new(contour_index);
    for i in start.body {
        segment.push(contour.first + i, contour.points[i], contour.tags[i], sink)?;
    }
    segment.push(start.index, start.point, PointTag::On, sink)?;

    if options.close_contours {
        sink.close();
    }
    Ok(())
}

/// Off-curve points seen since the last on-curve point.
#[derive(Debug, Clone, Copy)]
enum Pending {
    Nothing,
    Conic(Point),
    Cubic(Point),
    CubicPair(Point, Point),
}

struct Segment {
    contour: usize,
    pending: Pending,
}

impl Segment {
    fn new(contour: usize) -> Self {
        Self {
            contour,
            pending: Pending::Nothing,
        }
    }

    fn push<S: OutlineSink + ?Sized>(
        &mut self,
        index: usize,
        p: Point,
        tag: PointTag,
        sink: &mut S,
    ) -> Result<()> {
        self.pending = match (self.pending, tag) {
            (Pending::Nothing, PointTag::On) => {
                sink.line_to(p);
                Pending::Nothing
            }
            (Pending::Conic(ctrl), PointTag::On) => {
                sink.quad_to(ctrl, p);
                Pending::Nothing
            }
            (Pending::CubicPair(c1, c2), PointTag::On) => {
                sink.cubic_to(c1, c2, p);
                Pending::Nothing
            }
            (Pending::Nothing, PointTag::Conic) => Pending::Conic(p),
            (Pending::Conic(ctrl), PointTag::Conic) => {
                sink.quad_to(ctrl, Point::midpoint(ctrl, p));
                Pending::Conic(p)
            }
            (Pending::Nothing, PointTag::Cubic) => Pending::Cubic(p),
            (Pending::Cubic(c1), PointTag::Cubic) => Pending::CubicPair(c1, p),
            (Pending::Cubic(_), PointTag::On) => {
                return Err(self.malformed(index, "cubic segment with a single control point"));
            }
            (Pending::CubicPair(..), PointTag::Cubic) => {
                return Err(self.malformed(index, "more than two consecutive cubic control points"));
            }
            (Pending::Conic(_), PointTag::Cubic)
            | (Pending::Cubic(_) | Pending::CubicPair(..), PointTag::Conic) => {
                return Err(self.malformed(index, "conic and cubic control points in one segment"));
            }
        };
        Ok(())
    }

    fn malformed(&self, point: usize, reason: &str) -> GlyphworkError {
        GlyphworkError::malformed(self.contour, point, reason)
    }
}
