use super::*;
use glyphwork_core::{GlyphworkError, OwnedOutline, Point, PointTag};
use proptest::prelude::*;

/// One segment of a generated contour.
#[derive(Debug, Clone, Copy)]
enum Piece {
    Line,
    Quads(usize),
    Cubic,
}

impl Piece {
    fn off_curve(self) -> Vec<PointTag> {
        match self {
            Piece::Line => vec![],
            Piece::Quads(n) => vec![PointTag::Conic; n],
            Piece::Cubic => vec![PointTag::Cubic; 2],
        }
    }

    fn command_count(self) -> usize {
        match self {
            Piece::Line | Piece::Cubic => 1,
            Piece::Quads(n) => n,
        }
    }
}

fn piece() -> impl Strategy<Value = Piece> {
    prop_oneof![
        Just(Piece::Line),
        (1usize..5).prop_map(Piece::Quads),
        Just(Piece::Cubic),
    ]
}

fn point() -> impl Strategy<Value = Point> {
    (-2000i32..2000, -2000i32..2000).prop_map(|(x, y)| Point::new(x as f32, y as f32))
}

/// Tags of a contour starting on-curve; the last segment closes onto the
/// start point, so its own on-curve point is left out.
fn contour_tags(pieces: &[Piece]) -> Vec<PointTag> {
    let mut tags = vec![PointTag::On];
    for piece in pieces {
        tags.extend(piece.off_curve());
        tags.push(PointTag::On);
    }
    tags.pop();
    tags
}

fn valid_contour() -> impl Strategy<Value = (Vec<Piece>, OwnedOutline)> {
    prop::collection::vec(piece(), 1..8).prop_flat_map(|pieces| {
        let tags = contour_tags(&pieces);
        let len = tags.len();
        prop::collection::vec(point(), len).prop_map(move |points| {
            let end = points.len() - 1;
            let outline = OwnedOutline::new(
                points,
                tags.clone(),
                vec![end],
                glyphwork_core::OutlineFlags::NONE,
            )
            .unwrap();
            (pieces.clone(), outline)
        })
    })
}

// Property: every valid tag sequence decomposes, starts with one MoveTo and
// returns to its start point
proptest! {
    #[test]
    fn prop_valid_contours_decompose((pieces, outline) in valid_contour()) {
        let view = outline.as_outline();
        let commands = decompose(&view, &DecomposeOptions::default()).unwrap();
        let start = outline.points()[0];

        let expected: usize = 1 + pieces.iter().map(|p| p.command_count()).sum::<usize>();
        prop_assert_eq!(commands.len(), expected);
        prop_assert_eq!(commands[0], PathCommand::MoveTo(start));
        prop_assert_eq!(
            commands.iter().filter(|c| matches!(c, PathCommand::MoveTo(_))).count(),
            1
        );
        prop_assert_eq!(commands.last().and_then(PathCommand::end_point), Some(start));
    }
}

// Property: the lazy iterator and the collected form agree
proptest! {
    #[test]
    fn prop_iterator_matches_vector((_pieces, outline) in valid_contour(), close in any::<bool>()) {
        let view = outline.as_outline();
        let options = DecomposeOptions::default().with_close_contours(close);
        let collected = decompose(&view, &options).unwrap();
        let streamed: Vec<_> = commands(&view, &options).unwrap().collect();
        prop_assert_eq!(collected, streamed);
    }
}

// Property: inferring a start changes nothing when the contour already
// starts on-curve
proptest! {
    #[test]
    fn prop_infer_is_noop_for_on_curve_start((_pieces, outline) in valid_contour()) {
        let view = outline.as_outline();
        let strict = decompose(&view, &DecomposeOptions::default()).unwrap();
        let lenient = decompose(
            &view,
            &DecomposeOptions::default().with_off_curve_start(OffCurveStart::Infer),
        )
        .unwrap();
        prop_assert_eq!(strict, lenient);
    }
}

// Property: consecutive conic points meet at their exact midpoint
proptest! {
    #[test]
    fn prop_conic_midpoints(start in point(), conics in prop::collection::vec(point(), 2..10)) {
        let mut builder = OwnedOutline::builder().on(start.x, start.y);
        for c in &conics {
            builder = builder.conic(c.x, c.y);
        }
        let outline = builder.build().unwrap();
        let commands = decompose(&outline.as_outline(), &DecomposeOptions::default()).unwrap();

        prop_assert_eq!(commands.len(), conics.len() + 1);
        prop_assert_eq!(commands[0], PathCommand::MoveTo(start));
        for (i, pair) in conics.windows(2).enumerate() {
            prop_assert_eq!(
                commands[i + 1],
                PathCommand::QuadTo(pair[0], Point::midpoint(pair[0], pair[1]))
            );
        }
        let last = conics[conics.len() - 1];
        prop_assert_eq!(commands[conics.len()], PathCommand::QuadTo(last, start));
    }
}

// Property: a cubic run of any length but two is rejected, and nothing is
// emitted
proptest! {
    #[test]
    fn prop_bad_cubic_runs_rejected(run in prop_oneof![Just(1usize), 3usize..7], lead in 0usize..3) {
        let mut builder = OwnedOutline::builder().on(0.0, 0.0);
        for i in 0..lead {
            builder = builder.on(i as f32 + 1.0, 0.0);
        }
        for i in 0..run {
            builder = builder.cubic(i as f32, 5.0);
        }
        let outline = builder.on(10.0, 0.0).build().unwrap();

        let mut sink = Vec::new();
        let result = decompose_into(&outline.as_outline(), &DecomposeOptions::default(), &mut sink);
        let is_malformed = matches!(result, Err(GlyphworkError::MalformedOutline { contour: 0, .. }));
        prop_assert!(is_malformed);
        prop_assert!(sink.is_empty());
    }
}
