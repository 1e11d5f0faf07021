use super::*;
use proptest::prelude::*;

fn coordinate() -> impl Strategy<Value = f32> {
    (-10_000i32..10_000).prop_map(|v| v as f32)
}

fn point() -> impl Strategy<Value = Point> {
    (coordinate(), coordinate()).prop_map(|(x, y)| Point::new(x, y))
}

// Property: the implied on-curve point is symmetric and lies between its neighbours
proptest! {
    #[test]
    fn prop_midpoint_between_neighbours(a in point(), b in point()) {
        let m = Point::midpoint(a, b);
        prop_assert_eq!(m, Point::midpoint(b, a));
        prop_assert!(m.x >= a.x.min(b.x) && m.x <= a.x.max(b.x));
        prop_assert!(m.y >= a.y.min(b.y) && m.y <= a.y.max(b.y));
        prop_assert_eq!(m.x - a.x, b.x - m.x);
        prop_assert_eq!(m.y - a.y, b.y - m.y);
    }
}

// Property: raw tags decode by their low two bits, and only 3 is refused
proptest! {
    #[test]
    fn prop_raw_tag_low_bits(raw in any::<u8>()) {
        match PointTag::from_raw(raw) {
            Ok(tag) => {
                prop_assert_eq!(tag.to_raw(), raw & 3);
            }
            Err(err) => {
                prop_assert_eq!(raw & 3, 3);
                let is_malformed = matches!(err, GlyphworkError::MalformedOutline { .. });
                prop_assert!(is_malformed);
            }
        }
    }
}

// Property: a contour table built from contour lengths is accepted and read back
proptest! {
    #[test]
    fn prop_contour_table_round_trip(lengths in prop::collection::vec(1usize..6, 1..6)) {
        let total: usize = lengths.iter().sum();
        let points: Vec<Point> = (0..total).map(|i| Point::new(i as f32, 0.0)).collect();
        let tags = vec![PointTag::On; total];
        let ends: Vec<usize> = lengths
            .iter()
            .scan(0usize, |next, &len| {
                *next += len;
                Some(*next - 1)
            })
            .collect();

        let outline = Outline::new(&points, &tags, &ends, OutlineFlags::NONE).unwrap();
        prop_assert_eq!(outline.contour_count(), lengths.len());
        let read: Vec<usize> = outline.contours().map(|c| c.len()).collect();
        prop_assert_eq!(read, lengths);
    }
}

// Property: a point left over after the last contour end is refused
proptest! {
    #[test]
    fn prop_trailing_point_rejected(lengths in prop::collection::vec(1usize..6, 1..6)) {
        let total: usize = lengths.iter().sum();
        let points = vec![Point::new(0.0, 0.0); total + 1];
        let tags = vec![PointTag::On; total + 1];
        let ends: Vec<usize> = lengths
            .iter()
            .scan(0usize, |next, &len| {
                *next += len;
                Some(*next - 1)
            })
            .collect();

        let result = Outline::new(&points, &tags, &ends, OutlineFlags::NONE);
        let is_malformed = matches!(result, Err(GlyphworkError::MalformedOutline { .. }));
        prop_assert!(is_malformed);
    }
}
