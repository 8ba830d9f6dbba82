use aabb_2d::{BoundingBox, Validity};
use glam::{dvec2, DVec2};
use proptest::prelude::*;
use proptest::sample::Index;

// Finite coordinates only; NaN makes every comparison false.
fn coord() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6f64
}

fn point() -> impl Strategy<Value = DVec2> {
    (coord(), coord()).prop_map(|(x, y)| dvec2(x, y))
}

fn points() -> impl Strategy<Value = Vec<DVec2>> {
    prop::collection::vec(point(), 1..32)
}

/// Valid boxes with arbitrary (possibly inverted) corners, plus the invalid box.
fn any_box() -> impl Strategy<Value = BoundingBox> {
    prop_oneof![
        4 => (point(), point()).prop_map(|(min, max)| BoundingBox::new(min, max)),
        1 => Just(BoundingBox::empty()),
    ]
}

fn expanded(points: &[DVec2]) -> BoundingBox {
    let mut bb = BoundingBox::empty();
    for &p in points {
        bb.expand_to_include(p);
    }
    bb
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn expansion_is_minimal_and_contains_every_point(points in points()) {
        let bb = expanded(&points);
        prop_assert_eq!(bb.validity, Validity::Valid);
        for &p in &points {
            prop_assert!(bb.contains(p));
        }

        let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_x = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        prop_assert_eq!(bb.min, dvec2(min_x, min_y));
        prop_assert_eq!(bb.max, dvec2(max_x, max_y));
    }

    #[test]
    fn collect_matches_repeated_expansion(points in points()) {
        let collected: BoundingBox = points.iter().copied().collect();
        prop_assert_eq!(collected, expanded(&points));
    }

    #[test]
    fn cleared_box_contains_nothing(points in points(), probe in point()) {
        let mut bb = expanded(&points);
        bb.clear();
        prop_assert!(!bb.contains(probe));
        prop_assert!(!bb.contains(DVec2::ZERO));
        prop_assert!(!bb.contains(points[0]));
    }

    #[test]
    fn first_point_makes_degenerate_box(p in point()) {
        let mut bb = BoundingBox::empty();
        bb.expand_to_include(p);
        prop_assert_eq!(bb.min, p);
        prop_assert_eq!(bb.max, p);
        prop_assert!(bb.contains(p));
    }

    #[test]
    fn interior_point_is_idempotent(points in points(), ix in any::<Index>(), iy in any::<Index>()) {
        let mut bb = expanded(&points);
        let before = bb;
        // Mixing coordinates of existing points always lands inside the box.
        let inside = dvec2(ix.get(&points).x, iy.get(&points).y);
        bb.expand_to_include(inside);
        prop_assert_eq!(bb, before);
    }

    #[test]
    fn intersects_is_symmetric(a in any_box(), b in any_box()) {
        prop_assert_eq!(a.intersects(&b), b.intersects(&a));
    }

    #[test]
    fn touching_on_x_intersects(
        a_points in points(),
        width in 0.0..1.0e3f64,
        height in 0.0..1.0e3f64,
        iy in any::<Index>(),
    ) {
        let a = expanded(&a_points);
        // B starts exactly on A's right edge at a height inside A's y range.
        let start = dvec2(a.max.x, iy.get(&a_points).y);
        let b = BoundingBox::new(start, start + dvec2(width, height));
        prop_assert!(a.intersects(&b));
        prop_assert!(b.intersects(&a));
    }
}
