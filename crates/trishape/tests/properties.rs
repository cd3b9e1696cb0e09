//! Property tests over arbitrary lattice triangles.
//!
//! Coordinates span the full `i32` range so the widened arithmetic is
//! exercised alongside the classification rules.

use proptest::prelude::*;
use trishape::{
    area, classify, manhattan_distance, ClassifyError, Point, Shape, SideLengths, Triangle,
};

fn point() -> impl Strategy<Value = Point> {
    (any::<i32>(), any::<i32>()).prop_map(|(x, y)| Point::new(x, y))
}

fn small_point() -> impl Strategy<Value = Point> {
    (-20i32..=20, -20i32..=20).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn distance_is_symmetric_and_zero_on_diagonal(p in point(), q in point()) {
        prop_assert_eq!(manhattan_distance(p, p), 0);
        prop_assert_eq!(manhattan_distance(p, q), manhattan_distance(q, p));
    }

    #[test]
    fn area_is_permutation_invariant(a in point(), b in point(), c in point()) {
        let expected = area(&Triangle::new(a, b, c));
        prop_assert!(expected >= 0.0);
        for t in [
            Triangle::new(a, c, b),
            Triangle::new(b, a, c),
            Triangle::new(b, c, a),
            Triangle::new(c, a, b),
            Triangle::new(c, b, a),
        ] {
            prop_assert_eq!(area(&t), expected);
        }
    }

    #[test]
    fn classify_is_total_on_distinct_vertices(
        a in small_point(),
        b in small_point(),
        c in small_point()
    ) {
        prop_assume!(a != b && b != c && a != c);
        let t = Triangle::new(a, b, c);
        let shape = classify(&t);
        prop_assert!(shape.is_ok());
        let sides = SideLengths::of(&t);
        match shape.unwrap() {
            Shape::Equilateral => prop_assert!(sides.a == sides.b && sides.b == sides.c),
            Shape::Isosceles => {
                prop_assert!(sides.a == sides.b || sides.b == sides.c || sides.c == sides.a);
                prop_assert!(!(sides.a == sides.b && sides.b == sides.c));
            }
            Shape::Right => {
                let (h, p, q) = sides.strict_longest().unwrap();
                prop_assert_eq!(h * h, p * p + q * q);
            }
            Shape::Any => {
                prop_assert!(sides.a != sides.b && sides.b != sides.c && sides.c != sides.a);
            }
        }
    }

    #[test]
    fn coincident_vertices_are_degenerate(p in point(), q in point()) {
        for t in [Triangle::new(p, p, q), Triangle::new(p, q, p), Triangle::new(q, p, p)] {
            let is_degenerate = matches!(classify(&t), Err(ClassifyError::Degenerate { .. }));
            prop_assert!(is_degenerate);
        }
    }
}
