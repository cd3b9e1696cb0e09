//! Taxicab distances and shoelace area.

use super::types::{Point, Triangle};

/// Taxicab (L1) distance `|Δx| + |Δy|`.
#[inline]
pub fn manhattan_distance(p: Point, q: Point) -> u64 {
    let d = p.coords() - q.coords();
    d.x.unsigned_abs() + d.y.unsigned_abs()
}

/// Twice the area, exact: `|(ax-cx)(by-ay) - (ax-bx)(cy-ay)|`.
pub fn double_area(t: &Triangle) -> u128 {
    let ac = t.a.coords() - t.c.coords();
    let ab = t.a.coords() - t.b.coords();
    let ba = t.b.coords() - t.a.coords();
    let ca = t.c.coords() - t.a.coords();
    let det = i128::from(ac.x) * i128::from(ba.y) - i128::from(ab.x) * i128::from(ca.y);
    det.unsigned_abs()
}

/// Shoelace area. Collinear or coincident vertices give exactly 0.0.
#[inline]
pub fn area(t: &Triangle) -> f64 {
    double_area(t) as f64 * 0.5
}

/// Manhattan side lengths: `a = |AB|`, `b = |AC|`, `c = |BC|`.
///
/// `a` and `b` both touch vertex A; `c` is the side opposite A.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SideLengths {
    pub a: u64,
    pub b: u64,
    pub c: u64,
}

impl SideLengths {
    pub fn of(t: &Triangle) -> Self {
        Self {
            a: manhattan_distance(t.a, t.b),
            b: manhattan_distance(t.a, t.c),
            c: manhattan_distance(t.b, t.c),
        }
    }

    #[inline]
    pub fn has_zero(&self) -> bool {
        self.a == 0 || self.b == 0 || self.c == 0
    }

    /// The side strictly longer than both others, with the remaining two.
    /// `None` when two sides tie for the maximum.
    pub fn strict_longest(&self) -> Option<(u64, u64, u64)> {
        let SideLengths { a, b, c } = *self;
        if c > a && c > b {
            Some((c, a, b))
        } else if a > c && a > b {
            Some((a, b, c))
        } else if b > c && b > a {
            Some((b, a, c))
        } else {
            None
        }
    }
}
