//! Shape classification over Manhattan side lengths.
//!
//! Rules are checked in priority order and the first match wins:
//! degenerate (error), equilateral, isosceles, right, any.

use std::fmt;
use std::str::FromStr;

use super::metrics::{self, SideLengths};
use super::types::{Point, Triangle};

/// Shape category of a non-degenerate triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Equilateral,
    Isosceles,
    Right,
    Any,
}

impl Shape {
    pub const ALL: [Shape; 4] = [Shape::Equilateral, Shape::Isosceles, Shape::Right, Shape::Any];

    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Equilateral => "equilateral",
            Shape::Isosceles => "isosceles",
            Shape::Right => "right",
            Shape::Any => "any",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown shape name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownShape(pub String);

impl fmt::Display for UnknownShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown shape {:?}", self.0)
    }
}

impl std::error::Error for UnknownShape {}

impl FromStr for Shape {
    type Err = UnknownShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Shape::ALL
            .into_iter()
            .find(|shape| shape.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownShape(s.to_string()))
    }
}

/// Errors surfaced by classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// At least two vertices coincide, so some side has length zero.
    Degenerate { sides: SideLengths },
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifyError::Degenerate { sides } => write!(
                f,
                "degenerate triangle: side lengths must be positive (got a={}, b={}, c={})",
                sides.a, sides.b, sides.c
            ),
        }
    }
}

impl std::error::Error for ClassifyError {}

/// Classify `t` by its Manhattan side lengths.
pub fn classify(t: &Triangle) -> Result<Shape, ClassifyError> {
    let sides = SideLengths::of(t);
    if sides.has_zero() {
        return Err(ClassifyError::Degenerate { sides });
    }
    let SideLengths { a, b, c } = sides;
    let shape = if a == b && b == c {
        Shape::Equilateral
    } else if a == b || b == c || c == a {
        Shape::Isosceles
    } else if is_right(&sides) {
        Shape::Right
    } else {
        Shape::Any
    };
    Ok(shape)
}

/// Pythagorean relation on the strictly longest side; a tied maximum never qualifies.
fn is_right(sides: &SideLengths) -> bool {
    match sides.strict_longest() {
        Some((hyp, p, q)) => {
            let sq = |v: u64| u128::from(v) * u128::from(v);
            sq(hyp) == sq(p) + sq(q)
        }
        None => false,
    }
}

/// Stateless front for the plane operations.
#[derive(Clone, Copy, Debug, Default)]
pub struct Classifier;

impl Classifier {
    #[inline]
    pub fn area(&self, t: &Triangle) -> f64 {
        metrics::area(t)
    }

    #[inline]
    pub fn manhattan_distance(&self, p: Point, q: Point) -> u64 {
        metrics::manhattan_distance(p, q)
    }

    #[inline]
    pub fn classify(&self, t: &Triangle) -> Result<Shape, ClassifyError> {
        classify(t)
    }
}
