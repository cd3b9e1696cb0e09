//! Random lattice triangles (uniform vertices + replay tokens).
//!
//! Model
//! - Each vertex coordinate is drawn uniformly from an inclusive box.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so a sample can be regenerated from its token alone.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::classify::{classify, Shape};
use super::types::{Point, Triangle};

/// Inclusive coordinate box for both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds2i {
    pub min: i32,
    pub max: i32,
}

impl Bounds2i {
    /// Bounds with `min <= max` (swapped if given the other way round).
    pub fn new(min: i32, max: i32) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }
}

impl Default for Bounds2i {
    fn default() -> Self {
        Self { min: -100, max: 100 }
    }
}

/// Replay token: same `(seed, index)` always yields the same triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn mixed(&self) -> u64 {
        // splitmix64 finalizer so neighbouring indices decorrelate
        let mut z = self
            .seed
            .wrapping_add(self.index.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    pub fn next(&self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// Draw one triangle; may be degenerate.
pub fn draw_triangle(bounds: Bounds2i, token: ReplayToken) -> Triangle {
    let bounds = Bounds2i::new(bounds.min, bounds.max);
    let mut rng = StdRng::seed_from_u64(token.mixed());
    let mut point = || {
        Point::new(
            rng.gen_range(bounds.min..=bounds.max),
            rng.gen_range(bounds.min..=bounds.max),
        )
    };
    Triangle::new(point(), point(), point())
}

/// Draw until `classify` succeeds, advancing the token index on each retry.
///
/// Returns the token that produced the accepted triangle. `None` after
/// `max_tries` degenerate draws (always the case for a single-point box).
pub fn draw_classified(
    bounds: Bounds2i,
    token: ReplayToken,
    max_tries: usize,
) -> Option<(Triangle, Shape, ReplayToken)> {
    let mut tok = token;
    for _ in 0..max_tries {
        let t = draw_triangle(bounds, tok);
        if let Ok(shape) = classify(&t) {
            return Some((t, shape, tok));
        }
        tok = tok.next();
    }
    None
}
