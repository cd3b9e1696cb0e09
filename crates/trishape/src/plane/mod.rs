//! Lattice triangles: points, side lengths, area and shape.
//!
//! Purpose
//! - Classify a triangle with integer vertices as equilateral, isosceles,
//!   right or generic, using Manhattan side lengths throughout.
//! - Report its area via the shoelace formula.
//!
//! Model
//! - `Point` and `Triangle` are plain `Copy` values; nothing is validated at
//!   construction. Degenerate input is detected where it matters: `classify`
//!   rejects zero-length sides, `area` simply returns 0.
//! - All intermediate arithmetic is widened (`i64` for differences, `i128`/`u128`
//!   for products) so no `i32` input can overflow.
//!
//! Code cross-refs: `Point`, `Triangle`, `SideLengths`, `Shape`, `Classifier`

mod classify;
mod metrics;
pub mod rand;
mod types;

pub use classify::{classify, Classifier, ClassifyError, Shape, UnknownShape};
pub use metrics::{area, double_area, manhattan_distance, SideLengths};
pub use types::{Point, Triangle};
