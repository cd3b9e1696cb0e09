//! Triangle area and shape classification on the integer lattice.
//!
//! Side lengths are taxicab (L1) distances between vertices, so every
//! comparison the classifier makes is exact integer arithmetic. Only the area
//! is reported as `f64`, and it is a half-integer computed from an exact
//! integer determinant.
//!
//! API Policy
//! - The free functions in [`plane`] are the primary surface; [`Classifier`]
//!   bundles them for callers that want a value to pass around.

pub mod plane;

pub use plane::{
    area, classify, double_area, manhattan_distance, Classifier, ClassifyError, Point, Shape,
    SideLengths, Triangle,
};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::plane::rand::{draw_classified, draw_triangle, Bounds2i, ReplayToken};
    pub use crate::plane::{
        area, classify, manhattan_distance, Classifier, ClassifyError, Point, Shape, SideLengths,
        Triangle,
    };
}
