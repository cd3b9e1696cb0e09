//! Shape frequencies among random lattice triangles.
//!
//! Draws a fixed number of replayable samples from a small box and prints how
//! often each shape (and degeneracy) occurs under the taxicab side metric.

use std::collections::BTreeMap;

use trishape::prelude::*;

fn main() {
    let bounds = Bounds2i::new(-8, 8);
    let samples = 10_000u64;
    let mut counts: BTreeMap<&'static str, u64> = BTreeMap::new();
    for i in 0..samples {
        let t = draw_triangle(bounds, ReplayToken::new(2024, i));
        let key = match classify(&t) {
            Ok(shape) => shape.as_str(),
            Err(ClassifyError::Degenerate { .. }) => "degenerate",
        };
        *counts.entry(key).or_default() += 1;
    }
    println!("bounds=[{}, {}] samples={samples}", bounds.min, bounds.max);
    for (name, n) in counts {
        println!("{name}={n} share={:.4}", n as f64 / samples as f64);
    }
}
