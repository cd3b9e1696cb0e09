//! Subcommand bodies. Each returns what `main` prints, so failures surface as `Err`.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;
use trishape::plane::rand::{draw_triangle, Bounds2i, ReplayToken};
use trishape::{area, classify, manhattan_distance, Point, Triangle};

use crate::batch;
use crate::provenance::{code_rev, BatchRecord};

pub fn area_of(t: &Triangle) -> String {
    area(t).to_string()
}

pub fn distance(p: Point, q: Point) -> String {
    manhattan_distance(p, q).to_string()
}

/// Shape name; degenerate triangles are an error (non-zero exit).
pub fn classify_one(t: &Triangle) -> Result<String> {
    let shape = classify(t)?;
    tracing::info!(triangle = %t, %shape, "classify");
    Ok(shape.to_string())
}

/// Annotate `input` into `out` and write the run record; returns the record path.
pub fn run_batch(input: &Path, out: &Path) -> Result<PathBuf> {
    tracing::info!(input = %input.display(), out = %out.display(), "batch");
    let summary = batch::run_batch(input, out)?;
    tracing::info!(
        rows = summary.rows,
        degenerate = summary.degenerate_rows.len(),
        shapes = ?summary.shapes,
        "batch_done"
    );
    let record_path = BatchRecord::new(input, out, &summary).write()?;
    tracing::info!(provenance = %record_path.display(), "provenance");
    Ok(record_path)
}

#[derive(Serialize)]
struct SampleRow {
    seed: u64,
    index: u64,
    a: [i32; 2],
    b: [i32; 2],
    c: [i32; 2],
    area: f64,
    shape: Option<&'static str>,
}

/// One JSON line per sampled triangle; `shape` is null for degenerate draws.
pub fn sample(count: u64, seed: u64, bounds: Bounds2i) -> Result<Vec<String>> {
    tracing::info!(count, seed, min = bounds.min, max = bounds.max, "sample");
    (0..count)
        .map(|index| {
            let t = draw_triangle(bounds, ReplayToken::new(seed, index));
            let row = SampleRow {
                seed,
                index,
                a: [t.a.x, t.a.y],
                b: [t.b.x, t.b.y],
                c: [t.c.x, t.c.y],
                area: area(&t),
                shape: classify(&t).ok().map(|s| s.as_str()),
            };
            Ok(serde_json::to_string(&row)?)
        })
        .collect()
}

pub fn report() -> Result<String> {
    let obj = serde_json::json!({
        "code_rev": code_rev(),
        "trishape_version": trishape::VERSION,
    });
    Ok(serde_json::to_string_pretty(&obj)?)
}
