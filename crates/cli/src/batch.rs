//! CSV batch classification.
//!
//! Input: integer columns `ax, ay, bx, by, cx, cy` (extra columns are ignored).
//! Output: the vertex columns plus `area` and `shape`; degenerate rows get
//! shape `degenerate` instead of failing the run.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use serde::Serialize;
use trishape::{area, classify, ClassifyError, Point, Triangle};

pub const VERTEX_COLUMNS: [&str; 6] = ["ax", "ay", "bx", "by", "cx", "cy"];
pub const DEGENERATE: &str = "degenerate";

/// Counts per shape name (including `degenerate`) and the rows that were degenerate.
#[derive(Debug, Default, Serialize)]
pub struct BatchSummary {
    pub rows: usize,
    pub shapes: BTreeMap<&'static str, usize>,
    pub degenerate_rows: Vec<usize>,
}

/// Read triangles from a CSV file, one per row.
pub fn read_triangles(input: &Path) -> Result<Vec<Triangle>> {
    let df = LazyCsvReader::new(input)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", input.display()))?
        .collect()
        .with_context(|| format!("reading {}", input.display()))?;

    let mut columns = Vec::with_capacity(VERTEX_COLUMNS.len());
    for name in VERTEX_COLUMNS {
        let raw = df
            .column(name)
            .with_context(|| format!("missing column {name:?}"))?;
        if !raw.dtype().is_integer() {
            bail!("column {name:?} must hold integers, found {}", raw.dtype());
        }
        let series = raw
            .strict_cast(&DataType::Int32)
            .with_context(|| format!("column {name:?} has values outside the i32 range"))?;
        columns.push(series);
    }
    let columns = columns
        .iter()
        .map(|s| s.i32())
        .collect::<PolarsResult<Vec<_>>>()?;

    let mut triangles = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let mut v = [0i32; 6];
        for (k, ca) in columns.iter().enumerate() {
            v[k] = ca.get(row).with_context(|| {
                format!(
                    "row {row}: column {:?} is empty or outside the i32 range",
                    VERTEX_COLUMNS[k]
                )
            })?;
        }
        triangles.push(Triangle::new(
            Point::new(v[0], v[1]),
            Point::new(v[2], v[3]),
            Point::new(v[4], v[5]),
        ));
    }
    Ok(triangles)
}

/// Area and shape for every triangle, as an output frame.
pub fn annotate(triangles: &[Triangle]) -> Result<(DataFrame, BatchSummary)> {
    let mut summary = BatchSummary {
        rows: triangles.len(),
        ..Default::default()
    };
    let mut shapes: Vec<&'static str> = Vec::with_capacity(triangles.len());
    for (row, t) in triangles.iter().enumerate() {
        let name = match classify(t) {
            Ok(shape) => shape.as_str(),
            Err(err @ ClassifyError::Degenerate { .. }) => {
                tracing::warn!(row, triangle = %t, error = %err, "degenerate");
                summary.degenerate_rows.push(row);
                DEGENERATE
            }
        };
        *summary.shapes.entry(name).or_default() += 1;
        shapes.push(name);
    }
    let areas: Vec<f64> = triangles.iter().map(area).collect();
    let coord = |f: fn(&Triangle) -> i32| triangles.iter().map(f).collect::<Vec<i32>>();

    let df = df!(
        "ax" => coord(|t| t.a.x),
        "ay" => coord(|t| t.a.y),
        "bx" => coord(|t| t.b.x),
        "by" => coord(|t| t.b.y),
        "cx" => coord(|t| t.c.x),
        "cy" => coord(|t| t.c.y),
        "area" => areas,
        "shape" => shapes
    )?;
    Ok((df, summary))
}

/// Classify every row of `input` and write the annotated CSV to `out`.
pub fn run_batch(input: &Path, out: &Path) -> Result<BatchSummary> {
    let triangles = read_triangles(input)?;
    let (mut df, summary) = annotate(&triangles)?;
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    CsvWriter::new(&mut file)
        .finish(&mut df)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn batch_classifies_rows_and_flags_degenerate() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.csv");
        fs::write(
            &input,
            "ax,ay,bx,by,cx,cy\n\
             1,1,2,2,3,1\n\
             2,1,4,3,4,1\n\
             1,2,3,1,4,4\n\
             1,3,2,5,4,1\n\
             1,1,1,1,1,1\n",
        )
        .unwrap();
        let out = dir.path().join("nested").join("out.csv");
        let summary = run_batch(&input, &out).unwrap();
        assert_eq!(summary.rows, 5);
        assert_eq!(summary.degenerate_rows, vec![4]);
        for name in ["equilateral", "isosceles", "right", "any", DEGENERATE] {
            assert_eq!(summary.shapes.get(name), Some(&1), "{name}");
        }

        let text = fs::read_to_string(&out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("ax,ay,bx,by,cx,cy,area,shape")
        );
        let shapes: Vec<&str> = lines.filter_map(|l| l.rsplit(',').next()).collect();
        assert_eq!(
            shapes,
            vec!["equilateral", "isosceles", "right", "any", DEGENERATE]
        );
    }

    #[test]
    fn batch_rejects_fractional_coordinates() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.csv");
        fs::write(&input, "ax,ay,bx,by,cx,cy\n1.9,1,2,2,3,1\n").unwrap();
        let err = read_triangles(&input).unwrap_err();
        assert!(format!("{err:#}").contains("\"ax\" must hold integers"));
    }

    #[test]
    fn batch_rejects_out_of_range_coordinates() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.csv");
        fs::write(&input, "ax,ay,bx,by,cx,cy\n1,1,2,2,3,9999999999\n").unwrap();
        let err = read_triangles(&input).unwrap_err();
        assert!(format!("{err:#}").contains("\"cy\" has values outside the i32 range"));
    }

    #[test]
    fn batch_reports_missing_column() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.csv");
        fs::write(&input, "ax,ay,bx,by,cx\n1,1,2,2,3\n").unwrap();
        let err = read_triangles(&input).unwrap_err();
        assert!(format!("{err:#}").contains("cy"));
    }
}
