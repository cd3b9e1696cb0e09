//! Batch run records: `<out>.provenance.json` beside each annotated CSV.
//!
//! The record ties an output back to its input file, the code revision and the
//! library version, and repeats the per-shape counts so a run can be audited
//! without re-reading the CSV.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::batch::BatchSummary;

/// Everything recorded about one `batch` run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRecord {
    pub code_rev: String,
    pub trishape_version: String,
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows: usize,
    pub shapes: BTreeMap<String, usize>,
    pub degenerate_rows: Vec<usize>,
}

impl BatchRecord {
    pub fn new(input: &Path, output: &Path, summary: &BatchSummary) -> Self {
        Self {
            code_rev: code_rev(),
            trishape_version: trishape::VERSION.to_string(),
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            rows: summary.rows,
            shapes: summary
                .shapes
                .iter()
                .map(|(name, n)| (name.to_string(), *n))
                .collect(),
            degenerate_rows: summary.degenerate_rows.clone(),
        }
    }

    /// Sidecar location: `shapes.csv` -> `shapes.provenance.json`.
    pub fn path(&self) -> PathBuf {
        self.output.with_extension("provenance.json")
    }

    pub fn write(&self) -> Result<PathBuf> {
        let path = self.path();
        let body = serde_json::to_vec_pretty(self)?;
        fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

/// Revision from `GIT_COMMIT` (runtime, then build time), else the checkout's HEAD.
pub fn code_rev() -> String {
    std::env::var("GIT_COMMIT")
        .ok()
        .or_else(|| option_env!("GIT_COMMIT").map(str::to_owned))
        .filter(|rev| !rev.is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=12", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let rev = String::from_utf8(output.stdout).ok()?;
    Some(rev.trim().to_string()).filter(|rev| !rev.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn summary() -> BatchSummary {
        let mut shapes = BTreeMap::new();
        shapes.insert("right", 2);
        shapes.insert("degenerate", 1);
        BatchSummary {
            rows: 3,
            shapes,
            degenerate_rows: vec![1],
        }
    }

    #[test]
    fn record_sits_beside_output() {
        let record = BatchRecord::new(
            Path::new("in.csv"),
            Path::new("/tmp/run/shapes.csv"),
            &summary(),
        );
        assert_eq!(record.path(), Path::new("/tmp/run/shapes.provenance.json"));
        let bare = BatchRecord::new(Path::new("in.csv"), Path::new("shapes"), &summary());
        assert_eq!(bare.path(), Path::new("shapes.provenance.json"));
    }

    #[test]
    fn record_round_trips_counts_and_degenerate_rows() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("shapes.csv");
        let record = BatchRecord::new(Path::new("in.csv"), &output, &summary());
        let path = record.write().unwrap();
        let parsed: BatchRecord = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed, record);
        assert_eq!(parsed.shapes.get("right"), Some(&2));
        assert_eq!(parsed.degenerate_rows, vec![1]);
        assert_eq!(parsed.trishape_version, trishape::VERSION);
    }
}
