// The assembled feature matrix: one row per input pair, in input order.
//
// Thin by design — the numeric content is produced by the pairwise
// extractor; this type only keeps rows aligned, stacks splits and columns,
// and writes the plain-text output the downstream classifier reads.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// An ordered 2D matrix of feature values. Row i corresponds exactly to
/// input pair i.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureMatrix {
    rows: Vec<Vec<f64>>,
}

impl FeatureMatrix {
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Mutable row access for in-place transforms (scaling).
    pub fn rows_mut(&mut self) -> &mut [Vec<f64>] {
        &mut self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns (0 for an empty matrix).
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Append another matrix's rows below this one's (row stacking).
    pub fn stack_below(&mut self, other: FeatureMatrix) {
        self.rows.extend(other.rows);
    }

    /// Append another matrix's columns to the right, row by row.
    ///
    /// Both matrices must have the same row count — rows are aligned by
    /// pair index, so a mismatch means the caller mixed splits.
    pub fn stack_right(&mut self, other: &FeatureMatrix) -> Result<()> {
        if self.len() != other.len() {
            anyhow::bail!(
                "Cannot column-stack matrices with {} and {} rows",
                self.len(),
                other.len()
            );
        }
        for (row, extra) in self.rows.iter_mut().zip(other.rows.iter()) {
            row.extend_from_slice(extra);
        }
        Ok(())
    }

    /// Write the matrix as plain text: one whitespace-separated row per line.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create feature file {}", path.display()))?;
        let mut out = BufWriter::new(file);
        for row in &self.rows {
            let line: Vec<String> = row.iter().map(|v| format!("{v:.18e}")).collect();
            writeln!(out, "{}", line.join(" "))
                .with_context(|| format!("Failed to write features to {}", path.display()))?;
        }
        out.flush()
            .with_context(|| format!("Failed to flush feature file {}", path.display()))?;
        Ok(())
    }
}
