//! Brute-force correctness oracle.
//!
//! For every cell, scans every source-colored cell and keeps the minimum
//! edge distance. Θ(W²H²). Rows (or row chunks) are independent: no shared
//! mutation of output cells between workers.

use rayon::prelude::*;

use super::source_cells;
use crate::error::EngineError;
use crate::grid::{edge_distance, BooleanGrid, ScalarGrid};

/// Distance from every cell to the nearest cell of color `!invert`
/// (`invert = false` → interior is source, i.e. `UDF(image)`).
pub fn compute_udf(
  grid: &BooleanGrid,
  invert: bool,
  parallel: bool,
) -> Result<ScalarGrid, EngineError> {
  let (width, height) = grid.dimensions();
  let source = !invert;
  let sources = source_cells(grid, source);

  #[cfg(feature = "tracing")]
  tracing::debug!(width, height, invert, parallel, "brute::compute_udf");

  if sources.is_empty() {
    // No cell of the source color exists: distance is undefined: the
    // degenerate all-uniform case resolves to an all-zero SDF, so an
    // all-zero UDF here is the value that makes that cancellation hold.
    return ScalarGrid::zeros(width, height);
  }

  let compute_row = |y: usize| -> Vec<f64> {
    (0..width)
      .map(|x| {
        if *grid.get(x, y) == source {
          0.0
        } else {
          let q = (x as i64, y as i64);
          sources
            .iter()
            .map(|&p| edge_distance(q, p))
            .fold(f64::INFINITY, f64::min)
        }
      })
      .collect()
  };

  let rows: Vec<Vec<f64>> = if parallel {
    (0..height).into_par_iter().map(compute_row).collect()
  } else {
    (0..height).map(compute_row).collect()
  };

  ScalarGrid::from_cells(width, height, rows.into_iter().flatten().collect())
}

#[cfg(test)]
#[path = "brute_test.rs"]
mod brute_test;
