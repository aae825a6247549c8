//! The three distance-field engines.
//!
//! Each engine exposes a `compute_udf(grid, invert, parallel)` entry point
//! with the same contract: cells of the "source" color hold `0`, every
//! other cell holds the exact Euclidean edge-distance (§4.1 of the design
//! notes) to the nearest source cell. `invert = false` selects interior as
//! source (`UDF(image)`); `invert = true` selects exterior
//! (`UDF(¬image)`). [`crate::sdf::compute`] composes the two into the
//! signed field for any engine.

pub mod brushfire;
pub mod brute;
pub mod linear;

use crate::config::Engine;
use crate::error::EngineError;
use crate::grid::{BooleanGrid, ScalarGrid};
use crate::EngineConfig;

/// Dispatch to the configured engine's `compute_udf`.
pub fn compute_udf(
  grid: &BooleanGrid,
  invert: bool,
  config: &EngineConfig,
) -> Result<ScalarGrid, EngineError> {
  match config.engine {
    Engine::Brute => brute::compute_udf(grid, invert, config.parallel),
    Engine::Brushfire => {
      brushfire::compute_udf(grid, invert, config.parallel, config.brushfire_variant, None)
    }
    Engine::Linear => linear::compute_udf(grid, invert, config.parallel),
  }
}

/// Cells whose color equals `source` (the set brushfire seeds from and
/// brute/linear measure distance to). Returned in row-major order.
pub(crate) fn source_cells(grid: &BooleanGrid, source: bool) -> Vec<(i64, i64)> {
  let (w, h) = grid.dimensions();
  let mut cells = Vec::new();
  for y in 0..h {
    for x in 0..w {
      if *grid.get(x, y) == source {
        cells.push((x as i64, y as i64));
      }
    }
  }
  cells
}

pub(crate) const EIGHT_NEIGHBORS: [(i32, i32); 8] = [
  (-1, -1),
  (0, -1),
  (1, -1),
  (-1, 0),
  (1, 0),
  (-1, 1),
  (0, 1),
  (1, 1),
];
