//! Composes the two UDF passes into a signed field.
//!
//! `SDF(image) = UDF(image, source = interior) - UDF(image, source = exterior)`:
//! negative inside the interior, positive outside, zero on the boundary.

use rayon::{join, ThreadPoolBuilder};

use crate::config::EngineConfig;
use crate::engines;
use crate::error::EngineError;
use crate::grid::{BooleanGrid, ScalarGrid};

/// Compute the signed distance field of `grid` under `config`.
///
/// The two UDF passes (source = interior, source = exterior) are
/// independent and run concurrently via `rayon::join` when
/// `config.parallel` is set. When `config.thread_count` is set, the
/// whole computation runs inside a scoped pool sized to that count
/// instead of rayon's global pool.
pub fn compute(grid: &BooleanGrid, config: &EngineConfig) -> Result<ScalarGrid, EngineError> {
  match config.thread_count {
    Some(num_threads) => {
      let pool = ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .map_err(|_| EngineError::AllocationFailure)?;
      pool.install(|| compute_on_current_pool(grid, config))
    }
    None => compute_on_current_pool(grid, config),
  }
}

fn compute_on_current_pool(
  grid: &BooleanGrid,
  config: &EngineConfig,
) -> Result<ScalarGrid, EngineError> {
  let (interior, exterior) = if config.parallel {
    join(
      || engines::compute_udf(grid, false, config),
      || engines::compute_udf(grid, true, config),
    )
  } else {
    (
      engines::compute_udf(grid, false, config),
      engines::compute_udf(grid, true, config),
    )
  };
  let interior = interior?;
  let exterior = exterior?;

  let (width, height) = grid.dimensions();
  let cells = interior
    .as_slice()
    .iter()
    .zip(exterior.as_slice())
    .map(|(&i, &e)| i - e)
    .collect();
  ScalarGrid::from_cells(width, height, cells)
}

#[cfg(test)]
#[path = "sdf_test.rs"]
mod sdf_test;
