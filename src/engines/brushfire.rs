//! Brushfire (Dijkstra-style best-first) UDF engine.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  Seed: every source cell's 8 non-source neighbors get an initial │
//! │        node carrying the vector offset to that source cell.     │
//! │  Propagate: repeatedly extract the globally cheapest open node,  │
//! │             close it, relax its 8 non-source neighbors by       │
//! │             recomputing their offset vector (exact, not         │
//! │             accumulated) relative to the just-closed cell.      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Carrying the vector `(dx, dy)` rather than only a scalar priority is
//! what makes the result exact Euclidean distance rather than a chamfer
//! approximation: each hop recomputes the true offset to the seed instead
//! of accumulating per-edge increments.

use std::f64::consts::PI;

use rayon::prelude::*;

use super::{source_cells, EIGHT_NEIGHBORS};
use crate::config::BrushfireVariant;
use crate::error::EngineError;
use crate::grid::{BooleanGrid, ScalarGrid};
use crate::wavefront::{DecreaseKeyQueue, WavefrontNode};

/// A cell's state during propagation.
#[derive(Clone, Copy, PartialEq, Eq)]
enum CellState {
  Unseen,
  Closed,
}

/// Distance from every cell to the nearest cell of color `!invert`.
///
/// `cancel`, if supplied, is polled between extraction steps; a cancelled
/// computation returns [`EngineError::Cancelled`].
pub fn compute_udf(
  grid: &BooleanGrid,
  invert: bool,
  parallel: bool,
  variant: BrushfireVariant,
  cancel: Option<&crate::CancellationToken>,
) -> Result<ScalarGrid, EngineError> {
  let (width, height) = grid.dimensions();
  let source = !invert;
  let sources = source_cells(grid, source);

  #[cfg(feature = "tracing")]
  tracing::debug!(width, height, invert, parallel, "brushfire::compute_udf");

  let mut result = ScalarGrid::zeros(width, height)?;
  if sources.is_empty() {
    return Ok(result);
  }

  let mut state = vec![CellState::Unseen; width * height];
  for &(sx, sy) in &sources {
    state[sy as usize * width + sx as usize] = CellState::Closed;
  }

  // A single decrease-key queue has an inherently sequential pop/relax
  // chain; `parallel` only matters for the multi-queue variant, where it
  // governs whether the per-step head peek across sectors runs on rayon.
  match variant {
    BrushfireVariant::SingleQueue => {
      run_single_queue(grid, &sources, source, width, height, &mut state, &mut result, cancel)?
    }
    BrushfireVariant::MultiQueuePolar => run_multi_queue(
      grid, &sources, source, width, height, &mut state, &mut result, parallel, cancel,
    )?,
  }

  Ok(result)
}

fn in_bounds(x: i64, y: i64, width: usize, height: usize) -> bool {
  x >= 0 && y >= 0 && (x as usize) < width && (y as usize) < height
}

fn seed_nodes(
  grid: &BooleanGrid,
  sources: &[(i64, i64)],
  source: bool,
  width: usize,
  height: usize,
) -> Vec<WavefrontNode> {
  let mut seeds = Vec::new();
  for &(sx, sy) in sources {
    for (ox, oy) in EIGHT_NEIGHBORS {
      let (nx, ny) = (sx + ox as i64, sy + oy as i64);
      if !in_bounds(nx, ny, width, height) {
        continue;
      }
      if *grid.get(nx as usize, ny as usize) == source {
        continue;
      }
      let dx = (sx - nx) as f64 / 2.0;
      let dy = (sy - ny) as f64 / 2.0;
      seeds.push(WavefrontNode::new(nx as i32, ny as i32, dx, dy));
    }
  }
  seeds
}

#[allow(clippy::too_many_arguments)]
fn run_single_queue(
  grid: &BooleanGrid,
  sources: &[(i64, i64)],
  source: bool,
  width: usize,
  height: usize,
  state: &mut [CellState],
  result: &mut ScalarGrid,
  cancel: Option<&crate::CancellationToken>,
) -> Result<(), EngineError> {
  let mut queue = DecreaseKeyQueue::new();
  for node in seed_nodes(grid, sources, source, width, height) {
    queue.push(node);
  }

  while let Some(node) = queue.pop() {
    if let Some(token) = cancel {
      if token.is_cancelled() {
        return Err(EngineError::Cancelled);
      }
    }
    let idx = node.y as usize * width + node.x as usize;
    if state[idx] == CellState::Closed {
      continue;
    }
    state[idx] = CellState::Closed;
    result.set(node.x as usize, node.y as usize, node.priority());

    for (ox, oy) in EIGHT_NEIGHBORS {
      let (nx, ny) = (node.x as i64 + ox as i64, node.y as i64 + oy as i64);
      if !in_bounds(nx, ny, width, height) {
        continue;
      }
      let nidx = ny as usize * width + nx as usize;
      if state[nidx] == CellState::Closed || *grid.get(nx as usize, ny as usize) == source {
        continue;
      }
      let new_dx = node.dx - ox as f64;
      let new_dy = node.dy - oy as f64;
      queue.push(WavefrontNode::new(nx as i32, ny as i32, new_dx, new_dy));
    }
  }
  Ok(())
}

/// Polar sector index of cell `(x, y)`, relative to the image center.
///
/// Uses `atan2(y_fraction, x_fraction)` with the component order from the
/// design notes (`y/cy - 1` first) so non-square images partition by
/// equal image fraction rather than equal angle.
fn sector_of(x: i64, y: i64, width: usize, height: usize, num_sectors: usize) -> usize {
  let cx = width as f64 / 2.0;
  let cy = height as f64 / 2.0;
  let nx = (x as f64 + 0.5) / cx - 1.0;
  let ny = (y as f64 + 0.5) / cy - 1.0;
  let angle = ny.atan2(nx);
  let fraction = (angle + PI) / (2.0 * PI);
  ((fraction * num_sectors as f64) as usize).min(num_sectors - 1)
}

#[allow(clippy::too_many_arguments)]
fn run_multi_queue(
  grid: &BooleanGrid,
  sources: &[(i64, i64)],
  source: bool,
  width: usize,
  height: usize,
  state: &mut [CellState],
  result: &mut ScalarGrid,
  parallel: bool,
  cancel: Option<&crate::CancellationToken>,
) -> Result<(), EngineError> {
  let num_sectors = if parallel {
    rayon::current_num_threads().max(1)
  } else {
    1
  };
  let mut queues: Vec<DecreaseKeyQueue> = (0..num_sectors).map(|_| DecreaseKeyQueue::new()).collect();

  for node in seed_nodes(grid, sources, source, width, height) {
    let sector = sector_of(node.x as i64, node.y as i64, width, height, num_sectors);
    queues[sector].push(node);
  }

  loop {
    if let Some(token) = cancel {
      if token.is_cancelled() {
        return Err(EngineError::Cancelled);
      }
    }

    // Parallel peek: each queue reports its current best priority.
    let peeks: Vec<Option<f64>> = if parallel {
      queues.par_iter_mut().map(|q| q.peek_priority()).collect()
    } else {
      queues.iter_mut().map(|q| q.peek_priority()).collect()
    };

    let winner = peeks
      .iter()
      .enumerate()
      .filter_map(|(i, p)| p.map(|p| (i, p)))
      .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    let Some((winning_sector, _)) = winner else {
      break;
    };

    let Some(node) = queues[winning_sector].pop() else {
      continue;
    };

    let idx = node.y as usize * width + node.x as usize;
    if state[idx] == CellState::Closed {
      continue;
    }
    state[idx] = CellState::Closed;
    result.set(node.x as usize, node.y as usize, node.priority());

    for (ox, oy) in EIGHT_NEIGHBORS {
      let (nx, ny) = (node.x as i64 + ox as i64, node.y as i64 + oy as i64);
      if !in_bounds(nx, ny, width, height) {
        continue;
      }
      let nidx = ny as usize * width + nx as usize;
      if state[nidx] == CellState::Closed || *grid.get(nx as usize, ny as usize) == source {
        continue;
      }
      let new_dx = node.dx - ox as f64;
      let new_dy = node.dy - oy as f64;
      let target_sector = sector_of(nx, ny, width, height, num_sectors);
      queues[target_sector].push(WavefrontNode::new(nx as i32, ny as i32, new_dx, new_dy));
    }
  }
  Ok(())
}

#[cfg(test)]
#[path = "brushfire_test.rs"]
mod brushfire_test;
