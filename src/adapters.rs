//! Threshold and visualization adapters.
//!
//! These are thin external-collaborator contracts (§4.6): simple,
//! single-pass, and deliberately outside the concern of the three
//! distance-field engines. Image decoding and color-space handling proper
//! are explicitly out of scope; these operate on an already-decoded,
//! in-memory pixel buffer.

use crate::error::EngineError;
use crate::grid::{BooleanGrid, Grid, ScalarGrid};

/// A decoded color pixel, components in `[0.0, 1.0]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgb {
  pub r: f64,
  pub g: f64,
  pub b: f64,
}

/// A dense `W × H` color image.
pub type ColorImage = Grid<Rgb>;

/// Per-pixel `channel(pixel) >= threshold`.
pub fn threshold(
  image: &ColorImage,
  threshold: f64,
  channel: impl Fn(Rgb) -> f64,
) -> Result<BooleanGrid, EngineError> {
  let (width, height) = image.dimensions();
  let cells = image
    .as_slice()
    .iter()
    .map(|&px| channel(px) >= threshold)
    .collect();
  BooleanGrid::from_cells(width, height, cells)
}

/// Divide every cell by `max(|min|, |max|)`, leaving a constant field
/// unchanged (there is no meaningful scale to normalize against).
pub fn normalize(sdf: &ScalarGrid) -> ScalarGrid {
  let (width, height) = sdf.dimensions();
  let (min, max) = sdf
    .as_slice()
    .iter()
    .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
      (lo.min(v), hi.max(v))
    });
  let cells: Vec<f64> = if min == max {
    sdf.as_slice().to_vec()
  } else {
    let scale = min.abs().max(max.abs());
    sdf.as_slice().iter().map(|&v| v / scale).collect()
  };
  ScalarGrid::from_cells(width, height, cells).expect("same shape as input")
}

/// `R = max(0, n)`, `G = max(0, -n)` from the normalized value `n`; `B = 1`
/// within `boundary_band` of the zero level set, measured on the raw
/// (un-normalized) field.
pub fn to_image(sdf: &ScalarGrid, boundary_band: f64) -> ColorImage {
  let normalized = normalize(sdf);
  let (width, height) = sdf.dimensions();
  let cells = normalized
    .as_slice()
    .iter()
    .zip(sdf.as_slice())
    .map(|(&n, &raw)| Rgb {
      r: n.max(0.0),
      g: (-n).max(0.0),
      b: if raw.abs() < boundary_band { 1.0 } else { 0.0 },
    })
    .collect();
  ColorImage::from_cells(width, height, cells).expect("same shape as input")
}

#[cfg(test)]
#[path = "adapters_test.rs"]
mod adapters_test;
