//! sdf2d - Signed distance fields from 2D binary rasters.
//!
//! Given a `W × H` grid of interior/exterior cells, this crate computes a
//! same-shape grid of exact signed Euclidean distances to the boundary:
//! negative inside, positive outside, zero on the boundary itself. Three
//! interchangeable engines compute the unsigned half of that field —
//! [`engines::brute`] (an exhaustive Θ(W²H²) oracle), [`engines::brushfire`]
//! (best-first wavefront propagation), and [`engines::linear`] (a two-pass
//! separable transform, near-linear in `W·H`) — and [`sdf::compute`]
//! combines two runs of the chosen engine into the signed field.
//!
//! # Example
//!
//! ```
//! use sdf2d::{compute_sdf, BooleanGrid, EngineConfig};
//!
//! let mut grid = BooleanGrid::filled(5, 5, false).unwrap();
//! grid.set(2, 2, true);
//!
//! let sdf = compute_sdf(&grid, &EngineConfig::default()).unwrap();
//! assert!(*sdf.get(2, 2) < 0.0);
//! assert!(*sdf.get(0, 0) > 0.0);
//! ```

pub mod adapters;
pub mod cancellation;
pub mod config;
pub mod engines;
pub mod error;
pub mod grid;
pub mod sdf;
pub mod wavefront;

pub use adapters::{normalize, threshold, to_image, ColorImage, Rgb};
pub use cancellation::CancellationToken;
pub use config::{BrushfireVariant, Engine, EngineConfig};
pub use error::EngineError;
pub use grid::{edge_distance, BooleanGrid, Grid, ScalarGrid};
pub use wavefront::{DecreaseKeyQueue, WavefrontNode};

/// Compute the signed distance field of `grid` under `config`.
///
/// This is the crate's single public entry point; [`sdf::compute`] is its
/// implementation.
pub fn compute_sdf(grid: &BooleanGrid, config: &EngineConfig) -> Result<ScalarGrid, EngineError> {
  sdf::compute(grid, config)
}
