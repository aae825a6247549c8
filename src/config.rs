//! `EngineConfig` — the harness's dispatch and parallelism knobs.

/// Which distance-field engine to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Engine {
  /// Exhaustive Θ(W²H²) scan, used as a correctness oracle.
  Brute,
  /// Best-first wavefront propagation over a pixel graph.
  Brushfire,
  /// Two-pass separable distance transform, near-linear in `W·H`.
  #[default]
  Linear,
}

/// Queue partitioning strategy for the brushfire engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BrushfireVariant {
  /// A single decrease-key priority queue shared by the whole grid.
  #[default]
  SingleQueue,
  /// One queue per polar sector around the image center.
  MultiQueuePolar,
}

/// Configuration for [`crate::compute_sdf`] and the individual engine
/// entry points.
///
/// All fields are optional from the caller's perspective; [`Default`]
/// matches §6 of the specification (`Linear`, parallel, hardware
/// concurrency, `SingleQueue`).
#[derive(Clone, Debug)]
pub struct EngineConfig {
  pub engine: Engine,
  pub parallel: bool,
  /// `None` uses rayon's default (hardware concurrency) global pool.
  pub thread_count: Option<usize>,
  pub brushfire_variant: BrushfireVariant,
}

impl Default for EngineConfig {
  fn default() -> Self {
    Self {
      engine: Engine::default(),
      parallel: true,
      thread_count: None,
      brushfire_variant: BrushfireVariant::default(),
    }
  }
}

impl EngineConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_engine(mut self, engine: Engine) -> Self {
    self.engine = engine;
    self
  }

  pub fn with_parallel(mut self, parallel: bool) -> Self {
    self.parallel = parallel;
    self
  }

  pub fn with_thread_count(mut self, thread_count: usize) -> Self {
    self.thread_count = Some(thread_count);
    self
  }

  pub fn with_brushfire_variant(mut self, variant: BrushfireVariant) -> Self {
    self.brushfire_variant = variant;
    self
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
