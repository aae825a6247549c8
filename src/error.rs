//! Error kinds surfaced by the engines.
//!
//! Engines never recover internally: the first error is returned to the
//! caller and any partially allocated buffers are dropped.

use thiserror::Error;

/// Errors an engine can return.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
  /// Grid width or height was zero.
  #[error("invalid grid dimensions: {width}x{height}")]
  InvalidDimensions { width: usize, height: usize },

  /// A working buffer could not be reserved.
  #[error("failed to allocate working buffers")]
  AllocationFailure,

  /// A cooperative [`crate::CancellationToken`] was set mid-computation.
  #[error("computation cancelled")]
  Cancelled,
}
