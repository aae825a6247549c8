//! Cooperative cancellation, checked at row/column join points.
//!
//! Not part of the core contract (spec engines run to completion by
//! default); an engine only consults a token when the caller supplies one.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A shared flag an engine polls at parallel join points.
///
/// Cloning shares the same underlying flag; setting it from any clone is
/// visible to all others.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
  flag: Arc<AtomicBool>,
}

impl CancellationToken {
  pub fn new() -> Self {
    Self {
      flag: Arc::new(AtomicBool::new(false)),
    }
  }

  /// Request cancellation. Idempotent.
  pub fn cancel(&self) {
    self.flag.store(true, Ordering::Relaxed);
  }

  /// True once [`Self::cancel`] has been called on this token or a clone.
  pub fn is_cancelled(&self) -> bool {
    self.flag.load(Ordering::Relaxed)
  }
}

#[cfg(test)]
#[path = "cancellation_test.rs"]
mod cancellation_test;
