//! Error types for the ranged sort entry point.

use thiserror::Error;

/// Failure reported by [`crate::sort_range`].
///
/// The whole-sequence entry points never fail; only a caller-supplied range
/// can be inconsistent with the sequence it targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    /// The inclusive range `[lo, hi]` reaches past the end of the sequence.
    #[error("range [{lo}, {hi}] is out of bounds for a sequence of length {len}")]
    RangeOutOfBounds { lo: usize, hi: usize, len: usize },
}
