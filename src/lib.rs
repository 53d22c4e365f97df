//! Quicksort for `i32` Sequences
//!
//! A Lomuto-partition quicksort that sorts in place. The sort is unstable and
//! uses an explicit work-list of pending ranges, so adversarial inputs such as
//! already-sorted or reverse-sorted sequences run in bounded stack space.
//!
//! - [`sort`]: sort a slice in place
//! - [`sort_option`]: sort an owned sequence that may be absent
//! - [`sorted`]: sort a copy, leaving the input untouched
//! - [`sort_range`]: sort an inclusive sub-range, checking its bounds

pub mod error;
pub mod quicksort;
pub mod verify;

pub use error::SortError;
pub use quicksort::{partition, sort, sort_option, sort_range, sorted};
pub use verify::{is_permutation, is_sorted};
