//! Lomuto Quicksort
//!
//! In-place quicksort for `i32` sequences. The pivot is always the last
//! element of the range being partitioned, and elements equal to the pivot are
//! moved to its left, so the sort is not stable.
//!
//! Pending ranges live on an explicit work-list instead of the call stack.
//! Pivot-last partitioning degrades to O(n²) comparisons on ascending or
//! descending input; the work-list keeps that case from also exhausting the
//! stack. After each partition the smaller side is processed first, which
//! bounds the work-list at O(log n) entries.

use tracing::{debug, trace};

use crate::error::SortError;

/// Inclusive `[lo, hi]` span of positions awaiting partitioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Range {
    lo: usize,
    hi: usize,
}

impl Range {
    /// Number of positions covered. Only built with `lo < hi`.
    #[inline]
    fn len(&self) -> usize {
        self.hi - self.lo + 1
    }
}

/// Sort a slice in place and hand the same slice back.
///
/// Empty slices are returned untouched.
///
/// # Example
///
/// ```
/// let mut data = [7, 2, 3, 9, 1, 8, 5, 4, 6];
/// quicksort::sort(&mut data);
/// assert_eq!(data, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// ```
pub fn sort(data: &mut [i32]) -> &mut [i32] {
    if let Some(hi) = data.len().checked_sub(1) {
        sort_bounded(data, 0, hi);
    }
    data
}

/// Sort an owned, possibly absent sequence. `None` comes back as `None`.
pub fn sort_option(data: Option<Vec<i32>>) -> Option<Vec<i32>> {
    data.map(|mut values| {
        sort(&mut values);
        values
    })
}

/// Return a sorted copy, leaving `data` as it was.
pub fn sorted(data: &[i32]) -> Vec<i32> {
    let mut copy = data.to_vec();
    sort(&mut copy);
    copy
}

/// Sort only the inclusive range `[lo, hi]` of `data`.
///
/// An empty sequence, or a range with `lo >= hi`, is left alone whatever the
/// bounds. Otherwise `hi` must be a valid position.
pub fn sort_range(data: &mut [i32], lo: usize, hi: usize) -> Result<(), SortError> {
    if data.is_empty() || lo >= hi {
        return Ok(());
    }
    if hi >= data.len() {
        debug!(lo, hi, len = data.len(), "rejecting out-of-bounds sort range");
        return Err(SortError::RangeOutOfBounds {
            lo,
            hi,
            len: data.len(),
        });
    }
    sort_bounded(data, lo, hi);
    Ok(())
}

/// Partition `data[lo..=hi]` around the pivot `data[hi]`.
///
/// On return the pivot sits at the returned index, everything before it in the
/// range is `<=` the pivot and everything after it is `>` the pivot.
///
/// # Panics
///
/// Panics if `lo > hi` or `hi` is not a valid position in `data`.
pub fn partition(data: &mut [i32], lo: usize, hi: usize) -> usize {
    assert!(
        lo <= hi && hi < data.len(),
        "partition range [{}, {}] invalid for length {}",
        lo,
        hi,
        data.len()
    );

    let pivot = data[hi];
    let mut index = lo;
    for i in lo..hi {
        if data[i] <= pivot {
            swap(data, i, index);
            index += 1;
        }
    }
    swap(data, hi, index);
    index
}

#[inline]
fn swap(data: &mut [i32], a: usize, b: usize) {
    data.swap(a, b);
}

/// Drive the work-list over `[lo, hi]`. Bounds must already be valid.
///
/// Returns the largest number of ranges that were pending at once.
fn sort_bounded(data: &mut [i32], lo: usize, hi: usize) -> usize {
    if lo >= hi {
        return 0;
    }

    let mut pending = vec![Range { lo, hi }];
    let mut partitions = 0usize;
    let mut peak_pending = pending.len();

    while let Some(range) = pending.pop() {
        let p = partition(data, range.lo, range.hi);
        partitions += 1;

        // Single-element sides are already in place.
        let left = p
            .checked_sub(1)
            .filter(|&end| end > range.lo)
            .map(|end| Range { lo: range.lo, hi: end });
        let right = Some(p + 1)
            .filter(|&start| start < range.hi)
            .map(|start| Range {
                lo: start,
                hi: range.hi,
            });

        match (left, right) {
            (Some(a), Some(b)) => {
                let (larger, smaller) = if a.len() >= b.len() { (a, b) } else { (b, a) };
                pending.push(larger);
                pending.push(smaller);
            }
            (Some(side), None) | (None, Some(side)) => pending.push(side),
            (None, None) => {}
        }
        peak_pending = peak_pending.max(pending.len());
    }

    trace!(
        len = hi - lo + 1,
        partitions,
        peak_pending,
        "quicksort range finished"
    );
    peak_pending
}
