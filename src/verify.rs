//! Result Verification
//!
//! Checks used by the harness and the tests to confirm that a sort produced a
//! non-decreasing arrangement of exactly the values it was given.

use std::collections::HashMap;

/// Check if a slice is sorted in ascending (non-decreasing) order.
#[inline]
pub fn is_sorted(data: &[i32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Check whether `a` and `b` hold the same multiset of values.
///
/// Order is ignored; every value must occur the same number of times in both.
pub fn is_permutation(a: &[i32], b: &[i32]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut counts: HashMap<i32, isize> = HashMap::with_capacity(a.len());
    for &value in a {
        *counts.entry(value).or_insert(0) += 1;
    }
    for &value in b {
        match counts.get_mut(&value) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }
    true
}
