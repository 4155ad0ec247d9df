//! Searching in sequences (slices) of comparable values.
//!
//! [linear_search] works on any sequence, [binary_search] requires the
//! sequence to be sorted in ascending order.

use crate::SearchError;
use std::fmt::Debug;
use tracing::trace;
use tracing_attributes::instrument;

/// Scans `sequence` front to back and returns the index of the first
/// element equal to `target`, or `None` if there is no such element.
#[instrument(level = "trace", skip(sequence))]
pub fn linear_search<T>(sequence: &[T], target: &T) -> Option<usize>
where
    T: PartialEq + Debug,
{
    sequence.iter().position(|item| item == target)
}

/// Binary search for `target` in the closed index range `[low, high]` of the sorted `sequence`.
///
/// Instead of slicing the sequence for each step (which would make the returned
/// index relative to the slice), the bounds of the current subset are passed along.
/// An empty range (`high < low`) yields `Ok(None)` without touching the sequence.
///
/// # Errors
///
/// [SearchError::IndexOutOfBound] if the range is non-empty and `high` lies beyond the sequence.
///
/// # Examples
///
/// ```
/// use searching::binary_search;
///
/// let sequence = [1, 2, 3, 4, 5, 6, 7, 8];
/// assert_eq!(binary_search(&sequence, 0, 7, &3), Ok(Some(2)));
/// assert_eq!(binary_search(&sequence, 0, 7, &30), Ok(None));
/// ```
#[instrument(level = "trace", skip(sequence))]
pub fn binary_search<T>(sequence: &[T], low: usize, high: usize, target: &T) -> Result<Option<usize>, SearchError>
where
    T: PartialOrd + Debug,
{
    if high < low {
        return Ok(None);
    }
    if high >= sequence.len() {
        return Err(SearchError::IndexOutOfBound {
            index: high,
            len: sequence.len(),
        });
    }

    // same as (low + high) / 2 but cannot overflow
    let mid = low + (high - low) / 2;
    trace!(
        "subset: {:?}, left: {:?}, right: {:?}, mid: {mid} (({low} + {high}) / 2)",
        &sequence[low..=high],
        &sequence[low..mid],
        &sequence[mid + 1..=high]
    );

    if sequence[mid] == *target {
        Ok(Some(mid))
    } else if *target < sequence[mid] {
        // The left subset is sequence[low..mid]; `high` is inclusive hence `mid - 1`
        match mid.checked_sub(1) {
            Some(high) => binary_search(sequence, low, high, target),
            None => Ok(None),
        }
    } else {
        binary_search(sequence, mid + 1, high, target)
    }
}

/// Binary search over the whole sorted `sequence`. Unlike [binary_search] this
/// accepts an empty sequence.
///
/// ```
/// use searching::binary_search_sorted;
///
/// assert_eq!(binary_search_sorted(&[1, 4, 9], &9), Some(2));
/// assert_eq!(binary_search_sorted::<i32>(&[], &9), None);
/// ```
pub fn binary_search_sorted<T>(sequence: &[T], target: &T) -> Option<usize>
where
    T: PartialOrd + Debug,
{
    match sequence.len().checked_sub(1) {
        // the range lies within the sequence, so there is no error to propagate
        Some(high) => binary_search(sequence, 0, high, target).ok().flatten(),
        None => None,
    }
}
