//! Basic recursive quicksort, last element as pivot.
//!
//! Recursion depth grows linearly on sorted, reverse sorted and all-equal input, large inputs of
//! that shape can overflow the thread stack. Use [`quicksort_stack`](super::quicksort_stack) for
//! those.

use std::cmp::Ordering;

use super::lomuto_partition;
use crate::error::Result;
use crate::List;

sort_impl!("quicksort_lomuto_unstable");

#[inline]
pub fn sort<T, L>(list: &mut L) -> Result<()>
where
    L: List<T> + ?Sized,
    T: Ord + Clone,
{
    unstable_sort(list, |a, b| a.lt(b))
}

#[inline]
pub fn sort_by<T, L, F>(list: &mut L, mut compare: F) -> Result<()>
where
    L: List<T> + ?Sized,
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    unstable_sort(list, |a, b| compare(a, b) == Ordering::Less)
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

fn unstable_sort<T, L, F>(list: &mut L, mut is_less: F) -> Result<()>
where
    L: List<T> + ?Sized,
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = list.len();
    tracing::trace!(len, "quicksort_lomuto_unstable");

    quicksort(list, 0, len, &mut is_less)
}

/// Sorts the half-open range `low..end`.
///
/// Recursion depth equals the number of nested partitions, which is linear for already sorted,
/// reverse sorted and all-equal input.
fn quicksort<T, L, F>(list: &mut L, low: usize, end: usize, is_less: &mut F) -> Result<()>
where
    L: List<T> + ?Sized,
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if end - low < 2 {
        return Ok(());
    }

    let pivot_pos = lomuto_partition(list, low, end - 1, is_less)?;

    quicksort(list, low, pivot_pos, is_less)?;
    quicksort(list, pivot_pos + 1, end, is_less)
}
