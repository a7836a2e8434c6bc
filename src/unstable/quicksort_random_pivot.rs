//! Quicksort with a uniformly random pivot.
//!
//! Sorted and reverse sorted inputs no longer degrade to quadratic time. Inputs with many equal
//! elements still do, the Lomuto scheme puts every element equal to the pivot on one side.

use std::cmp::Ordering;

use rand::Rng;

use super::{lomuto_partition, swap};
use crate::error::Result;
use crate::List;

sort_impl!("quicksort_random_pivot_lomuto_unstable");

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
    tracing::trace!(len, "quicksort_random_pivot_lomuto_unstable");

    quicksort(list, 0, len, &mut is_less, &mut rand::thread_rng())
}

fn quicksort<T, L, F, R>(
    list: &mut L,
    mut low: usize,
    mut end: usize,
    is_less: &mut F,
    rng: &mut R,
) -> Result<()>
where
    L: List<T> + ?Sized,
    T: Clone,
    F: FnMut(&T, &T) -> bool,
    R: Rng,
{
    loop {
        if end - low < 2 {
            return Ok(());
        }

        let high = end - 1;
        swap(list, rng.gen_range(low..=high), high)?;

        let pivot_pos = lomuto_partition(list, low, high, is_less)?;

        // Recurse into the smaller side, continue with the larger one.
        if pivot_pos - low < end - (pivot_pos + 1) {
            quicksort(list, low, pivot_pos, is_less, rng)?;
            low = pivot_pos + 1;
        } else {
            quicksort(list, pivot_pos + 1, end, is_less, rng)?;
            end = pivot_pos;
        }
    }
}
