//! Non-recursive quicksort.

use std::cmp::Ordering;

use super::lomuto_partition;
use crate::error::Result;
use crate::List;

sort_impl!("quicksort_stack_lomuto_unstable");

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
    tracing::trace!(len, "quicksort_stack_lomuto_unstable");

    quicksort(list, len, &mut is_less)
}

fn quicksort<T, L, F>(list: &mut L, len: usize, is_less: &mut F) -> Result<()>
where
    L: List<T> + ?Sized,
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    // Half-open ranges still waiting to be partitioned. The smaller side of every partition is
    // popped first, so at most `log2(len) + 1` ranges are pending at any time.
    let mut stack: Vec<(usize, usize)> = Vec::with_capacity((len | 1).ilog2() as usize + 2);
    stack.push((0, len));

    while let Some((low, end)) = stack.pop() {
        if end - low < 2 {
            continue;
        }

        let pivot_pos = lomuto_partition(list, low, end - 1, is_less)?;

        let left = (low, pivot_pos);
        let right = (pivot_pos + 1, end);

        if pivot_pos - low > end - (pivot_pos + 1) {
            stack.push(left);
            stack.push(right);
        } else {
            stack.push(right);
            stack.push(left);
        }
    }

    Ok(())
}
