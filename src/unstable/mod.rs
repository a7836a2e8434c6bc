//! Unstable quicksorts built on the Lomuto partition scheme.
//!
//! None of them touch a backing buffer directly, every read goes through [`List::get`] and every
//! write through [`List::set`].

use crate::error::Result;
use crate::List;

// Reference implementation, recursion into both partitions.
pub mod quicksort;

// Same partition, ranges kept on an explicit heap stack.
pub mod quicksort_stack;

// Random pivot, recursion bounded by always looping on the larger partition.
pub mod quicksort_random_pivot;

/// Partitions `low..=high` around the element at `high` and returns the pivot's final index.
///
/// Everything left of the returned index is less than the pivot, everything right of it is not.
fn lomuto_partition<T, L, F>(list: &mut L, low: usize, high: usize, is_less: &mut F) -> Result<usize>
where
    L: List<T> + ?Sized,
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    // The pivot stays at `high` for the whole scan, `store <= j < high` holds throughout.
    let mut store = low;
    for j in low..high {
        if is_less(list.get(j)?, list.get(high)?) {
            swap(list, store, j)?;
            store += 1;
        }
    }

    // Place the pivot between the two partitions.
    swap(list, store, high)?;

    Ok(store)
}

/// `set(a, set(b, get(a)))`.
///
/// Unlike the plain composition, swapping an index with itself writes nothing.
fn swap<T, L>(list: &mut L, a: usize, b: usize) -> Result<()>
where
    L: List<T> + ?Sized,
    T: Clone,
{
    if a == b {
        return Ok(());
    }

    let first = list.get(a)?.clone();
    let second = list.set(b, first)?;
    list.set(a, second)?;

    Ok(())
}
