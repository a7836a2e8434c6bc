//! Growable array list plus quicksorts that only reach the elements through the list accessors.

use std::cmp::Ordering;

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl crate::Sorter for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T, L>(list: &mut L) -> crate::Result<()>
            where
                L: crate::List<T> + ?Sized,
                T: Ord + Clone,
            {
                sort(list)
            }

            #[inline]
            fn sort_by<T, L, F>(list: &mut L, compare: F) -> crate::Result<()>
            where
                L: crate::List<T> + ?Sized,
                T: Clone,
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(list, compare)
            }
        }
    };
}

mod array_list;
mod list;

pub mod error;
pub mod growth;
pub mod unstable;

pub use array_list::{DynamicArray, IntoIter, ListIter};
pub use error::{ListError, Result};
pub use list::List;

/// In-place comparison sort over any [`List`].
///
/// Elements must be `Clone` because a swap is composed from [`List::get`] and [`List::set`]: the
/// borrowed value handed out by `get` is copied before it is written to its new slot.
///
/// An `Err` is only possible if the list reports a length it can not serve.
pub trait Sorter {
    fn name() -> String;

    fn sort<T, L>(list: &mut L) -> Result<()>
    where
        L: List<T> + ?Sized,
        T: Ord + Clone;

    fn sort_by<T, L, F>(list: &mut L, compare: F) -> Result<()>
    where
        L: List<T> + ?Sized,
        T: Clone,
        F: FnMut(&T, &T) -> Ordering;
}
