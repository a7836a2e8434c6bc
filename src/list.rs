use crate::error::Result;

/// Indexed, growable sequence.
///
/// The sorters in [`unstable`](crate::unstable) only rely on [`List::len`], [`List::get`] and
/// [`List::set`], so any container that honors their bounds contract can be sorted in place.
pub trait List<T> {
    /// Appends `value` after the last element.
    fn push(&mut self, value: T) -> Result<()>;

    /// Inserts `value` at `index`, shifting everything from `index` on one slot to the right.
    ///
    /// `index == len()` appends.
    fn insert_at(&mut self, index: usize, value: T) -> Result<()>;

    /// Replaces the element at `index` and returns the previous one.
    fn set(&mut self, index: usize, value: T) -> Result<T>;

    fn get(&self, index: usize) -> Result<&T>;

    /// Removes the element at `index`, shifting everything after it one slot to the left.
    fn remove_at(&mut self, index: usize) -> Result<T>;

    /// Removes the last element equal to `target`. Returns whether one was found.
    fn remove_value(&mut self, target: &T) -> bool
    where
        T: PartialEq;

    fn clear(&mut self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Releases all spare capacity.
    fn trim_to_exact_length(&mut self);
}
