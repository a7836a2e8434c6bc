//! Growable array list backed by a single owned buffer.
//!
//! The list is not synchronized. Sharing it across threads follows the usual borrow rules, any
//! concurrent mutation needs an external lock.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

use crate::error::{ListError, Result};
use crate::growth::{self, DEFAULT_CAPACITY};
use crate::list::List;

/// Contiguous growable list.
///
/// Slots `0..len` hold the live elements, slots `len..capacity` are always `None`, so removed
/// values are dropped as soon as they leave the list. Capacity only changes on growth and on
/// [`DynamicArray::trim_to_exact_length`].
#[derive(Clone)]
pub struct DynamicArray<T> {
    buffer: Box<[Option<T>]>,
    len: usize,
}

impl<T> DynamicArray<T> {
    /// Creates an empty list with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self {
            buffer: std::iter::repeat_with(|| None)
                .take(DEFAULT_CAPACITY)
                .collect(),
            len: 0,
        }
    }

    /// Creates an empty list with exactly `capacity` slots.
    ///
    /// A capacity of 0 does not allocate.
    pub fn with_capacity(capacity: isize) -> Result<Self> {
        let capacity =
            usize::try_from(capacity).map_err(|_| ListError::InvalidCapacity(capacity))?;

        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(capacity)
            .map_err(|_| ListError::AllocationFailed { capacity })?;
        buffer.resize_with(capacity, || None);

        Ok(Self {
            buffer: buffer.into_boxed_slice(),
            len: 0,
        })
    }

    /// Creates a list holding `items` in order, with no spare capacity.
    pub fn from_sequence<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let buffer: Box<[Option<T>]> = items.into_iter().map(Some).collect();
        let len = buffer.len();

        Self { buffer, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.buffer[..self.len]
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(ListError::IndexOutOfBounds {
                index,
                len: self.len,
            })
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let len = self.len;
        self.live_slot(index)?
            .replace(value)
            .ok_or(ListError::IndexOutOfBounds { index, len })
    }

    pub fn push(&mut self, value: T) -> Result<()> {
        self.ensure_capacity(self.len + 1)?;

        self.buffer[self.len] = Some(value);
        self.len += 1;

        Ok(())
    }

    pub fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(ListError::InvalidInsertIndex {
                index,
                len: self.len,
            });
        }

        self.ensure_capacity(self.len + 1)?;

        // Write behind the tail, then rotate it into place.
        self.buffer[self.len] = Some(value);
        self.buffer[index..=self.len].rotate_right(1);
        self.len += 1;

        Ok(())
    }

    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let len = self.len;
        let removed = self
            .live_slot(index)?
            .take()
            .ok_or(ListError::IndexOutOfBounds { index, len })?;

        // The emptied slot travels to the old tail position.
        self.buffer[index..len].rotate_left(1);
        self.len -= 1;

        Ok(removed)
    }

    /// Removes the element with the highest index that equals `target`.
    ///
    /// Returns `false`, leaving the list untouched, if no element matches.
    pub fn remove_value(&mut self, target: &T) -> bool
    where
        T: PartialEq,
    {
        let found = self.iter().rposition(|value| value == target);

        match found {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    /// Drops every element. The capacity stays as is.
    pub fn clear(&mut self) {
        self.buffer[..self.len]
            .iter_mut()
            .for_each(|slot| *slot = None);
        self.len = 0;
    }

    /// Reallocates the buffer so that `capacity() == len()`.
    pub fn trim_to_exact_length(&mut self) {
        let capacity = self.capacity();
        if self.len == capacity {
            return;
        }

        self.buffer = self.buffer[..self.len]
            .iter_mut()
            .map(Option::take)
            .collect();

        tracing::debug!(capacity, len = self.len, "trimmed list buffer");
    }

    /// Returns a fresh iterator over the live elements, front to back.
    pub fn iter(&self) -> ListIter<'_, T> {
        ListIter {
            list: self,
            front: 0,
            back: self.len,
        }
    }

    fn live_slot(&mut self, index: usize) -> Result<&mut Option<T>> {
        let len = self.len;
        self.buffer[..len]
            .get_mut(index)
            .ok_or(ListError::IndexOutOfBounds { index, len })
    }

    fn ensure_capacity(&mut self, required: usize) -> Result<()> {
        let capacity = self.capacity();
        if required <= capacity {
            return Ok(());
        }

        let new_capacity = growth::next_capacity(capacity, required - capacity, capacity >> 1)?;

        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(new_capacity)
            .map_err(|_| ListError::AllocationFailed {
                capacity: new_capacity,
            })?;
        buffer.extend(self.buffer[..self.len].iter_mut().map(Option::take));
        buffer.resize_with(new_capacity, || None);
        self.buffer = buffer.into_boxed_slice();

        tracing::trace!(capacity, new_capacity, "grew list buffer");

        Ok(())
    }
}

impl<T> List<T> for DynamicArray<T> {
    fn push(&mut self, value: T) -> Result<()> {
        DynamicArray::push(self, value)
    }

    fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        DynamicArray::insert_at(self, index, value)
    }

    fn set(&mut self, index: usize, value: T) -> Result<T> {
        DynamicArray::set(self, index, value)
    }

    fn get(&self, index: usize) -> Result<&T> {
        DynamicArray::get(self, index)
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        DynamicArray::remove_at(self, index)
    }

    fn remove_value(&mut self, target: &T) -> bool
    where
        T: PartialEq,
    {
        DynamicArray::remove_value(self, target)
    }

    fn clear(&mut self) {
        DynamicArray::clear(self)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn trim_to_exact_length(&mut self) {
        DynamicArray::trim_to_exact_length(self)
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// Only the live elements take part, two lists with equal contents are equal regardless of
// their capacities.
impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_sequence(values)
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_sequence(iter)
    }
}

/// Borrowing iterator returned by [`DynamicArray::iter`].
pub struct ListIter<'a, T> {
    list: &'a DynamicArray<T>,
    front: usize,
    back: usize,
}

impl<'a, T> ListIter<'a, T> {
    /// Like [`Iterator::next`], but reports running past the end as [`ListError::Exhausted`].
    pub fn try_next(&mut self) -> Result<&'a T> {
        self.next().ok_or(ListError::Exhausted)
    }
}

impl<'a, T> Iterator for ListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }

        let value = self.list.buffer[self.front].as_ref();
        self.front += 1;
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a, T> DoubleEndedIterator for ListIter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        self.list.buffer[self.back].as_ref()
    }
}

impl<T> ExactSizeIterator for ListIter<'_, T> {}

impl<T> FusedIterator for ListIter<'_, T> {}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = ListIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator, yields the live elements front to back.
pub struct IntoIter<T> {
    slots: std::vec::IntoIter<Option<T>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.slots.next().flatten()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut slots = Vec::from(self.buffer);
        slots.truncate(self.len);

        IntoIter {
            slots: slots.into_iter(),
        }
    }
}
