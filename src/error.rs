//! Error type shared by the list container, the growth policy and the sorters.

use thiserror::Error;

/// Result type for list operations.
pub type Result<T> = std::result::Result<T, ListError>;

/// Every way a list operation can refuse a request.
///
/// All checks run before the container is touched, so an `Err` never leaves a partially applied
/// mutation behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// Negative initial capacity.
    #[error("Illegal capacity: {0}")]
    InvalidCapacity(isize),

    /// Insert position outside `0..=len`.
    #[error("Illegal insert index: {index} (len: {len})")]
    InvalidInsertIndex { index: usize, len: usize },

    /// Access or removal outside `0..len`.
    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// The required capacity can not be represented.
    #[error("Required capacity {capacity} + {min_growth} is too large")]
    CapacityOverflow { capacity: usize, min_growth: usize },

    /// The allocator refused the computed capacity.
    #[error("Failed to allocate a buffer of capacity {capacity}")]
    AllocationFailed { capacity: usize },

    /// Iterator advanced past its last element.
    #[error("No more elements")]
    Exhausted,
}
