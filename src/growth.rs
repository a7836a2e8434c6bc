//! Capacity growth arithmetic for the list backing buffer.

use crate::error::{ListError, Result};

/// Capacity used by [`DynamicArray::new`](crate::DynamicArray::new).
pub const DEFAULT_CAPACITY: usize = 10;

/// Conservative ceiling for amortized growth.
///
/// Allocations can never exceed `isize::MAX` bytes, and requests close to that limit fail on
/// every real allocator long before. Growth stops at this value unless the caller's minimum
/// demand is larger.
pub const SOFT_MAX_CAPACITY: usize = isize::MAX as usize - 8;

/// Largest element count a buffer may ever be asked for.
const HARD_MAX_CAPACITY: usize = isize::MAX as usize;

/// Computes the next buffer capacity.
///
/// The preferred result is `capacity + max(min_growth, preferred_growth)`. If that is zero or
/// above [`SOFT_MAX_CAPACITY`], the result falls back to `capacity + min_growth`, raised to the
/// soft maximum. Only when even the minimum can not be represented does this fail.
///
/// Whatever capacity is returned, the allocation itself may still fail.
pub fn next_capacity(capacity: usize, min_growth: usize, preferred_growth: usize) -> Result<usize> {
    match capacity.checked_add(min_growth.max(preferred_growth)) {
        Some(preferred) if 0 < preferred && preferred <= SOFT_MAX_CAPACITY => Ok(preferred),
        _ => huge_capacity(capacity, min_growth),
    }
}

#[cold]
fn huge_capacity(capacity: usize, min_growth: usize) -> Result<usize> {
    match capacity.checked_add(min_growth) {
        Some(min_capacity) if min_capacity <= HARD_MAX_CAPACITY => {
            tracing::warn!(
                capacity,
                min_growth,
                "growth exceeds the soft maximum capacity"
            );

            Ok(min_capacity.max(SOFT_MAX_CAPACITY))
        }
        _ => {
            tracing::warn!(capacity, min_growth, "required capacity is too large");

            Err(ListError::CapacityOverflow {
                capacity,
                min_growth,
            })
        }
    }
}
