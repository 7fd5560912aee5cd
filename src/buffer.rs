use crate::error::{Error, Result};
use std::collections::VecDeque;

/// Default capacity of a flag buffer.
pub const DEFAULT_MAX_SIZE: usize = 100;

/// Last-known boolean value of one named feature flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagRecord {
    pub name: String,
    pub value: bool,
}

/// Recency-ordered sequence of flag records.
///
/// The front is the least-recently-touched flag, the back the most recent.
/// A deque keeps front eviction and back insertion both O(1).
pub type FlagBuffer = VecDeque<FlagRecord>;

/// Insert a flag evaluation with the default capacity of
/// [`DEFAULT_MAX_SIZE`].
///
/// See [`insert_bounded`] for the full contract.
pub fn insert(buffer: &mut FlagBuffer, name: &str, value: bool) -> Result<()> {
    insert_bounded(buffer, name, value, DEFAULT_MAX_SIZE)
}

/// Insert a flag evaluation into `buffer`, keeping it uniquely keyed by
/// name, recency ordered, and bounded by `max_size`.
///
/// If a record named `name` already exists it is moved to the back with the
/// new value; its old value and position are discarded. If the buffer is
/// full and `name` is new, the front record (the longest-untouched flag) is
/// evicted to make room. After return the record for `name` is the last
/// element and `buffer.len() <= max_size`.
///
/// The empty string is a valid name. Callers should pass the same
/// `max_size` for every insert on one buffer; mixed capacities are accepted
/// but the resulting bound is only as strong as the most recently used
/// value.
///
/// # Errors
///
/// - [`Error::InvalidCapacity`] if `max_size` is zero.
/// - [`Error::InvariantViolation`] if `buffer.len() > max_size` on entry,
///   meaning the capacity invariant was already broken by the caller.
///
/// On error the buffer is left untouched.
pub fn insert_bounded(
    buffer: &mut FlagBuffer,
    name: &str,
    value: bool,
    max_size: usize,
) -> Result<()> {
    if max_size == 0 {
        return Err(Error::InvalidCapacity(max_size));
    }
    if buffer.len() > max_size {
        return Err(Error::InvariantViolation {
            len: buffer.len(),
            max_size,
        });
    }

    // Drop any stale record for this name, wherever it sits.
    if let Some(idx) = buffer.iter().position(|record| record.name == name) {
        buffer.remove(idx);
    }

    // Still full means the name was new; evict the longest-untouched flag.
    if buffer.len() == max_size {
        buffer.pop_front();
    }

    buffer.push_back(FlagRecord {
        name: name.to_owned(),
        value,
    });
    Ok(())
}
