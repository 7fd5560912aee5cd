use crate::buffer::{self, DEFAULT_MAX_SIZE, FlagBuffer, FlagRecord};
use crate::error::Result;

/// Owner of a flag buffer, as attached to an observability context.
///
/// Pins one capacity for the lifetime of the context so every insert runs
/// against the same bound. Callers that manage their own deque can use
/// [`buffer::insert_bounded`] directly.
#[derive(Debug, Clone)]
pub struct FlagsContext {
    buffer: FlagBuffer,
    max_size: usize,
}

impl FlagsContext {
    /// Create a context with the default capacity of [`DEFAULT_MAX_SIZE`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_SIZE)
    }

    /// Create a context bounded by `max_size` records.
    pub fn with_capacity(max_size: usize) -> Self {
        FlagsContext {
            buffer: FlagBuffer::with_capacity(max_size),
            max_size,
        }
    }

    /// Record a flag evaluation, moving it to most-recent.
    ///
    /// # Errors
    ///
    /// Fails only for a capacity of zero ([`crate::Error::InvalidCapacity`]);
    /// the context never lets its buffer exceed its pinned capacity, so the
    /// over-capacity precondition cannot trip through this path.
    pub fn set_flag(&mut self, name: &str, value: bool) -> Result<()> {
        buffer::insert_bounded(&mut self.buffer, name, value, self.max_size)
    }

    /// Recorded flags, least-recently-touched first.
    pub fn flags(&self) -> impl Iterator<Item = &FlagRecord> {
        self.buffer.iter()
    }

    /// Copy the current flags out, e.g. to attach to a captured event.
    pub fn snapshot(&self) -> Vec<FlagRecord> {
        self.buffer.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Drop all recorded flags, keeping the capacity.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for FlagsContext {
    fn default() -> Self {
        Self::new()
    }
}
