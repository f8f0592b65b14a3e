//! Answer identifiers and their allocator.

use serde::{Deserialize, Serialize};

/// Stable handle for one `(attribute, value)` pair stored in an index.
/// Ids are never reused within one index.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnswerId(pub u32);

/// Monotonic allocator for AnswerId. Hands out each `u32` once, then
/// reports exhaustion instead of wrapping.
#[derive(Clone, Default, Debug)]
pub struct IdAllocator {
    next_answer: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_answer(&mut self) -> Option<AnswerId> {
        let raw = u32::try_from(self.next_answer).ok()?;
        self.next_answer += 1;
        Some(AnswerId(raw))
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.next_answer > u64::from(u32::MAX)
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[cfg(test)]
    pub(crate) fn starting_at(next: u32) -> Self {
        Self {
            next_answer: u64::from(next),
        }
    }
}
