//! Closed integer ranges over frame numbers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::RangeError;

/// Frame number. Signed so that `start - 1` / `end + 1` stay representable.
pub type Frame = i64;

/// Inclusive `[start, end]` span of frames. A single frame `f` is `(f, f)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Range {
    pub start: Frame,
    pub end: Frame,
}

impl Range {
    /// Construct without validation; see [`Range::checked`].
    #[inline]
    pub const fn new(start: Frame, end: Frame) -> Self {
        Self { start, end }
    }

    #[inline]
    pub const fn single(frame: Frame) -> Self {
        Self {
            start: frame,
            end: frame,
        }
    }

    pub fn checked(start: Frame, end: Frame) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }

    #[inline]
    pub fn contains(&self, frame: Frame) -> bool {
        self.start <= frame && frame <= self.end
    }

    /// True if the two ranges share at least one frame.
    #[inline]
    pub fn overlaps(&self, other: &Range) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// True if the ranges overlap or sit directly next to each other.
    #[inline]
    pub fn touches(&self, other: &Range) -> bool {
        self.start <= other.end.saturating_add(1) && other.start <= self.end.saturating_add(1)
    }

    /// Number of frames covered; zero for an invalid range.
    #[inline]
    pub fn len(&self) -> u64 {
        if self.start > self.end {
            0
        } else {
            self.end.abs_diff(self.start).saturating_add(1)
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn frames(&self) -> impl Iterator<Item = Frame> {
        self.start..=self.end
    }
}

impl From<(Frame, Frame)> for Range {
    fn from((start, end): (Frame, Frame)) -> Self {
        Range::new(start, end)
    }
}

impl From<Range> for (Frame, Frame) {
    fn from(r: Range) -> Self {
        (r.start, r.end)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}:{})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_rejects_reversed_bounds() {
        assert_eq!(
            Range::checked(5, 4),
            Err(RangeError::InvalidRange { start: 5, end: 4 })
        );
        assert_eq!(Range::checked(4, 4), Ok(Range::single(4)));
    }

    #[test]
    fn touches_includes_adjacency() {
        let a = Range::new(1, 5);
        assert!(a.touches(&Range::new(6, 9)));
        assert!(!a.overlaps(&Range::new(6, 9)));
        assert!(!a.touches(&Range::new(7, 9)));
        assert!(Range::new(0, i64::MAX).touches(&Range::new(i64::MAX, i64::MAX)));
    }

    #[test]
    fn len_counts_inclusive_frames() {
        assert_eq!(Range::new(3, 3).len(), 1);
        assert_eq!(Range::new(-2, 2).len(), 5);
        assert_eq!(Range::new(3, 2).len(), 0);
        assert_eq!(Range::new(0, 2).frames().collect::<Vec<_>>(), vec![0, 1, 2]);
    }
}
