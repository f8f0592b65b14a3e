//! Sorted set of disjoint, inclusive integer ranges.
//!
//! Invariant: stored ranges are sorted by `start`, pairwise disjoint and
//! never adjacent (`prev.end + 1 < next.start`). Because ranges are disjoint
//! the `end` values are sorted as well, so both bounds can be binary searched.
//!
//! Every mutation locates the affected window with two `partition_point`
//! searches and splices survivors into that window: O(log n + k) where k is
//! the number of stored ranges touched.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::RangeError;
use crate::range::{Frame, Range};

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Range>", into = "Vec<Range>")]
pub struct IntervalSet {
    ranges: Vec<Range>,
}

impl IntervalSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ranges: Vec::with_capacity(capacity),
        }
    }

    /// Build a canonical set from arbitrary (possibly overlapping, unsorted) ranges.
    pub fn from_ranges<I>(ranges: I) -> Result<Self, RangeError>
    where
        I: IntoIterator<Item = Range>,
    {
        let mut set = Self::new();
        for r in ranges {
            set.add(r.start, r.end)?;
        }
        Ok(set)
    }

    /// Insert `[start, end]`, coalescing with every stored range it overlaps
    /// or touches.
    pub fn add(&mut self, start: Frame, end: Frame) -> Result<(), RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }

        // First range that reaches `start - 1` and first range beyond `end + 1`.
        let lo = self
            .ranges
            .partition_point(|r| r.end < start.saturating_sub(1));
        let hi = self
            .ranges
            .partition_point(|r| r.start <= end.saturating_add(1));

        let mut merged = Range::new(start, end);
        if lo < hi {
            merged.start = merged.start.min(self.ranges[lo].start);
            merged.end = merged.end.max(self.ranges[hi - 1].end);
        }
        trace!(
            "interval add [{start}, {end}] replaces {} range(s) at {lo} with {merged}",
            hi - lo
        );
        self.ranges.splice(lo..hi, std::iter::once(merged));
        Ok(())
    }

    /// Remove `[start, end]`, splitting stored ranges that straddle a bound.
    /// A reversed range is ignored.
    pub fn remove(&mut self, start: Frame, end: Frame) {
        if start > end {
            return;
        }
        let (lo, hi) = self.overlap_window(start, end);
        if lo >= hi {
            return;
        }

        let mut survivors: [Option<Range>; 2] = [None, None];
        let first = self.ranges[lo];
        if first.start < start {
            survivors[0] = Some(Range::new(first.start, start - 1));
        }
        let last = self.ranges[hi - 1];
        if last.end > end {
            survivors[1] = Some(Range::new(end + 1, last.end));
        }
        trace!(
            "interval remove [{start}, {end}] drops {} range(s) at {lo}",
            hi - lo
        );
        self.ranges.splice(lo..hi, survivors.into_iter().flatten());
    }

    /// Overlap of `[start, end]` with the stored ranges.
    ///
    /// Returns `None` when the set is empty or the query is reversed, and
    /// `Some(vec![])` when the query simply misses every stored range.
    pub fn intersection(&self, start: Frame, end: Frame) -> Option<Vec<Range>> {
        if start > end || self.ranges.is_empty() {
            return None;
        }
        let (lo, hi) = self.overlap_window(start, end);
        let overlaps = self.ranges[lo..hi]
            .iter()
            .map(|r| Range::new(start.max(r.start), end.min(r.end)))
            .collect();
        Some(overlaps)
    }

    /// True if any stored range overlaps `[start, end]`.
    pub fn overlaps(&self, start: Frame, end: Frame) -> bool {
        if start > end {
            return false;
        }
        let (lo, hi) = self.overlap_window(start, end);
        lo < hi
    }

    pub fn contains(&self, frame: Frame) -> bool {
        let idx = self.ranges.partition_point(|r| r.end < frame);
        self.ranges
            .get(idx)
            .map(|r| r.start <= frame)
            .unwrap_or(false)
    }

    pub fn clear(&mut self) {
        self.ranges.clear();
    }

    /// Number of disjoint ranges (not frames).
    #[inline]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Total number of frames covered.
    pub fn frame_count(&self) -> u64 {
        self.ranges
            .iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.len()))
    }

    #[inline]
    pub fn ranges(&self) -> &[Range] {
        &self.ranges
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Range> {
        self.ranges.iter()
    }

    pub fn first(&self) -> Option<Range> {
        self.ranges.first().copied()
    }

    pub fn last(&self) -> Option<Range> {
        self.ranges.last().copied()
    }

    /// Every frame in ascending order.
    pub fn frames(&self) -> impl Iterator<Item = Frame> + '_ {
        self.ranges.iter().flat_map(|r| r.frames())
    }

    /// `[lo, hi)` indices of stored ranges overlapping `[start, end]`.
    #[inline]
    fn overlap_window(&self, start: Frame, end: Frame) -> (usize, usize) {
        let lo = self.ranges.partition_point(|r| r.end < start);
        let hi = self.ranges.partition_point(|r| r.start <= end);
        (lo, hi)
    }
}

impl TryFrom<Vec<Range>> for IntervalSet {
    type Error = RangeError;

    fn try_from(ranges: Vec<Range>) -> Result<Self, Self::Error> {
        IntervalSet::from_ranges(ranges)
    }
}

impl From<IntervalSet> for Vec<Range> {
    fn from(set: IntervalSet) -> Self {
        set.ranges
    }
}

impl<'a> IntoIterator for &'a IntervalSet {
    type Item = &'a Range;
    type IntoIter = std::slice::Iter<'a, Range>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}
