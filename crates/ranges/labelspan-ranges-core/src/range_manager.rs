//! FrameRangeAdapter: frame designations in, canonical ranges out.
//!
//! Wraps one [`IntervalSet`] and multiplexes the list forms of every
//! operation. `intersection`, `union` and `difference` accept any
//! [`FrameDesignation`] and never mutate `self`.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::designation::{FrameDesignation, FrameItem};
use crate::error::RangeError;
use crate::interval_set::IntervalSet;
use crate::range::{Frame, Range};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameRangeAdapter {
    set: IntervalSet,
}

impl FrameRangeAdapter {
    /// Normalize `frames` (or nothing) into a canonical set.
    pub fn new(frames: Option<&FrameDesignation>) -> Result<Self, RangeError> {
        let mut adapter = Self::default();
        if let Some(d) = frames {
            adapter.add_designation(d)?;
        }
        Ok(adapter)
    }

    /// Build from a loosely typed list; mixed frame/range lists are rejected.
    pub fn from_items(items: Vec<FrameItem>) -> Result<Self, RangeError> {
        let designation = FrameDesignation::from_items(items)?;
        Self::new(Some(&designation))
    }

    pub fn add_range(&mut self, range: Range) -> Result<(), RangeError> {
        self.set.add(range.start, range.end)
    }

    /// All or nothing: a reversed range anywhere in `ranges` leaves the set
    /// untouched.
    pub fn add_ranges<'a, I>(&mut self, ranges: I) -> Result<(), RangeError>
    where
        I: IntoIterator<Item = &'a Range>,
    {
        let ranges = ranges
            .into_iter()
            .map(|r| Range::checked(r.start, r.end))
            .collect::<Result<Vec<_>, _>>()?;
        ranges.into_iter().try_for_each(|r| self.add_range(r))
    }

    pub fn add_designation(&mut self, frames: &FrameDesignation) -> Result<(), RangeError> {
        self.add_ranges(&frames.constituents())
    }

    /// Reversed ranges are ignored.
    pub fn remove_range(&mut self, range: Range) {
        self.set.remove(range.start, range.end);
    }

    pub fn remove_ranges<'a, I>(&mut self, ranges: I)
    where
        I: IntoIterator<Item = &'a Range>,
    {
        for r in ranges {
            self.remove_range(*r);
        }
    }

    pub fn remove_designation(&mut self, frames: &FrameDesignation) {
        self.remove_ranges(&frames.constituents());
    }

    pub fn clear_ranges(&mut self) {
        self.set.clear();
    }

    /// Canonical start-sorted, maximally coalesced ranges.
    pub fn get_ranges(&self) -> Vec<Range> {
        self.set.ranges().to_vec()
    }

    /// Every frame as an individual number. Use [`Self::get_ranges`] for
    /// large contiguous spans.
    pub fn get_ranges_as_frames(&self) -> BTreeSet<Frame> {
        self.set.frames().collect()
    }

    /// Ranges shared by `self` and `other`.
    pub fn intersection(&self, other: &FrameDesignation) -> Result<Vec<Range>, RangeError> {
        let other = FrameRangeAdapter::new(Some(other))?;
        if self.set.is_empty() || other.set.is_empty() {
            return Ok(Vec::new());
        }
        let mut out = Vec::new();
        for r in self.set.iter() {
            if let Some(overlaps) = other.set.intersection(r.start, r.end) {
                out.extend(overlaps);
            }
        }
        Ok(out)
    }

    /// Canonical ranges covered by either `self` or `other`.
    pub fn union(&self, other: &FrameDesignation) -> Result<Vec<Range>, RangeError> {
        let mut merged = self.clone();
        merged.add_designation(other)?;
        Ok(merged.get_ranges())
    }

    /// Canonical ranges of `self` not covered by `other`.
    pub fn difference(&self, other: &FrameDesignation) -> Result<Vec<Range>, RangeError> {
        other.validate()?;
        let mut rest = self.clone();
        rest.remove_designation(other);
        Ok(rest.get_ranges())
    }

    #[inline]
    pub fn contains(&self, frame: Frame) -> bool {
        self.set.contains(frame)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    #[inline]
    pub fn interval_set(&self) -> &IntervalSet {
        &self.set
    }
}

impl From<IntervalSet> for FrameRangeAdapter {
    fn from(set: IntervalSet) -> Self {
        Self { set }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter() -> FrameRangeAdapter {
        FrameRangeAdapter::new(Some(&FrameDesignation::from(vec![
            Range::new(2, 5),
            Range::new(10, 20),
        ])))
        .unwrap()
    }

    #[test]
    fn absent_designation_is_empty() {
        let a = FrameRangeAdapter::new(None).unwrap();
        assert!(a.is_empty());
        assert!(a.get_ranges().is_empty());
        let a = FrameRangeAdapter::new(Some(&FrameDesignation::Frames(Vec::new()))).unwrap();
        assert!(a.is_empty());
    }

    #[test]
    fn single_frame_and_range_shapes() {
        let a = FrameRangeAdapter::new(Some(&FrameDesignation::from(7))).unwrap();
        assert_eq!(a.get_ranges(), vec![Range::single(7)]);
        let a = FrameRangeAdapter::new(Some(&FrameDesignation::from(3..=6))).unwrap();
        assert_eq!(a.get_ranges(), vec![Range::new(3, 6)]);
        assert!(FrameRangeAdapter::new(Some(&FrameDesignation::from(Range::new(6, 3)))).is_err());
    }

    #[test]
    fn union_and_difference_leave_self_untouched() {
        let a = adapter();
        assert_eq!(
            a.union(&FrameDesignation::from(vec![6, 7, 21])).unwrap(),
            vec![Range::new(2, 7), Range::new(10, 21)]
        );
        assert_eq!(
            a.difference(&FrameDesignation::from(Range::new(4, 12))).unwrap(),
            vec![Range::new(2, 3), Range::new(13, 20)]
        );
        assert_eq!(a.get_ranges(), vec![Range::new(2, 5), Range::new(10, 20)]);
    }

    #[test]
    fn difference_rejects_reversed_subtrahend() {
        assert!(adapter()
            .difference(&FrameDesignation::from(Range::new(9, 1)))
            .is_err());
    }

    #[test]
    fn from_items_rejects_mixed_lists() {
        let err = FrameRangeAdapter::from_items(vec![
            FrameItem::Range(Range::new(0, 2)),
            FrameItem::Frame(5),
        ])
        .unwrap_err();
        assert!(matches!(err, RangeError::InvalidFrameDesignation { .. }));
    }
}
