//! Caller-facing frame designations.
//!
//! Callers name frames in one of four shapes: a single frame, a list of
//! frames, a single range or a list of ranges. Loosely typed inputs (for
//! example a decoded JSON array) arrive as a list of [`FrameItem`] and are
//! accepted only when every element has the same shape.

use serde::{Deserialize, Serialize};

use crate::codec::{frames_to_ranges, ranges_to_frames};
use crate::error::RangeError;
use crate::range::{Frame, Range};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum FrameDesignation {
    Frame(Frame),
    Frames(Vec<Frame>),
    Range(Range),
    Ranges(Vec<Range>),
}

/// One element of a loosely typed designation list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FrameItem {
    Frame(Frame),
    Range(Range),
}

impl FrameDesignation {
    /// Constituent ranges in caller order, one per frame or range.
    /// Reversed ranges are passed through untouched so that the consumer can
    /// report them.
    pub fn constituents(&self) -> Vec<Range> {
        match self {
            FrameDesignation::Frame(f) => vec![Range::single(*f)],
            FrameDesignation::Frames(frames) => frames.iter().map(|&f| Range::single(f)).collect(),
            FrameDesignation::Range(r) => vec![*r],
            FrameDesignation::Ranges(ranges) => ranges.clone(),
        }
    }

    /// Fail on the first reversed range.
    pub fn validate(&self) -> Result<(), RangeError> {
        match self {
            FrameDesignation::Frame(_) | FrameDesignation::Frames(_) => Ok(()),
            FrameDesignation::Range(r) => Range::checked(r.start, r.end).map(|_| ()),
            FrameDesignation::Ranges(ranges) => ranges
                .iter()
                .try_for_each(|r| Range::checked(r.start, r.end).map(|_| ())),
        }
    }

    /// Sorted, deduplicated frame list.
    pub fn to_frames(&self) -> Result<Vec<Frame>, RangeError> {
        self.validate()?;
        Ok(match self {
            FrameDesignation::Frame(f) => vec![*f],
            FrameDesignation::Frames(frames) => {
                let mut out = frames.clone();
                out.sort_unstable();
                out.dedup();
                out
            }
            FrameDesignation::Range(r) => r.frames().collect(),
            FrameDesignation::Ranges(ranges) => ranges_to_frames(ranges),
        })
    }

    /// Canonical (sorted, coalesced) ranges covering the designation.
    pub fn to_ranges(&self) -> Result<Vec<Range>, RangeError> {
        self.validate()?;
        Ok(match self {
            FrameDesignation::Frame(f) => vec![Range::single(*f)],
            FrameDesignation::Frames(frames) => frames_to_ranges(frames.iter().copied()),
            FrameDesignation::Range(r) => vec![*r],
            FrameDesignation::Ranges(ranges) => {
                let mut sorted = ranges.clone();
                sorted.sort_unstable();
                let mut out: Vec<Range> = Vec::with_capacity(sorted.len());
                for r in sorted {
                    match out.last_mut() {
                        Some(prev) if prev.touches(&r) => prev.end = prev.end.max(r.end),
                        _ => out.push(r),
                    }
                }
                out
            }
        })
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FrameDesignation::Frame(_) | FrameDesignation::Range(_) => false,
            FrameDesignation::Frames(frames) => frames.is_empty(),
            FrameDesignation::Ranges(ranges) => ranges.is_empty(),
        }
    }

    /// Build a designation from a homogeneous list of items.
    pub fn from_items(items: Vec<FrameItem>) -> Result<Self, RangeError> {
        let frames = items
            .iter()
            .filter(|i| matches!(i, FrameItem::Frame(_)))
            .count();
        if frames == items.len() {
            return Ok(FrameDesignation::Frames(
                items
                    .into_iter()
                    .filter_map(|i| match i {
                        FrameItem::Frame(f) => Some(f),
                        FrameItem::Range(_) => None,
                    })
                    .collect(),
            ));
        }
        if frames == 0 {
            return Ok(FrameDesignation::Ranges(
                items
                    .into_iter()
                    .filter_map(|i| match i {
                        FrameItem::Range(r) => Some(r),
                        FrameItem::Frame(_) => None,
                    })
                    .collect(),
            ));
        }
        Err(RangeError::invalid_designation(format!(
            "list mixes {frames} frame number(s) with {} range(s)",
            items.len() - frames
        )))
    }
}

impl From<Frame> for FrameDesignation {
    fn from(f: Frame) -> Self {
        FrameDesignation::Frame(f)
    }
}

impl From<Vec<Frame>> for FrameDesignation {
    fn from(frames: Vec<Frame>) -> Self {
        FrameDesignation::Frames(frames)
    }
}

impl From<&[Frame]> for FrameDesignation {
    fn from(frames: &[Frame]) -> Self {
        FrameDesignation::Frames(frames.to_vec())
    }
}

impl From<Range> for FrameDesignation {
    fn from(r: Range) -> Self {
        FrameDesignation::Range(r)
    }
}

impl From<Vec<Range>> for FrameDesignation {
    fn from(ranges: Vec<Range>) -> Self {
        FrameDesignation::Ranges(ranges)
    }
}

impl From<std::ops::RangeInclusive<Frame>> for FrameDesignation {
    fn from(r: std::ops::RangeInclusive<Frame>) -> Self {
        FrameDesignation::Range(Range::new(*r.start(), *r.end()))
    }
}

impl TryFrom<Vec<FrameItem>> for FrameDesignation {
    type Error = RangeError;

    fn try_from(items: Vec<FrameItem>) -> Result<Self, Self::Error> {
        FrameDesignation::from_items(items)
    }
}
