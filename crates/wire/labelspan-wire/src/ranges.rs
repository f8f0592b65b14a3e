//! Run-length frame ranges as they appear in label JSON: `[[start, end], ...]`.

use serde::{Deserialize, Serialize};

use labelspan_ranges_core::{Frame, FrameDesignation, IntervalSet, Range, RangeError};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WireRanges(pub Vec<[Frame; 2]>);

impl WireRanges {
    pub fn to_wire(ranges: &[Range]) -> Self {
        WireRanges(ranges.iter().map(|r| [r.start, r.end]).collect())
    }

    /// Pairs as ranges, in wire order. Fails on the first reversed pair.
    pub fn to_ranges(&self) -> Result<Vec<Range>, RangeError> {
        self.0
            .iter()
            .map(|&[start, end]| Range::checked(start, end))
            .collect()
    }

    pub fn into_designation(self) -> Result<FrameDesignation, RangeError> {
        Ok(FrameDesignation::Ranges(self.to_ranges()?))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&IntervalSet> for WireRanges {
    fn from(set: &IntervalSet) -> Self {
        WireRanges::to_wire(set.ranges())
    }
}
