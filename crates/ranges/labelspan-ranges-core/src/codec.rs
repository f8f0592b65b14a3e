//! Run-length encoding between frame collections and range lists.

use crate::range::{Frame, Range};

/// Sorted, non-overlapping, maximal ranges covering `frames`.
/// Input order and duplicates do not matter.
pub fn frames_to_ranges<I>(frames: I) -> Vec<Range>
where
    I: IntoIterator<Item = Frame>,
{
    let mut sorted: Vec<Frame> = frames.into_iter().collect();
    sorted.sort_unstable();
    sorted.dedup();

    let mut out: Vec<Range> = Vec::new();
    for f in sorted {
        match out.last_mut() {
            Some(run) if run.end.checked_add(1) == Some(f) => run.end = f,
            _ => out.push(Range::single(f)),
        }
    }
    out
}

/// Sorted, deduplicated expansion of `ranges`. Reversed ranges contribute
/// nothing.
pub fn ranges_to_frames(ranges: &[Range]) -> Vec<Frame> {
    let mut out: Vec<Frame> = ranges.iter().flat_map(|r| r.frames()).collect();
    out.sort_unstable();
    out.dedup();
    out
}
