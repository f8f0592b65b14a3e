use std::collections::BTreeSet;

use labelspan_ranges_core::{FrameDesignation, FrameRangeAdapter, Range};

fn initial() -> FrameRangeAdapter {
    let ranges = vec![Range::new(2, 5), Range::new(10, 20)];
    FrameRangeAdapter::new(Some(&FrameDesignation::from(ranges))).expect("valid ranges")
}

#[test]
fn initializes_from_ranges() {
    assert_eq!(
        initial().get_ranges(),
        vec![Range::new(2, 5), Range::new(10, 20)]
    );
}

#[test]
fn add_ranges_merges_touching_neighbours() {
    let mut rm = initial();
    rm.add_ranges(&[Range::new(5, 7), Range::new(21, 22)])
        .unwrap();
    assert_eq!(
        rm.get_ranges(),
        vec![Range::new(2, 7), Range::new(10, 22)]
    );
}

#[test]
fn add_ranges_with_invalid_range_leaves_set_untouched() {
    let mut rm = initial();
    let err = rm
        .add_ranges(&[Range::new(30, 31), Range::new(40, 35), Range::new(50, 51)])
        .unwrap_err();
    assert_eq!(
        err,
        labelspan_ranges_core::RangeError::InvalidRange { start: 40, end: 35 }
    );
    assert_eq!(rm.get_ranges(), vec![Range::new(2, 5), Range::new(10, 20)]);
}

#[test]
fn add_designation_with_invalid_range_leaves_set_untouched() {
    let mut rm = FrameRangeAdapter::default();
    let err = rm
        .add_designation(&FrameDesignation::Ranges(vec![Range::new(0, 3), Range::new(9, 5)]))
        .unwrap_err();
    assert_eq!(
        err,
        labelspan_ranges_core::RangeError::InvalidRange { start: 9, end: 5 }
    );
    assert!(rm.is_empty());
}

#[test]
fn remove_ranges_splits() {
    let mut rm = initial();
    rm.remove_ranges(&[Range::new(4, 5), Range::new(16, 19)]);
    assert_eq!(
        rm.get_ranges(),
        vec![
            Range::new(2, 3),
            Range::new(10, 15),
            Range::new(20, 20)
        ]
    );
}

#[test]
fn clear_ranges_empties() {
    let mut rm = initial();
    rm.clear_ranges();
    assert!(rm.is_empty());
    assert!(rm.get_ranges_as_frames().is_empty());
}

#[test]
fn expands_to_frames() {
    let expected: BTreeSet<i64> = (2..=5).chain(10..=20).collect();
    assert_eq!(initial().get_ranges_as_frames(), expected);
}

#[test]
fn intersection_with_frame_list() {
    let hits = initial()
        .intersection(&FrameDesignation::from(vec![1, 3, 16, 25]))
        .unwrap();
    assert_eq!(hits, vec![Range::single(3), Range::single(16)]);
}

#[test]
fn intersection_with_range_list() {
    let other = FrameDesignation::from(vec![Range::new(0, 3), Range::new(19, 22)]);
    let hits = initial().intersection(&other).unwrap();
    assert_eq!(hits, vec![Range::new(2, 3), Range::new(19, 20)]);
}

#[test]
fn intersection_across_gaps() {
    let rm = FrameRangeAdapter::new(Some(&FrameDesignation::from(vec![
        Range::new(1, 5),
        Range::new(10, 20),
    ])))
    .unwrap();
    let hits = rm
        .intersection(&FrameDesignation::from(Range::new(3, 12)))
        .unwrap();
    assert_eq!(hits, vec![Range::new(3, 5), Range::new(10, 12)]);
}

#[test]
fn intersection_with_empty_side_is_empty() {
    let empty = FrameRangeAdapter::default();
    assert!(empty
        .intersection(&FrameDesignation::from(vec![1, 2]))
        .unwrap()
        .is_empty());
    assert!(initial()
        .intersection(&FrameDesignation::Frames(Vec::new()))
        .unwrap()
        .is_empty());
}

#[test]
fn dense_frame_list_becomes_one_range() {
    let frames: Vec<i64> = (0..10_000).collect();
    let rm = FrameRangeAdapter::new(Some(&FrameDesignation::from(frames))).unwrap();
    assert_eq!(rm.get_ranges(), vec![Range::new(0, 9_999)]);
}

#[test]
fn sparse_frame_list_keeps_every_gap() {
    let frames: Vec<i64> = (0..10_000).step_by(10).collect();
    let rm = FrameRangeAdapter::new(Some(&FrameDesignation::from(frames))).unwrap();
    assert_eq!(rm.get_ranges().len(), 1_000);
    assert!(rm.contains(9_990));
    assert!(!rm.contains(9_991));
}
