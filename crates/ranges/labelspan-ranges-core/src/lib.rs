//! labelspan-ranges-core: canonical frame-range storage (engine-agnostic)
//!
//! Frames are plain `i64` values and every range is inclusive on both ends.
//! [`IntervalSet`] keeps ranges sorted, disjoint and maximally coalesced;
//! [`FrameRangeAdapter`] accepts any [`FrameDesignation`] shape and exposes
//! set algebra on top of it.

pub mod codec;
pub mod designation;
pub mod error;
pub mod interval_set;
pub mod range;
pub mod range_manager;

pub use codec::{frames_to_ranges, ranges_to_frames};
pub use designation::{FrameDesignation, FrameItem};
pub use error::RangeError;
pub use interval_set::IntervalSet;
pub use range::{Frame, Range};
pub use range_manager::FrameRangeAdapter;
