//! labelspan-wire: the JSON edge of the frame-range and answer crates.
//!
//! - [`WireRanges`]: run-length ranges as `[[start, end], ...]`
//! - [`designation_from_json`]: loosely typed JSON to [`FrameDesignation`]
//! - [`ObjectActions`] / [`DynamicAction`]: dynamic attribute answers of one
//!   object, with [`encode_actions`] and [`decode_actions`]
//! - [`TimestampCache`]: bounded memo for label timestamps
//!
//! [`FrameDesignation`]: labelspan_ranges_core::FrameDesignation

pub mod config;
pub mod designation;
pub mod dynamic;
pub mod error;
pub mod ranges;
pub mod timestamp;

pub use config::WireConfig;
pub use designation::designation_from_json;
pub use dynamic::{
    decode_actions, decode_object_actions, decode_value, encode_actions, encode_value,
    AnswerIndex, AttributeResolver, DynamicAction, EncodeOptions, ObjectActions, OptionAnswer,
    WireAnswers,
};
pub use error::WireError;
pub use ranges::WireRanges;
pub use timestamp::{parse_timestamp, TimestampCache};
