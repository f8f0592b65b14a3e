//! Error types for range construction and frame designations.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RangeError {
    /// `start > end` handed to an operation that requires a valid range.
    #[error("start of range {start} must not be greater than end {end}")]
    InvalidRange { start: i64, end: i64 },

    /// A designation list mixed frame numbers and ranges.
    #[error("invalid frame designation: {reason}")]
    InvalidFrameDesignation { reason: String },
}

impl RangeError {
    pub fn invalid_designation(reason: impl Into<String>) -> Self {
        Self::InvalidFrameDesignation {
            reason: reason.into(),
        }
    }
}
