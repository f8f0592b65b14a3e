//! Errors raised while moving ranges and answers across the JSON boundary.

use labelspan_answers_core::AnswerError;
use labelspan_ranges_core::RangeError;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WireError {
    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Answer(#[from] AnswerError),

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),

    /// A JSON value that is not any known frame designation shape.
    #[error("unsupported frame designation: {0}")]
    Designation(String),

    /// No ontology attribute is registered under this feature hash.
    #[error("unknown attribute feature hash {0}")]
    UnknownAttribute(String),

    #[error("invalid answer for attribute {feature_hash}: {reason}")]
    InvalidAnswer { feature_hash: String, reason: String },

    #[error("unrecognised timestamp {0:?}")]
    Timestamp(String),
}

impl WireError {
    pub(crate) fn invalid_answer(feature_hash: &str, reason: impl Into<String>) -> Self {
        WireError::InvalidAnswer {
            feature_hash: feature_hash.to_owned(),
            reason: reason.into(),
        }
    }
}
