//! Error types for answer lookups and index mutation.

use labelspan_ranges_core::{Frame, RangeError};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnswerError {
    #[error(transparent)]
    Range(#[from] RangeError),

    /// A value was required but the attribute has none (at `frame`, if given).
    #[error("no answer recorded for attribute {attribute}{}", frame_suffix(.frame))]
    UnanswerableQuery {
        attribute: String,
        frame: Option<Frame>,
    },

    /// Every answer id of the index has been handed out.
    #[error("answer id space exhausted")]
    IdsExhausted,
}

fn frame_suffix(frame: &Option<Frame>) -> String {
    frame.map(|f| format!(" on frame {f}")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unanswerable_message_mentions_frame_when_known() {
        let err = AnswerError::UnanswerableQuery {
            attribute: "colour".into(),
            frame: Some(4),
        };
        assert_eq!(err.to_string(), "no answer recorded for attribute colour on frame 4");
        let err = AnswerError::UnanswerableQuery {
            attribute: "colour".into(),
            frame: None,
        };
        assert_eq!(err.to_string(), "no answer recorded for attribute colour");
    }

    #[test]
    fn range_errors_pass_through() {
        let err: AnswerError = RangeError::InvalidRange { start: 2, end: 1 }.into();
        assert_eq!(err.to_string(), "start of range 2 must not be greater than end 1");
    }
}
