//! Decoding loosely typed JSON into a [`FrameDesignation`].
//!
//! Accepted shapes:
//! - `7` -> a single frame
//! - `{"start": 2, "end": 5}` -> a single range
//! - `[1, 2, 3]` -> a frame list
//! - `[{"start": 0, "end": 1}, [4, 6]]` -> a range list
//!
//! A list mixing frame numbers with ranges is rejected.

use serde_json::Value;

use labelspan_ranges_core::{Frame, FrameDesignation, FrameItem, Range};

use crate::error::WireError;

pub fn designation_from_json(value: &Value) -> Result<FrameDesignation, WireError> {
    let designation = match value {
        Value::Number(_) => FrameDesignation::Frame(frame_from_json(value)?),
        Value::Object(_) => FrameDesignation::Range(range_from_json(value)?),
        Value::Array(items) => {
            let items = items
                .iter()
                .map(item_from_json)
                .collect::<Result<Vec<_>, _>>()?;
            FrameDesignation::from_items(items)?
        }
        other => {
            return Err(WireError::Designation(format!(
                "expected a frame, range or list, got {other}"
            )))
        }
    };
    designation.validate()?;
    Ok(designation)
}

fn item_from_json(value: &Value) -> Result<FrameItem, WireError> {
    match value {
        Value::Number(_) => Ok(FrameItem::Frame(frame_from_json(value)?)),
        Value::Object(_) | Value::Array(_) => Ok(FrameItem::Range(range_from_json(value)?)),
        other => Err(WireError::Designation(format!(
            "list element {other} is neither a frame nor a range"
        ))),
    }
}

fn frame_from_json(value: &Value) -> Result<Frame, WireError> {
    value
        .as_i64()
        .ok_or_else(|| WireError::Designation(format!("frame {value} is not an integer")))
}

/// `{"start", "end"}` or a `[start, end]` pair.
fn range_from_json(value: &Value) -> Result<Range, WireError> {
    let (start, end) = match value {
        Value::Object(map) => match (map.get("start"), map.get("end")) {
            (Some(start), Some(end)) => (start, end),
            _ => {
                return Err(WireError::Designation(format!(
                    "range object {value} needs both start and end"
                )))
            }
        },
        Value::Array(pair) if pair.len() == 2 => (&pair[0], &pair[1]),
        _ => return Err(WireError::Designation(format!("{value} is not a range"))),
    };
    Ok(Range::new(frame_from_json(start)?, frame_from_json(end)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use labelspan_ranges_core::RangeError;
    use serde_json::json;

    #[test]
    fn each_shape_decodes() {
        assert_eq!(designation_from_json(&json!(7)).unwrap(), FrameDesignation::Frame(7));
        assert_eq!(
            designation_from_json(&json!({"start": 2, "end": 5})).unwrap(),
            FrameDesignation::Range(Range::new(2, 5))
        );
        assert_eq!(
            designation_from_json(&json!([3, 1, 2])).unwrap(),
            FrameDesignation::Frames(vec![3, 1, 2])
        );
        assert_eq!(
            designation_from_json(&json!([{"start": 0, "end": 1}, [4, 6]])).unwrap(),
            FrameDesignation::Ranges(vec![Range::new(0, 1), Range::new(4, 6)])
        );
    }

    #[test]
    fn mixed_lists_are_rejected() {
        let err = designation_from_json(&json!([1, {"start": 3, "end": 4}])).unwrap_err();
        assert!(matches!(
            err,
            WireError::Range(RangeError::InvalidFrameDesignation { .. })
        ));
    }

    #[test]
    fn reversed_ranges_are_rejected() {
        let err = designation_from_json(&json!({"start": 5, "end": 1})).unwrap_err();
        assert!(matches!(
            err,
            WireError::Range(RangeError::InvalidRange { start: 5, end: 1 })
        ));
    }

    #[test]
    fn other_values_are_not_designations() {
        for value in [json!("3"), json!(null), json!(1.5), json!([[1, 2, 3]]), json!({"start": 1})] {
            assert!(
                matches!(designation_from_json(&value), Err(WireError::Designation(_))),
                "{value} should not decode"
            );
        }
    }
}
