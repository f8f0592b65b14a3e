use serde::Deserialize;
use serde_json::Value;

use labelspan_ranges_core::{FrameRangeAdapter, RangeError};
use labelspan_wire::{designation_from_json, WireError, WireRanges};

#[derive(Debug, Deserialize)]
struct Case {
    name: String,
    input: Value,
    #[serde(default)]
    ranges: Option<WireRanges>,
    #[serde(default)]
    error: Option<String>,
}

#[test]
fn fixture_shapes_decode_to_canonical_ranges() {
    let cases: Vec<Case> =
        labelspan_test_fixtures::designations::load("shapes").expect("load designation shapes");
    assert!(!cases.is_empty());

    for case in cases {
        let decoded = designation_from_json(&case.input);
        match (&case.ranges, case.error.as_deref()) {
            (Some(expected), None) => {
                let designation = decoded
                    .unwrap_or_else(|e| panic!("{}: unexpected error {e}", case.name));
                let adapter = FrameRangeAdapter::new(Some(&designation)).unwrap();
                assert_eq!(
                    WireRanges::to_wire(&adapter.get_ranges()),
                    *expected,
                    "{}",
                    case.name
                );
            }
            (None, Some("designation")) => assert!(
                matches!(
                    decoded,
                    Err(WireError::Designation(_))
                        | Err(WireError::Range(RangeError::InvalidFrameDesignation { .. }))
                ),
                "{}: {decoded:?}",
                case.name
            ),
            (None, Some("range")) => assert!(
                matches!(decoded, Err(WireError::Range(RangeError::InvalidRange { .. }))),
                "{}: {decoded:?}",
                case.name
            ),
            other => panic!("{}: malformed case {other:?}", case.name),
        }
    }
}
