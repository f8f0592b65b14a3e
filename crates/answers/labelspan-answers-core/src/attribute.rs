//! Ontology attribute handles as seen by the answer index.

use serde::{Deserialize, Serialize};

use crate::value::AnswerValue;

/// Answer shape accepted by an attribute.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    Text,
    Radio,
    Checklist,
}

/// Identity of an ontology attribute. Two attributes are the same attribute
/// iff every field matches; in practice `feature_node_hash` is unique.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OntologyAttribute {
    #[serde(rename = "featureNodeHash")]
    pub feature_node_hash: String,
    pub name: String,
    /// Machine-friendly name ("value" in the label JSON).
    pub value: String,
    pub kind: AttributeKind,
}

impl OntologyAttribute {
    pub fn new(
        feature_node_hash: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
        kind: AttributeKind,
    ) -> Self {
        Self {
            feature_node_hash: feature_node_hash.into(),
            name: name.into(),
            value: value.into(),
            kind,
        }
    }

    pub fn text(feature_node_hash: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        let value = slug(&name);
        Self::new(feature_node_hash, name, value, AttributeKind::Text)
    }

    pub fn radio(feature_node_hash: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        let value = slug(&name);
        Self::new(feature_node_hash, name, value, AttributeKind::Radio)
    }

    pub fn checklist(feature_node_hash: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        let value = slug(&name);
        Self::new(feature_node_hash, name, value, AttributeKind::Checklist)
    }

    /// True if `value` has the shape this attribute expects.
    #[inline]
    pub fn accepts(&self, value: &AnswerValue) -> bool {
        self.kind == value.kind()
    }
}

/// "Dynamic radio attribute 2" -> "dynamic_radio_attribute_2"
fn slug(name: &str) -> String {
    name.split_whitespace()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::OptionRef;

    #[test]
    fn constructors_derive_value_from_name() {
        let attr = OntologyAttribute::radio("LPK6qTW6", "Dynamic radio attribute 2");
        assert_eq!(attr.value, "dynamic_radio_attribute_2");
        assert_eq!(attr.kind, AttributeKind::Radio);
    }

    #[test]
    fn accepts_matching_kind_only() {
        let text = OntologyAttribute::text("Pt4zRmE8", "note");
        assert!(text.accepts(&AnswerValue::text("hello")));
        assert!(!text.accepts(&AnswerValue::radio(OptionRef::new("h", "opt"))));
    }
}
