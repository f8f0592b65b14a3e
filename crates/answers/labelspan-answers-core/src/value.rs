//! AnswerValue: concrete answer payloads for ontology attributes.
//! The index only hashes and compares these; it never looks inside.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::attribute::AttributeKind;

/// One selectable option of a radio or checklist attribute.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OptionRef {
    #[serde(rename = "featureNodeHash")]
    pub feature_node_hash: String,
    pub name: String,
    pub value: String,
}

impl OptionRef {
    pub fn new(feature_node_hash: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        let value = name.trim().to_lowercase().replace(' ', "_");
        Self {
            feature_node_hash: feature_node_hash.into(),
            name,
            value,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum AnswerValue {
    /// Free text
    Text(String),

    /// Exactly one option
    Radio(OptionRef),

    /// Any subset of options; order is irrelevant
    Checklist(BTreeSet<OptionRef>),
}

impl AnswerValue {
    #[inline]
    pub fn kind(&self) -> AttributeKind {
        match self {
            AnswerValue::Text(_) => AttributeKind::Text,
            AnswerValue::Radio(_) => AttributeKind::Radio,
            AnswerValue::Checklist(_) => AttributeKind::Checklist,
        }
    }

    pub fn text(s: impl Into<String>) -> Self {
        AnswerValue::Text(s.into())
    }

    pub fn radio(option: OptionRef) -> Self {
        AnswerValue::Radio(option)
    }

    pub fn checklist(options: impl IntoIterator<Item = OptionRef>) -> Self {
        AnswerValue::Checklist(options.into_iter().collect())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Selected options in a stable order; empty for text.
    pub fn options(&self) -> Vec<&OptionRef> {
        match self {
            AnswerValue::Text(_) => Vec::new(),
            AnswerValue::Radio(o) => vec![o],
            AnswerValue::Checklist(set) => set.iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checklist_equality_ignores_insertion_order() {
        let a = OptionRef::new("a1", "Option A");
        let b = OptionRef::new("b1", "Option B");
        assert_eq!(
            AnswerValue::checklist([a.clone(), b.clone()]),
            AnswerValue::checklist([b, a])
        );
    }

    #[test]
    fn kinds_and_accessors() {
        let radio = AnswerValue::radio(OptionRef::new("x", "Left Side"));
        assert_eq!(radio.kind(), AttributeKind::Radio);
        assert_eq!(radio.options()[0].value, "left_side");
        assert_eq!(AnswerValue::text("hi").as_text(), Some("hi"));
        assert!(AnswerValue::text("hi").options().is_empty());
    }

    #[test]
    fn serde_is_tagged() {
        let v = AnswerValue::text("hello");
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "text", "data": "hello" }));
        let back: AnswerValue = serde_json::from_value(json).unwrap();
        assert_eq!(back, v);
    }
}
