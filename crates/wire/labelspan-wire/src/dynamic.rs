//! `object_actions` records: dynamic attribute answers of one object.
//!
//! Each action carries one answer value of one attribute plus the frames it
//! covers as run-length ranges. Decoding resolves the attribute through an
//! [`AttributeResolver`] and replays the actions into a [`FrameAnswerIndex`];
//! encoding walks the index and emits one action per stored answer.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use labelspan_answers_core::{
    AnswerValue, AttributeKind, FrameAnswerIndex, OntologyAttribute, OptionRef,
};

use crate::config::WireConfig;
use crate::error::WireError;
use crate::ranges::WireRanges;

pub type AnswerIndex = FrameAnswerIndex<OntologyAttribute, AnswerValue>;

/// One selected option as written in `answers`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionAnswer {
    pub name: String,
    pub value: String,
    pub feature_hash: String,
}

impl From<&OptionRef> for OptionAnswer {
    fn from(option: &OptionRef) -> Self {
        Self {
            name: option.name.clone(),
            value: option.value.clone(),
            feature_hash: option.feature_node_hash.clone(),
        }
    }
}

impl From<&OptionAnswer> for OptionRef {
    fn from(option: &OptionAnswer) -> Self {
        OptionRef::new(option.feature_hash.clone(), option.name.clone())
            .with_value(option.value.clone())
    }
}

/// Text attributes answer with a string, radio and checklist attributes with
/// a list of options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireAnswers {
    Text(String),
    Options(Vec<OptionAnswer>),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicAction {
    /// Attribute name.
    pub name: String,
    pub value: String,
    /// Attribute feature hash.
    pub feature_hash: String,
    pub answers: WireAnswers,
    pub range: WireRanges,
    #[serde(default = "default_dynamic")]
    pub dynamic: bool,
    #[serde(default)]
    pub track_hash: String,
    #[serde(default)]
    pub should_propagate: bool,
    #[serde(default)]
    pub manual_annotation: bool,
}

fn default_dynamic() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectActions {
    pub object_hash: String,
    #[serde(default)]
    pub actions: Vec<DynamicAction>,
}

impl ObjectActions {
    pub fn from_json_str(raw: &str) -> Result<Self, WireError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json_value(&self) -> Result<serde_json::Value, WireError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Looks up ontology attributes by feature hash.
pub trait AttributeResolver {
    fn resolve(&self, feature_hash: &str) -> Option<&OntologyAttribute>;
}

impl<S: BuildHasher> AttributeResolver for HashMap<String, OntologyAttribute, S> {
    fn resolve(&self, feature_hash: &str) -> Option<&OntologyAttribute> {
        self.get(feature_hash)
    }
}

impl AttributeResolver for [OntologyAttribute] {
    fn resolve(&self, feature_hash: &str) -> Option<&OntologyAttribute> {
        self.iter().find(|a| a.feature_node_hash == feature_hash)
    }
}

#[derive(Clone, Debug)]
pub struct EncodeOptions {
    /// Track hash for every action; a fresh v4 UUID per action when unset.
    pub track_hash: Option<String>,
    pub should_propagate: bool,
    pub manual_annotation: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self::from(&WireConfig::default())
    }
}

impl From<&WireConfig> for EncodeOptions {
    fn from(config: &WireConfig) -> Self {
        Self {
            track_hash: None,
            should_propagate: config.should_propagate,
            manual_annotation: config.manual_annotation,
        }
    }
}

/// One action per stored answer, ordered by attribute feature hash and then
/// by first frame.
pub fn encode_actions(
    object_hash: &str,
    index: &AnswerIndex,
    options: &EncodeOptions,
) -> ObjectActions {
    let mut rows: Vec<_> = index
        .all_answers()
        .into_iter()
        .filter_map(|(answer, ranges)| answer.value.map(|v| (answer.attribute, v, ranges)))
        .collect();
    rows.sort_by(|a, b| {
        a.0.feature_node_hash
            .cmp(&b.0.feature_node_hash)
            .then_with(|| a.2.first().cmp(&b.2.first()))
    });

    let actions = rows
        .into_iter()
        .map(|(attribute, value, ranges)| DynamicAction {
            answers: encode_value(&value),
            range: WireRanges::to_wire(&ranges),
            dynamic: true,
            track_hash: options
                .track_hash
                .clone()
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            should_propagate: options.should_propagate,
            manual_annotation: options.manual_annotation,
            name: attribute.name,
            value: attribute.value,
            feature_hash: attribute.feature_node_hash,
        })
        .collect();

    ObjectActions {
        object_hash: object_hash.to_owned(),
        actions,
    }
}

/// Replay `actions` in order into a fresh index. Later actions win on
/// overlapping frames of the same attribute.
pub fn decode_actions<R>(actions: &ObjectActions, resolver: &R) -> Result<AnswerIndex, WireError>
where
    R: AttributeResolver + ?Sized,
{
    let mut index = AnswerIndex::with_capacity(actions.actions.len());
    for action in &actions.actions {
        if !action.dynamic {
            warn!(
                "object {}: action for attribute {} is not marked dynamic",
                actions.object_hash, action.feature_hash
            );
        }
        let attribute = resolver
            .resolve(&action.feature_hash)
            .ok_or_else(|| WireError::UnknownAttribute(action.feature_hash.clone()))?;
        let value = decode_value(attribute, &action.answers)?;
        let frames = action.range.clone().into_designation()?;
        index.set_answer(value, attribute, &frames)?;
    }
    debug!(
        "object {}: decoded {} actions into {} answers",
        actions.object_hash,
        actions.actions.len(),
        index.len()
    );
    Ok(index)
}

/// Decode a whole `object_actions` map, keyed by object hash.
pub fn decode_object_actions<R>(
    objects: &BTreeMap<String, ObjectActions>,
    resolver: &R,
) -> Result<BTreeMap<String, AnswerIndex>, WireError>
where
    R: AttributeResolver + ?Sized,
{
    objects
        .iter()
        .map(|(hash, actions)| Ok((hash.clone(), decode_actions(actions, resolver)?)))
        .collect()
}

pub fn encode_value(value: &AnswerValue) -> WireAnswers {
    match value {
        AnswerValue::Text(text) => WireAnswers::Text(text.clone()),
        other => WireAnswers::Options(other.options().into_iter().map(OptionAnswer::from).collect()),
    }
}

pub fn decode_value(
    attribute: &OntologyAttribute,
    answers: &WireAnswers,
) -> Result<AnswerValue, WireError> {
    let hash = &attribute.feature_node_hash;
    match (attribute.kind, answers) {
        (AttributeKind::Text, WireAnswers::Text(text)) => Ok(AnswerValue::Text(text.clone())),
        (AttributeKind::Radio, WireAnswers::Options(options)) => match options.as_slice() {
            [only] => Ok(AnswerValue::Radio(only.into())),
            _ => Err(WireError::invalid_answer(
                hash,
                format!("radio answer needs exactly one option, got {}", options.len()),
            )),
        },
        (AttributeKind::Checklist, WireAnswers::Options(options)) => Ok(AnswerValue::checklist(
            options.iter().map(OptionRef::from),
        )),
        (AttributeKind::Text, WireAnswers::Options(_)) => Err(WireError::invalid_answer(
            hash,
            "text attribute answered with options",
        )),
        (kind, WireAnswers::Text(_)) => Err(WireError::invalid_answer(
            hash,
            format!("{kind:?} attribute answered with free text"),
        )),
    }
}
