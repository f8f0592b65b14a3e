//! Answer: an attribute paired with its (possibly missing) value.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use labelspan_ranges_core::Range;

use crate::error::AnswerError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Answer<A, V> {
    pub attribute: A,
    /// `None` marks an unanswered placeholder.
    pub value: Option<V>,
}

impl<A, V> Answer<A, V> {
    pub fn answered(attribute: A, value: V) -> Self {
        Self {
            attribute,
            value: Some(value),
        }
    }

    pub fn unanswered(attribute: A) -> Self {
        Self {
            attribute,
            value: None,
        }
    }

    #[inline]
    pub fn is_answered(&self) -> bool {
        self.value.is_some()
    }

    pub fn set(&mut self, value: V) {
        self.value = Some(value);
    }

    pub fn unset(&mut self) {
        self.value = None;
    }
}

impl<A: Debug, V> Answer<A, V> {
    /// The recorded value; fails for a placeholder.
    pub fn get(&self) -> Result<&V, AnswerError> {
        self.value
            .as_ref()
            .ok_or_else(|| AnswerError::UnanswerableQuery {
                attribute: format!("{:?}", self.attribute),
                frame: None,
            })
    }
}

impl<A, V: PartialEq> Answer<A, V> {
    /// Filter rule: no filter matches every answered value; a placeholder
    /// never matches a concrete filter.
    pub fn matches(&self, filter: Option<&V>) -> bool {
        match (filter, &self.value) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(f), Some(v)) => f == v,
        }
    }
}

/// One value and the run-length encoded frames it covers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerForFrames<V> {
    pub value: V,
    /// Sorted ascending, disjoint, maximal.
    pub ranges: Vec<Range>,
}
