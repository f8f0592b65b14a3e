//! FrameAnswerIndex: which answer each attribute has on each frame.
//!
//! Two maps share a cross-invariant:
//! - `frames`: frame -> ids of the answers present on that frame
//! - `entries`: id -> answer plus the IntervalSet of frames it covers
//!
//! An id is listed under a frame iff that id's IntervalSet contains the frame.
//! Answers are keyed by an [`AnswerId`] handed out on first use of an
//! `(attribute, value)` pair, so neither map depends on hashing the answer
//! object itself. `by_value` and `by_attribute` resolve pairs and attributes
//! to ids without walking the frame map.
//!
//! At most one answer of a given attribute is present on any frame; setting
//! an answer first clears whatever the attribute held on those frames.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::hash::Hash;

use hashbrown::HashMap;
use log::debug;

use labelspan_ranges_core::{Frame, FrameDesignation, IntervalSet, Range};

use crate::answer::{Answer, AnswerForFrames};
use crate::error::AnswerError;
use crate::ids::{AnswerId, IdAllocator};

#[derive(Clone, Debug)]
struct AnswerEntry<A, V> {
    answer: Answer<A, V>,
    frames: IntervalSet,
}

#[derive(Clone, Debug)]
pub struct FrameAnswerIndex<A, V> {
    ids: IdAllocator,
    entries: HashMap<AnswerId, AnswerEntry<A, V>>,
    frames: BTreeMap<Frame, Vec<AnswerId>>,
    by_value: HashMap<(A, V), AnswerId>,
    by_attribute: HashMap<A, Vec<AnswerId>>,
}

impl<A, V> Default for FrameAnswerIndex<A, V> {
    fn default() -> Self {
        Self {
            ids: IdAllocator::new(),
            entries: HashMap::new(),
            frames: BTreeMap::new(),
            by_value: HashMap::new(),
            by_attribute: HashMap::new(),
        }
    }
}

impl<A, V> FrameAnswerIndex<A, V>
where
    A: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size for roughly `answers` distinct answer values.
    pub fn with_capacity(answers: usize) -> Self {
        Self {
            ids: IdAllocator::new(),
            entries: HashMap::with_capacity(answers),
            frames: BTreeMap::new(),
            by_value: HashMap::with_capacity(answers),
            by_attribute: HashMap::new(),
        }
    }

    /// Put `value` on `frames` for `attribute`, replacing whatever answer the
    /// attribute had on those frames.
    pub fn set_answer(
        &mut self,
        value: V,
        attribute: &A,
        frames: &FrameDesignation,
    ) -> Result<(), AnswerError> {
        let ranges = frames.to_ranges()?;
        if ranges.is_empty() {
            return Ok(());
        }
        let key = (attribute.clone(), value);
        if !self.by_value.contains_key(&key) && self.ids.is_exhausted() {
            return Err(AnswerError::IdsExhausted);
        }
        self.detach_ranges(attribute, &ranges, None);

        let id = self.intern(key)?;
        if let Some(entry) = self.entries.get_mut(&id) {
            for r in &ranges {
                entry.frames.add(r.start, r.end)?;
                for f in r.frames() {
                    self.frames.entry(f).or_default().push(id);
                }
            }
        }
        Ok(())
    }

    /// Remove answers of `attribute` from `frames` (every tracked frame when
    /// `None`). With `filter_value`, only answers equal to it are removed.
    pub fn delete_answer(
        &mut self,
        attribute: &A,
        frames: Option<&FrameDesignation>,
        filter_value: Option<&V>,
    ) -> Result<(), AnswerError> {
        match frames {
            Some(designation) => {
                let ranges = designation.to_ranges()?;
                self.detach_ranges(attribute, &ranges, filter_value);
            }
            None => {
                let ids = self.by_attribute.get(attribute).cloned().unwrap_or_default();
                for id in ids {
                    let Some(entry) = self.entries.get(&id) else {
                        continue;
                    };
                    if !entry.answer.matches(filter_value) {
                        continue;
                    }
                    for f in entry.frames.frames() {
                        unlink(&mut self.frames, f, id);
                    }
                    self.drop_entry(id);
                }
            }
        }
        Ok(())
    }

    /// Every answered value of `attribute` with its run-length encoded frames.
    ///
    /// `filter_value` keeps only that value; `filter_frames` keeps answers that
    /// overlap at least one of the given frames. Rows are ordered by their
    /// first frame.
    pub fn get_answer(
        &self,
        attribute: &A,
        filter_value: Option<&V>,
        filter_frames: Option<&FrameDesignation>,
    ) -> Result<Vec<AnswerForFrames<V>>, AnswerError> {
        let filter_ranges = filter_frames.map(|d| d.to_ranges()).transpose()?;

        let mut out = Vec::new();
        for entry in self.entries_of(attribute) {
            let Some(value) = entry.answer.value.as_ref() else {
                continue;
            };
            if !entry.answer.matches(filter_value) {
                continue;
            }
            if let Some(filter) = &filter_ranges {
                if !filter.iter().any(|r| entry.frames.overlaps(r.start, r.end)) {
                    continue;
                }
            }
            out.push(AnswerForFrames {
                value: value.clone(),
                ranges: entry.frames.ranges().to_vec(),
            });
        }
        out.sort_by_key(|row| row.ranges.first().map(|r| r.start));
        Ok(out)
    }

    /// All frames holding at least one answer, ascending.
    pub fn frames(&self) -> impl Iterator<Item = Frame> + '_ {
        self.frames.keys().copied()
    }

    /// The value `attribute` has on `frame`, if any.
    pub fn answer_at(&self, attribute: &A, frame: Frame) -> Option<&V> {
        self.frames
            .get(&frame)?
            .iter()
            .filter_map(|id| self.entries.get(id))
            .find(|e| e.answer.attribute == *attribute)
            .and_then(|e| e.answer.value.as_ref())
    }

    /// Frames covered by any answer of `attribute`.
    pub fn frames_of(&self, attribute: &A) -> Result<IntervalSet, AnswerError> {
        let mut set = IntervalSet::new();
        for r in self.entries_of(attribute).flat_map(|e| e.frames.iter()) {
            set.add(r.start, r.end)?;
        }
        Ok(set)
    }

    /// Frames covered by one `(attribute, value)` pair.
    pub fn ranges_for(&self, attribute: &A, value: &V) -> Option<&[Range]> {
        let id = self.by_value.get(&(attribute.clone(), value.clone()))?;
        self.entries.get(id).map(|e| e.frames.ranges())
    }

    /// Every stored answer with its ranges, in creation order.
    pub fn all_answers(&self) -> Vec<(Answer<A, V>, Vec<Range>)> {
        let mut ids: Vec<&AnswerId> = self.entries.keys().collect();
        ids.sort();
        ids.into_iter()
            .filter_map(|id| self.entries.get(id))
            .map(|e| (e.answer.clone(), e.frames.ranges().to_vec()))
            .collect()
    }

    /// Attributes with at least one answer.
    pub fn attributes(&self) -> impl Iterator<Item = &A> + '_ {
        self.by_attribute.keys()
    }

    /// Number of distinct stored answers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn entries_of<'a>(&'a self, attribute: &A) -> impl Iterator<Item = &'a AnswerEntry<A, V>> + 'a {
        self.by_attribute
            .get(attribute)
            .into_iter()
            .flatten()
            .filter_map(move |id| self.entries.get(id))
    }

    fn intern(&mut self, key: (A, V)) -> Result<AnswerId, AnswerError> {
        if let Some(&id) = self.by_value.get(&key) {
            return Ok(id);
        }
        let id = self.ids.alloc_answer().ok_or(AnswerError::IdsExhausted)?;
        debug!("answer index: new answer {:?}", id);
        self.entries.insert(
            id,
            AnswerEntry {
                answer: Answer::answered(key.0.clone(), key.1.clone()),
                frames: IntervalSet::new(),
            },
        );
        self.by_attribute.entry(key.0.clone()).or_default().push(id);
        self.by_value.insert(key, id);
        Ok(id)
    }

    /// Clear `ranges` from every answer of `attribute` that passes `filter`.
    fn detach_ranges(&mut self, attribute: &A, ranges: &[Range], filter: Option<&V>) {
        let ids = match self.by_attribute.get(attribute) {
            Some(ids) => ids.clone(),
            None => return,
        };
        let mut emptied = Vec::new();
        for id in ids {
            let Some(entry) = self.entries.get_mut(&id) else {
                continue;
            };
            if !entry.answer.matches(filter) {
                continue;
            }
            for r in ranges {
                let Some(hits) = entry.frames.intersection(r.start, r.end) else {
                    break;
                };
                for f in hits.iter().flat_map(|h| h.frames()) {
                    unlink(&mut self.frames, f, id);
                }
                entry.frames.remove(r.start, r.end);
            }
            if entry.frames.is_empty() {
                emptied.push(id);
            }
        }
        for id in emptied {
            self.drop_entry(id);
        }
    }

    fn drop_entry(&mut self, id: AnswerId) {
        let Some(entry) = self.entries.remove(&id) else {
            return;
        };
        let Answer { attribute, value } = entry.answer;
        if let Some(ids) = self.by_attribute.get_mut(&attribute) {
            ids.retain(|x| *x != id);
            if ids.is_empty() {
                self.by_attribute.remove(&attribute);
            }
        }
        if let Some(value) = value {
            self.by_value.remove(&(attribute, value));
        }
        debug!("answer index: dropped answer {:?}", id);
    }
}

impl<A, V> FrameAnswerIndex<A, V>
where
    A: Clone + Eq + Hash + Debug,
    V: Clone + Eq + Hash,
{
    /// Like [`Self::answer_at`], but a missing answer is an error.
    pub fn require_answer_at(&self, attribute: &A, frame: Frame) -> Result<&V, AnswerError> {
        self.answer_at(attribute, frame)
            .ok_or_else(|| AnswerError::UnanswerableQuery {
                attribute: format!("{attribute:?}"),
                frame: Some(frame),
            })
    }
}

/// Equal when both hold the same answers over the same frames; ids are ignored.
impl<A, V> PartialEq for FrameAnswerIndex<A, V>
where
    A: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        if self.by_value.len() != other.by_value.len() {
            return false;
        }
        self.by_value.iter().all(|(key, id)| {
            let mine = self.entries.get(id).map(|e| &e.frames);
            let theirs = other
                .by_value
                .get(key)
                .and_then(|oid| other.entries.get(oid))
                .map(|e| &e.frames);
            mine.is_some() && mine == theirs
        })
    }
}

impl<A, V> Eq for FrameAnswerIndex<A, V>
where
    A: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
}

fn unlink(frames: &mut BTreeMap<Frame, Vec<AnswerId>>, frame: Frame, id: AnswerId) {
    if let Some(ids) = frames.get_mut(&frame) {
        ids.retain(|x| *x != id);
        if ids.is_empty() {
            frames.remove(&frame);
        }
    }
}
