//! Answer-record reduction.
//!
//! Reduces one question [`Group`] to a single `(question_id, answer_text)`
//! pair: the id comes from the first token of the group's first line, every
//! line loses its trailing mark-count token, guidance after a `;` token is
//! discarded, and "any … from" disclaimer lines are dropped before the
//! survivors are joined with `". "`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::scheme::segmenter::Group;

/// One question/sub-part identifier with its cleaned model answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question_id: String,
    pub answer_text: String,
}

/// Reduces a group of marking-scheme lines to an [`AnswerRecord`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AnswerRecordBuilder;

impl AnswerRecordBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build the record for one group.
    ///
    /// Returns `None` for an empty group or one with no surviving content.
    ///
    /// The trailing token of every line is dropped unconditionally on the
    /// assumption that it is the mark-count numeral; a line without one
    /// loses its final word. The behavior is deliberate and covered by a
    /// regression test.
    pub fn build(&self, group: &Group) -> Option<AnswerRecord> {
        let first = group.lines.first()?.trim_start();
        let question_id = first.split_whitespace().next()?.to_string();
        let remainder = first[question_id.len()..].trim_start();

        let mut cleaned = Vec::new();
        let rest = group.lines[1..].iter().map(|l| l.as_str());
        for line in std::iter::once(remainder).chain(rest) {
            let mut tokens: Vec<&str> = line.split_whitespace().collect();
            tokens.pop();
            if let Some(pos) = tokens.iter().position(|t| *t == ";") {
                tokens.truncate(pos);
            }
            let line = tokens.join(" ");

            let lower = line.to_lowercase();
            if lower.starts_with("any") && lower.contains("from") {
                trace!(%question_id, %line, "disclaimer line dropped");
                continue;
            }
            if !line.is_empty() {
                cleaned.push(line);
            }
        }

        if cleaned.is_empty() {
            return None;
        }
        Some(AnswerRecord {
            question_id,
            answer_text: cleaned.join(". "),
        })
    }
}

/// Ordered map from question id to answer text.
///
/// Iteration follows first-seen insertion order; a duplicate id overwrites
/// the earlier answer in place (last write wins). `front_matter_found`
/// distinguishes a legitimately short document from one whose tabular
/// header never appeared.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerKey {
    records: Vec<AnswerRecord>,
    pub front_matter_found: bool,
}

impl AnswerKey {
    pub fn new(front_matter_found: bool) -> Self {
        Self {
            records: Vec::new(),
            front_matter_found,
        }
    }

    /// Insert a record, overwriting any earlier record with the same id
    /// while keeping its first-seen position.
    pub fn insert(&mut self, record: AnswerRecord) {
        match self
            .records
            .iter_mut()
            .find(|r| r.question_id == record.question_id)
        {
            Some(existing) => existing.answer_text = record.answer_text,
            None => self.records.push(record),
        }
    }

    /// Look up an answer by question id.
    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.records
            .iter()
            .find(|r| r.question_id == question_id)
            .map(|r| r.answer_text.as_str())
    }

    /// Iterate records in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &AnswerRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Materialize into a hash map for random-access callers.
    pub fn to_map(&self) -> FxHashMap<String, String> {
        self.records
            .iter()
            .map(|r| (r.question_id.clone(), r.answer_text.clone()))
            .collect()
    }
}
