//! Marking-scheme structuring components.
//!
//! This module partitions the filtered marking-scheme line stream into
//! question groups and reduces each group to a clean answer record.

pub mod answer;
pub mod segmenter;

pub use answer::{AnswerKey, AnswerRecord, AnswerRecordBuilder};
pub use segmenter::{Group, GroupSegmenter};
