//! Question-paper text components.
//!
//! This module assembles surviving cleaned pages into one ordered text
//! stream and provides keyword-based chunking of that stream.

pub mod assembler;
pub mod chunker;

pub use assembler::{QuestionText, QuestionTextAssembler};
pub use chunker::KeywordChunker;
