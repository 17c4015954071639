//! Question-text assembly.
//!
//! Collects the cleaned text of every surviving question-paper page, in
//! order, and joins them with a blank-line separator into the final
//! question text. [`QuestionText`] is the public stability boundary for the
//! question-paper path.

use serde::{Deserialize, Serialize};

/// The assembled, cleaned question-paper text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionText {
    /// Kept page texts joined with a blank line.
    pub text: String,
    /// `false` when the front-matter trigger never fired — the document
    /// yielded no content and the emptiness is degraded, not legitimate.
    pub front_matter_found: bool,
}

impl QuestionText {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Accumulates cleaned page texts for one document.
#[derive(Debug, Clone, Default)]
pub struct QuestionTextAssembler {
    pages: Vec<String>,
}

impl QuestionTextAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one page's cleaned text.
    pub fn push_page(&mut self, cleaned: String) {
        self.pages.push(cleaned);
    }

    /// Number of pages kept so far.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Join kept pages into the final [`QuestionText`].
    pub fn finish(self, front_matter_found: bool) -> QuestionText {
        QuestionText {
            text: self.pages.join("\n\n"),
            front_matter_found,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_joined_with_blank_line() {
        let mut asm = QuestionTextAssembler::new();
        asm.push_page("1 Define osmosis".to_string());
        asm.push_page("2 Define diffusion".to_string());
        let out = asm.finish(true);
        assert_eq!(out.text, "1 Define osmosis\n\n2 Define diffusion");
        assert!(out.front_matter_found);
    }

    #[test]
    fn test_empty_assembly() {
        let out = QuestionTextAssembler::new().finish(false);
        assert!(out.is_empty());
        assert!(!out.front_matter_found);
    }

    #[test]
    fn test_single_page_has_no_separator() {
        let mut asm = QuestionTextAssembler::new();
        asm.push_page("only page".to_string());
        assert_eq!(asm.len(), 1);
        assert_eq!(asm.finish(true).text, "only page");
    }
}
