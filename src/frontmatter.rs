//! Front-matter detection.
//!
//! Exam documents open with cover pages, instructions, and mark grids before
//! any real content. [`FrontMatterSkipper`] is a two-state machine threaded
//! through the page fold: it starts in `Skipping`, transitions to `Active`
//! on the first page containing the trigger for its document kind, and never
//! re-evaluates afterwards. While skipping, a page's entire content is
//! discarded; the triggering page is the first one kept.

use crate::types::DocumentKind;

/// The tabular header row that opens real marking-scheme content.
pub const SCHEME_HEADER: &str = "Question Answer Marks Guidance";

/// State of front-matter traversal for one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontMatterState {
    /// Still inside cover/instruction pages; discard everything.
    Skipping,
    /// Real content has begun; keep everything from here on.
    Active,
}

/// Per-document front-matter state machine.
///
/// Transitions `Skipping -> Active` at most once and never reverts, even
/// across later pages. Each document gets its own fresh skipper.
#[derive(Debug, Clone)]
pub struct FrontMatterSkipper {
    kind: DocumentKind,
    state: FrontMatterState,
}

impl FrontMatterSkipper {
    pub fn new(kind: DocumentKind) -> Self {
        Self {
            kind,
            state: FrontMatterState::Skipping,
        }
    }

    pub fn state(&self) -> FrontMatterState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == FrontMatterState::Active
    }

    /// Examine one page's lines and return whether the machine is active
    /// afterwards.
    ///
    /// Once active, lines are no longer inspected; the answer is always
    /// `true`.
    pub fn observe_page<'a, I>(&mut self, lines: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        if self.is_active() {
            return true;
        }
        let trigger = match self.kind {
            DocumentKind::QuestionPaper => Self::question_trigger,
            DocumentKind::MarkScheme => Self::scheme_trigger,
        };
        if lines.into_iter().any(trigger) {
            self.state = FrontMatterState::Active;
        }
        self.is_active()
    }

    /// Question-paper trigger: the line opens question 1.
    ///
    /// A line starting `"1 "` counts unless the four bytes after the prefix
    /// spell `"hour"` — that guards against the cover-page duration line
    /// ("1 hour 30 minutes..."). Lines too short to carry `"hour"` at that
    /// offset trigger.
    pub fn question_trigger(line: &str) -> bool {
        if !line.starts_with("1 ") {
            return false;
        }
        match line.get(2..6) {
            Some(slice) => !slice.eq_ignore_ascii_case("hour"),
            None => true,
        }
    }

    /// Marking-scheme trigger: the line contains the tabular header row.
    pub fn scheme_trigger(line: &str) -> bool {
        line.contains(SCHEME_HEADER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_line_does_not_trigger() {
        assert!(!FrontMatterSkipper::question_trigger("1 hour 30 minutes"));
        assert!(!FrontMatterSkipper::question_trigger("1 Hour 15 minutes"));
    }

    #[test]
    fn test_question_one_triggers() {
        assert!(FrontMatterSkipper::question_trigger(
            "1 Describe the water cycle"
        ));
    }

    #[test]
    fn test_short_line_triggers() {
        // Too short to spell "hour" after the prefix.
        assert!(FrontMatterSkipper::question_trigger("1 x"));
        assert!(FrontMatterSkipper::question_trigger("1 "));
    }

    #[test]
    fn test_non_question_lines_do_not_trigger() {
        assert!(!FrontMatterSkipper::question_trigger("10 Describe"));
        assert!(!FrontMatterSkipper::question_trigger("Describe 1 thing"));
        assert!(!FrontMatterSkipper::question_trigger(""));
    }

    #[test]
    fn test_scheme_trigger_is_substring_match() {
        assert!(FrontMatterSkipper::scheme_trigger(
            "Question Answer Marks Guidance"
        ));
        assert!(FrontMatterSkipper::scheme_trigger(
            "  Question Answer Marks Guidance  extra"
        ));
        assert!(!FrontMatterSkipper::scheme_trigger("Question Answer Marks"));
    }

    #[test]
    fn test_transitions_at_most_once_and_never_reverts() {
        let mut skipper = FrontMatterSkipper::new(DocumentKind::QuestionPaper);
        assert!(!skipper.observe_page(["INSTRUCTIONS", "1 hour 30 minutes"]));
        assert_eq!(skipper.state(), FrontMatterState::Skipping);

        assert!(skipper.observe_page(["1 Describe the water cycle"]));
        assert_eq!(skipper.state(), FrontMatterState::Active);

        // Later pages with no trigger leave the machine active.
        assert!(skipper.observe_page(["BLANK PAGE"]));
        assert!(skipper.observe_page(std::iter::empty::<&str>()));
        assert_eq!(skipper.state(), FrontMatterState::Active);
    }

    #[test]
    fn test_mark_scheme_skipper() {
        let mut skipper = FrontMatterSkipper::new(DocumentKind::MarkScheme);
        assert!(!skipper.observe_page(["Cambridge O Level", "BIOLOGY 5090/21"]));
        assert!(skipper.observe_page(["Question Answer Marks Guidance"]));
        assert!(skipper.is_active());
    }
}
