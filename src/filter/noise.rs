//! Question-paper noise filter.
//!
//! Decides retain/drop for each trimmed question-paper line against the
//! ordered boilerplate rules, then strips embedded dot-leader runs from
//! retained lines. Filtering is idempotent: running the filter over its own
//! output yields the identical sequence.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::filter::rules::{
    BlankPageMarker, CopyrightMark, DotLeaderRatio, ExamSeriesCode, FigureReference, FigureWord,
    InstitutionBanner, RuleSet, TableInstruction, TurnOver,
};

/// A run of three or more dots is an inline answer-blank leader.
static DOT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.{3,}").expect("dot-run pattern"));

/// Boilerplate filter for question-paper lines.
pub struct NoiseFilter {
    rules: RuleSet,
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseFilter {
    /// Build a filter with the full default rule list.
    pub fn new() -> Self {
        Self {
            rules: RuleSet::new(vec![
                Box::new(CopyrightMark),
                Box::new(ExamSeriesCode),
                Box::new(InstitutionBanner),
                Box::new(BlankPageMarker),
                Box::new(TurnOver),
                Box::new(FigureReference),
                Box::new(FigureWord),
                Box::new(TableInstruction),
                Box::new(DotLeaderRatio),
            ]),
        }
    }

    /// Build a filter with a caller-supplied rule set.
    pub fn with_rules(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Clean a single raw line.
    ///
    /// Returns the trimmed, dot-run-stripped line, or `None` if the line is
    /// boilerplate or empty after cleaning. Stripping a dot run can uncover
    /// a boilerplate phrase, so rules are re-checked on the stripped result
    /// to keep the filter idempotent.
    pub fn clean_line(&self, line: &str) -> Option<String> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Some(rule) = self.rules.first_match(trimmed) {
            trace!(rule, line = trimmed, "line dropped");
            return None;
        }
        let stripped = DOT_RUN.replace_all(trimmed, "");
        let cleaned = stripped.trim();
        if cleaned.is_empty() || self.rules.matches(cleaned) {
            return None;
        }
        Some(cleaned.to_string())
    }

    /// Lazily filter an ordered line sequence, preserving order.
    ///
    /// The filter borrows `&self`, so the sequence is restartable: calling
    /// this again over the same input yields the same output.
    pub fn filter_lines<'a, I>(&'a self, lines: I) -> impl Iterator<Item = String> + 'a
    where
        I: IntoIterator<Item = &'a str>,
        I::IntoIter: 'a,
    {
        lines.into_iter().filter_map(|line| self.clean_line(line))
    }

    /// Clean one page's text into its surviving lines.
    pub fn clean_page(&self, text: &str) -> Vec<String> {
        self.filter_lines(text.lines()).collect()
    }
}
