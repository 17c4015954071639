//! Marking-scheme line filter.
//!
//! A parallel, differently-tuned filter for marking-scheme lines. Unlike the
//! question-paper [`NoiseFilter`](crate::filter::NoiseFilter) it never
//! rewrites a surviving line: mark counts and semicolon-delimited guidance
//! are structured content consumed downstream by the answer builder, so
//! lines pass through untrimmed and unmodified or are dropped whole.

use tracing::trace;

use crate::filter::rules::{
    CopyrightGlyphStart, MaxMarkLimit, PublishedBanner, RuleSet, SubjectCodeStart, TabularHeader,
};

/// Boilerplate filter for raw marking-scheme lines.
pub struct SchemeLineFilter {
    rules: RuleSet,
}

impl Default for SchemeLineFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemeLineFilter {
    /// Build a filter with the full default rule list.
    pub fn new() -> Self {
        Self {
            rules: RuleSet::new(vec![
                Box::new(SubjectCodeStart),
                Box::new(PublishedBanner),
                Box::new(TabularHeader),
                Box::new(CopyrightGlyphStart),
                Box::new(MaxMarkLimit),
            ]),
        }
    }

    /// Build a filter with a caller-supplied rule set.
    pub fn with_rules(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Returns the unmodified line, or `None` if it is boilerplate.
    pub fn filter_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        if let Some(rule) = self.rules.first_match(line) {
            trace!(rule, line, "scheme line dropped");
            return None;
        }
        Some(line)
    }

    /// Lazily filter an ordered line sequence, preserving order.
    pub fn filter_lines<'a, I>(&'a self, lines: I) -> impl Iterator<Item = &'a str> + 'a
    where
        I: IntoIterator<Item = &'a str>,
        I::IntoIter: 'a,
    {
        lines.into_iter().filter_map(|line| self.filter_line(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_rows_dropped() {
        let filter = SchemeLineFilter::new();
        assert_eq!(filter.filter_line("5090/21 Cambridge O Level – Mark Scheme"), None);
        assert_eq!(filter.filter_line("PUBLISHED"), None);
        assert_eq!(filter.filter_line("Question Answer Marks Guidance"), None);
        assert_eq!(filter.filter_line("© UCLES 2023"), None);
        assert_eq!(filter.filter_line("Â© UCLES 2023"), None);
        assert_eq!(filter.filter_line("Max 2"), None);
    }

    #[test]
    fn test_content_passes_through_unmodified() {
        let filter = SchemeLineFilter::new();
        let line = "1(a) movement of water molecules ; accept diffusion 2";
        assert_eq!(filter.filter_line(line), Some(line));
        // Untrimmed lines survive untrimmed.
        let indented = "  any two from: 3";
        assert_eq!(filter.filter_line(indented), Some(indented));
    }

    #[test]
    fn test_prefix_rules_are_anchored() {
        let filter = SchemeLineFilter::new();
        // Glyph and "Max" only match at line start.
        let line = "award 1 mark, Max applies per part";
        assert_eq!(filter.filter_line(line), Some(line));
        let line = "see 5090/21 footer";
        assert_eq!(filter.filter_line(line), Some(line));
    }

    #[test]
    fn test_filter_lines_preserves_order() {
        let filter = SchemeLineFilter::new();
        let lines = [
            "1(a) first answer 2",
            "PUBLISHED",
            "supporting detail 1",
            "Max 2",
            "2(a) second answer 1",
        ];
        let kept: Vec<&str> = filter.filter_lines(lines.iter().copied()).collect();
        assert_eq!(
            kept,
            vec!["1(a) first answer 2", "supporting detail 1", "2(a) second answer 1"]
        );
    }
}
