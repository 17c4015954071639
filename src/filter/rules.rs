//! Named boilerplate-line predicates.
//!
//! Each recurring noise pattern is one named rule so individual rules can be
//! unit-tested and extended independently; a [`RuleSet`] holds an ordered
//! list of rules and reports the first one that matches. The two document
//! filters compose their own default sets from these rules.

use std::sync::LazyLock;

use regex::Regex;

use crate::frontmatter::SCHEME_HEADER;

/// A single drop predicate over one trimmed (question paper) or raw
/// (marking scheme) line.
///
/// Rules are stateless and `Send + Sync` so filters can be shared across
/// threads by the caller.
pub trait LineRule: Send + Sync {
    /// Stable rule name, used in logs and tests.
    fn name(&self) -> &'static str;

    /// Returns `true` if the line should be dropped.
    fn matches(&self, line: &str) -> bool;
}

/// An ordered list of rules applied first-match-wins.
pub struct RuleSet {
    rules: Vec<Box<dyn LineRule>>,
}

impl RuleSet {
    pub fn new(rules: Vec<Box<dyn LineRule>>) -> Self {
        Self { rules }
    }

    /// Name of the first rule matching `line`, if any.
    pub fn first_match(&self, line: &str) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|rule| rule.matches(line))
            .map(|rule| rule.name())
    }

    /// Returns `true` if any rule matches.
    pub fn matches(&self, line: &str) -> bool {
        self.first_match(line).is_some()
    }

    /// Names of all registered rules, in order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleSet")
            .field("rules", &self.rule_names())
            .finish()
    }
}

// ─── Question-paper rules ───────────────────────────────────────────────────

/// Copyright mark anywhere in the line (`© UCLES 2023` footers).
pub struct CopyrightMark;

impl LineRule for CopyrightMark {
    fn name(&self) -> &'static str {
        "copyright_mark"
    }
    fn matches(&self, line: &str) -> bool {
        line.contains('©')
    }
}

/// The per-series exam code baked into every page footer.
pub struct ExamSeriesCode;

/// Footer pagination code for the series this extractor targets.
pub const EXAM_SERIES_CODE: &str = "5090/21/m/j/23";

impl LineRule for ExamSeriesCode {
    fn name(&self) -> &'static str {
        "exam_series_code"
    }
    fn matches(&self, line: &str) -> bool {
        line.to_lowercase().contains(EXAM_SERIES_CODE)
    }
}

/// Institutional banner line (case-insensitive).
pub struct InstitutionBanner;

impl LineRule for InstitutionBanner {
    fn name(&self) -> &'static str {
        "institution_banner"
    }
    fn matches(&self, line: &str) -> bool {
        line.to_lowercase().contains("cambridge o level")
    }
}

/// "BLANK PAGE" filler marker (case-insensitive).
pub struct BlankPageMarker;

impl LineRule for BlankPageMarker {
    fn name(&self) -> &'static str {
        "blank_page_marker"
    }
    fn matches(&self, line: &str) -> bool {
        line.to_lowercase().contains("blank page")
    }
}

/// "[Turn over" page-footer instruction (case-insensitive).
pub struct TurnOver;

impl LineRule for TurnOver {
    fn name(&self) -> &'static str {
        "turn_over"
    }
    fn matches(&self, line: &str) -> bool {
        line.to_lowercase().contains("turn over")
    }
}

/// Figure caption reference (`Fig. 3 shows ...`).
pub struct FigureReference;

impl LineRule for FigureReference {
    fn name(&self) -> &'static str {
        "figure_reference"
    }
    fn matches(&self, line: &str) -> bool {
        line.contains("Fig. ")
    }
}

/// The word "figure" anywhere (case-insensitive).
pub struct FigureWord;

impl LineRule for FigureWord {
    fn name(&self) -> &'static str {
        "figure_word"
    }
    fn matches(&self, line: &str) -> bool {
        line.to_lowercase().contains("figure")
    }
}

/// Table headings and table-completion instructions (case-insensitive).
pub struct TableInstruction;

impl LineRule for TableInstruction {
    fn name(&self) -> &'static str {
        "table_instruction"
    }
    fn matches(&self, line: &str) -> bool {
        let lower = line.to_lowercase();
        lower.contains("complete table") || lower.contains("table ")
    }
}

/// Dot-leader heuristic: more than 30% of the line is `.` characters.
///
/// Catches answer-blank rows ("....................") that survive the other
/// rules.
pub struct DotLeaderRatio;

impl LineRule for DotLeaderRatio {
    fn name(&self) -> &'static str {
        "dot_leader_ratio"
    }
    fn matches(&self, line: &str) -> bool {
        if line.is_empty() {
            return false;
        }
        let dots = line.chars().filter(|c| *c == '.').count();
        dots as f64 > line.chars().count() as f64 * 0.3
    }
}

// ─── Marking-scheme rules ───────────────────────────────────────────────────

static SUBJECT_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}/\d{2}").expect("subject-code pattern"));

/// Subject-code header row start (`5090/21 ...`).
pub struct SubjectCodeStart;

impl LineRule for SubjectCodeStart {
    fn name(&self) -> &'static str {
        "subject_code_start"
    }
    fn matches(&self, line: &str) -> bool {
        SUBJECT_CODE.is_match(line)
    }
}

/// "PUBLISHED" banner row.
pub struct PublishedBanner;

impl LineRule for PublishedBanner {
    fn name(&self) -> &'static str {
        "published_banner"
    }
    fn matches(&self, line: &str) -> bool {
        line.starts_with("PUBLISHED")
    }
}

/// The tabular column-header row itself.
pub struct TabularHeader;

impl LineRule for TabularHeader {
    fn name(&self) -> &'static str {
        "tabular_header"
    }
    fn matches(&self, line: &str) -> bool {
        line.starts_with(SCHEME_HEADER)
    }
}

/// Copyright glyph at line start.
///
/// The upstream extractor emits the glyph either clean (`©`) or as the
/// Latin-1 mojibake `Â©`; both forms are recognized.
pub struct CopyrightGlyphStart;

impl LineRule for CopyrightGlyphStart {
    fn name(&self) -> &'static str {
        "copyright_glyph_start"
    }
    fn matches(&self, line: &str) -> bool {
        line.starts_with('©') || line.starts_with("Â©")
    }
}

/// "Max" mark-limit rows in the marks column.
pub struct MaxMarkLimit;

impl LineRule for MaxMarkLimit {
    fn name(&self) -> &'static str {
        "max_mark_limit"
    }
    fn matches(&self, line: &str) -> bool {
        line.starts_with("Max")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_mark() {
        assert!(CopyrightMark.matches("5090/21/M/J/23 © UCLES 2023"));
        assert!(!CopyrightMark.matches("the copyright act"));
    }

    #[test]
    fn test_exam_series_code_case_insensitive() {
        assert!(ExamSeriesCode.matches("5090/21/M/J/23"));
        assert!(ExamSeriesCode.matches("5090/21/m/j/23 page 4"));
        assert!(!ExamSeriesCode.matches("5090/22/m/j/23"));
    }

    #[test]
    fn test_institution_banner() {
        assert!(InstitutionBanner.matches("Cambridge O Level BIOLOGY"));
        assert!(!InstitutionBanner.matches("ordinary level"));
    }

    #[test]
    fn test_blank_page_and_turn_over() {
        assert!(BlankPageMarker.matches("BLANK PAGE"));
        assert!(BlankPageMarker.matches("this is a blank page"));
        assert!(TurnOver.matches("[Turn over"));
        assert!(TurnOver.matches("PLEASE TURN OVER"));
    }

    #[test]
    fn test_figure_rules() {
        assert!(FigureReference.matches("Fig. 3 shows a plant cell"));
        assert!(!FigureReference.matches("Figure 3 shows a plant cell"));
        assert!(FigureWord.matches("Figure 3 shows a plant cell"));
        assert!(FigureWord.matches("see the figure below"));
    }

    #[test]
    fn test_table_instruction() {
        assert!(TableInstruction.matches("Complete Table 1.1"));
        assert!(TableInstruction.matches("Table 2.1 shows the results"));
        assert!(TableInstruction.matches("a timetable entry"));
        assert!(!TableInstruction.matches("portable equipment"));
    }

    #[test]
    fn test_dot_leader_ratio() {
        assert!(DotLeaderRatio.matches("...................."));
        assert!(DotLeaderRatio.matches("Name: ..............."));
        // 4 dots in a 50-character line is well under 30%.
        assert!(!DotLeaderRatio.matches(
            "The rate of diffusion increases.... with temperature"
        ));
        assert!(!DotLeaderRatio.matches(""));
    }

    #[test]
    fn test_subject_code_start_anchored() {
        assert!(SubjectCodeStart.matches("5090/21 Cambridge O Level – Mark Scheme"));
        assert!(!SubjectCodeStart.matches(" 5090/21 indented"));
        assert!(!SubjectCodeStart.matches("509/21 short"));
    }

    #[test]
    fn test_scheme_prefix_rules() {
        assert!(PublishedBanner.matches("PUBLISHED"));
        assert!(!PublishedBanner.matches("was published in"));
        assert!(TabularHeader.matches("Question Answer Marks Guidance"));
        assert!(CopyrightGlyphStart.matches("© UCLES 2023"));
        assert!(CopyrightGlyphStart.matches("Â© UCLES 2023"));
        assert!(!CopyrightGlyphStart.matches("footer © UCLES"));
        assert!(MaxMarkLimit.matches("Max 2"));
        assert!(!MaxMarkLimit.matches("maximum of 2"));
    }

    #[test]
    fn test_rule_set_first_match_order() {
        let set = RuleSet::new(vec![Box::new(CopyrightMark), Box::new(ExamSeriesCode)]);
        // Both rules match; the first registered wins.
        assert_eq!(
            set.first_match("5090/21/m/j/23 © UCLES 2023"),
            Some("copyright_mark")
        );
        assert_eq!(set.first_match("plain content"), None);
        assert_eq!(set.rule_names(), vec!["copyright_mark", "exam_series_code"]);
    }
}
