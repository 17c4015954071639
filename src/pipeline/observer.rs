//! Pipeline observer — hooks for logging, debugging, and tests.
//!
//! Observers receive notifications at page and record boundaries without
//! coupling to pipeline logic. Pass [`NoopObserver`] for zero-overhead
//! execution; [`CollectingObserver`] records every event for assertions.

use serde::{Deserialize, Serialize};

use crate::scheme::answer::AnswerRecord;

/// Why a page was skipped. All skips are expected, non-fatal outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageSkipReason {
    /// Image count exceeded the configured threshold.
    TooManyImages,
    /// Raw text was empty or whitespace-only.
    BlankText,
    /// The document is still inside its front matter.
    FrontMatter,
    /// Every line was removed by the noise filter.
    EmptyAfterCleaning,
}

impl PageSkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TooManyImages => "too_many_images",
            Self::BlankText => "blank_text",
            Self::FrontMatter => "front_matter",
            Self::EmptyAfterCleaning => "empty_after_cleaning",
        }
    }
}

/// Callbacks fired while a document is processed.
///
/// All methods default to no-ops so implementations override only what they
/// need.
pub trait PipelineObserver {
    /// A page survived all skip checks and contributed content.
    fn on_page_kept(&mut self, _index: usize) {}

    /// A page was skipped, with the reason.
    fn on_page_skipped(&mut self, _index: usize, _reason: PageSkipReason) {}

    /// The front-matter trigger fired on this page.
    fn on_front_matter_trigger(&mut self, _index: usize) {}

    /// An answer record was produced from a group.
    fn on_record(&mut self, _record: &AnswerRecord) {}
}

/// Observer that ignores every event, with zero overhead.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records every event, for tests and diagnostics.
#[derive(Debug, Clone, Default)]
pub struct CollectingObserver {
    pub kept: Vec<usize>,
    pub skipped: Vec<(usize, PageSkipReason)>,
    pub trigger_page: Option<usize>,
    pub records: Vec<AnswerRecord>,
}

impl CollectingObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PipelineObserver for CollectingObserver {
    fn on_page_kept(&mut self, index: usize) {
        self.kept.push(index);
    }

    fn on_page_skipped(&mut self, index: usize, reason: PageSkipReason) {
        self.skipped.push((index, reason));
    }

    fn on_front_matter_trigger(&mut self, index: usize) {
        self.trigger_page = Some(index);
    }

    fn on_record(&mut self, record: &AnswerRecord) {
        self.records.push(record.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_reason_names() {
        assert_eq!(PageSkipReason::TooManyImages.as_str(), "too_many_images");
        let json = serde_json::to_string(&PageSkipReason::FrontMatter).unwrap();
        assert_eq!(json, "\"front_matter\"");
    }

    #[test]
    fn test_collecting_observer_records_events() {
        let mut obs = CollectingObserver::new();
        obs.on_page_skipped(0, PageSkipReason::FrontMatter);
        obs.on_front_matter_trigger(1);
        obs.on_page_kept(1);
        assert_eq!(obs.skipped, vec![(0, PageSkipReason::FrontMatter)]);
        assert_eq!(obs.trigger_page, Some(1));
        assert_eq!(obs.kept, vec![1]);
    }
}
