//! Pipeline runner — orchestrates the two document paths.
//!
//! [`ExtractionPipeline`] holds the configured stages and executes them
//! sequentially over an ordered page slice, threading the per-document
//! [`FrontMatterSkipper`] through the fold and notifying an observer at
//! each page and record boundary. Both paths are side-effect-free
//! transformations; each call gets fresh state.

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::filter::{NoiseFilter, SchemeLineFilter};
use crate::frontmatter::FrontMatterSkipper;
use crate::pipeline::observer::{PageSkipReason, PipelineObserver};
use crate::question::assembler::{QuestionText, QuestionTextAssembler};
use crate::scheme::answer::{AnswerKey, AnswerRecordBuilder};
use crate::scheme::segmenter::GroupSegmenter;
use crate::source::PageSource;
use crate::types::{DocumentKind, ExtractConfig, Page};

/// The composed extraction pipeline.
pub struct ExtractionPipeline {
    config: ExtractConfig,
    noise: NoiseFilter,
    scheme_filter: SchemeLineFilter,
    segmenter: GroupSegmenter,
    builder: AnswerRecordBuilder,
}

impl Default for ExtractionPipeline {
    fn default() -> Self {
        Self::new(ExtractConfig::default())
    }
}

impl ExtractionPipeline {
    /// Build a pipeline with the default stage implementations.
    pub fn new(config: ExtractConfig) -> Self {
        Self {
            config,
            noise: NoiseFilter::new(),
            scheme_filter: SchemeLineFilter::new(),
            segmenter: GroupSegmenter::new(),
            builder: AnswerRecordBuilder::new(),
        }
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Question-paper path: assemble cleaned page texts into one stream.
    ///
    /// Per page, in order: skip if the image count exceeds the threshold,
    /// skip if the raw text is blank, discard while still in front matter,
    /// run the noise filter, skip if nothing survives, otherwise keep. The
    /// result's `front_matter_found` is `false` when the trigger never
    /// fired — a degraded, not merely empty, outcome.
    pub fn question_text(
        &self,
        pages: &[Page],
        observer: &mut impl PipelineObserver,
    ) -> QuestionText {
        let mut skipper = FrontMatterSkipper::new(DocumentKind::QuestionPaper);
        let mut assembler = QuestionTextAssembler::new();

        for page in pages {
            if page.image_count > self.config.max_images {
                debug!(
                    index = page.index,
                    images = page.image_count,
                    "skipping image-heavy page"
                );
                observer.on_page_skipped(page.index, PageSkipReason::TooManyImages);
                continue;
            }
            if page.is_blank() {
                debug!(index = page.index, "skipping blank page");
                observer.on_page_skipped(page.index, PageSkipReason::BlankText);
                continue;
            }
            if !skipper.is_active() {
                if skipper.observe_page(page.text.lines().map(str::trim)) {
                    info!(index = page.index, "question content begins");
                    observer.on_front_matter_trigger(page.index);
                } else {
                    observer.on_page_skipped(page.index, PageSkipReason::FrontMatter);
                    continue;
                }
            }
            let cleaned = self.noise.clean_page(&page.text);
            if cleaned.is_empty() {
                debug!(index = page.index, "page empty after cleaning");
                observer.on_page_skipped(page.index, PageSkipReason::EmptyAfterCleaning);
                continue;
            }
            observer.on_page_kept(page.index);
            assembler.push_page(cleaned.join("\n"));
        }

        if !skipper.is_active() {
            warn!("front-matter trigger never found; question text is degraded-empty");
        }
        assembler.finish(skipper.is_active())
    }

    /// Marking-scheme path: build the question-id to answer-text mapping.
    ///
    /// Pages before the tabular header are discarded whole; from the
    /// triggering page on, every raw line passes through the scheme filter
    /// into one document-wide stream, which is segmented into groups and
    /// reduced to records. Duplicate ids keep their first-seen position
    /// with the later text.
    pub fn answer_key(&self, pages: &[Page], observer: &mut impl PipelineObserver) -> AnswerKey {
        let mut skipper = FrontMatterSkipper::new(DocumentKind::MarkScheme);
        let mut document_lines: Vec<String> = Vec::new();

        for page in pages {
            let was_active = skipper.is_active();
            if !skipper.observe_page(page.text.lines()) {
                observer.on_page_skipped(page.index, PageSkipReason::FrontMatter);
                continue;
            }
            if !was_active {
                info!(index = page.index, "marking-scheme table begins");
                observer.on_front_matter_trigger(page.index);
            }
            observer.on_page_kept(page.index);
            document_lines.extend(
                self.scheme_filter
                    .filter_lines(page.text.lines())
                    .map(str::to_string),
            );
        }

        let front_matter_found = skipper.is_active();
        if !front_matter_found {
            warn!("tabular header never found; answer key is degraded-empty");
        }

        let mut key = AnswerKey::new(front_matter_found);
        for group in self.segmenter.segment(document_lines.into_iter()) {
            if let Some(record) = self.builder.build(&group) {
                debug!(question_id = %record.question_id, "answer record produced");
                observer.on_record(&record);
                key.insert(record);
            }
        }
        key
    }

    /// Load pages from a source, then run the question-paper path.
    pub fn question_text_from_source<S: PageSource>(
        &self,
        source: &mut S,
        observer: &mut impl PipelineObserver,
    ) -> Result<QuestionText> {
        let pages = source.load()?;
        Ok(self.question_text(&pages, observer))
    }

    /// Load pages from a source, then run the marking-scheme path.
    pub fn answer_key_from_source<S: PageSource>(
        &self,
        source: &mut S,
        observer: &mut impl PipelineObserver,
    ) -> Result<AnswerKey> {
        let pages = source.load()?;
        Ok(self.answer_key(&pages, observer))
    }
}
