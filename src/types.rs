//! Core input and configuration types.
//!
//! A [`Page`] is the unit handed over by the external page-text extractor:
//! raw text plus an image count. [`ExtractConfig`] carries the few knobs the
//! pipeline recognizes; tolerance values are pass-through for the extractor
//! and have no effect on core logic.

use serde::{Deserialize, Serialize};

/// One page of an exam document, as delivered by the page source.
///
/// Pages are immutable once constructed and consumed exactly once per
/// pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Zero-based page index within the document.
    pub index: usize,
    /// Raw extracted text. May be empty or whitespace-only.
    pub text: String,
    /// Number of embedded images on the page.
    pub image_count: usize,
}

impl Page {
    pub fn new(index: usize, text: impl Into<String>, image_count: usize) -> Self {
        Self {
            index,
            text: text.into(),
            image_count,
        }
    }

    /// Returns `true` if the page carries no non-whitespace text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Which kind of exam document is being processed.
///
/// The two kinds use different front-matter triggers and different line
/// filters; see [`crate::frontmatter`] and [`crate::filter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// The question paper: free-form question text with answer blanks.
    QuestionPaper,
    /// The marking scheme: tabular question/answer/marks/guidance rows.
    MarkScheme,
}

impl DocumentKind {
    /// Returns the user-facing name used in logs and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::QuestionPaper => "question_paper",
            Self::MarkScheme => "mark_scheme",
        }
    }
}

/// Configuration for an extraction run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Pages with more images than this are skipped entirely on the
    /// question-paper path (diagram-heavy pages rarely extract as text).
    #[serde(default = "default_max_images")]
    pub max_images: usize,
    /// Horizontal tolerance forwarded to the page-text extractor.
    #[serde(default = "default_tolerance")]
    pub x_tolerance: f32,
    /// Vertical tolerance forwarded to the page-text extractor.
    #[serde(default = "default_tolerance")]
    pub y_tolerance: f32,
}

fn default_max_images() -> usize {
    2
}

fn default_tolerance() -> f32 {
    1.0
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            max_images: default_max_images(),
            x_tolerance: default_tolerance(),
            y_tolerance: default_tolerance(),
        }
    }
}

impl ExtractConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the image-count threshold above which a page is skipped.
    pub fn with_max_images(mut self, max_images: usize) -> Self {
        self.max_images = max_images;
        self
    }

    /// Set the extractor tolerances (pass-through; no effect on core logic).
    pub fn with_tolerances(mut self, x: f32, y: f32) -> Self {
        self.x_tolerance = x;
        self.y_tolerance = y;
        self
    }
}
