//! Heuristic cleaning and segmentation of exam documents.
//!
//! Converts raw per-page text from a question paper and its marking scheme
//! into structured records: a cleaned question-text stream and a mapping
//! from question/sub-part id to model-answer text. Input pages are noisy —
//! cover pages, copyright footers, dotted answer-blank leaders, and tabular
//! instructions interleave with real content — so the core is a set of
//! composable heuristics rather than structural parsing.
//!
//! # Pipeline stages
//!
//! 1. Page-level skip decisions (image-heavy or blank pages)
//! 2. [`frontmatter`] — detect where cover/instruction pages end
//! 3. [`filter`] — drop boilerplate lines, strip dot-leader runs
//! 4. [`scheme`] — segment marking-scheme lines into question groups and
//!    reduce each to an answer record
//! 5. [`question`] — assemble surviving question-paper pages and chunk
//!    them by keyword
//! 6. [`align`] — positionally pair question chunks with mark-scheme chunks
//!
//! # Quick start
//!
//! ```
//! use exam_extract::{ExtractConfig, ExtractionPipeline, NoopObserver, Page};
//!
//! let pages = vec![Page::new(
//!     0,
//!     "Question Answer Marks Guidance\n1(a) Explain osmosis 2",
//!     0,
//! )];
//! let pipeline = ExtractionPipeline::new(ExtractConfig::default());
//! let key = pipeline.answer_key(&pages, &mut NoopObserver);
//! assert_eq!(key.get("1(a)"), Some("Explain osmosis"));
//! ```
//!
//! Decoding documents into pages, persisting output, and dataset formatting
//! are out of scope; see [`source::PageSource`] for the collaborator seam.

pub mod align;
pub mod error;
pub mod filter;
pub mod frontmatter;
pub mod pipeline;
pub mod question;
pub mod scheme;
pub mod source;
pub mod types;

pub use align::{align_chunks, QaPair};
pub use error::{ExtractError, Result};
pub use filter::{NoiseFilter, SchemeLineFilter};
pub use frontmatter::{FrontMatterSkipper, FrontMatterState};
pub use pipeline::{CollectingObserver, ExtractionPipeline, NoopObserver, PageSkipReason, PipelineObserver};
pub use question::{KeywordChunker, QuestionText, QuestionTextAssembler};
pub use scheme::{AnswerKey, AnswerRecord, AnswerRecordBuilder, Group, GroupSegmenter};
pub use source::{MemoryPageSource, PageSource};
pub use types::{DocumentKind, ExtractConfig, Page};
