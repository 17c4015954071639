//! Pipeline orchestration.
//!
//! This module wires the front-matter skipper, line filters, segmenter, and
//! answer builder into the two document paths, and defines the observer
//! hooks notified at page and record boundaries.

pub mod observer;
pub mod runner;

pub use observer::{CollectingObserver, NoopObserver, PageSkipReason, PipelineObserver};
pub use runner::ExtractionPipeline;
