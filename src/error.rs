//! Error types for the extraction pipeline.
//!
//! Only collaborator failures are errors: a page source that cannot be
//! opened or a page that cannot be decoded aborts the run. Everything else
//! in the taxonomy — skipped pages, empty groups, documents whose
//! front-matter trigger never fires — is modeled as an explicit skip or a
//! degraded-result flag, never as an error.

use thiserror::Error;

/// Failures raised while obtaining pages from the external collaborator.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The page source could not be opened or parsed at all.
    #[error("page source unavailable: {reason}")]
    SourceUnavailable { reason: String },

    /// A single page could not be decoded into text.
    #[error("page {index} could not be decoded: {reason}")]
    PageDecode { index: usize, reason: String },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ExtractError>;
