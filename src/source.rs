//! Page source seam.
//!
//! The pipeline does not open documents itself — an external collaborator
//! decodes the document into per-page text and image counts. [`PageSource`]
//! is that boundary: implementations either deliver the full ordered page
//! sequence or fail once at load time. No retry happens at this layer.

use crate::error::Result;
use crate::types::Page;

/// Supplier of an ordered, fully-materialized page sequence.
///
/// # Contract
///
/// - Pages are returned in document order with contiguous zero-based
///   indices.
/// - Loading either succeeds completely or returns a single
///   [`ExtractError`](crate::ExtractError); partial sequences are not
///   delivered.
pub trait PageSource {
    /// Load every page of the document.
    fn load(&mut self) -> Result<Vec<Page>>;
}

/// A page source backed by pages already held in memory.
///
/// Used by tests and by callers that ran the external extractor themselves.
#[derive(Debug, Clone, Default)]
pub struct MemoryPageSource {
    pages: Vec<Page>,
}

impl MemoryPageSource {
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// Build a source from raw page texts, all with zero image counts.
    pub fn from_texts<S: AsRef<str>>(texts: &[S]) -> Self {
        let pages = texts
            .iter()
            .enumerate()
            .map(|(i, t)| Page::new(i, t.as_ref(), 0))
            .collect();
        Self { pages }
    }
}

impl PageSource for MemoryPageSource {
    fn load(&mut self) -> Result<Vec<Page>> {
        Ok(self.pages.clone())
    }
}
