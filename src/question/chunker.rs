//! Keyword chunking.
//!
//! Breaks an assembled text into chunks wherever a line starts with one of
//! the configured keywords (question numbers, section headings). Used to cut
//! the question text into per-question blocks for alignment against the
//! marking scheme.

/// Splits text into chunks at keyword-prefixed lines.
///
/// Matching is case-insensitive against the trimmed line; chunk content
/// keeps the original lines, trimmed as a block.
#[derive(Debug, Clone)]
pub struct KeywordChunker {
    /// Lower-cased keyword prefixes.
    keywords: Vec<String>,
}

impl KeywordChunker {
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Self {
        Self {
            keywords: keywords
                .iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Add one more keyword.
    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.keywords.push(keyword.to_lowercase());
        self
    }

    /// Returns `true` if the line opens a new chunk.
    pub fn is_boundary(&self, line: &str) -> bool {
        let trimmed = line.trim().to_lowercase();
        self.keywords.iter().any(|k| trimmed.starts_with(k.as_str()))
    }

    /// Break `text` into chunks at boundary lines.
    ///
    /// Content before the first boundary forms its own leading chunk; every
    /// chunk is the block of original lines joined with `"\n"` and trimmed.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current: Vec<&str> = Vec::new();

        for line in text.lines() {
            if self.is_boundary(line) && !current.is_empty() {
                chunks.push(current.join("\n").trim().to_string());
                current.clear();
            }
            current.push(line);
        }

        if !current.is_empty() {
            chunks.push(current.join("\n").trim().to_string());
        }

        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunks_split_at_question_numbers() {
        let chunker = KeywordChunker::new(&["1", "2", "3"]);
        let text = "1 Define osmosis\nwrite your answer here\n2 Define diffusion";
        let chunks = chunker.chunk(text);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0], "1 Define osmosis\nwrite your answer here");
        assert_eq!(chunks[1], "2 Define diffusion");
    }

    #[test]
    fn test_leading_content_forms_own_chunk() {
        let chunker = KeywordChunker::new(&["Section"]);
        let text = "preamble text\nSection A\ncontent";
        let chunks = chunker.chunk(text);
        assert_eq!(chunks, vec!["preamble text", "Section A\ncontent"]);
    }

    #[test]
    fn test_matching_is_case_insensitive_and_trimmed() {
        let chunker = KeywordChunker::new(&["section"]);
        assert!(chunker.is_boundary("  SECTION B"));
        assert!(!chunker.is_boundary("subsection B"));
    }

    #[test]
    fn test_with_keyword_builder() {
        let chunker = KeywordChunker::new(&["1"]).with_keyword("Question");
        assert!(chunker.is_boundary("question 4"));
    }

    #[test]
    fn test_empty_text_yields_no_chunks() {
        let chunker = KeywordChunker::new(&["1"]);
        assert!(chunker.chunk("").is_empty());
    }

    #[test]
    fn test_chunk_content_reproduces_lines_in_order() {
        let chunker = KeywordChunker::new(&["1", "2"]);
        let text = "1 first\nbody a\n2 second\nbody b";
        let rebuilt = chunker.chunk(text).join("\n");
        assert_eq!(rebuilt, text);
    }
}
