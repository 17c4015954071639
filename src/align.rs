//! Question / mark-scheme chunk alignment.
//!
//! Loosely zips per-question chunks of the question paper with the
//! corresponding mark-scheme chunks into ordered [`QaPair`] records. The
//! pairing is positional; the shorter side is padded with empty strings so
//! no chunk is lost.

use serde::{Deserialize, Serialize};

/// One positionally-aligned question / mark-scheme pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaPair {
    /// 1-based position, as a string.
    pub question_number: String,
    pub question: String,
    pub mark_scheme: String,
}

/// Align question chunks with mark-scheme chunks by position.
pub fn align_chunks<S: AsRef<str>, T: AsRef<str>>(questions: &[S], mark_schemes: &[T]) -> Vec<QaPair> {
    let len = questions.len().max(mark_schemes.len());
    (0..len)
        .map(|i| QaPair {
            question_number: (i + 1).to_string(),
            question: questions
                .get(i)
                .map(|q| q.as_ref().to_string())
                .unwrap_or_default(),
            mark_scheme: mark_schemes
                .get(i)
                .map(|m| m.as_ref().to_string())
                .unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_lengths() {
        let pairs = align_chunks(&["q1", "q2"], &["a1", "a2"]);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].question_number, "1");
        assert_eq!(pairs[1].question, "q2");
        assert_eq!(pairs[1].mark_scheme, "a2");
    }

    #[test]
    fn test_shorter_side_padded() {
        let pairs = align_chunks(&["q1", "q2", "q3"], &["a1"]);
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[2].question, "q3");
        assert_eq!(pairs[2].mark_scheme, "");

        let pairs = align_chunks::<&str, &str>(&[], &["a1"]);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].question, "");
    }

    #[test]
    fn test_serialize_shape() {
        let pairs = align_chunks(&["q1"], &["a1"]);
        let json = serde_json::to_value(&pairs).unwrap();
        assert_eq!(json[0]["question_number"], "1");
        assert_eq!(json[0]["question"], "q1");
        assert_eq!(json[0]["mark_scheme"], "a1");
    }
}
