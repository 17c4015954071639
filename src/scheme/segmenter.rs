//! Question-group segmentation.
//!
//! Partitions a filtered marking-scheme line stream into [`Group`]s, each
//! anchored by a marker line such as `1(a)` or `2(b)(ii)`. A single
//! left-to-right pass with no backtracking; concatenating the groups' lines
//! in order reproduces the input sequence exactly.

use std::mem;
use std::sync::LazyLock;

use regex::Regex;

/// Marker pattern: digits followed by one or more parenthesized alphabetic
/// labels, anchored at line start (e.g. `1(a)`, `12(b)(ii)`).
static MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\([a-zA-Z]+\))+").expect("marker pattern"));

/// One question/sub-part's run of lines.
///
/// `marked` is `false` only for the optional leading group holding stray
/// content found before the first marker — a recoverable anomaly, not an
/// error.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub lines: Vec<String>,
    pub marked: bool,
}

/// Splits filtered marking-scheme lines into marker-anchored groups.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupSegmenter;

impl GroupSegmenter {
    pub fn new() -> Self {
        Self
    }

    /// Returns `true` if the line starts a new question group.
    pub fn is_marker(line: &str) -> bool {
        MARKER.is_match(line)
    }

    /// Partition `lines` into groups.
    ///
    /// On a marker line the current group (if non-empty) is closed and a new
    /// one opened; other lines append to the open group, or open an unmarked
    /// leading group when no group exists yet. The final open group is
    /// flushed at end of input.
    pub fn segment<I>(&self, lines: I) -> Vec<Group>
    where
        I: IntoIterator<Item = String>,
    {
        let mut groups = Vec::new();
        let mut current: Vec<String> = Vec::new();
        let mut current_marked = false;

        for line in lines {
            if Self::is_marker(&line) {
                if !current.is_empty() {
                    groups.push(Group {
                        lines: mem::take(&mut current),
                        marked: current_marked,
                    });
                }
                current_marked = true;
                current.push(line);
            } else {
                if current.is_empty() {
                    current_marked = false;
                }
                current.push(line);
            }
        }

        if !current.is_empty() {
            groups.push(Group {
                lines: current,
                marked: current_marked,
            });
        }

        groups
    }
}
