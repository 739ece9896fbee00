//! Core types for line diffing.
//!
//! Defines the data structures that flow through the pipeline:
//! line arrays → `EditOp` script → `DiffRange` list.

use serde::{Deserialize, Serialize};

/// A single step of an edit script.
///
/// Indices are 0-based positions in the original and modified line
/// sequences. Taking the `Keep` and `Insert` steps in order rebuilds the
/// modified sequence; taking `Keep` and `Remove` rebuilds the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditOp {
    /// Line present and identical in both sequences.
    Keep {
        /// Index in the original sequence.
        original: usize,
        /// Index in the modified sequence.
        modified: usize,
    },
    /// Line present only in the modified sequence.
    Insert {
        /// Index in the modified sequence.
        modified: usize,
    },
    /// Line present only in the original sequence.
    Remove {
        /// Index in the original sequence.
        original: usize,
    },
}

impl EditOp {
    /// Index in the modified sequence, if this step produces a modified line.
    #[must_use]
    pub fn modified_index(&self) -> Option<usize> {
        match *self {
            Self::Keep { modified, .. } | Self::Insert { modified } => Some(modified),
            Self::Remove { .. } => None,
        }
    }

    /// Index in the original sequence, if this step consumes an original line.
    #[must_use]
    pub fn original_index(&self) -> Option<usize> {
        match *self {
            Self::Keep { original, .. } | Self::Remove { original } => Some(original),
            Self::Insert { .. } => None,
        }
    }

    /// Whether this step is an edit (anything but `Keep`).
    #[must_use]
    pub fn is_edit(&self) -> bool {
        !matches!(self, Self::Keep { .. })
    }
}

/// Kind of a renderable change range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    /// Lines that exist only in the modified document.
    Add,
    /// Marker for removed content, anchored to a surviving line.
    Delete,
    /// Lines that replaced removed content.
    Modify,
}

impl DiffKind {
    /// Lowercase name, as used on the wire.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Delete => "delete",
            Self::Modify => "modify",
        }
    }
}

/// A contiguous block of changed lines in the modified document.
///
/// Line numbers are 1-based and inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffRange {
    /// What happened to this block.
    pub kind: DiffKind,
    /// First line (1-indexed).
    pub start_line: usize,
    /// Last line (1-indexed, inclusive).
    pub end_line: usize,
}

impl DiffRange {
    /// Create a range spanning `start_line..=end_line`.
    #[must_use]
    pub fn new(kind: DiffKind, start_line: usize, end_line: usize) -> Self {
        Self {
            kind,
            start_line,
            end_line,
        }
    }

    /// Number of lines decorated by this range.
    ///
    /// A deserialized range with `end_line < start_line` counts as one line.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.end_line.saturating_sub(self.start_line) + 1
    }

    /// Whether `line` (1-indexed) falls inside this range.
    #[must_use]
    pub fn contains(&self, line: usize) -> bool {
        (self.start_line..=self.end_line).contains(&line)
    }
}

/// Summary counts for one diff computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffStats {
    /// Number of inserted lines.
    pub additions: usize,
    /// Number of removed lines.
    pub deletions: usize,
    /// Total non-keep steps in the edit script.
    pub edit_distance: usize,
}

impl DiffStats {
    /// Tally an edit script.
    #[must_use]
    pub fn from_script(script: &[EditOp]) -> Self {
        let mut stats = Self::default();
        for op in script {
            match op {
                EditOp::Insert { .. } => stats.additions += 1,
                EditOp::Remove { .. } => stats.deletions += 1,
                EditOp::Keep { .. } => {}
            }
        }
        stats.edit_distance = stats.additions + stats.deletions;
        stats
    }
}

/// Result of a configured diff computation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDiffResult {
    /// Coalesced change ranges, ascending by start line.
    pub ranges: Vec<DiffRange>,
    /// Script totals.
    pub stats: DiffStats,
    /// Line count of the original document.
    pub original_lines: usize,
    /// Line count of the modified document.
    pub modified_lines: usize,
}

impl LineDiffResult {
    /// Whether the two documents differ at all.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.ranges.is_empty()
    }
}

/// Configuration for diff operations.
///
/// Controls input size limits and batch parallelism.
#[derive(Debug, Clone)]
pub struct DiffConfig {
    /// Maximum line count of either document (default 200k).
    pub max_lines: usize,
    /// Give up once the edit distance passes this bound (`None` = unbounded).
    pub max_edit_distance: Option<usize>,
    /// Number of parallel workers for batches (0 = rayon global pool).
    pub workers: usize,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            max_lines: 200_000,
            max_edit_distance: None,
            workers: 0,
        }
    }
}

/// One document pair submitted to a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffRequest {
    /// Caller-chosen key, echoed back in the report.
    pub id: String,
    /// Original snapshot.
    pub original: String,
    /// Modified snapshot.
    pub modified: String,
}

impl DiffRequest {
    /// Build a request from anything string-like.
    pub fn new(
        id: impl Into<String>,
        original: impl Into<String>,
        modified: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            original: original.into(),
            modified: modified.into(),
        }
    }
}
