//! Error types for configured diff computations.
//!
//! Follows ODF-REP: Library crates use `thiserror` for explicit error enums.
//! The bare `compute_line_diff` entry point is total and never produces these;
//! they only come from the limits carried by `DiffConfig`.

use thiserror::Error;

/// Error types for diff operations.
///
/// Every variant rejects the whole request. No partial range list is ever
/// returned alongside an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// One of the documents has more lines than `DiffConfig::max_lines`.
    #[error("Input too large: {lines} lines exceeds limit of {limit}")]
    TooLarge {
        /// Line count of the larger document.
        lines: usize,
        /// Configured limit.
        limit: usize,
    },

    /// The edit distance passed `DiffConfig::max_edit_distance`.
    #[error("Edit distance exceeds limit of {limit}")]
    TooManyEdits {
        /// Configured limit.
        limit: usize,
    },
}
