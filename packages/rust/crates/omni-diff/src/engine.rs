//! Line diff engine.
//!
//! Wires the three stages together: split → shortest edit script → coalesce.

use std::fmt::Write as _;

use crate::coalesce::coalesce;
use crate::error::DiffError;
use crate::lines::split_lines;
use crate::myers::{bounded_edit_script, shortest_edit_script};
use crate::types::{DiffConfig, DiffRange, DiffStats, LineDiffResult};

/// Compute the change ranges between two document snapshots.
///
/// Total over all inputs: no size limits are applied. Identical documents
/// yield an empty list.
///
/// # Example
///
/// ```rust,ignore
/// use omni_diff::{compute_line_diff, DiffKind};
///
/// let ranges = compute_line_diff("a\nb\nc", "a\nB\nc");
/// assert_eq!(ranges.len(), 1);
/// assert_eq!(ranges[0].kind, DiffKind::Modify);
/// assert_eq!((ranges[0].start_line, ranges[0].end_line), (2, 2));
/// ```
#[must_use]
pub fn compute_line_diff(original: &str, modified: &str) -> Vec<DiffRange> {
    if original == modified {
        return Vec::new();
    }

    let old_lines = split_lines(original);
    let new_lines = split_lines(modified);
    coalesce(&shortest_edit_script(&old_lines, &new_lines))
}

/// LineDiffEngine - configured entry point for the editor decoration layer.
///
/// Adds input limits and summary statistics on top of [`compute_line_diff`].
/// Holds only its configuration, so one engine can serve many threads.
///
/// # Example
///
/// ```rust,ignore
/// use omni_diff::{DiffConfig, LineDiffEngine};
///
/// let engine = LineDiffEngine::new(DiffConfig {
///     max_lines: 50_000,
///     ..Default::default()
/// });
/// let result = engine.compute("a\nb", "a\nb\nc")?;
/// assert_eq!(result.stats.additions, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LineDiffEngine {
    config: DiffConfig,
}

impl LineDiffEngine {
    /// Create an engine with the given limits.
    #[must_use]
    pub fn new(config: DiffConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    /// Diff two snapshots under the configured limits.
    ///
    /// # Errors
    /// - `DiffError::TooLarge` if either document has more than `max_lines` lines.
    /// - `DiffError::TooManyEdits` if the edit distance passes `max_edit_distance`.
    pub fn compute(&self, original: &str, modified: &str) -> Result<LineDiffResult, DiffError> {
        let old_lines = split_lines(original);
        let new_lines = split_lines(modified);

        if original == modified {
            return Ok(LineDiffResult {
                ranges: Vec::new(),
                stats: DiffStats::default(),
                original_lines: old_lines.len(),
                modified_lines: new_lines.len(),
            });
        }

        let largest = old_lines.len().max(new_lines.len());
        if largest > self.config.max_lines {
            log::warn!(
                "Rejecting diff: {largest} lines exceeds limit of {}",
                self.config.max_lines
            );
            return Err(DiffError::TooLarge {
                lines: largest,
                limit: self.config.max_lines,
            });
        }

        let script = match self.config.max_edit_distance {
            Some(limit) => bounded_edit_script(&old_lines, &new_lines, limit).ok_or_else(|| {
                log::warn!("Rejecting diff: edit distance exceeds limit of {limit}");
                DiffError::TooManyEdits { limit }
            })?,
            None => shortest_edit_script(&old_lines, &new_lines),
        };

        let stats = DiffStats::from_script(&script);
        let ranges = coalesce(&script);

        log::debug!(
            "Line diff {} -> {} lines: +{} -{} in {} ranges",
            old_lines.len(),
            new_lines.len(),
            stats.additions,
            stats.deletions,
            ranges.len()
        );

        Ok(LineDiffResult {
            ranges,
            stats,
            original_lines: old_lines.len(),
            modified_lines: new_lines.len(),
        })
    }

    /// Format a diff result for display.
    #[must_use]
    pub fn format_result(result: &LineDiffResult, label: Option<&str>) -> String {
        let mut output = String::new();

        if let Some(l) = label {
            let _ = writeln!(output, "// DIFF: {l}");
        }
        let _ = writeln!(
            output,
            "// Lines: {} -> {}",
            result.original_lines, result.modified_lines
        );

        if !result.has_changes() {
            output.push_str("[No changes]\n");
            return output;
        }

        let _ = writeln!(
            output,
            "// Changes: +{} -{}",
            result.stats.additions, result.stats.deletions
        );
        for range in &result.ranges {
            if range.start_line == range.end_line {
                let _ = writeln!(output, "L{} {}", range.start_line, range.kind.as_str());
            } else {
                let _ = writeln!(
                    output,
                    "L{}-L{} {}",
                    range.start_line,
                    range.end_line,
                    range.kind.as_str()
                );
            }
        }

        output
    }
}
