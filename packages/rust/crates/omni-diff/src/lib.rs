#![allow(clippy::doc_markdown)]

//! omni-diff - Line-level diff engine for editor decorations
//!
//! Computes the minimal line edits between two document snapshots and
//! condenses them into ranges an editor can paint in its gutter.
//!
//! # Features
//!
//! - **Minimal Scripts**: Myers O((N+M)·D) shortest edit script
//! - **Uniform Line Endings**: `\r\n`, `\r` and `\n` all split lines
//! - **Renderable Ranges**: Add / Delete / Modify blocks in modified-document lines
//! - **Deletion Anchoring**: Removed blocks are pinned to the next surviving line
//! - **Batch Diffing**: Parallel evaluation of many document pairs (rayon)
//!
//! # Architecture (ODF-REP Compliant)
//!
//! ```text
//! omni-diff/src/
//! ├── lib.rs       # Re-exports (this file)
//! ├── error.rs     # DiffError enum (thiserror)
//! ├── types.rs     # EditOp, DiffRange, DiffStats, DiffConfig
//! ├── lines.rs     # Line splitting
//! ├── myers.rs     # Shortest edit script solver
//! ├── coalesce.rs  # Script -> range coalescing
//! ├── engine.rs    # compute_line_diff, LineDiffEngine
//! └── batch.rs     # Parallel batch diffing with rayon
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use omni_diff::{compute_line_diff, DiffKind, DiffRange};
//!
//! let ranges = compute_line_diff("a\nc", "a\nb\nc");
//! assert_eq!(ranges, vec![DiffRange::new(DiffKind::Add, 2, 2)]);
//! ```

// ============================================================================
// Module Declarations (ODF-REP: Atomic Structure)
// ============================================================================

mod batch;
mod coalesce;
mod engine;
mod error;
mod lines;
mod myers;
mod types;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use engine::{LineDiffEngine, compute_line_diff};
pub use error::DiffError;
pub use types::{
    DiffConfig, DiffKind, DiffRange, DiffRequest, DiffStats, EditOp, LineDiffResult,
};

// Batch diffing exports
pub use batch::BatchDiffReport;

// Pipeline stages for callers that need the intermediate values
pub use coalesce::coalesce;
pub use lines::split_lines;
pub use myers::{bounded_edit_script, edit_distance, shortest_edit_script};
