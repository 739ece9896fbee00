//! Range coalescing.
//!
//! Folds an edit script into the ranges an editor can decorate. The editor
//! can only paint lines that exist in the modified document, so a pure
//! deletion becomes a `Delete` marker on the first surviving line after the
//! removed block (or on the last line when the block ran to end of file).

use crate::types::{DiffKind, DiffRange, EditOp};

/// Coalesce an edit script into ascending, 1-based change ranges.
///
/// - `Remove` run followed by an `Insert` run → `Modify` over the inserts
/// - `Remove` run alone → `Delete` at its anchor line
/// - `Insert` run alone → `Add` over the inserts
///
/// Two pure deletions that anchor to the same line yield one `Delete`.
#[must_use]
pub fn coalesce(script: &[EditOp]) -> Vec<DiffRange> {
    let modified_len = script
        .iter()
        .filter(|op| op.modified_index().is_some())
        .count();

    let mut ranges: Vec<DiffRange> = Vec::new();
    let mut i = 0;

    while i < script.len() {
        match script[i] {
            EditOp::Keep { .. } => i += 1,
            EditOp::Remove { .. } => {
                let removed_end = run_end(script, i, |op| matches!(op, EditOp::Remove { .. }));

                if let Some(EditOp::Insert { modified }) = script.get(removed_end) {
                    let inserted_end = run_end(script, removed_end, is_insert);
                    ranges.push(DiffRange::new(
                        DiffKind::Modify,
                        modified + 1,
                        last_modified_line(script, inserted_end),
                    ));
                    i = inserted_end;
                } else {
                    let anchor = anchor_line(script, removed_end, modified_len);
                    let duplicate = ranges
                        .last()
                        .is_some_and(|r| r.kind == DiffKind::Delete && r.start_line == anchor);
                    if !duplicate {
                        ranges.push(DiffRange::new(DiffKind::Delete, anchor, anchor));
                    }
                    i = removed_end;
                }
            }
            EditOp::Insert { modified } => {
                let inserted_end = run_end(script, i, is_insert);
                ranges.push(DiffRange::new(
                    DiffKind::Add,
                    modified + 1,
                    last_modified_line(script, inserted_end),
                ));
                i = inserted_end;
            }
        }
    }

    ranges
}

fn is_insert(op: &EditOp) -> bool {
    matches!(op, EditOp::Insert { .. })
}

/// Index one past the run starting at `start` whose ops satisfy `pred`.
fn run_end(script: &[EditOp], start: usize, pred: impl Fn(&EditOp) -> bool) -> usize {
    script[start..]
        .iter()
        .position(|op| !pred(op))
        .map_or(script.len(), |len| start + len)
}

/// 1-based modified line of the last op in a non-empty insert run ending at `end`.
fn last_modified_line(script: &[EditOp], end: usize) -> usize {
    script[end - 1].modified_index().map_or(0, |idx| idx + 1)
}

/// Line a deletion ending at `next` is attached to.
fn anchor_line(script: &[EditOp], next: usize, modified_len: usize) -> usize {
    script[next..]
        .iter()
        .find_map(EditOp::modified_index)
        .map_or(modified_len.max(1), |idx| idx + 1)
}
