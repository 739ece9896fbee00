//! Shortest edit script (Myers, O((N+M)·D)).
//!
//! The forward pass keeps a snapshot of the furthest-reaching table `V` for
//! every depth so the path can be rebuilt by walking the snapshots backwards.
//! Diagonal `k` is `x - y`, where `x` indexes the original sequence and `y`
//! the modified one.

#![allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]

use crate::types::EditOp;

/// `V` snapshots, one per depth, taken before that depth is explored.
///
/// Snapshot `d` only holds diagonals `-(d+1)..=d+1`, the ones backtracking
/// can read at that depth, so the whole trace is O(D²).
type Trace = Vec<Vec<isize>>;

/// Compute a minimal edit script turning `original` into `modified`.
///
/// Among several minimal scripts, a replaced block comes out as its
/// `Remove` steps followed by its `Insert` steps.
///
/// # Example
///
/// ```rust,ignore
/// use omni_diff::{shortest_edit_script, EditOp};
///
/// let script = shortest_edit_script(&["a", "b"], &["a", "c"]);
/// assert_eq!(script[1], EditOp::Remove { original: 1 });
/// assert_eq!(script[2], EditOp::Insert { modified: 1 });
/// ```
#[must_use]
pub fn shortest_edit_script<T: PartialEq>(original: &[T], modified: &[T]) -> Vec<EditOp> {
    // An unbounded search always reaches (N, M) by depth N + M.
    bounded_edit_script(original, modified, usize::MAX).unwrap_or_default()
}

/// Like [`shortest_edit_script`], but stop once the edit distance would
/// exceed `max_distance`.
///
/// Returns `None` when the documents are further apart than `max_distance`.
#[must_use]
pub fn bounded_edit_script<T: PartialEq>(
    original: &[T],
    modified: &[T],
    max_distance: usize,
) -> Option<Vec<EditOp>> {
    let trace = forward(original, modified, max_distance)?;
    Some(backtrack(&trace, original.len(), modified.len()))
}

/// Number of `Insert` and `Remove` steps in a minimal script.
#[must_use]
pub fn edit_distance<T: PartialEq>(original: &[T], modified: &[T]) -> usize {
    forward(original, modified, usize::MAX).map_or(0, |trace| trace.len() - 1)
}

/// Offset that maps diagonal `k` in `-(N+M)-1..=N+M+1` onto a `V` index.
fn offset(n: usize, m: usize) -> isize {
    (n + m) as isize + 1
}

fn forward<T: PartialEq>(a: &[T], b: &[T], limit: usize) -> Option<Trace> {
    let n = a.len() as isize;
    let m = b.len() as isize;
    let max = a.len() + b.len();
    let offset = offset(a.len(), b.len());

    let mut v = vec![0isize; 2 * max + 3];
    let mut trace = Trace::new();

    for d in 0..=max.min(limit) {
        let d = d as isize;
        let window = (offset - d - 1) as usize..=(offset + d + 1) as usize;
        trace.push(v[window].to_vec());

        for k in (-d..=d).step_by(2) {
            let idx = (k + offset) as usize;

            let mut x = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
                v[idx + 1]
            } else {
                v[idx - 1] + 1
            };
            let mut y = x - k;

            while x < n && y < m && a[x as usize] == b[y as usize] {
                x += 1;
                y += 1;
            }

            v[idx] = x;

            if x >= n && y >= m {
                return Some(trace);
            }
        }
    }

    None
}

fn backtrack(trace: &Trace, n: usize, m: usize) -> Vec<EditOp> {
    let mut x = n as isize;
    let mut y = m as isize;
    let mut ops = Vec::with_capacity(n + m);

    for (d, v) in trace.iter().enumerate().rev() {
        let d = d as isize;
        // Snapshot `d` starts at diagonal -(d+1).
        let at = |k: isize| v[(k + d + 1) as usize];
        let k = x - y;

        let prev_k = if k == -d || (k != d && at(k - 1) < at(k + 1)) {
            k + 1
        } else {
            k - 1
        };
        let prev_x = at(prev_k);
        let prev_y = prev_x - prev_k;

        while x > prev_x && y > prev_y {
            x -= 1;
            y -= 1;
            ops.push(EditOp::Keep {
                original: x as usize,
                modified: y as usize,
            });
        }

        if d > 0 {
            if x == prev_x {
                ops.push(EditOp::Insert {
                    modified: (y - 1) as usize,
                });
            } else {
                ops.push(EditOp::Remove {
                    original: (x - 1) as usize,
                });
            }
        }

        x = prev_x;
        y = prev_y;
    }

    ops.reverse();
    ops
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_empty() {
        let empty: [&str; 0] = [];
        assert!(shortest_edit_script(&empty, &empty).is_empty());
        assert_eq!(edit_distance(&empty, &empty), 0);
    }

    #[test]
    fn test_replacement_orders_remove_first() {
        let script = shortest_edit_script(&["a"], &["b"]);
        assert_eq!(
            script,
            vec![EditOp::Remove { original: 0 }, EditOp::Insert { modified: 0 }]
        );
    }

    #[test]
    fn test_bounded_gives_up() {
        let a = ["a", "b", "c"];
        let b = ["x", "y", "z"];
        assert!(bounded_edit_script(&a, &b, 5).is_none());
        assert!(bounded_edit_script(&a, &b, 6).is_some());
    }

    #[test]
    fn test_trace_keeps_only_reachable_diagonals() {
        let a: Vec<usize> = (0..1_000).collect();
        let mut b = a.clone();
        b[10] = usize::MAX;
        b[500] = usize::MAX;

        let trace = forward(&a, &b, usize::MAX).expect("Unbounded search finishes");

        assert_eq!(trace.len(), 5);
        for (d, snapshot) in trace.iter().enumerate() {
            assert_eq!(snapshot.len(), 2 * d + 3);
        }
        assert_eq!(shortest_edit_script(&a, &b).len(), 1_002);
    }

    #[test]
    fn test_classic_example() {
        // ABCABBA -> CBABAC has edit distance 5.
        let a: Vec<char> = "ABCABBA".chars().collect();
        let b: Vec<char> = "CBABAC".chars().collect();
        assert_eq!(edit_distance(&a, &b), 5);
        let script = shortest_edit_script(&a, &b);
        assert_eq!(script.iter().filter(|op| op.is_edit()).count(), 5);
    }
}
