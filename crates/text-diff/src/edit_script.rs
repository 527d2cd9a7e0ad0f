//! Shortest edit script (Myers' O((N+M)D) algorithm).
//!
//! [`diff`] is generic over any `PartialEq` item, so the same routine (and the same
//! tie-breaking) serves both word-level tokens and grapheme-level refinement.
//!
//! # Tie-breaking
//!
//! Several minimal scripts often exist (repeated tokens, pure replacements). The search takes
//! the deletion move whenever it reaches at least as far as the insertion move, and the
//! backtrack only steps back through the insertion predecessor when it is strictly further
//! along. In practice this means:
//!
//! - the *later* of two identical tokens is the one reported as deleted
//!   (`A A B` → `A B` keeps the first `A`);
//! - a replacement is reported as the deletion followed by the insertion.

use crate::segment::EditKind;

/// A single edit operation produced by [`diff`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation<T> {
    /// Whether `item` was kept, deleted from the original or inserted from the updated sequence.
    pub kind: EditKind,
    /// The item (taken from the original for `Equal`/`Delete`, from the updated for `Insert`).
    pub item: T,
}

impl<T> Operation<T> {
    /// Create an operation.
    pub fn new(kind: EditKind, item: T) -> Self {
        Self { kind, item }
    }
}

/// Furthest-reaching x per diagonal for one edit distance, indexed by signed diagonal.
#[derive(Debug, Clone)]
struct Frontier {
    radius: isize,
    xs: Vec<Option<isize>>,
}

impl Frontier {
    /// Frontier able to hold diagonals `-radius..=radius`.
    fn with_radius(radius: isize) -> Self {
        let len = (2 * radius + 1) as usize;
        Self {
            radius,
            xs: vec![None; len],
        }
    }

    /// The virtual frontier before distance 0: the search starts from `x = 0` on diagonal 1.
    fn seed() -> Self {
        let mut frontier = Self::with_radius(1);
        frontier.set(1, 0);
        frontier
    }

    fn slot(&self, diagonal: isize) -> Option<usize> {
        if diagonal < -self.radius || diagonal > self.radius {
            return None;
        }
        Some((diagonal + self.radius) as usize)
    }

    fn get(&self, diagonal: isize) -> Option<isize> {
        self.slot(diagonal).and_then(|slot| self.xs[slot])
    }

    fn set(&mut self, diagonal: isize, x: isize) {
        if let Some(slot) = self.slot(diagonal) {
            self.xs[slot] = Some(x);
        }
    }
}

/// Compute a minimal edit script transforming `original` into `updated`.
///
/// The result is in forward document order and is consistent with both inputs: the
/// `Equal`/`Delete` items spell out `original`, the `Equal`/`Insert` items spell out `updated`.
///
/// # Example
///
/// ```rust
/// use text_diff::EditKind;
/// use text_diff::edit_script::diff;
///
/// let ops = diff(&['a', 'b', 'c'], &['a', 'c']);
/// let kinds: Vec<EditKind> = ops.iter().map(|op| op.kind).collect();
/// assert_eq!(kinds, [EditKind::Equal, EditKind::Delete, EditKind::Equal]);
/// ```
pub fn diff<T: PartialEq + Clone>(original: &[T], updated: &[T]) -> Vec<Operation<T>> {
    if original.is_empty() {
        return updated
            .iter()
            .cloned()
            .map(|item| Operation::new(EditKind::Insert, item))
            .collect();
    }

    if updated.is_empty() {
        return original
            .iter()
            .cloned()
            .map(|item| Operation::new(EditKind::Delete, item))
            .collect();
    }

    let n = original.len() as isize;
    let m = updated.len() as isize;
    let max_distance = n + m;

    let mut frontier = Frontier::seed();
    let mut trace = vec![frontier.clone()];

    for distance in 0..=max_distance {
        let mut next = Frontier::with_radius(distance);

        for diagonal in (-distance..=distance).step_by(2) {
            let x_start = if diagonal == -distance {
                frontier.get(diagonal + 1).unwrap_or(0)
            } else if diagonal == distance {
                frontier.get(diagonal - 1).unwrap_or(-1) + 1
            } else {
                let insert_x = frontier.get(diagonal + 1).unwrap_or(-1);
                let delete_x = frontier.get(diagonal - 1).unwrap_or(-1) + 1;
                if delete_x >= insert_x {
                    delete_x
                } else {
                    insert_x
                }
            };

            let mut x = x_start;
            let mut y = x - diagonal;
            while x < n && y < m && original[x as usize] == updated[y as usize] {
                x += 1;
                y += 1;
            }

            next.set(diagonal, x);

            if x >= n && y >= m {
                tracing::trace!(distance, n, m, "edit script found");
                trace.push(next);
                return backtrack(&trace, distance, original, updated);
            }
        }

        trace.push(next.clone());
        frontier = next;
    }

    // The end point is always reached by `distance == n + m`.
    Vec::new()
}

fn backtrack<T: Clone>(
    trace: &[Frontier],
    final_distance: isize,
    original: &[T],
    updated: &[T],
) -> Vec<Operation<T>> {
    let mut x = original.len() as isize;
    let mut y = updated.len() as isize;
    let mut operations = Vec::with_capacity((x + y) as usize);

    for distance in (1..=final_distance).rev() {
        // Frontier reached after `distance - 1` edits.
        let previous = &trace[distance as usize];
        let diagonal = x - y;

        let previous_diagonal = if diagonal == -distance {
            diagonal + 1
        } else if diagonal == distance {
            diagonal - 1
        } else {
            let left_x = previous.get(diagonal - 1).unwrap_or(-1);
            let down_x = previous.get(diagonal + 1).unwrap_or(-1);
            if left_x < down_x {
                diagonal + 1
            } else {
                diagonal - 1
            }
        };

        let previous_x = previous.get(previous_diagonal).unwrap_or(0);
        let previous_y = previous_x - previous_diagonal;

        while x > previous_x && y > previous_y {
            x -= 1;
            y -= 1;
            operations.push(Operation::new(EditKind::Equal, original[x as usize].clone()));
        }

        if x == previous_x {
            y -= 1;
            operations.push(Operation::new(EditKind::Insert, updated[y as usize].clone()));
        } else {
            x -= 1;
            operations.push(Operation::new(EditKind::Delete, original[x as usize].clone()));
        }
    }

    while x > 0 && y > 0 {
        x -= 1;
        y -= 1;
        operations.push(Operation::new(EditKind::Equal, original[x as usize].clone()));
    }
    while x > 0 {
        x -= 1;
        operations.push(Operation::new(EditKind::Delete, original[x as usize].clone()));
    }
    while y > 0 {
        y -= 1;
        operations.push(Operation::new(EditKind::Insert, updated[y as usize].clone()));
    }

    operations.reverse();
    operations
}
