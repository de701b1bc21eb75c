//! Strings of connected stones and their liberties.
//!
//! A group is found by an iterative flood fill from one stone, following
//! orthogonal neighbors of the same color. Both the traversal and the
//! liberty count use a visited bitmap sized to the board, so cost is bounded
//! by the number of points no matter how the stones are shaped.

use crate::board::{Board, Color};

/// A maximal set of same-colored, orthogonally connected stones.
///
/// Stones are board indices kept in ascending order, so two groups covering
/// the same points compare equal regardless of where the fill started.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Group {
    color: Color,
    stones: Vec<usize>,
}

impl Group {
    pub fn color(&self) -> Color {
        self.color
    }

    /// Member indices, ascending.
    pub fn stones(&self) -> &[usize] {
        &self.stones
    }

    pub fn len(&self) -> usize {
        self.stones.len()
    }

    /// Always false for groups produced by the board.
    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.stones.binary_search(&index).is_ok()
    }
}

/// Flood-fill the group containing the stone at `start`.
///
/// `start` must hold a `color` stone; callers check this through
/// [`Board::group_at`].
pub(crate) fn find(board: &Board, start: usize, color: Color) -> Group {
    let mut visited = vec![false; board.len()];
    let mut stack = vec![start];
    let mut stones = Vec::new();
    visited[start] = true;

    while let Some(pt) = stack.pop() {
        stones.push(pt);
        for n in board.adjacent_indices(pt) {
            if !visited[n] && board.stone_at(n) == Some(color) {
                visited[n] = true;
                stack.push(n);
            }
        }
    }

    stones.sort_unstable();
    Group { color, stones }
}

/// Count the distinct empty points touching `group`.
pub(crate) fn liberties(board: &Board, group: &Group) -> usize {
    let mut seen = vec![false; board.len()];
    let mut libs = 0;

    for &pt in group.stones() {
        for n in board.adjacent_indices(pt) {
            if board.stone_at(n).is_none() && !seen[n] {
                seen[n] = true;
                libs += 1;
            }
        }
    }
    libs
}
