//! Square Go board with stone storage and neighbor queries.
//!
//! Points are addressed by signed `(x, y)` coordinates. Reads outside the
//! board never panic: they report [`Cell::Edge`]. Internally the grid is a
//! dense `Vec<Option<Color>>` indexed by `x + y * size`, so an edge value can
//! never end up in storage.
//!
//! Orientation: north is `y + 1`, east is `x + 1`. Row `y = 0` is printed
//! last by the [`Display`](fmt::Display) impl, matching a diagram with the
//! first line of the board at the bottom.

use std::fmt;

use derive_more::{Display, Error};

use crate::group::{self, Group};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Slot used for per-color tables such as capture counters.
    pub(crate) fn slot(self) -> usize {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("black"),
            Color::White => f.write_str("white"),
        }
    }
}

/// What a board query sees at a coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
    /// Off the board. Only ever returned by queries, never stored.
    Edge,
}

impl Cell {
    pub fn stone(self) -> Option<Color> {
        match self {
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
            Cell::Empty | Cell::Edge => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Option<Color>> for Cell {
    fn from(stone: Option<Color>) -> Self {
        match stone {
            Some(Color::Black) => Cell::Black,
            Some(Color::White) => Cell::White,
            None => Cell::Empty,
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        Cell::from(Some(color))
    }
}

/// A stone on the board: the persisted form of a move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

impl Placement {
    pub fn new(x: i32, y: i32, color: Color) -> Self {
        Self { x, y, color }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    #[display("board size must be at least 1")]
    ZeroSize,
    #[display("board size {_0} is too large")]
    TooLarge(#[error(not(source))] usize),
}

/// Returned by [`Board::group_at`] when the point holds no stone.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("no stone at ({x}, {y}): found {cell:?}")]
pub struct NotAStone {
    pub x: i32,
    pub y: i32,
    pub cell: Cell,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Color>>,
}

impl Board {
    /// Empty board of `size`x`size`.
    ///
    /// Coordinates are `i32`, so the side may not exceed `i32::MAX`.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::ZeroSize);
        }
        let area = size
            .checked_mul(size)
            .filter(|_| i32::try_from(size).is_ok())
            .ok_or(BoardError::TooLarge(size))?;
        Ok(Self {
            size,
            cells: vec![None; area],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `(x, y)` lies on the board.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    /// Flat index of an on-board coordinate.
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.contains(x, y)
            .then(|| x as usize + y as usize * self.size)
    }

    /// Inverse of [`Board::index`]. Indices past the end map off the board.
    pub fn coord(&self, index: usize) -> (i32, i32) {
        let to_i32 = |v: usize| i32::try_from(v).unwrap_or(i32::MAX);
        (to_i32(index % self.size), to_i32(index / self.size))
    }

    pub fn get(&self, x: i32, y: i32) -> Cell {
        match self.index(x, y) {
            Some(i) => Cell::from(self.cells[i]),
            None => Cell::Edge,
        }
    }

    /// Store a stone (or clear the point with `None`).
    ///
    /// The caller validates the coordinate; writes off the board are ignored.
    pub fn set(&mut self, x: i32, y: i32, stone: Option<Color>) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = stone;
        }
    }

    /// The four adjacent cells as `(north, south, east, west)`.
    pub fn neighbors(&self, x: i32, y: i32) -> (Cell, Cell, Cell, Cell) {
        let [north, south, east, west] = adjacent(x, y).map(|(nx, ny)| self.get(nx, ny));
        (north, south, east, west)
    }

    /// Group containing the stone at `(x, y)`.
    pub fn group_at(&self, x: i32, y: i32) -> Result<Group, NotAStone> {
        let cell = self.get(x, y);
        match (cell.stone(), self.index(x, y)) {
            (Some(color), Some(i)) => Ok(group::find(self, i, color)),
            _ => Err(NotAStone { x, y, cell }),
        }
    }

    /// The group at `(x, y)` if any, plus every distinct group touching it.
    ///
    /// A neighboring group reached through several directions is reported
    /// once. The group at the point itself is never repeated among the
    /// neighbors.
    pub fn group_and_neighboring_groups(&self, x: i32, y: i32) -> (Option<Group>, Vec<Group>) {
        let own = self.group_at(x, y).ok();
        let mut neighbors: Vec<Group> = Vec::with_capacity(4);

        for (nx, ny) in adjacent(x, y) {
            let Some(i) = self.index(nx, ny) else {
                continue;
            };
            let Some(color) = self.cells[i] else {
                continue;
            };
            let seen = own.iter().chain(neighbors.iter()).any(|g| g.contains(i));
            if !seen {
                neighbors.push(group::find(self, i, color));
            }
        }

        (own, neighbors)
    }

    pub fn liberties(&self, group: &Group) -> usize {
        group::liberties(self, group)
    }

    /// Clear every stone of `group`; returns how many were removed.
    ///
    /// Only points that are on this board and hold the group's color are
    /// cleared, so a group taken from another board cannot corrupt this one.
    pub fn remove(&mut self, group: &Group) -> usize {
        let mut removed = 0;
        for &i in group.stones() {
            if let Some(cell) = self.cells.get_mut(i) {
                if *cell == Some(group.color()) {
                    *cell = None;
                    removed += 1;
                }
            }
        }
        removed
    }

    /// Every stone currently on the board, in index order.
    pub fn stones(&self) -> impl Iterator<Item = Placement> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, stone)| {
            stone.map(|color| {
                let (x, y) = self.coord(i);
                Placement::new(x, y, color)
            })
        })
    }

    pub(crate) fn stone_at(&self, index: usize) -> Option<Color> {
        self.cells[index]
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    /// On-board indices orthogonally adjacent to `index`.
    pub(crate) fn adjacent_indices(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        let (x, y) = self.coord(index);
        adjacent(x, y)
            .into_iter()
            .filter_map(move |(nx, ny)| self.index(nx, ny))
    }
}

/// Coordinates of the four orthogonal neighbors, `(north, south, east, west)`.
///
/// All adjacency in the crate goes through here. Working on `(x, y)` rather
/// than flat indices keeps `x = 0` and `x = size - 1` from wrapping onto the
/// neighboring row. At the `i32` limits the result saturates, which still
/// lands off the board.
fn adjacent(x: i32, y: i32) -> [(i32, i32); 4] {
    [
        (x, y.saturating_add(1)),
        (x, y.saturating_sub(1)),
        (x.saturating_add(1), y),
        (x.saturating_sub(1), y),
    ]
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.size as i32).rev() {
            for x in 0..self.size as i32 {
                let ch = match self.get(x, y) {
                    Cell::Black => 'X',
                    Cell::White => 'O',
                    Cell::Empty | Cell::Edge => '.',
                };
                if x > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(Board::new(0), Err(BoardError::ZeroSize));
    }

    #[test]
    fn test_oversized_board_rejected() {
        assert_eq!(Board::new(usize::MAX), Err(BoardError::TooLarge(usize::MAX)));
        let wide = i32::MAX as usize + 1;
        assert_eq!(Board::new(wide), Err(BoardError::TooLarge(wide)));
    }

    #[test]
    fn test_out_of_range_is_edge() {
        let board = Board::new(5).unwrap();
        for &(x, y) in &[(-1, 0), (0, -1), (5, 0), (0, 5), (-3, 9), (i32::MAX, 2)] {
            assert_eq!(board.get(x, y), Cell::Edge, "({x}, {y}) should be edge");
        }
        let (north, south, east, west) = board.neighbors(i32::MAX, i32::MIN);
        assert!([north, south, east, west].iter().all(|&c| c == Cell::Edge));
        assert_eq!(board.get(4, 4), Cell::Empty);
    }

    #[test]
    fn test_index_bijection() {
        let board = Board::new(7).unwrap();
        for y in 0..7 {
            for x in 0..7 {
                let i = board.index(x, y).unwrap();
                assert_eq!(i, (x + y * 7) as usize);
                assert_eq!(board.coord(i), (x, y));
            }
        }
        assert_eq!(board.index(7, 0), None);
    }

    #[test]
    fn test_neighbors_at_row_ends() {
        // (4, 1) and (0, 2) are adjacent in flat index space but not on the board
        let mut board = Board::new(5).unwrap();
        board.set(0, 2, Some(Color::White));
        board.set(4, 1, Some(Color::Black));

        let (_, _, east, _) = board.neighbors(4, 1);
        assert_eq!(east, Cell::Edge);
        let (_, _, _, west) = board.neighbors(0, 2);
        assert_eq!(west, Cell::Edge);

        let (north, south, east, west) = board.neighbors(0, 0);
        assert_eq!((north, south, east, west), (Cell::Empty, Cell::Edge, Cell::Empty, Cell::Edge));
    }

    #[test]
    fn test_group_at_empty_fails() {
        let board = Board::new(5).unwrap();
        let err = board.group_at(1, 1).unwrap_err();
        assert_eq!(err.cell, Cell::Empty);
        let err = board.group_at(-1, 1).unwrap_err();
        assert_eq!(err.cell, Cell::Edge);
    }

    #[test]
    fn test_neighboring_groups_deduplicated() {
        // A white stone at (1, 1) wrapped by one black string touching it twice
        let mut board = Board::new(5).unwrap();
        for &(x, y) in &[(0, 1), (0, 2), (1, 2)] {
            board.set(x, y, Some(Color::Black));
        }
        board.set(1, 1, Some(Color::White));
        board.set(2, 1, Some(Color::White));

        let (own, neighbors) = board.group_and_neighboring_groups(1, 1);
        let own = own.unwrap();
        assert_eq!(own.color(), Color::White);
        assert_eq!(own.len(), 2);
        assert_eq!(neighbors.len(), 1);
        assert_eq!(neighbors[0].color(), Color::Black);
        assert_eq!(neighbors[0].len(), 3);

        let (own, neighbors) = board.group_and_neighboring_groups(1, 0);
        assert!(own.is_none());
        assert_eq!(neighbors.len(), 1);
    }

    #[test]
    fn test_liberties_shared_counted_once() {
        let mut board = Board::new(5).unwrap();
        board.set(1, 1, Some(Color::Black));
        board.set(2, 1, Some(Color::Black));
        let group = board.group_at(1, 1).unwrap();
        assert_eq!(board.liberties(&group), 6);

        board.set(0, 0, Some(Color::White));
        let corner = board.group_at(0, 0).unwrap();
        assert_eq!(board.liberties(&corner), 2);
    }

    #[test]
    fn test_remove_returns_count() {
        let mut board = Board::new(5).unwrap();
        board.set(3, 3, Some(Color::White));
        board.set(3, 4, Some(Color::White));
        let group = board.group_at(3, 3).unwrap();
        assert_eq!(board.remove(&group), 2);
        assert_eq!(board.get(3, 3), Cell::Empty);
        assert_eq!(board.get(3, 4), Cell::Empty);
        assert_eq!(board.stones().count(), 0);
    }

    #[test]
    fn test_remove_group_from_other_board() {
        let mut big = Board::new(7).unwrap();
        big.set(6, 6, Some(Color::Black));
        big.set(2, 0, Some(Color::Black));
        let far = big.group_at(6, 6).unwrap();
        let near = big.group_at(2, 0).unwrap();

        let mut board = Board::new(5).unwrap();
        board.set(2, 0, Some(Color::White));
        assert_eq!(board.remove(&far), 0);
        // Index 2 holds a white stone here, not the group's black one
        assert_eq!(board.remove(&near), 0);
        assert_eq!(board.get(2, 0), Cell::White);
        let (x, y) = board.coord(usize::MAX);
        assert!(!board.contains(x, y));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(3).unwrap();
        board.set(0, 0, Some(Color::Black));
        board.set(2, 2, Some(Color::White));
        assert_eq!(board.to_string(), ". . O\n. . .\nX . .\n");
    }
}
