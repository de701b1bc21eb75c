//! Move execution: captures, suicide, simple ko and turn order.
//!
//! A [`Game`] owns a [`Board`] and the bookkeeping around it. Every move is
//! first checked against an immutable view of the position; only a legal
//! move mutates anything, so a rejected move leaves the game exactly as it
//! was.

use derive_more::{Display, Error};
use tracing::{debug, trace};

use crate::board::{Board, BoardError, Cell, Color, Placement};
use crate::group::Group;

/// A turn: put a stone at `(x, y)`, or pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Play(i32, i32),
    Pass,
}

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Coordinate is outside the board
    #[display("illegal move: off the board")]
    OffBoard,
    /// Point is not empty
    #[display("illegal move: point not empty")]
    Occupied,
    /// Point is the active ko point
    #[display("illegal move: retakes ko")]
    KoViolation,
    /// Own group would have no liberties and nothing is captured
    #[display("illegal move: suicide")]
    Suicide,
}

/// Failure while rebuilding a game from stored moves.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ReplayError {
    #[display("{_0}")]
    Board(BoardError),
    #[display("move {index} rejected: {source}")]
    Move { index: usize, source: MoveError },
}

impl From<BoardError> for ReplayError {
    fn from(err: BoardError) -> Self {
        ReplayError::Board(err)
    }
}

/// What a successful [`Game::play_move`] did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Stones removed from the board, as placements of the captured color.
    pub captured: Vec<Placement>,
    /// Ko point left behind by this move, if any.
    pub ko: Option<(i32, i32)>,
}

/// A legal move worked out against the current position.
struct Plan {
    captures: Vec<Group>,
    ko: Option<(i32, i32)>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    captures: [usize; 2],
    to_move: Color,
    move_number: usize,
    ko: Option<(i32, i32)>,
}

impl Game {
    /// Start an empty game. Black moves first.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::new(size)?,
            captures: [0; 2],
            to_move: Color::Black,
            move_number: 0,
            ko: None,
        })
    }

    /// Rebuild a game by playing `moves` in order on an empty board.
    pub fn replay(size: usize, moves: &[Move]) -> Result<Self, ReplayError> {
        let mut game = Game::new(size)?;
        for (index, &mv) in moves.iter().enumerate() {
            game.play(mv)
                .map_err(|source| ReplayError::Move { index, source })?;
        }
        Ok(game)
    }

    /// Rebuild a game from stored stones.
    ///
    /// Stored games record stones only. A placement whose color is not the
    /// color to move is preceded by a pass for the side that is skipped.
    pub fn from_placements(size: usize, placements: &[Placement]) -> Result<Self, ReplayError> {
        let mut game = Game::new(size)?;
        for (index, p) in placements.iter().enumerate() {
            if p.color != game.to_move {
                game.pass();
            }
            game.play_move(p.x, p.y)
                .map_err(|source| ReplayError::Move { index, source })?;
        }
        Ok(game)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// Number of moves and passes played so far.
    pub fn move_number(&self) -> usize {
        self.move_number
    }

    /// Stones captured by `color`.
    pub fn captures(&self, color: Color) -> usize {
        self.captures[color.slot()]
    }

    pub fn ko_point(&self) -> Option<(i32, i32)> {
        self.ko
    }

    /// Stones on the board, in index order.
    pub fn stones(&self) -> Vec<Placement> {
        self.board.stones().collect()
    }

    pub fn play(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        match mv {
            Move::Play(x, y) => self.play_move(x, y),
            Move::Pass => {
                self.pass();
                Ok(MoveOutcome::default())
            }
        }
    }

    /// Whether the color to move may play at `(x, y)`.
    pub fn is_legal(&self, x: i32, y: i32) -> bool {
        self.plan(x, y).is_ok()
    }

    /// Play a stone of the color to move at `(x, y)`.
    pub fn play_move(&mut self, x: i32, y: i32) -> Result<MoveOutcome, MoveError> {
        let plan = match self.plan(x, y) {
            Ok(plan) => plan,
            Err(err) => {
                debug!(x, y, color = %self.to_move, %err, "move rejected");
                return Err(err);
            }
        };

        let color = self.to_move;
        let mut captured = Vec::new();
        for group in &plan.captures {
            captured.extend(group.stones().iter().map(|&i| {
                let (cx, cy) = self.board.coord(i);
                Placement::new(cx, cy, group.color())
            }));
            self.captures[color.slot()] += self.board.remove(group);
        }
        if !captured.is_empty() {
            debug!(x, y, %color, stones = captured.len(), "captured");
        }

        self.board.set(x, y, Some(color));
        self.ko = plan.ko;
        if let Some((kx, ky)) = plan.ko {
            debug!(kx, ky, "ko point set");
        }

        self.to_move = color.opponent();
        self.move_number += 1;
        trace!(x, y, %color, move_number = self.move_number, "move applied");

        Ok(MoveOutcome {
            captured,
            ko: plan.ko,
        })
    }

    /// Pass the turn. Passing lifts any ko restriction.
    pub fn pass(&mut self) {
        trace!(color = %self.to_move, "pass");
        self.to_move = self.to_move.opponent();
        self.move_number += 1;
        self.ko = None;
    }

    /// Check `(x, y)` for the color to move without touching the board.
    fn plan(&self, x: i32, y: i32) -> Result<Plan, MoveError> {
        if !self.board.contains(x, y) {
            return Err(MoveError::OffBoard);
        }
        if !self.board.get(x, y).is_empty() {
            return Err(MoveError::Occupied);
        }
        if self.ko == Some((x, y)) {
            return Err(MoveError::KoViolation);
        }

        let color = self.to_move;
        let own = Cell::from(color);
        let (north, south, east, west) = self.board.neighbors(x, y);
        let around = [north, south, east, west];
        let empty_neighbors = around.iter().filter(|c| c.is_empty()).count();
        let isolated = !around.contains(&own);

        // Groups as they stand before the stone goes down: any of them with
        // a single liberty has it at (x, y).
        let (_, groups) = self.board.group_and_neighboring_groups(x, y);
        let mut captures = Vec::new();
        let mut own_escape = false;
        for group in groups {
            let last_liberty = self.board.liberties(&group) == 1;
            if group.color() == color {
                own_escape |= !last_liberty;
            } else if last_liberty {
                captures.push(group);
            }
        }

        if captures.is_empty() && empty_neighbors == 0 && !own_escape {
            return Err(MoveError::Suicide);
        }

        // Single stone for single stone: one stone taken by a lone stone.
        let captured_stones: usize = captures.iter().map(Group::len).sum();
        let ko = if captured_stones == 1 && isolated {
            captures
                .first()
                .and_then(|g| g.stones().first())
                .map(|&i| self.board.coord(i))
        } else {
            None
        };

        Ok(Plan { captures, ko })
    }
}
