//! Random legal play.
//!
//! Picks uniformly among legal moves for the side to move, skipping points
//! that would fill one of its own eyes, and plays whole games that way.
//! Used by `genmove` in the GTP front-end and by the self-play checks in
//! the test suite.

use fastrand::Rng;

use crate::board::Cell;
use crate::game::{Game, Move};

/// Upper bound on the length of a random game: three times the board area,
/// which leaves room for captures and refilling.
pub fn max_game_len(size: usize) -> usize {
    size * size * 3
}

/// Whether every on-board neighbor of `(x, y)` is a stone of the side to move.
///
/// This can be true for false eyes too; random play does not need better.
pub fn is_own_eyeish(game: &Game, x: i32, y: i32) -> bool {
    let own = Cell::from(game.to_move());
    let (north, south, east, west) = game.board().neighbors(x, y);
    [north, south, east, west]
        .into_iter()
        .all(|c| c == own || c == Cell::Edge)
}

/// Choose a random legal move that does not fill an own eye.
///
/// Returns `None` when no such move exists; the caller should pass.
pub fn random_move(game: &Game, rng: &mut Rng) -> Option<(i32, i32)> {
    let size = game.size() as i32;
    let mut candidates: Vec<(i32, i32)> = (0..size)
        .flat_map(|y| (0..size).map(move |x| (x, y)))
        .filter(|&(x, y)| game.board().get(x, y).is_empty() && !is_own_eyeish(game, x, y))
        .collect();

    rng.shuffle(&mut candidates);
    candidates.into_iter().find(|&(x, y)| game.is_legal(x, y))
}

/// Play random moves until both sides pass in a row or the length limit
/// is reached. Returns the moves played, passes included.
pub fn self_play(game: &mut Game, rng: &mut Rng) -> Vec<Move> {
    let limit = max_game_len(game.size());
    let mut moves = Vec::new();
    let mut passes = 0;

    while passes < 2 && moves.len() < limit {
        let mv = match random_move(game, rng) {
            Some((x, y)) => Move::Play(x, y),
            None => Move::Pass,
        };
        // random_move only returns legal points
        if game.play(mv).is_err() {
            break;
        }
        passes = if mv == Move::Pass { passes + 1 } else { 0 };
        moves.push(mv);
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_move_is_legal() {
        let mut rng = Rng::with_seed(7);
        let mut game = Game::new(9).unwrap();
        for _ in 0..40 {
            match random_move(&game, &mut rng) {
                Some((x, y)) => {
                    assert!(game.play_move(x, y).is_ok(), "({x}, {y}) should be legal");
                }
                None => game.pass(),
            }
        }
    }

    #[test]
    fn test_random_move_avoids_own_eye() {
        // Black owns the corner point (0, 0)
        let mut game = Game::new(2).unwrap();
        game.play_move(1, 0).unwrap();
        game.pass();
        game.play_move(0, 1).unwrap();
        game.pass();
        assert!(is_own_eyeish(&game, 0, 0));
        assert!(is_own_eyeish(&game, 1, 1));
        let mut rng = Rng::with_seed(1);
        assert_eq!(random_move(&game, &mut rng), None);
    }

    #[test]
    fn test_self_play_terminates() {
        let mut rng = Rng::with_seed(42);
        let mut game = Game::new(5).unwrap();
        let moves = self_play(&mut game, &mut rng);
        assert!(!moves.is_empty());
        assert!(moves.len() <= max_game_len(5));
        assert_eq!(game.move_number(), moves.len());
    }
}
