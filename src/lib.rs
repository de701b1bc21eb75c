//! Tengen: the rules core of a Go server.
//!
//! This crate decides whether a move is legal and what it does: it keeps a
//! grid of stones, finds connected groups and their liberties, removes
//! captured groups, and enforces the suicide and simple ko rules.
//!
//! ## Modules
//!
//! - [`board`] - Stone storage and neighbor queries
//! - [`group`] - Connected groups (strings) and liberty counting
//! - [`game`] - Move execution, captures, ko and turn order
//! - [`coord`] - GTP vertex notation (`"D4"`, `"pass"`)
//! - [`playout`] - Random legal moves and random self-play
//! - [`gtp`] - Go Text Protocol front-end
//!
//! ## Example
//!
//! ```
//! use tengen::board::{Cell, Color};
//! use tengen::game::Game;
//!
//! let mut game = Game::new(5).unwrap();
//! game.play_move(0, 0).unwrap(); // Black
//! game.play_move(1, 0).unwrap(); // White
//! game.pass(); // Black
//! let outcome = game.play_move(0, 1).unwrap(); // White captures
//!
//! assert_eq!(outcome.captured.len(), 1);
//! assert_eq!(game.board().get(0, 0), Cell::Empty);
//! assert_eq!(game.captures(Color::White), 1);
//! ```

pub mod board;
pub mod coord;
pub mod game;
pub mod group;
pub mod gtp;
pub mod playout;
