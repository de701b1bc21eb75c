//! Go Text Protocol (GTP) front-end.
//!
//! A subset of GTP version 2 over stdin/stdout, enough to drive the rules
//! engine from a Go GUI such as Sabaki or GoGui, or from a script replaying
//! stored games.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `boardsize <size>` - Any size from 1 to 25; clears the board
//! - `clear_board`
//! - `play <color> <vertex>` - Play a move for `color`
//! - `genmove <color>` - Play a random legal move for `color`
//! - `showboard` - Print the board
//! - `captures <color>` - Stones captured by `color`
//!
//! Moves are strictly alternating. When `play` or `genmove` names the side
//! that is not to move, the other side passes first, which is how stored
//! games (which do not record passes) come back in.

use std::io::{self, BufRead, Write};

use fastrand::Rng;
use tracing::{debug, info};

use crate::board::Color;
use crate::coord::{MAX_VERTEX_SIZE, format_vertex, parse_vertex};
use crate::game::{Game, Move};
use crate::playout::random_move;

/// The list of known GTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "captures",
    "clear_board",
    "genmove",
    "known_command",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "version",
];

/// GTP engine state.
pub struct GtpEngine {
    game: Game,
    rng: Rng,
}

impl GtpEngine {
    /// Create an engine for a `size`x`size` board.
    pub fn new(size: usize, seed: Option<u64>) -> anyhow::Result<Self> {
        anyhow::ensure!(
            (1..=MAX_VERTEX_SIZE).contains(&size),
            "board size must be between 1 and {MAX_VERTEX_SIZE}, got {size}"
        );
        let rng = match seed {
            Some(seed) => Rng::with_seed(seed),
            None => Rng::new(),
        };
        Ok(Self {
            game: Game::new(size)?,
            rng,
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the GTP command loop, reading from stdin and writing to stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        info!(size = self.game.size(), "GTP session started");

        for line in stdin.lock().lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();
            debug!(%command, ?args, "gtp command");

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            write!(stdout, "{prefix}{id_str} {message}\n\n")?;
            stdout.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end == 0 {
            return (None, trimmed);
        }
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    /// Execute a GTP command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => match args.first() {
                Some(cmd) => {
                    let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                    (true, known.to_string())
                }
                None => (false, "missing argument".to_string()),
            },

            "quit" => (true, String::new()),

            "boardsize" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                match arg.parse::<usize>() {
                    Ok(size) if (1..=MAX_VERTEX_SIZE).contains(&size) => match Game::new(size) {
                        Ok(game) => {
                            self.game = game;
                            (true, String::new())
                        }
                        Err(e) => (false, e.to_string()),
                    },
                    Ok(_) => (false, "unacceptable size".to_string()),
                    Err(_) => (false, "invalid size".to_string()),
                }
            }

            "clear_board" => match Game::new(self.game.size()) {
                Ok(game) => {
                    self.game = game;
                    (true, String::new())
                }
                Err(e) => (false, e.to_string()),
            },

            "play" => {
                let [color, vertex, ..] = args else {
                    return (false, "missing arguments".to_string());
                };
                let Some(color) = parse_color(color) else {
                    return (false, "invalid color".to_string());
                };
                let mv = match parse_vertex(vertex, self.game.size()) {
                    Ok(mv) => mv,
                    Err(e) => return (false, e.to_string()),
                };
                match self.play_as(color, mv) {
                    Ok(()) => (true, String::new()),
                    Err(e) => (false, e),
                }
            }

            "genmove" => {
                let Some(color) = args.first().and_then(|c| parse_color(c)) else {
                    return (false, "invalid color".to_string());
                };
                let mut view = self.game.clone();
                if view.to_move() != color {
                    view.pass();
                }
                let mv = match random_move(&view, &mut self.rng) {
                    Some((x, y)) => Move::Play(x, y),
                    None => Move::Pass,
                };
                match self.play_as(color, mv) {
                    Ok(()) => (true, format_vertex(mv)),
                    Err(e) => (false, e),
                }
            }

            "showboard" => (true, format!("\n{}", self.game.board())),

            "captures" => match args.first().and_then(|c| parse_color(c)) {
                Some(color) => (true, self.game.captures(color).to_string()),
                None => (false, "invalid color".to_string()),
            },

            _ => (false, format!("unknown command: {command}")),
        }
    }

    /// Play `mv` for `color`, passing for the other side first if needed.
    /// A rejected move leaves the game untouched, inserted pass included.
    fn play_as(&mut self, color: Color, mv: Move) -> Result<(), String> {
        let mut next = self.game.clone();
        if next.to_move() != color {
            next.pass();
        }
        next.play(mv).map_err(|e| e.to_string())?;
        self.game = next;
        Ok(())
    }
}

fn parse_color(s: &str) -> Option<Color> {
    match s.to_lowercase().as_str() {
        "b" | "black" => Some(Color::Black),
        "w" | "white" => Some(Color::White),
        _ => None,
    }
}
