//! Tengen: Go rules engine.
//!
//! ## Usage
//!
//! - `tengen gtp` - Start a GTP session on stdin/stdout
//! - `tengen demo` - Play a random game and print the result
//! - `tengen replay --size 9 D4 E5 pass C3` - Replay moves and print the board

use anyhow::Context;
use clap::{Parser, Subcommand};
use fastrand::Rng;
use tracing_subscriber::EnvFilter;

use tengen::board::Color;
use tengen::coord::parse_vertex;
use tengen::game::Game;
use tengen::gtp::GtpEngine;
use tengen::playout::self_play;

/// Tengen: Go move legality, captures and ko
#[derive(Parser)]
#[command(name = "tengen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GTP (Go Text Protocol) server for use with GUI applications
    Gtp {
        /// Board size
        #[arg(long, default_value_t = 19)]
        size: usize,
        /// Seed for genmove; random if omitted
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play a random game and print the final position
    Demo {
        /// Board size
        #[arg(long, default_value_t = 9)]
        size: usize,
        /// Seed for the random game; random if omitted
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Replay a sequence of vertices (alternating, Black first) and print the board
    Replay {
        /// Board size
        #[arg(long, default_value_t = 19)]
        size: usize,
        /// Moves such as D4 or pass
        moves: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Gtp { size, seed }) => {
            let mut engine = GtpEngine::new(size, seed)?;
            engine.run()?;
        }
        Some(Commands::Replay { size, moves }) => run_replay(size, &moves)?,
        Some(Commands::Demo { size, seed }) => run_demo(size, seed)?,
        None => run_demo(9, None)?,
    }
    Ok(())
}

/// Log to stderr so stdout stays clean for GTP.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .init();
}

fn run_demo(size: usize, seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = match seed {
        Some(seed) => Rng::with_seed(seed),
        None => Rng::new(),
    };
    let mut game = Game::new(size)?;
    let moves = self_play(&mut game, &mut rng);

    println!("Tengen: random game on {size}x{size}\n");
    print_summary(&game);
    println!("Moves played: {}", moves.len());
    Ok(())
}

fn run_replay(size: usize, vertices: &[String]) -> anyhow::Result<()> {
    let moves = vertices
        .iter()
        .map(|v| parse_vertex(v, size))
        .collect::<Result<Vec<_>, _>>()?;
    let game = Game::replay(size, &moves).context("replay failed")?;
    print_summary(&game);
    Ok(())
}

fn print_summary(game: &Game) {
    println!("{}", game.board());
    println!("Move: {}", game.move_number());
    println!("To move: {}", game.to_move());
    println!("Black captures: {}", game.captures(Color::Black));
    println!("White captures: {}", game.captures(Color::White));
    if let Some((x, y)) = game.ko_point() {
        println!("Ko: ({x}, {y})");
    }
}
