//! Shobu in the terminal.
//!
//! Seats a human or a computer player on each side and runs the prompt loop
//! on stdin/stdout. Settings come from `shobu.toml`; flags override them.

mod config;
mod player;
mod session;

use clap::Parser;
use config::{PlayerKind, ShobuConfig};
use player::Player;
use session::Session;
use shobu_core::Color;
use shobu_engine::{Board, Game};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Play Shobu against a human or a computer opponent.
#[derive(Parser)]
#[command(name = "shobu")]
#[command(about = "Play Shobu in the terminal")]
struct Args {
    /// Path to the configuration file
    #[arg(long, default_value_os_t = ShobuConfig::default_path())]
    config: PathBuf,

    /// Who plays Black
    #[arg(long, value_enum)]
    black: Option<PlayerKind>,

    /// Who plays White
    #[arg(long, value_enum)]
    white: Option<PlayerKind>,

    /// Seed for computer players
    #[arg(long)]
    seed: Option<u64>,

    /// Do not print the board before each turn
    #[arg(long)]
    no_board: bool,

    /// Log filter, e.g. "debug" or "shobu_engine=debug"
    #[arg(long)]
    log_level: Option<String>,

    /// Start from a custom board: four grids like "XXXX/----/----/OOOO"
    /// in the order topLeft topRight botLeft botRight
    #[arg(long)]
    layout: Option<String>,

    /// Side to move when starting from --layout
    #[arg(long, default_value = "black", value_parser = parse_color)]
    to_move: Color,
}

fn parse_color(text: &str) -> Result<Color, String> {
    match text.to_ascii_lowercase().as_str() {
        "black" => Ok(Color::Black),
        "white" => Ok(Color::White),
        _ => Err(format!("'{text}' is not a color (black or white)")),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = ShobuConfig::load(&args.config)?;
    if let Some(black) = args.black {
        config.players.black = black;
    }
    if let Some(white) = args.white {
        config.players.white = white;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.no_board {
        config.show_board = false;
    }
    if let Some(level) = args.log_level {
        config.log_level = level;
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(config = ?args.config, ?config, "configuration loaded");

    let game = match args.layout {
        Some(layout) => Game::from_board(Board::from_layout(&layout)?, args.to_move),
        None => Game::new(),
    };

    let black = Player::new(config.players.black, Color::Black, config.seed);
    let white = Player::new(config.players.white, Color::White, config.seed);
    let mut session = Session::new(game, black, white, config.show_board);

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    let result = session.run(&mut input, &mut output)?;
    tracing::info!(
        turns = session.game().turn_count(),
        finished = result.is_some(),
        "session over"
    );
    Ok(())
}
