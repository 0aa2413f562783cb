//! Strictly Minimax - command-line driver
//!
//! Queries the engine for moves and values, or runs self-play matches.
//! Results are printed to stdout as JSON; logs go to stderr.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use serde::Serialize;
use strictly_minimax::{Board, MatchConfig, Minimax, Player, Strategy, play_match, rules};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::BestMove { board } => run_best_move(board),
        Command::Value { board } => run_value(board),
        Command::Play { config, x, o } => run_play(config, x, o),
    }
}

/// Value report for a single board.
#[derive(Debug, Serialize)]
struct ValueReport {
    board: Board,
    player: Player,
    value: i8,
    terminal: bool,
}

/// Print the optimal move for the side to move
#[instrument(skip(board))]
fn run_best_move(board: Board) -> Result<()> {
    check_board(&board);
    let decision = Minimax::new().decide(&board);
    info!(action = ?decision.action, nodes = decision.nodes, "Best move found");
    println!("{}", serde_json::to_string_pretty(&decision)?);
    Ok(())
}

/// Print the game value of a board
#[instrument(skip(board))]
fn run_value(board: Board) -> Result<()> {
    check_board(&board);
    let mut search = Minimax::new();
    let report = ValueReport {
        board,
        player: rules::player(&board),
        value: search.value(&board),
        terminal: rules::terminal(&board),
    };
    info!(value = report.value, nodes = search.nodes(), "Board evaluated");
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Play a full game between two agents
#[instrument]
fn run_play(
    config: Option<std::path::PathBuf>,
    x: Option<Strategy>,
    o: Option<Strategy>,
) -> Result<()> {
    let config = match config {
        Some(path) => MatchConfig::from_file(&path)
            .with_context(|| format!("Loading match config {}", path.display()))?,
        None => MatchConfig::default(),
    }
    .with_x(x)
    .with_o(o);

    info!(name = %config.name(), x = %config.x(), o = %config.o(), "Starting self-play");

    let mut player_x = config.x().agent(format!("{} (X)", config.x()));
    let mut player_o = config.o().agent(format!("{} (O)", config.o()));
    let record = play_match(&mut *player_x, &mut *player_o)?;

    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

/// Warns when the mark counts could not come from alternating play.
fn check_board(board: &Board) {
    if !board.is_consistent() {
        warn!(%board, "Board is not reachable by legal play; results may be meaningless");
    }
}
