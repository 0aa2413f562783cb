//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use strictly_minimax::{Board, Strategy};

/// Strictly Minimax - perfect-play tic-tac-toe engine
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Optimal tic-tac-toe moves by exhaustive minimax", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal move for the side to move
    BestMove {
        /// Board in row-major order, e.g. "XX./O../..." ('.', '-' or '_' for empty)
        #[arg(short, long)]
        board: Board,
    },

    /// Print the game value of a board under optimal play
    Value {
        /// Board in row-major order, e.g. "XX./O../..."
        #[arg(short, long)]
        board: Board,
    },

    /// Play a full game between two agents
    Play {
        /// Path to match config (TOML)
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Agent playing X (overrides config)
        #[arg(long)]
        x: Option<Strategy>,

        /// Agent playing O (overrides config)
        #[arg(long)]
        o: Option<Strategy>,
    },
}
