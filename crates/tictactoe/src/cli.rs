//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe for two players sharing a terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (player names, sound)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play an interactive game
    Play {
        /// Never ring the terminal bell
        #[arg(short, long)]
        quiet: bool,
    },

    /// Replay a sequence of cells (e.g. `00 11 01`) on a fresh board
    Replay {
        /// Cell identifiers, row then column
        #[arg(required = true)]
        cells: Vec<String>,

        /// Print one JSON object per placement
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// The chosen command, `play` when none was given.
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Play { quiet: false })
    }
}
