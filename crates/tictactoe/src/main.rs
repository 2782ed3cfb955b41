//! tictactoe - two players, one terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io;
use tictactoe::cli::{Cli, Command};
use tictactoe::{GameConfig, Presenter, Session, coordinator_from, replay};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = GameConfig::load(&cli.config)?;

    match cli.command() {
        Command::Play { quiet } => run_play(config, quiet),
        Command::Replay { cells, json } => run_replay(config, &cells, json),
    }
}

/// Logs go to stderr so they never interleave with the board.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,tictactoe=info")),
        )
        .with_writer(io::stderr)
        .init();
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: GameConfig, quiet: bool) -> Result<()> {
    let config = if quiet { config.muted() } else { config };
    info!(sound = *config.sound(), "Starting interactive session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(
        coordinator_from(&config),
        Presenter::new(*config.sound()),
        stdin.lock(),
        stdout.lock(),
    );
    session.run()
}

/// Replay cells given on the command line
#[instrument(skip(config))]
fn run_replay(config: GameConfig, cells: &[String], json: bool) -> Result<()> {
    let mut game = coordinator_from(&config);
    let presenter = Presenter::new(false);
    let mut stdout = io::stdout().lock();
    replay(&mut game, &presenter, cells, json, &mut stdout)?;
    Ok(())
}
