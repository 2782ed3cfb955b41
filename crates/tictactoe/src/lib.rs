//! Terminal front end for [`tictactoe_engine`].
//!
//! The engine decides what happened; this crate decides what to show.
//!
//! - **Config**: player names and sound from a TOML file
//! - **Presenter**: outcome to message, cue, and input state
//! - **Session**: line-oriented interactive game
//! - **Replay**: scripted games, as text or JSON lines

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod presenter;
mod replay;
mod session;

pub use config::{ConfigError, GameConfig};
pub use presenter::{Cue, Feedback, Presenter};
pub use replay::{ReplayStep, replay};
pub use session::{Input, InputError, Session};

use tictactoe_engine::TurnCoordinator;

/// Builds a coordinator seated according to `config`.
pub fn coordinator_from(config: &GameConfig) -> TurnCoordinator {
    TurnCoordinator::new(config.first_player().as_str(), config.second_player().as_str())
}
