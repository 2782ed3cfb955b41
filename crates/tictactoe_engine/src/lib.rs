//! Tic-tac-toe game engine.
//!
//! A 3x3 board with placement validation and win/draw detection, plus a turn
//! coordinator that decides whose symbol goes next and carries the two
//! players' labels. The engine never renders anything: every placement
//! returns a [`PlacementOutcome`] value and a presentation layer decides
//! what to show.
//!
//! # Architecture
//!
//! - **Board**: cell grid, placement rules, localized win detection
//! - **TurnCoordinator**: turn parity, player names and tallies
//! - **Invariants**: composable consistency checks, asserted in debug builds
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Line, PlacementOutcome, Symbol, TerminalState, TurnCoordinator};
//!
//! # fn main() -> Result<(), tictactoe_engine::EngineError> {
//! let mut game = TurnCoordinator::new("Ada", "Grace");
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2)] {
//!     game.place_piece(row, col)?;
//! }
//! let outcome = game.place_piece(0, 2)?;
//! assert_eq!(
//!     outcome,
//!     PlacementOutcome::Accepted(TerminalState::Win(Symbol::X, Line::Row0))
//! );
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod coordinator;
mod error;
mod invariants;
mod line;
mod types;

pub use board::{Board, GameResult, PlacementOutcome, Rejection, TerminalState};
pub use coordinator::{GamePhase, Player, PlayerSlot, Tally, TurnCoordinator};
pub use error::EngineError;
pub use invariants::{
    AlternatingSymbols, BoardInvariants, CoordinatorInvariants, Invariant, InvariantSet,
    InvariantViolation, PlacedCountMatchesCells, WinningLineFormed,
};
pub use line::Line;
pub use types::{BOARD_SIZE, CELL_COUNT, Cell, Coord, Symbol};
