//! Turn coordination and player labels.
//!
//! The coordinator never stores whose turn it is: X moves when the placed
//! count is even, O when it is odd. Rejected placements leave the count
//! alone, so the parity stays correct.

use crate::board::{Board, GameResult, PlacementOutcome, Rejection, TerminalState};
use crate::error::EngineError;
use crate::invariants::{CoordinatorInvariants, InvariantSet};
use crate::line::Line;
use crate::types::{CELL_COUNT, Coord, Symbol};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use strum::EnumIter;
use tracing::{debug, info, instrument};

/// Seat at the table. The first seat plays X for the current game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    derive_more::Display,
)]
pub enum PlayerSlot {
    /// Plays X.
    First,
    /// Plays O.
    Second,
}

impl PlayerSlot {
    /// Symbol this seat places.
    pub fn symbol(self) -> Symbol {
        match self {
            PlayerSlot::First => Symbol::X,
            PlayerSlot::Second => Symbol::O,
        }
    }

    /// Seat that places `symbol`.
    pub fn for_symbol(symbol: Symbol) -> Self {
        match symbol {
            Symbol::X => PlayerSlot::First,
            Symbol::O => PlayerSlot::Second,
        }
    }

    fn index(self) -> usize {
        match self {
            PlayerSlot::First => 0,
            PlayerSlot::Second => 1,
        }
    }
}

/// Win/loss/draw counts for one player across games.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Getters, new,
)]
pub struct Tally {
    /// Games won.
    wins: u32,
    /// Games lost.
    losses: u32,
    /// Games drawn.
    draws: u32,
}

impl Tally {
    /// Games finished.
    pub fn played(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

/// A player: a display name plus a tally. Owns no game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct Player {
    /// Display name.
    name: String,
    /// Results so far.
    #[new(default)]
    tally: Tally,
}

impl Player {
    /// Replaces the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

/// Whole-game phase as seen by the presentation layer.
///
/// A fresh or reset game is `InProgress`; there is no separate
/// not-started state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Moves are being accepted.
    InProgress,
    /// A line was completed.
    Won(Symbol, Line),
    /// The board filled without a line.
    Drawn,
}

impl GamePhase {
    /// Checks if the game is over.
    pub fn is_over(self) -> bool {
        !matches!(self, GamePhase::InProgress)
    }
}

impl From<GameResult> for GamePhase {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::InProgress => GamePhase::InProgress,
            GameResult::Win(symbol, line) => GamePhase::Won(symbol, line),
            GameResult::Draw => GamePhase::Drawn,
        }
    }
}

/// Drives a game: picks the symbol for each placement and keeps the two
/// players' labels.
#[derive(Debug, Clone)]
pub struct TurnCoordinator {
    board: Board,
    players: [Player; 2],
}

impl TurnCoordinator {
    /// Creates a coordinator with a fresh board.
    #[instrument(skip(first, second))]
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        let coordinator = Self {
            board: Board::new(),
            players: [Player::new(first.into()), Player::new(second.into())],
        };
        info!(
            first = %coordinator.players[0].name,
            second = %coordinator.players[1].name,
            "Coordinator created"
        );
        coordinator
    }

    /// Places the current mover's symbol at `(row, col)`.
    ///
    /// Once the game has ended (or the board is full) this is a no-op that
    /// returns [`Rejection::GameOver`], whatever the coordinates. A terminal
    /// outcome updates both players' tallies.
    ///
    /// # Errors
    ///
    /// [`EngineError::OutOfBounds`] for coordinates off the board.
    #[instrument(skip(self), fields(placed = self.board.placed_count()))]
    pub fn place_piece(&mut self, row: usize, col: usize) -> Result<PlacementOutcome, EngineError> {
        if self.is_finished() {
            debug!("Ignoring placement, game is over");
            return Ok(PlacementOutcome::Rejected(Rejection::GameOver));
        }

        let coord = Coord::new(row, col)?;
        Ok(self.place_piece_at(coord))
    }

    /// Same as [`TurnCoordinator::place_piece`] for a validated coordinate.
    #[instrument(skip(self), fields(placed = self.board.placed_count()))]
    pub fn place_piece_at(&mut self, coord: Coord) -> PlacementOutcome {
        if self.is_finished() {
            return PlacementOutcome::Rejected(Rejection::GameOver);
        }

        let symbol = self.to_move();
        let outcome = self.board.place_at(symbol, coord);

        if let PlacementOutcome::Accepted(terminal) = outcome {
            self.record(terminal);
            debug_assert!(
                CoordinatorInvariants::check_all(&self.board).is_ok(),
                "Coordinator invariants violated after {symbol} at {coord}"
            );
        }

        outcome
    }

    fn is_finished(&self) -> bool {
        self.board.is_game_ended() || self.board.placed_count() == CELL_COUNT
    }

    fn record(&mut self, terminal: TerminalState) {
        match terminal {
            TerminalState::Continue => {}
            TerminalState::Win(symbol, line) => {
                let winner = PlayerSlot::for_symbol(symbol);
                let loser = PlayerSlot::for_symbol(symbol.opponent());
                self.players[winner.index()].tally.wins += 1;
                self.players[loser.index()].tally.losses += 1;
                info!(
                    winner = %self.players[winner.index()].name,
                    %line,
                    "Game won"
                );
            }
            TerminalState::Draw => {
                for player in &mut self.players {
                    player.tally.draws += 1;
                }
                info!("Game drawn");
            }
        }
    }

    /// Starts a new game. Names and tallies are kept.
    #[instrument(skip(self))]
    pub fn init_game(&mut self) {
        self.board.reset();
        info!("New game");
    }

    /// Symbol that the next accepted placement will use.
    pub fn to_move(&self) -> Symbol {
        Symbol::for_turn(self.board.placed_count())
    }

    /// Player whose turn it is.
    pub fn current_player(&self) -> &Player {
        self.player_for(self.to_move())
    }

    /// Player in `slot`.
    pub fn player(&self, slot: PlayerSlot) -> &Player {
        &self.players[slot.index()]
    }

    /// Mutable access to the player in `slot`.
    pub fn player_mut(&mut self, slot: PlayerSlot) -> &mut Player {
        &mut self.players[slot.index()]
    }

    /// Player placing `symbol` this game.
    pub fn player_for(&self, symbol: Symbol) -> &Player {
        self.player(PlayerSlot::for_symbol(symbol))
    }

    /// Renames a player. Blank names are ignored; returns whether the name
    /// changed.
    #[instrument(skip(self))]
    pub fn rename_player(&mut self, slot: PlayerSlot, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            debug!(%slot, "Ignoring blank name");
            return false;
        }
        self.player_mut(slot).set_name(name);
        true
    }

    /// Exchanges the two seats, so the former second player now plays X.
    #[instrument(skip(self))]
    pub fn swap_players(&mut self) {
        self.players.swap(0, 1);
        debug!(
            first = %self.players[0].name,
            second = %self.players[1].name,
            "Players swapped"
        );
    }

    /// Current phase of the game.
    pub fn phase(&self) -> GamePhase {
        self.board.result().into()
    }

    /// Read-only view of the board for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

impl Default for TurnCoordinator {
    fn default() -> Self {
        Self::new("Player 1", "Player 2")
    }
}
