//! Turns engine outcomes into terminal text.
//!
//! The engine only reports what happened. Everything a player sees
//! (whose turn it is, the winner banner, the bell) is decided here.

use derive_getters::Getters;
use tictactoe_engine::{
    Coord, GamePhase, PlacementOutcome, PlayerSlot, Rejection, TerminalState, TurnCoordinator,
};
use tracing::instrument;

/// Audible cue to accompany a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// A line was completed.
    Win,
    /// The board filled up.
    Draw,
}

impl Cue {
    /// Bytes to write to the terminal for this cue.
    pub fn bell(self) -> &'static str {
        match self {
            Cue::Win => "\x07\x07",
            Cue::Draw => "\x07",
        }
    }
}

/// What the presentation layer should do after a placement.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Feedback {
    /// Text to show.
    message: String,
    /// Sound to play, if sound is on.
    cue: Option<Cue>,
    /// Whether further clicks on the board make sense.
    input_enabled: bool,
}

/// Renders outcomes and prompts.
#[derive(Debug, Clone, Copy)]
pub struct Presenter {
    sound: bool,
}

impl Presenter {
    /// Creates a presenter; `sound` enables cues.
    pub fn new(sound: bool) -> Self {
        Self { sound }
    }

    /// "Ada's turn (X)".
    #[instrument(skip(self, game))]
    pub fn turn_prompt(&self, game: &TurnCoordinator) -> String {
        format!("{}'s turn ({})", game.current_player().name(), game.to_move())
    }

    /// Message for the current phase: the turn prompt or the final result.
    #[instrument(skip(self, game))]
    pub fn status(&self, game: &TurnCoordinator) -> String {
        match game.phase() {
            GamePhase::InProgress => self.turn_prompt(game),
            GamePhase::Won(symbol, line) => {
                format!("{} wins with the {}!", game.player_for(symbol).name(), line)
            }
            GamePhase::Drawn => "Draw!".to_string(),
        }
    }

    /// Interprets the outcome of placing at `coord`. Call after the
    /// placement so `game` reflects it.
    #[instrument(skip(self, game))]
    pub fn feedback(
        &self,
        game: &TurnCoordinator,
        coord: Coord,
        outcome: PlacementOutcome,
    ) -> Feedback {
        let (message, cue) = match outcome {
            PlacementOutcome::Accepted(TerminalState::Continue) => (self.turn_prompt(game), None),
            PlacementOutcome::Accepted(TerminalState::Win(..)) => {
                (self.status(game), Some(Cue::Win))
            }
            PlacementOutcome::Accepted(TerminalState::Draw) => (self.status(game), Some(Cue::Draw)),
            PlacementOutcome::Rejected(Rejection::AlreadyOccupied) => {
                let holder = game
                    .board()
                    .cell(coord)
                    .symbol()
                    .map(|symbol| symbol.to_string())
                    .unwrap_or_default();
                (
                    format!("Cell {coord} is already occupied by {holder}!"),
                    None,
                )
            }
            PlacementOutcome::Rejected(Rejection::GameOver) => (
                "The game is over. Type `new` or `restart` to play again.".to_string(),
                None,
            ),
        };

        Feedback {
            message,
            cue: cue.filter(|_| self.sound),
            input_enabled: !game.phase().is_over(),
        }
    }

    /// One line per player with their symbol, tally, and games played.
    #[instrument(skip(self, game))]
    pub fn scoreboard(&self, game: &TurnCoordinator) -> String {
        [PlayerSlot::First, PlayerSlot::Second]
            .into_iter()
            .map(|slot| {
                let player = game.player(slot);
                let tally = player.tally();
                format!(
                    "{} ({}): {} won, {} lost, {} drawn ({} played)",
                    player.name(),
                    slot.symbol(),
                    tally.wins(),
                    tally.losses(),
                    tally.draws(),
                    tally.played()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
