//! Interactive terminal session.
//!
//! Reads one command per line, drives the coordinator, and writes the
//! presenter's output. Generic over reader and writer so tests can script
//! a whole game.

use crate::presenter::Presenter;
use anyhow::Result;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tictactoe_engine::{Coord, EngineError, PlacementOutcome, PlayerSlot, TurnCoordinator};
use tracing::{debug, info, instrument, warn};

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Place the current symbol.
    Place(Coord),
    /// Swap the players' seats and start over.
    Restart,
    /// Start over with the same seats.
    NewGame,
    /// Change a player's name.
    Rename(PlayerSlot, String),
    /// Print the board again.
    ShowBoard,
    /// Print the tallies.
    Score,
    /// Print the command list.
    Help,
    /// Leave the session.
    Quit,
}

/// Input line that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// `name` followed by something other than first/second.
    #[display("Unknown seat {:?}, expected `first` or `second`", _0)]
    UnknownSeat(String),
    /// Not a command and not a cell.
    #[display("{}", _0)]
    Cell(EngineError),
}

impl std::error::Error for InputError {}

impl FromStr for Input {
    type Err = InputError;

    #[instrument]
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map(|(word, rest)| (word, rest.trim()))
            .unwrap_or((line, ""));

        match word.to_ascii_lowercase().as_str() {
            "quit" | "exit" | "q" => Ok(Input::Quit),
            "restart" => Ok(Input::Restart),
            "new" => Ok(Input::NewGame),
            "board" => Ok(Input::ShowBoard),
            "score" => Ok(Input::Score),
            "help" | "?" => Ok(Input::Help),
            "name" => {
                let (seat, name) = rest
                    .split_once(char::is_whitespace)
                    .unwrap_or((rest, ""));
                let slot = match seat.to_ascii_lowercase().as_str() {
                    "first" | "1" => PlayerSlot::First,
                    "second" | "2" => PlayerSlot::Second,
                    _ => return Err(InputError::UnknownSeat(seat.to_string())),
                };
                Ok(Input::Rename(slot, name.trim().to_string()))
            }
            _ => line.parse().map(Input::Place).map_err(InputError::Cell),
        }
    }
}

const HELP: &str = "\
Commands:
  00..22 or `row col`   place your symbol
  new                   new game, same seats
  restart               swap seats and start a new game
  name first|second N   rename a player
  board                 show the board
  score                 show wins, losses and draws
  quit                  leave";

/// A running terminal game.
pub struct Session<R, W> {
    game: TurnCoordinator,
    presenter: Presenter,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session around an existing coordinator.
    pub fn new(game: TurnCoordinator, presenter: Presenter, input: R, output: W) -> Self {
        Self {
            game,
            presenter,
            input,
            output,
        }
    }

    /// Plays until `quit` or end of input.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        self.game.init_game();
        info!("Session started");
        self.show_board()?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Input>() {
                Ok(Input::Quit) => break,
                Ok(input) => self.handle(input)?,
                Err(e) => {
                    warn!(error = %e, "Unreadable input");
                    writeln!(self.output, "{e}. Type `help` for commands.")?;
                }
            }
        }

        writeln!(self.output, "{}", self.presenter.scoreboard(&self.game))?;
        info!("Session ended");
        Ok(())
    }

    /// Applies one command.
    #[instrument(skip(self))]
    pub fn handle(&mut self, input: Input) -> Result<()> {
        match input {
            Input::Place(coord) => {
                let outcome = self.game.place_piece_at(coord);
                let feedback = self.presenter.feedback(&self.game, coord, outcome);
                if outcome.is_accepted() {
                    write!(self.output, "\n{}", self.game.board())?;
                }
                if let Some(cue) = feedback.cue() {
                    write!(self.output, "{}", cue.bell())?;
                }
                writeln!(self.output, "{}", feedback.message())?;
                if let PlacementOutcome::Accepted(terminal) = outcome
                    && terminal.is_terminal()
                {
                    writeln!(self.output, "Type `new` or `restart` to play again.")?;
                }
            }
            Input::Restart => {
                self.game.swap_players();
                self.game.init_game();
                self.show_board()?;
            }
            Input::NewGame => {
                self.game.init_game();
                self.show_board()?;
            }
            Input::Rename(slot, name) => {
                if self.game.rename_player(slot, &name) {
                    writeln!(
                        self.output,
                        "{} player is now {}",
                        slot,
                        self.game.player(slot).name()
                    )?;
                } else {
                    writeln!(self.output, "Name left unchanged")?;
                }
            }
            Input::ShowBoard => self.show_board()?,
            Input::Score => writeln!(self.output, "{}", self.presenter.scoreboard(&self.game))?,
            Input::Help => writeln!(self.output, "{HELP}")?,
            Input::Quit => {}
        }
        Ok(())
    }

    fn show_board(&mut self) -> Result<()> {
        write!(self.output, "\n{}", self.game.board())?;
        writeln!(self.output, "{}", self.presenter.status(&self.game))?;
        Ok(())
    }

    /// The coordinator, for inspection after a run.
    pub fn game(&self) -> &TurnCoordinator {
        &self.game
    }

    /// Consumes the session, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}
