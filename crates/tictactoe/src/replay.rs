//! Non-interactive replay of a list of cells.

use crate::presenter::Presenter;
use anyhow::Result;
use derive_new::new;
use serde::Serialize;
use std::io::Write;
use tictactoe_engine::{Coord, PlacementOutcome, Symbol, TurnCoordinator};
use tracing::{instrument, warn};

/// One replayed placement, as emitted by `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct ReplayStep {
    /// Cell identifier as given.
    cell: String,
    /// Symbol that was due to move.
    symbol: Symbol,
    /// Engine outcome, absent when the cell could not be read.
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<PlacementOutcome>,
    /// Why the cell could not be placed.
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    /// Placements accepted so far.
    placed_count: usize,
}

/// Feeds `cells` to `game` in order, writing one line per cell and the
/// final board.
///
/// Unreadable cells are reported and skipped; they do not consume a turn.
#[instrument(skip(game, presenter, out))]
pub fn replay<W: Write>(
    game: &mut TurnCoordinator,
    presenter: &Presenter,
    cells: &[String],
    json: bool,
    out: &mut W,
) -> Result<Vec<ReplayStep>> {
    let mut steps = Vec::with_capacity(cells.len());

    for cell in cells {
        let symbol = game.to_move();
        let step = match cell.parse::<Coord>() {
            Ok(coord) => {
                let outcome = game.place_piece_at(coord);
                if !json {
                    let feedback = presenter.feedback(game, coord, outcome);
                    writeln!(out, "{symbol} {cell}: {}", feedback.message())?;
                }
                ReplayStep::new(
                    cell.clone(),
                    symbol,
                    Some(outcome),
                    None,
                    game.board().placed_count(),
                )
            }
            Err(e) => {
                warn!(%cell, error = %e, "Skipping unreadable cell");
                if !json {
                    writeln!(out, "{symbol} {cell}: {e}")?;
                }
                ReplayStep::new(
                    cell.clone(),
                    symbol,
                    None,
                    Some(e.to_string()),
                    game.board().placed_count(),
                )
            }
        };

        if json {
            writeln!(out, "{}", serde_json::to_string(&step)?)?;
        }
        steps.push(step);
    }

    if !json {
        write!(out, "\n{}", game.board())?;
        writeln!(out, "{}", presenter.status(game))?;
    }

    Ok(steps)
}
