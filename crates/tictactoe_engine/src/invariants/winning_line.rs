//! Winning line invariant: a recorded line really is a line.

use super::Invariant;
use crate::Board;

/// Invariant: a recorded winning line is uniformly occupied and the game
/// is marked as ended.
pub struct WinningLineFormed;

impl Invariant<Board> for WinningLineFormed {
    fn holds(board: &Board) -> bool {
        match board.winning_line() {
            Some(line) => board.is_formed(line) && board.is_game_ended(),
            None => true,
        }
    }

    fn description() -> &'static str {
        "Recorded winning line is formed and the game has ended"
    }
}
