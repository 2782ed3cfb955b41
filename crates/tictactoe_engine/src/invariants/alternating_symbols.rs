//! Alternating symbols invariant: X, O, X, O, ...

use super::Invariant;
use crate::{Board, Symbol};

/// Invariant: symbols alternate starting with X.
///
/// With no move history to replay, alternation shows up as X never trailing
/// O and never leading it by more than one. Only boards filled through the
/// turn coordinator are expected to satisfy this.
pub struct AlternatingSymbols;

impl Invariant<Board> for AlternatingSymbols {
    fn holds(board: &Board) -> bool {
        let x = board.count_of(Symbol::X);
        let o = board.count_of(Symbol::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "Symbols alternate (X, O, X, O, ...)"
    }
}
