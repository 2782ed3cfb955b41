//! Placed count invariant: the counter agrees with the grid.

use super::Invariant;
use crate::Board;

/// Invariant: exactly `placed_count` cells are occupied.
pub struct PlacedCountMatchesCells;

impl Invariant<Board> for PlacedCountMatchesCells {
    fn holds(board: &Board) -> bool {
        let occupied = board.cells().filter(|(_, cell)| !cell.is_empty()).count();
        occupied == board.placed_count()
    }

    fn description() -> &'static str {
        "Placed count equals the number of occupied cells"
    }
}
