//! Board state, placement rules, and win/draw detection.

use crate::error::EngineError;
use crate::invariants::{BoardInvariants, InvariantSet};
use crate::line::Line;
use crate::types::{BOARD_SIZE, CELL_COUNT, Cell, Coord, Symbol};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Why a placement was turned down.
///
/// These are ordinary outcomes of user actions (a double click, a click
/// after the game ended), not errors.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Rejection {
    /// The target cell already holds a symbol.
    #[display("Cell is already occupied")]
    AlreadyOccupied,
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
}

/// Game state right after an accepted placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminalState {
    /// Nobody has won and cells remain.
    Continue,
    /// The placement completed a line.
    Win(Symbol, Line),
    /// The placement filled the board without completing a line.
    Draw,
}

impl TerminalState {
    /// Checks if the game is over.
    pub fn is_terminal(self) -> bool {
        !matches!(self, TerminalState::Continue)
    }
}

/// Result of a placement request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementOutcome {
    /// The symbol was placed.
    Accepted(TerminalState),
    /// The board was left untouched.
    Rejected(Rejection),
}

impl PlacementOutcome {
    /// Checks if the placement changed the board.
    pub fn is_accepted(self) -> bool {
        matches!(self, PlacementOutcome::Accepted(_))
    }
}

/// Game result derived from the current board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Moves remain and nobody has won.
    InProgress,
    /// A player completed a line.
    Win(Symbol, Line),
    /// Board full, no line.
    Draw,
}

/// 3x3 tic-tac-toe board.
///
/// Invariants:
/// - exactly `placed_count` cells are occupied
/// - `placed_count` only grows until [`Board::reset`]
/// - once `game_ended` is set, no placement is accepted
/// - `winning_line`, when present, is uniformly occupied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    pub(crate) placed_count: usize,
    pub(crate) game_ended: bool,
    pub(crate) winning_line: Option<Line>,
}

impl Board {
    /// Creates an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            placed_count: 0,
            game_ended: false,
            winning_line: None,
        }
    }

    /// Clears every cell and forgets any result. Safe mid-game.
    #[instrument(skip(self), fields(placed = self.placed_count))]
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("Board reset");
    }

    /// Places `symbol` at `(row, col)`.
    ///
    /// Checks run in this order: coordinates, game over, occupied cell.
    /// Rejections leave the board untouched.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfBounds`] if `row` or `col` is not in
    /// `0..=2`.
    #[instrument(skip(self), fields(placed = self.placed_count))]
    pub fn place(
        &mut self,
        symbol: Symbol,
        row: usize,
        col: usize,
    ) -> Result<PlacementOutcome, EngineError> {
        let coord = Coord::new(row, col)?;
        Ok(self.place_at(symbol, coord))
    }

    /// Textual entry point: validates the symbol before anything else.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidSymbol`] for anything but X/O (either case),
    /// then [`EngineError::OutOfBounds`] as for [`Board::place`].
    #[instrument(skip(self))]
    pub fn place_str(
        &mut self,
        symbol: &str,
        row: usize,
        col: usize,
    ) -> Result<PlacementOutcome, EngineError> {
        let symbol: Symbol = symbol.parse()?;
        self.place(symbol, row, col)
    }

    /// Places `symbol` at an already validated coordinate.
    #[instrument(skip(self), fields(placed = self.placed_count))]
    pub fn place_at(&mut self, symbol: Symbol, coord: Coord) -> PlacementOutcome {
        if self.game_ended {
            debug!(%coord, "Placement after game end");
            return PlacementOutcome::Rejected(Rejection::GameOver);
        }

        if let Cell::Occupied(holder) = self.cell(coord) {
            debug!(%coord, %holder, "Cell already occupied");
            return PlacementOutcome::Rejected(Rejection::AlreadyOccupied);
        }

        self.cells[coord.row()][coord.col()] = Cell::Occupied(symbol);
        self.placed_count += 1;

        let terminal = if let Some(line) = self.formed_line_through(coord) {
            self.winning_line = Some(line);
            self.game_ended = true;
            info!(%symbol, %line, "Line formed");
            TerminalState::Win(symbol, line)
        } else if self.placed_count == CELL_COUNT {
            self.game_ended = true;
            info!("Board full, draw");
            TerminalState::Draw
        } else {
            TerminalState::Continue
        };

        debug_assert!(
            BoardInvariants::check_all(self).is_ok(),
            "Board invariants violated after placing {symbol} at {coord}"
        );

        PlacementOutcome::Accepted(terminal)
    }

    /// First formed line through `coord`, in [`Line::through`] order.
    fn formed_line_through(&self, coord: Coord) -> Option<Line> {
        Line::through(coord).find(|line| self.is_formed(*line))
    }

    /// Checks if all three cells of `line` hold the same symbol.
    pub fn is_formed(&self, line: Line) -> bool {
        let [a, b, c] = line.cells().map(|coord| self.cell(coord));
        !a.is_empty() && a == b && b == c
    }

    /// Reads a cell by raw indices.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside `0..=2`. Use [`Board::cell`]
    /// with a validated [`Coord`] when the indices come from user input.
    pub fn get_cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Reads a cell.
    pub fn cell(&self, coord: Coord) -> Cell {
        self.cells[coord.row()][coord.col()]
    }

    /// Checks if the game has been won or drawn.
    pub fn is_game_ended(&self) -> bool {
        self.game_ended
    }

    /// Number of accepted placements since the last reset.
    pub fn placed_count(&self) -> usize {
        self.placed_count
    }

    /// The line that won the game, if any.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Derives the game result from the current state.
    pub fn result(&self) -> GameResult {
        if let Some(line) = self.winning_line
            && let Cell::Occupied(symbol) = self.cell(line.cells()[0])
        {
            return GameResult::Win(symbol, line);
        }

        if self.game_ended {
            GameResult::Draw
        } else {
            GameResult::InProgress
        }
    }

    /// All cells with their coordinates, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        Coord::ALL.into_iter().map(|coord| (coord, self.cell(coord)))
    }

    /// Coordinates of the empty cells, in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(coord, _)| coord)
    }

    /// Number of cells holding `symbol`.
    pub fn count_of(&self, symbol: Symbol) -> usize {
        self.cells()
            .filter(|(_, cell)| *cell == Cell::Occupied(symbol))
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the grid with empty cells labelled by their identifier:
///
/// ```text
///  X  | 01 | 02
/// --------------
///  10 | O  | 12
/// --------------
///  20 | 21 | 22
/// ```
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE {
            let rendered: Vec<String> = (0..BOARD_SIZE)
                .map(|col| match self.cells[row][col] {
                    Cell::Empty => format!(" {row}{col} "),
                    Cell::Occupied(symbol) => format!(" {symbol}  "),
                })
                .collect();
            writeln!(f, "{}", rendered.join("|").trim_end())?;
            if row < BOARD_SIZE - 1 {
                writeln!(f, "--------------")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(board: &mut Board, moves: &[(Symbol, usize, usize)]) -> PlacementOutcome {
        let mut last = PlacementOutcome::Rejected(Rejection::GameOver);
        for &(symbol, row, col) in moves {
            last = board.place(symbol, row, col).unwrap();
        }
        last
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.placed_count(), 0);
        assert!(!board.is_game_ended());
        assert_eq!(board.winning_line(), None);
        assert_eq!(board.result(), GameResult::InProgress);
        assert_eq!(board.empty_cells().count(), 9);
    }

    #[test]
    fn test_place_sets_cell_and_count() {
        let mut board = Board::new();
        let outcome = board.place(Symbol::X, 1, 2).unwrap();
        assert_eq!(outcome, PlacementOutcome::Accepted(TerminalState::Continue));
        assert_eq!(board.get_cell(1, 2), Cell::Occupied(Symbol::X));
        assert_eq!(board.placed_count(), 1);
    }

    #[test]
    fn test_occupied_cell_rejected_without_change() {
        let mut board = Board::new();
        board.place(Symbol::X, 0, 0).unwrap();
        let before = board.clone();

        let outcome = board.place(Symbol::O, 0, 0).unwrap();
        assert_eq!(outcome, PlacementOutcome::Rejected(Rejection::AlreadyOccupied));
        assert_eq!(board, before);
    }

    #[test]
    fn test_out_of_bounds_is_error_and_board_unchanged() {
        let mut board = Board::new();
        board.place(Symbol::X, 1, 1).unwrap();
        let before = board.clone();

        assert_eq!(
            board.place(Symbol::X, 3, 0),
            Err(EngineError::OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_symbol_checked_before_bounds() {
        let mut board = Board::new();
        assert!(matches!(
            board.place_str("Q", 9, 9),
            Err(EngineError::InvalidSymbol(_))
        ));
        assert!(matches!(
            board.place_str("o", 9, 9),
            Err(EngineError::OutOfBounds { .. })
        ));
        assert_eq!(
            board.place_str("o", 2, 2),
            Ok(PlacementOutcome::Accepted(TerminalState::Continue))
        );
    }

    #[test]
    fn test_row_win() {
        let mut board = Board::new();
        let outcome = play(
            &mut board,
            &[
                (Symbol::X, 0, 0),
                (Symbol::O, 1, 1),
                (Symbol::X, 0, 1),
                (Symbol::O, 2, 2),
                (Symbol::X, 0, 2),
            ],
        );
        assert_eq!(
            outcome,
            PlacementOutcome::Accepted(TerminalState::Win(Symbol::X, Line::Row0))
        );
        assert!(board.is_game_ended());
        assert_eq!(board.winning_line(), Some(Line::Row0));
        assert_eq!(board.result(), GameResult::Win(Symbol::X, Line::Row0));
    }

    #[test]
    fn test_column_win_by_o() {
        let mut board = Board::new();
        let outcome = play(
            &mut board,
            &[
                (Symbol::X, 0, 0),
                (Symbol::O, 0, 2),
                (Symbol::X, 1, 1),
                (Symbol::O, 1, 2),
                (Symbol::X, 2, 0),
                (Symbol::O, 2, 2),
            ],
        );
        assert_eq!(
            outcome,
            PlacementOutcome::Accepted(TerminalState::Win(Symbol::O, Line::Column2))
        );
    }

    #[test]
    fn test_north_east_diagonal_win() {
        let mut board = Board::new();
        let outcome = play(
            &mut board,
            &[(Symbol::O, 2, 0), (Symbol::O, 0, 2), (Symbol::O, 1, 1)],
        );
        assert_eq!(
            outcome,
            PlacementOutcome::Accepted(TerminalState::Win(Symbol::O, Line::DiagonalNorthEast))
        );
    }

    #[test]
    fn test_only_lines_through_placed_cell_count() {
        // Row 2 is already uniform, but the new cell is not on it.
        let mut board = Board::new();
        board.cells[2] = [Cell::Occupied(Symbol::O); 3];
        board.placed_count = 3;

        let outcome = board.place(Symbol::X, 0, 1).unwrap();
        assert_eq!(outcome, PlacementOutcome::Accepted(TerminalState::Continue));
        assert_eq!(board.winning_line(), None);
    }

    #[test]
    fn test_mixed_line_is_not_formed() {
        let mut board = Board::new();
        play(
            &mut board,
            &[(Symbol::X, 0, 0), (Symbol::O, 0, 1), (Symbol::X, 0, 2)],
        );
        assert!(!board.is_formed(Line::Row0));
        assert!(!board.is_game_ended());
    }

    #[test]
    fn test_winning_ninth_move_is_win_not_draw() {
        let mut board = Board::new();
        let outcome = play(
            &mut board,
            &[
                (Symbol::X, 0, 0),
                (Symbol::O, 0, 1),
                (Symbol::X, 0, 2),
                (Symbol::O, 1, 1),
                (Symbol::X, 1, 0),
                (Symbol::O, 2, 0),
                (Symbol::X, 1, 2),
                (Symbol::O, 2, 2),
                (Symbol::X, 2, 1),
            ],
        );
        assert_eq!(board.placed_count(), 9);
        assert!(matches!(
            outcome,
            PlacementOutcome::Accepted(TerminalState::Draw)
        ));

        let mut board = Board::new();
        let outcome = play(
            &mut board,
            &[
                (Symbol::X, 0, 0),
                (Symbol::O, 0, 1),
                (Symbol::X, 0, 2),
                (Symbol::O, 1, 1),
                (Symbol::X, 1, 2),
                (Symbol::O, 1, 0),
                (Symbol::X, 2, 1),
                (Symbol::O, 2, 0),
                (Symbol::X, 2, 2),
            ],
        );
        assert_eq!(board.placed_count(), 9);
        assert_eq!(
            outcome,
            PlacementOutcome::Accepted(TerminalState::Win(Symbol::X, Line::Column2))
        );
    }

    #[test]
    fn test_terminal_states() {
        let mut board = Board::new();
        let first = board.place(Symbol::X, 0, 0).unwrap();
        assert_eq!(first, PlacementOutcome::Accepted(TerminalState::Continue));
        assert!(!TerminalState::Continue.is_terminal());

        let outcome = play(&mut board, &[(Symbol::X, 1, 1), (Symbol::X, 2, 2)]);
        let PlacementOutcome::Accepted(terminal) = outcome else {
            panic!("expected an accepted placement, got {outcome:?}");
        };
        assert!(terminal.is_terminal());
        assert!(TerminalState::Draw.is_terminal());
    }

    #[test]
    fn test_game_over_rejects_every_cell() {
        let mut board = Board::new();
        play(
            &mut board,
            &[(Symbol::X, 0, 0), (Symbol::X, 1, 1), (Symbol::X, 2, 2)],
        );
        let before = board.clone();

        for coord in Coord::ALL {
            assert_eq!(
                board.place_at(Symbol::O, coord),
                PlacementOutcome::Rejected(Rejection::GameOver)
            );
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut board = Board::new();
        play(
            &mut board,
            &[(Symbol::X, 0, 0), (Symbol::X, 1, 1), (Symbol::X, 2, 2)],
        );
        board.reset();
        assert_eq!(board, Board::new());
        assert!(board.cells().all(|(_, cell)| cell == Cell::Empty));
    }

    #[test]
    fn test_count_of() {
        let mut board = Board::new();
        play(
            &mut board,
            &[(Symbol::X, 0, 0), (Symbol::O, 1, 1), (Symbol::X, 2, 2)],
        );
        assert_eq!(board.count_of(Symbol::X), 2);
        assert_eq!(board.count_of(Symbol::O), 1);
    }

    #[test]
    fn test_display_labels_empty_cells() {
        let mut board = Board::new();
        play(&mut board, &[(Symbol::X, 0, 0), (Symbol::O, 1, 1)]);
        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], " X  | 01 | 02");
        assert_eq!(lines[1], "--------------");
        assert_eq!(lines[2], " 10 | O  | 12");
        assert_eq!(lines[4], " 20 | 21 | 22");
    }
}
