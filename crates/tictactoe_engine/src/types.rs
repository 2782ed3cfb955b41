//! Core domain types for tic-tac-toe.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// The mark a player places.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Symbol {
    /// X (always moves first).
    X,
    /// O (moves second).
    O,
}

impl Symbol {
    /// Returns the other symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    /// Symbol due to move after `placed` accepted placements.
    pub fn for_turn(placed: usize) -> Self {
        if placed % 2 == 0 { Symbol::X } else { Symbol::O }
    }
}

impl FromStr for Symbol {
    type Err = EngineError;

    /// Parses `x`, `X`, `o` or `O`.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Symbol::X),
            "O" | "o" => Ok(Symbol::O),
            other => Err(EngineError::InvalidSymbol(other.to_string())),
        }
    }
}

impl TryFrom<char> for Symbol {
    type Error = EngineError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'X' => Ok(Symbol::X),
            'O' => Ok(Symbol::O),
            _ => Err(EngineError::InvalidSymbol(c.to_string())),
        }
    }
}

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a symbol.
    Occupied(Symbol),
}

impl Cell {
    /// Returns the occupying symbol, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(symbol) => Some(symbol),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// A validated board coordinate; row and column are both in `0..=2`.
///
/// Serializes as a `[row, col]` pair and re-validates on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// All nine cells in row-major order.
    pub const ALL: [Coord; CELL_COUNT] = [
        Coord::at(0, 0),
        Coord::at(0, 1),
        Coord::at(0, 2),
        Coord::at(1, 0),
        Coord::at(1, 1),
        Coord::at(1, 2),
        Coord::at(2, 0),
        Coord::at(2, 1),
        Coord::at(2, 2),
    ];

    /// Creates a coordinate, rejecting anything off the board.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, EngineError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(EngineError::OutOfBounds { row, col });
        }
        Ok(Self { row, col })
    }

    /// Unchecked constructor for the fixed tables in this crate.
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row index.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index.
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// Checks if the cell lies on the south-east diagonal.
    pub fn on_south_east_diagonal(self) -> bool {
        self.row == self.col
    }

    /// Checks if the cell lies on the north-east diagonal.
    pub fn on_north_east_diagonal(self) -> bool {
        self.row + self.col == BOARD_SIZE - 1
    }
}

impl FromStr for Coord {
    type Err = EngineError;

    /// Parses a cell identifier: `"12"`, `"1 2"` or `"1,2"`.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || EngineError::InvalidCellId(trimmed.to_string());

        let digits: Vec<&str> = if trimmed.len() == 2 && trimmed.is_char_boundary(1) {
            vec![&trimmed[..1], &trimmed[1..]]
        } else {
            trimmed
                .split(|ch: char| ch == ',' || ch.is_whitespace())
                .filter(|part| !part.is_empty())
                .collect()
        };
        let (row, col) = match digits.as_slice() {
            [r, c] => (
                single_digit(r).ok_or_else(invalid)?,
                single_digit(c).ok_or_else(invalid)?,
            ),
            _ => return Err(invalid()),
        };

        Coord::new(row, col)
    }
}

/// A cell index is exactly one ASCII digit; signs, padding and longer
/// numbers are rejected.
fn single_digit(part: &str) -> Option<usize> {
    match part.as_bytes() {
        [b] if b.is_ascii_digit() => Some(usize::from(b - b'0')),
        _ => None,
    }
}

impl TryFrom<(usize, usize)> for Coord {
    type Error = EngineError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Coord::new(row, col)
    }
}

impl From<Coord> for (usize, usize) {
    fn from(coord: Coord) -> Self {
        (coord.row, coord.col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_parse_is_case_insensitive() {
        assert_eq!("x".parse::<Symbol>(), Ok(Symbol::X));
        assert_eq!(" O ".parse::<Symbol>(), Ok(Symbol::O));
        assert_eq!(Symbol::try_from('o'), Ok(Symbol::O));
    }

    #[test]
    fn test_symbol_parse_rejects_other_marks() {
        assert_eq!(
            "Z".parse::<Symbol>(),
            Err(EngineError::InvalidSymbol("Z".to_string()))
        );
        assert!("XO".parse::<Symbol>().is_err());
        assert!(Symbol::try_from('0').is_err());
    }

    #[test]
    fn test_turn_parity() {
        assert_eq!(Symbol::for_turn(0), Symbol::X);
        assert_eq!(Symbol::for_turn(1), Symbol::O);
        assert_eq!(Symbol::for_turn(8), Symbol::X);
        assert_eq!(Symbol::X.opponent(), Symbol::O);
    }

    #[test]
    fn test_coord_bounds() {
        assert!(Coord::new(2, 2).is_ok());
        assert_eq!(
            Coord::new(3, 0),
            Err(EngineError::OutOfBounds { row: 3, col: 0 })
        );
        assert!(Coord::new(0, 3).is_err());
    }

    #[test]
    fn test_coord_parse_forms() {
        let expected = Coord::new(1, 2).unwrap();
        assert_eq!("12".parse::<Coord>(), Ok(expected));
        assert_eq!("1 2".parse::<Coord>(), Ok(expected));
        assert_eq!(" 1,2 ".parse::<Coord>(), Ok(expected));
    }

    #[test]
    fn test_coord_parse_errors() {
        assert!(matches!(
            "30".parse::<Coord>(),
            Err(EngineError::OutOfBounds { row: 3, col: 0 })
        ));
        assert!(matches!(
            "ab".parse::<Coord>(),
            Err(EngineError::InvalidCellId(_))
        ));
        assert!(matches!(
            "1".parse::<Coord>(),
            Err(EngineError::InvalidCellId(_))
        ));
    }

    #[test]
    fn test_coord_parse_rejects_multi_digit_parts() {
        for input in ["01 02", "+1 +2", "001,2", "1,,2 3", "1 2 2", "12 12", "-1 2"] {
            assert!(
                matches!(input.parse::<Coord>(), Err(EngineError::InvalidCellId(_))),
                "{input:?} should not parse"
            );
        }
        assert_eq!(" 2 , 0 ".parse::<Coord>(), Ok(Coord::at(2, 0)));
        assert!(matches!(
            "3 0".parse::<Coord>(),
            Err(EngineError::OutOfBounds { row: 3, col: 0 })
        ));
    }

    #[test]
    fn test_coord_all_is_row_major() {
        for (i, coord) in Coord::ALL.iter().enumerate() {
            assert_eq!(coord.index(), i);
        }
        assert_eq!(Coord::ALL[5].to_string(), "12");
    }

    #[test]
    fn test_coord_diagonals() {
        let center = Coord::new(1, 1).unwrap();
        assert!(center.on_south_east_diagonal());
        assert!(center.on_north_east_diagonal());

        let edge = Coord::new(0, 1).unwrap();
        assert!(!edge.on_south_east_diagonal());
        assert!(!edge.on_north_east_diagonal());
    }

    #[test]
    fn test_coord_deserialize_validates() {
        let ok: Coord = serde_json::from_str("[2, 0]").unwrap();
        assert_eq!(ok, Coord::new(2, 0).unwrap());
        assert!(serde_json::from_str::<Coord>("[4, 0]").is_err());
    }
}
