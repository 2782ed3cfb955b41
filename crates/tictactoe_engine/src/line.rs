//! The eight winning lines.

use crate::types::Coord;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// One of the eight triples of cells that win the game when uniformly
/// occupied.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display,
)]
pub enum Line {
    /// Cells (0,0) (0,1) (0,2).
    #[strum(to_string = "top row")]
    Row0,
    /// Cells (1,0) (1,1) (1,2).
    #[strum(to_string = "middle row")]
    Row1,
    /// Cells (2,0) (2,1) (2,2).
    #[strum(to_string = "bottom row")]
    Row2,
    /// Cells (0,0) (1,0) (2,0).
    #[strum(to_string = "left column")]
    Column0,
    /// Cells (0,1) (1,1) (2,1).
    #[strum(to_string = "middle column")]
    Column1,
    /// Cells (0,2) (1,2) (2,2).
    #[strum(to_string = "right column")]
    Column2,
    /// Cells (0,0) (1,1) (2,2).
    #[strum(to_string = "south-east diagonal")]
    DiagonalSouthEast,
    /// Cells (2,0) (1,1) (0,2).
    #[strum(to_string = "north-east diagonal")]
    DiagonalNorthEast,
}

impl Line {
    /// The three cells making up this line.
    pub const fn cells(self) -> [Coord; 3] {
        match self {
            Line::Row0 => [Coord::at(0, 0), Coord::at(0, 1), Coord::at(0, 2)],
            Line::Row1 => [Coord::at(1, 0), Coord::at(1, 1), Coord::at(1, 2)],
            Line::Row2 => [Coord::at(2, 0), Coord::at(2, 1), Coord::at(2, 2)],
            Line::Column0 => [Coord::at(0, 0), Coord::at(1, 0), Coord::at(2, 0)],
            Line::Column1 => [Coord::at(0, 1), Coord::at(1, 1), Coord::at(2, 1)],
            Line::Column2 => [Coord::at(0, 2), Coord::at(1, 2), Coord::at(2, 2)],
            Line::DiagonalSouthEast => [Coord::at(0, 0), Coord::at(1, 1), Coord::at(2, 2)],
            Line::DiagonalNorthEast => [Coord::at(2, 0), Coord::at(1, 1), Coord::at(0, 2)],
        }
    }

    /// Checks if `coord` is one of this line's cells.
    pub fn contains(self, coord: Coord) -> bool {
        self.cells().contains(&coord)
    }

    /// Lines passing through `coord`, in win-detection precedence:
    /// south-east diagonal, north-east diagonal, row, column.
    ///
    /// Yields two lines for an edge cell, three for a corner and four for
    /// the centre.
    pub fn through(coord: Coord) -> impl Iterator<Item = Line> {
        let south_east = coord
            .on_south_east_diagonal()
            .then_some(Line::DiagonalSouthEast);
        let north_east = coord
            .on_north_east_diagonal()
            .then_some(Line::DiagonalNorthEast);

        [
            south_east,
            north_east,
            Some(Self::row(coord.row())),
            Some(Self::column(coord.col())),
        ]
        .into_iter()
        .flatten()
    }

    fn row(row: usize) -> Line {
        match row {
            0 => Line::Row0,
            1 => Line::Row1,
            _ => Line::Row2,
        }
    }

    fn column(col: usize) -> Line {
        match col {
            0 => Line::Column0,
            1 => Line::Column1,
            _ => Line::Column2,
        }
    }
}
