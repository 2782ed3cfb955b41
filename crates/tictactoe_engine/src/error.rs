//! Engine error types.
//!
//! Only caller bugs are errors. A click on an occupied cell or after the
//! game ended is an ordinary [`Rejection`](crate::Rejection), not an error.

/// Error returned when the engine is called with arguments no valid
/// presentation layer would produce.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// The symbol was neither X nor O.
    #[display("Symbol must be either X or O, got {:?}", _0)]
    InvalidSymbol(String),

    /// Row or column outside 0..=2.
    #[display("Cell ({row}, {col}) is outside the 3x3 board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// Text that does not name a cell at all.
    #[display("Cannot read {:?} as a cell, expected two digits such as \"12\"", _0)]
    InvalidCellId(String),
}

impl std::error::Error for EngineError {}
