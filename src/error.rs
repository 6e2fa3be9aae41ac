//! Error types for board construction and placement.

use std::fmt;

use crate::board::Coord;

/// Errors reported when a caller hands the engine malformed input.
///
/// Resolution itself never fails: every one of these is raised while
/// building or mutating a [`Grid`](crate::board::Grid), before any
/// territory is computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The grid has no rows (N = 0).
    Empty,
    /// A row's length differs from the number of rows.
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Length of that row.
        len: usize,
        /// Expected length (the row count).
        expected: usize,
    },
    /// Side length does not fit the coordinate type.
    TooLarge(usize),
    /// A value that is neither of the two recognized players.
    InvalidPlayer {
        /// The unrecognized value as written.
        value: String,
        /// Row where it appeared, if parsed from a board.
        row: Option<usize>,
        /// Column where it appeared, if parsed from a board.
        col: Option<usize>,
    },
    /// Coordinate lies outside the grid.
    OutOfBounds(Coord),
    /// Placement target already holds a piece.
    Occupied(Coord),
}

impl GridError {
    /// An unrecognized player value with no board position attached.
    #[must_use]
    pub fn invalid_player(value: impl Into<String>) -> Self {
        Self::InvalidPlayer {
            value: value.into(),
            row: None,
            col: None,
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Empty => write!(f, "grid must have at least one row"),
            GridError::NotSquare { row, len, expected } => {
                write!(f, "row {row} has {len} cells, expected {expected}")
            }
            GridError::TooLarge(size) => {
                write!(f, "grid side {size} exceeds maximum {}", u16::MAX)
            }
            GridError::InvalidPlayer {
                value,
                row: Some(row),
                col: Some(col),
            } => write!(f, "invalid player {value:?} at row {row}, column {col}"),
            GridError::InvalidPlayer { value, .. } => write!(f, "invalid player {value:?}"),
            GridError::OutOfBounds(coord) => write!(f, "coordinate {coord} is out of bounds"),
            GridError::Occupied(coord) => write!(f, "cell {coord} is already occupied"),
        }
    }
}

impl std::error::Error for GridError {}

/// Result type for grid construction and placement.
pub type GridResult<T> = Result<T, GridError>;
