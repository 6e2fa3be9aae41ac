//! Plain-text board notation.
//!
//! One row per line, one symbol per cell. Whitespace between symbols is
//! ignored, as are blank lines and lines starting with `#`.
//!
//! ```text
//! # 5x5, A encloses the center
//! . . . . .
//! . A A A .
//! . A a A .
//! . A A A .
//! . . . . .
//! ```
//!
//! | Symbol | Cell                         |
//! |--------|------------------------------|
//! | `.`    | empty, no owner              |
//! | `A`    | piece of A                   |
//! | `B`    | piece of B                   |
//! | `a`    | empty, marked A territory    |
//! | `b`    | empty, marked B territory    |

use crate::board::{Cell, Grid, PlayerId};
use crate::error::{GridError, GridResult};

/// Symbol for an empty cell with no owner.
pub const EMPTY_SYMBOL: char = '.';

/// Parse a board from text.
///
/// Territory marks are kept as written so a caller can compare them
/// against a fresh resolve.
///
/// # Errors
///
/// Returns [`GridError::InvalidPlayer`] for an unknown symbol, or the
/// shape errors of [`Grid::from_rows`].
pub fn parse_board(text: &str) -> GridResult<Grid> {
    let rows = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .enumerate()
        .map(|(row, line)| {
            line.chars()
                .filter(|c| !c.is_whitespace())
                .enumerate()
                .map(|(col, symbol)| {
                    parse_cell(symbol).ok_or_else(|| GridError::InvalidPlayer {
                        value: symbol.to_string(),
                        row: Some(row),
                        col: Some(col),
                    })
                })
                .collect::<GridResult<Vec<Cell>>>()
        })
        .collect::<GridResult<Vec<_>>>()?;

    Grid::from_rows(rows)
}

fn parse_cell(symbol: char) -> Option<Cell> {
    let cell = match symbol {
        EMPTY_SYMBOL => Cell::EMPTY,
        'A' => Cell::occupied(PlayerId::A),
        'B' => Cell::occupied(PlayerId::B),
        'a' => Cell {
            occupant: None,
            territory: Some(PlayerId::A),
        },
        'b' => Cell {
            occupant: None,
            territory: Some(PlayerId::B),
        },
        _ => return None,
    };
    Some(cell)
}

/// Symbol for a single cell.
#[must_use]
pub fn cell_symbol(cell: &Cell) -> char {
    match (cell.occupant, cell.territory) {
        (Some(player), _) => player.piece_symbol(),
        (None, Some(player)) => player.territory_symbol(),
        (None, None) => EMPTY_SYMBOL,
    }
}

/// Render a board as text, symbols separated by single spaces.
///
/// The output parses back to the same grid.
#[must_use]
pub fn render_board(grid: &Grid) -> String {
    let size = usize::from(grid.size());
    let mut output = String::with_capacity(size * size * 2);

    for row in grid.cells().chunks(size) {
        for (col, cell) in row.iter().enumerate() {
            if col > 0 {
                output.push(' ');
            }
            output.push(cell_symbol(cell));
        }
        output.push('\n');
    }

    output
}

/// Render each row as a compact string with no separators.
#[must_use]
pub fn board_rows(grid: &Grid) -> Vec<String> {
    let size = usize::from(grid.size());
    grid.cells()
        .chunks(size)
        .map(|row| row.iter().map(cell_symbol).collect())
        .collect()
}
