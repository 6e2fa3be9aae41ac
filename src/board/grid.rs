//! Grid, cell and coordinate types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::PlayerId;
use crate::error::{GridError, GridResult};

/// Side length of the reference board.
pub const DEFAULT_BOARD_SIZE: u16 = 10;

/// A coordinate on the grid, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Row (0 is the top edge).
    pub row: u16,
    /// Column (0 is the left edge).
    pub col: u16,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// Get adjacent coordinates (up, down, left, right) on a `size`×`size` grid.
    ///
    /// Returns a fixed-size array and count to avoid heap allocation.
    /// The array contains valid coordinates in indices 0..count; neighbours
    /// that would fall off the grid are never produced.
    #[must_use]
    #[inline]
    pub fn adjacent(&self, size: u16) -> ([Coord; 4], u8) {
        let mut result = [Coord::new(0, 0); 4];
        let mut count = 0u8;

        if self.row > 0 {
            result[count as usize] = Coord::new(self.row - 1, self.col); // up
            count += 1;
        }
        if self.row + 1 < size {
            result[count as usize] = Coord::new(self.row + 1, self.col); // down
            count += 1;
        }
        if self.col > 0 {
            result[count as usize] = Coord::new(self.row, self.col - 1); // left
            count += 1;
        }
        if self.col + 1 < size {
            result[count as usize] = Coord::new(self.row, self.col + 1); // right
            count += 1;
        }

        (result, count)
    }

    /// Check if this coordinate lies on the outermost row or column.
    #[must_use]
    pub const fn is_boundary(&self, size: u16) -> bool {
        self.row == 0 || self.col == 0 || self.row + 1 == size || self.col + 1 == size
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A single cell on the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Piece physically on this cell. Only placement touches it.
    pub occupant: Option<PlayerId>,
    /// Player enclosing this empty cell. Only the engine writes it, and it
    /// is `None` whenever `occupant` is set.
    pub territory: Option<PlayerId>,
}

impl Cell {
    /// An empty cell with no territory.
    pub const EMPTY: Cell = Cell {
        occupant: None,
        territory: None,
    };

    /// A cell holding a piece of `player`.
    #[must_use]
    pub const fn occupied(player: PlayerId) -> Self {
        Self {
            occupant: Some(player),
            territory: None,
        }
    }

    /// Check if no piece sits on this cell.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    /// Check if `player`'s reach can step onto this cell.
    ///
    /// Empty cells and the player's own pieces are open; opponent pieces
    /// are walls.
    #[must_use]
    #[inline]
    pub fn is_passable_by(&self, player: PlayerId) -> bool {
        match self.occupant {
            None => true,
            Some(occupant) => occupant == player,
        }
    }
}

/// An N×N board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Side length.
    size: u16,
    /// Cells stored in row-major order.
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty `size`×`size` grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Empty`] if `size` is zero.
    pub fn new(size: u16) -> GridResult<Self> {
        if size == 0 {
            return Err(GridError::Empty);
        }

        let len = usize::from(size) * usize::from(size);
        Ok(Self {
            size,
            cells: vec![Cell::EMPTY; len],
        })
    }

    /// Build a grid from rows of cells.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, any row's length differs
    /// from the row count, or the side does not fit in a `u16`.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> GridResult<Self> {
        let expected = rows.len();
        if expected == 0 {
            return Err(GridError::Empty);
        }
        let size = u16::try_from(expected).map_err(|_| GridError::TooLarge(expected))?;

        let mut cells = Vec::with_capacity(expected * expected);
        for (row, cells_in_row) in rows.into_iter().enumerate() {
            if cells_in_row.len() != expected {
                return Err(GridError::NotSquare {
                    row,
                    len: cells_in_row.len(),
                    expected,
                });
            }
            cells.extend(cells_in_row);
        }

        Ok(Self { size, cells })
    }

    /// Get the side length.
    #[must_use]
    pub const fn size(&self) -> u16 {
        self.size
    }

    /// Get the raw cells in row-major order.
    #[must_use]
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Check if a coordinate is within the grid.
    #[must_use]
    pub const fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Convert a coordinate to an index into the cells array.
    #[must_use]
    #[inline]
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(usize::from(coord.row) * usize::from(self.size) + usize::from(coord.col))
        } else {
            None
        }
    }

    /// Convert an index into the cells array back to a coordinate.
    ///
    /// `index` must be below `size * size`.
    #[must_use]
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn coord_of(&self, index: usize) -> Coord {
        let size = usize::from(self.size);
        Coord::new((index / size) as u16, (index % size) as u16)
    }

    /// Get the cell at the given coordinate.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        self.index_of(coord).map(|idx| &self.cells[idx])
    }

    /// Get the occupant at the given coordinate.
    #[must_use]
    pub fn occupant(&self, coord: Coord) -> Option<PlayerId> {
        self.get(coord).and_then(|cell| cell.occupant)
    }

    /// Get the territory owner at the given coordinate.
    #[must_use]
    pub fn territory(&self, coord: Coord) -> Option<PlayerId> {
        self.get(coord).and_then(|cell| cell.territory)
    }

    /// Put a piece of `player` on an empty cell.
    ///
    /// Clears any territory mark the cell carried. Does not resolve; call
    /// [`resolve`](crate::territory::resolve) afterwards to refresh ownership.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] or [`GridError::Occupied`]; the
    /// grid is unchanged in either case.
    pub fn place(&mut self, coord: Coord, player: PlayerId) -> GridResult<()> {
        let idx = self.index_of(coord).ok_or(GridError::OutOfBounds(coord))?;
        let cell = &mut self.cells[idx];
        if cell.occupant.is_some() {
            return Err(GridError::Occupied(coord));
        }
        *cell = Cell::occupied(player);
        Ok(())
    }

    /// Iterate over all coordinates and cells.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| (self.coord_of(idx), cell))
    }

    /// Iterate over every boundary coordinate exactly once.
    pub fn boundary(&self) -> impl Iterator<Item = Coord> {
        let size = self.size;
        let last = size - 1;
        let top_bottom = (0..size).flat_map(move |col| {
            let bottom = (last > 0).then_some(Coord::new(last, col));
            std::iter::once(Coord::new(0, col)).chain(bottom)
        });
        let sides = (1..last).flat_map(move |row| [Coord::new(row, 0), Coord::new(row, last)]);
        top_bottom.chain(sides)
    }

    /// Iterate over the coordinates of all empty cells.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> {
        self.iter()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(coord, _)| coord)
    }

    /// Count pieces belonging to `player`.
    #[must_use]
    pub fn count_pieces(&self, player: PlayerId) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.occupant == Some(player))
            .count()
    }

    /// Count empty cells enclosed by `player`.
    #[must_use]
    pub fn count_territory(&self, player: PlayerId) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.territory == Some(player))
            .count()
    }

    /// Drop every territory mark.
    pub fn clear_territory(&mut self) {
        for cell in &mut self.cells {
            cell.territory = None;
        }
    }

    /// Copy of this grid with every A and B exchanged, pieces and marks alike.
    #[must_use]
    pub fn with_players_swapped(&self) -> Self {
        let cells = self
            .cells
            .iter()
            .map(|cell| Cell {
                occupant: cell.occupant.map(PlayerId::opponent),
                territory: cell.territory.map(PlayerId::opponent),
            })
            .collect();
        Self {
            size: self.size,
            cells,
        }
    }

    /// Mutable access for the territory writer. Occupants stay caller-owned.
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }
}

impl Default for Grid {
    fn default() -> Self {
        let len = usize::from(DEFAULT_BOARD_SIZE) * usize::from(DEFAULT_BOARD_SIZE);
        Self {
            size: DEFAULT_BOARD_SIZE,
            cells: vec![Cell::EMPTY; len],
        }
    }
}
