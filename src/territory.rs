//! Territory resolution engine.
//!
//! Given the occupancy of every cell, decides which player encloses each
//! empty cell:
//! - Reachability: one breadth-first pass per player from the board edge
//! - Ownership: a cell belongs to the only player that reaches it
//!
//! The engine keeps no state between calls. It writes the `territory` field
//! of each cell and never touches `occupant`.

mod ownership;
mod reach;

pub use ownership::{Resolution, owner};
pub use reach::{ReachabilitySet, reachability};

use tracing::debug;

use crate::board::{Grid, PlayerId};

/// Recompute every cell's territory in place.
///
/// Both reachability sets are computed from the occupancy alone, so any
/// territory marks already on the grid are discarded and the call is
/// idempotent.
pub fn resolve(grid: &mut Grid) -> Resolution {
    let reach_a = reachability(grid, PlayerId::A);
    let reach_b = reachability(grid, PlayerId::B);
    let resolution = ownership::assign(grid, &reach_a, &reach_b);

    debug!(
        size = grid.size(),
        territory_a = resolution.territory_a,
        territory_b = resolution.territory_b,
        open = resolution.open,
        sealed = resolution.sealed,
        "resolved territory"
    );

    resolution
}

/// Resolve a copy of `grid`, leaving the original untouched.
#[must_use]
pub fn resolved(grid: &Grid) -> (Grid, Resolution) {
    let mut copy = grid.clone();
    let resolution = resolve(&mut copy);
    (copy, resolution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Coord};

    fn ring(grid: &mut Grid, player: PlayerId, center: Coord) {
        for dr in 0..3u16 {
            for dc in 0..3u16 {
                if dr == 1 && dc == 1 {
                    continue;
                }
                let coord = Coord::new(center.row + dr - 1, center.col + dc - 1);
                grid.place(coord, player).unwrap();
            }
        }
    }

    #[test]
    fn test_open_board_has_no_owner() {
        let mut grid = Grid::new(10).unwrap();
        let resolution = resolve(&mut grid);
        assert_eq!(resolution.open, 100);
        assert!(grid.cells().iter().all(|cell| cell.territory.is_none()));
    }

    #[test]
    fn test_single_cell_board() {
        let mut grid = Grid::new(1).unwrap();
        let resolution = resolve(&mut grid);
        assert_eq!(grid.territory(Coord::new(0, 0)), None);
        assert_eq!(resolution.open, 1);
    }

    #[test]
    fn test_ring_encloses_center() {
        let mut grid = Grid::new(5).unwrap();
        ring(&mut grid, PlayerId::A, Coord::new(2, 2));
        let resolution = resolve(&mut grid);

        assert_eq!(grid.territory(Coord::new(2, 2)), Some(PlayerId::A));
        assert_eq!(resolution.territory_a, 1);
        assert_eq!(resolution.territory_b, 0);
        assert_eq!(resolution.open, 16);
        for (coord, cell) in grid.iter() {
            if cell.occupant.is_some() {
                assert_eq!(*cell, Cell::occupied(PlayerId::A), "ring cell {coord}");
            }
        }
    }

    #[test]
    fn test_stale_marks_are_cleared() {
        let mut grid = Grid::new(5).unwrap();
        ring(&mut grid, PlayerId::B, Coord::new(2, 2));
        resolve(&mut grid);
        assert_eq!(grid.territory(Coord::new(2, 2)), Some(PlayerId::B));

        // Break the ring open on a fresh board with the same center mark
        let rows: Vec<Vec<Cell>> = (0..5u16)
            .map(|row| {
                (0..5u16)
                    .map(|col| {
                        let coord = Coord::new(row, col);
                        let mut cell = *grid.get(coord).unwrap();
                        if coord == Coord::new(1, 2) {
                            cell = Cell::EMPTY;
                        }
                        cell
                    })
                    .collect()
            })
            .collect();
        let mut opened = Grid::from_rows(rows).unwrap();
        assert_eq!(opened.territory(Coord::new(2, 2)), Some(PlayerId::B));
        resolve(&mut opened);
        assert_eq!(opened.territory(Coord::new(2, 2)), None);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let mut grid = Grid::new(8).unwrap();
        ring(&mut grid, PlayerId::A, Coord::new(2, 2));
        ring(&mut grid, PlayerId::B, Coord::new(5, 5));
        let first = resolve(&mut grid);
        let snapshot = grid.clone();
        let second = resolve(&mut grid);
        assert_eq!(first, second);
        assert_eq!(grid, snapshot);
    }

    #[test]
    fn test_resolved_leaves_input_untouched() {
        let mut grid = Grid::new(5).unwrap();
        ring(&mut grid, PlayerId::A, Coord::new(2, 2));
        let (copy, resolution) = resolved(&grid);
        assert_eq!(grid.territory(Coord::new(2, 2)), None);
        assert_eq!(copy.territory(Coord::new(2, 2)), Some(PlayerId::A));
        assert_eq!(resolution.territory_a, 1);
    }
}
