//! Boundary reachability for a single player.

use std::collections::VecDeque;

use crate::board::{Coord, Grid, PlayerId};

/// Cells one player can reach from the edge of the board.
///
/// Recomputed on every resolve and never stored on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReachabilitySet {
    /// Player whose reach this is.
    player: PlayerId,
    /// Side length of the grid this was computed for.
    size: u16,
    /// Reached flags in row-major order.
    reached: Vec<bool>,
}

impl ReachabilitySet {
    /// Player whose reach this set describes.
    #[must_use]
    pub const fn player(&self) -> PlayerId {
        self.player
    }

    /// Check if `coord` was reached. Out-of-bounds coordinates never are.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        if coord.row >= self.size || coord.col >= self.size {
            return false;
        }
        self.reached[usize::from(coord.row) * usize::from(self.size) + usize::from(coord.col)]
    }

    /// Number of reached cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reached.iter().filter(|&&r| r).count()
    }

    /// Check if nothing was reached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.reached.iter().any(|&r| r)
    }

    /// Reached flags in row-major order, aligned with [`Grid::cells`].
    #[must_use]
    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.reached
    }
}

/// Compute every cell `player` can reach from the board edge.
///
/// Breadth-first from all boundary cells passable by `player`, moving
/// through the 4-neighbourhood. Opponent pieces are walls; empty cells and
/// the player's own pieces are open.
#[must_use]
pub fn reachability(grid: &Grid, player: PlayerId) -> ReachabilitySet {
    let size = grid.size();
    let cells = grid.cells();
    let mut reached = vec![false; cells.len()];
    let mut queue = VecDeque::new();

    for coord in grid.boundary() {
        let Some(idx) = grid.index_of(coord) else {
            continue;
        };
        if cells[idx].is_passable_by(player) && !reached[idx] {
            reached[idx] = true;
            queue.push_back(coord);
        }
    }

    while let Some(coord) = queue.pop_front() {
        let (adj, count) = coord.adjacent(size);
        for &next in &adj[..count as usize] {
            let Some(idx) = grid.index_of(next) else {
                continue;
            };
            if !reached[idx] && cells[idx].is_passable_by(player) {
                reached[idx] = true;
                queue.push_back(next);
            }
        }
    }

    ReachabilitySet {
        player,
        size,
        reached,
    }
}
