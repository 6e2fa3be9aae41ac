//! Ownership derivation from the two reachability sets.

use serde::Serialize;

use crate::board::{Grid, PlayerId};
use crate::territory::ReachabilitySet;

/// Owner of an empty cell given which players reach it.
///
/// A cell belongs to a player when only that player reaches it. Cells both
/// players reach are open. Cells neither player reaches are sealed and
/// also get no owner.
#[must_use]
pub const fn owner(reached_by_a: bool, reached_by_b: bool) -> Option<PlayerId> {
    match (reached_by_a, reached_by_b) {
        (true, false) => Some(PlayerId::A),
        (false, true) => Some(PlayerId::B),
        (true, true) | (false, false) => None,
    }
}

/// Tally of one resolve pass over the empty cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Empty cells enclosed by A.
    pub territory_a: usize,
    /// Empty cells enclosed by B.
    pub territory_b: usize,
    /// Empty cells both players reach.
    pub open: usize,
    /// Empty cells neither player reaches.
    pub sealed: usize,
}

impl Resolution {
    /// Territory count for `player`.
    #[must_use]
    pub const fn territory(&self, player: PlayerId) -> usize {
        match player {
            PlayerId::A => self.territory_a,
            PlayerId::B => self.territory_b,
        }
    }

    /// Total empty cells seen.
    #[must_use]
    pub const fn empty_cells(&self) -> usize {
        self.territory_a + self.territory_b + self.open + self.sealed
    }

    /// Same tally with A and B exchanged.
    #[must_use]
    pub const fn swapped(self) -> Self {
        Self {
            territory_a: self.territory_b,
            territory_b: self.territory_a,
            ..self
        }
    }
}

/// Rewrite every cell's territory from the two reachability sets.
///
/// Occupied cells are cleared; empty cells take [`owner`].
pub(crate) fn assign(
    grid: &mut Grid,
    reach_a: &ReachabilitySet,
    reach_b: &ReachabilitySet,
) -> Resolution {
    let mut resolution = Resolution::default();
    let reached = reach_a.as_slice().iter().zip(reach_b.as_slice());

    for (cell, (&by_a, &by_b)) in grid.cells_mut().iter_mut().zip(reached) {
        if cell.occupant.is_some() {
            cell.territory = None;
            continue;
        }

        cell.territory = owner(by_a, by_b);
        match (by_a, by_b) {
            (true, false) => resolution.territory_a += 1,
            (false, true) => resolution.territory_b += 1,
            (true, true) => resolution.open += 1,
            (false, false) => resolution.sealed += 1,
        }
    }

    resolution
}
