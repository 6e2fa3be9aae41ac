//! Parallel evaluation of independent boards.
//!
//! Every board here is a private copy, so each resolve runs on its own
//! rayon worker with nothing shared between them.

// Territory counts are bounded by u16::MAX squared and fit an i64
#![allow(clippy::cast_possible_wrap)]

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::board::{Coord, Grid, PlayerId};
use crate::territory::{Resolution, resolve, resolved};

/// Outcome of placing one piece on a copy of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveEvaluation {
    /// Where the piece goes.
    pub coord: Coord,
    /// Who places it.
    pub player: PlayerId,
    /// Resolution of the board after the move.
    pub after: Resolution,
    /// Own territory gained plus opponent territory removed.
    pub swing: i64,
}

/// Resolve many independent grids in parallel.
///
/// Results are in the same order as `grids`.
pub fn resolve_all(grids: &mut [Grid]) -> Vec<Resolution> {
    debug!(grids = grids.len(), "resolving batch");
    grids.par_iter_mut().map(resolve).collect()
}

/// Score every legal placement for `player`.
///
/// Each empty cell is tried on its own copy of `grid`. The result is
/// sorted best first: highest swing, then lowest coordinate.
#[must_use]
pub fn evaluate_moves(grid: &Grid, player: PlayerId) -> Vec<MoveEvaluation> {
    let (_, before) = resolved(grid);
    let candidates: Vec<Coord> = grid.empty_cells().collect();
    debug!(
        candidates = candidates.len(),
        player = %player,
        "evaluating moves"
    );

    let mut evaluations: Vec<MoveEvaluation> = candidates
        .into_par_iter()
        .filter_map(|coord| {
            let mut copy = grid.clone();
            copy.place(coord, player).ok()?;
            let after = resolve(&mut copy);
            Some(MoveEvaluation {
                coord,
                player,
                after,
                swing: swing(&before, &after, player),
            })
        })
        .collect();

    evaluations.sort_by(|a, b| b.swing.cmp(&a.swing).then(a.coord.cmp(&b.coord)));
    evaluations
}

/// The highest-swing placement for `player`, if any cell is empty.
#[must_use]
pub fn best_move(grid: &Grid, player: PlayerId) -> Option<MoveEvaluation> {
    evaluate_moves(grid, player).into_iter().next()
}

fn swing(before: &Resolution, after: &Resolution, player: PlayerId) -> i64 {
    let own = after.territory(player) as i64 - before.territory(player) as i64;
    let opponent = player.opponent();
    let taken = before.territory(opponent) as i64 - after.territory(opponent) as i64;
    own + taken
}
