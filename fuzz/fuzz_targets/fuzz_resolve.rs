#![no_main]

//! Resolve fuzzer.
//!
//! Builds a board from a sequence of placements, resolving after each one
//! the way a game would, and checks after every resolve that:
//! 1. Occupants are never changed
//! 2. Occupied cells carry no territory
//! 3. A second resolve changes nothing
//! 4. Swapping the players swaps the result

use arbitrary::Arbitrary;
use encircle::board::check_invariants;
use encircle::{Coord, Grid, PlayerId, resolve, resolved};
use libfuzzer_sys::fuzz_target;

/// A fuzzer-generated placement.
#[derive(Arbitrary, Debug, Clone, Copy)]
struct Placement {
    row: u8,
    col: u8,
    second_player: bool,
}

/// Structured input for resolve fuzzing.
#[derive(Arbitrary, Debug)]
struct ResolveInput {
    /// Board side length (reduced to 1..=16).
    size: u8,
    /// Placements to attempt; illegal ones are skipped.
    placements: Vec<Placement>,
}

fuzz_target!(|input: ResolveInput| {
    let size = u16::from(input.size % 16) + 1;
    let Ok(mut grid) = Grid::new(size) else {
        return;
    };

    for placement in input.placements.iter().take(512) {
        let coord = Coord::new(u16::from(placement.row), u16::from(placement.col));
        let player = if placement.second_player { PlayerId::B } else { PlayerId::A };
        if grid.place(coord, player).is_err() {
            continue;
        }

        let occupants: Vec<_> = grid.cells().iter().map(|c| c.occupant).collect();
        let first = resolve(&mut grid);

        let after: Vec<_> = grid.cells().iter().map(|c| c.occupant).collect();
        assert_eq!(occupants, after, "resolve changed an occupant");
        assert!(
            grid.cells().iter().all(|c| c.occupant.is_none() || c.territory.is_none()),
            "occupied cell carries territory"
        );

        let (again, second) = resolved(&grid);
        assert_eq!(again, grid, "resolve is not idempotent");
        assert_eq!(first, second);

        let (mirrored, mirrored_resolution) = resolved(&grid.with_players_swapped());
        assert_eq!(mirrored, grid.with_players_swapped(), "resolve favours one player");
        assert_eq!(mirrored_resolution, first.swapped());
    }

    let violations = check_invariants(&grid);
    assert!(violations.is_empty(), "Invariants violated: {violations:?}");
});
