//! End-to-end territory scenarios on text boards.
//!
//! Each test builds a position in board notation, resolves it, and checks
//! the ownership of specific cells.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use encircle::board::check_invariants;
use encircle::notation::{parse_board, render_board};
use encircle::{Cell, Coord, Grid, PlayerId, resolve};

fn resolve_text(text: &str) -> Grid {
    let mut grid = parse_board(text).unwrap();
    resolve(&mut grid);
    grid
}

#[test]
fn test_open_board_every_size() {
    for size in 1..=12u16 {
        let mut grid = Grid::new(size).unwrap();
        let resolution = resolve(&mut grid);
        assert_eq!(resolution.open, usize::from(size) * usize::from(size));
        assert_eq!(resolution.territory_a + resolution.territory_b + resolution.sealed, 0);
    }
}

#[test]
fn test_five_by_five_ring() {
    let grid = resolve_text(
        ". . . . .
         . A A A .
         . A . A .
         . A A A .
         . . . . .",
    );

    assert_eq!(grid.territory(Coord::new(2, 2)), Some(PlayerId::A));
    for (row, col) in [(1, 1), (1, 2), (1, 3), (2, 1), (2, 3), (3, 1), (3, 2), (3, 3)] {
        let coord = Coord::new(row, col);
        assert_eq!(grid.get(coord), Some(&Cell::occupied(PlayerId::A)), "ring {coord}");
    }
    assert_eq!(grid.count_territory(PlayerId::A), 1);
}

#[test]
fn test_corner_pocket_against_edge() {
    // B walls off the top-left corner using the board edge; the corner
    // cells are still boundary seeds for A, so the pocket stays open.
    let grid = resolve_text(
        ". . B .
         . . B .
         B B B .
         . . . .",
    );
    for coord in [Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 0), Coord::new(1, 1)] {
        assert_eq!(grid.territory(coord), None, "{coord}");
    }
}

#[test]
fn test_interior_region_of_several_cells() {
    let grid = resolve_text(
        ". . . . . .
         . B B B B .
         . B . . B .
         . B . . B .
         . B B B B .
         . . . . . .",
    );
    assert_eq!(grid.count_territory(PlayerId::B), 4);
    assert_eq!(grid.territory(Coord::new(2, 2)), Some(PlayerId::B));
    assert_eq!(grid.territory(Coord::new(3, 3)), Some(PlayerId::B));
    assert_eq!(grid.territory(Coord::new(0, 0)), None);
}

#[test]
fn test_opponent_piece_inside_breaks_nothing_without_a_path() {
    // A B piece sitting inside A's ring has no route to the edge, so the
    // remaining empty cells inside are still A's.
    let grid = resolve_text(
        ". . . . . .
         . A A A A .
         . A B . A .
         . A . . A .
         . A A A A .
         . . . . . .",
    );
    assert_eq!(grid.territory(Coord::new(2, 3)), Some(PlayerId::A));
    assert_eq!(grid.territory(Coord::new(3, 2)), Some(PlayerId::A));
    assert_eq!(grid.territory(Coord::new(2, 2)), None);
    assert_eq!(grid.count_territory(PlayerId::A), 3);
}

#[test]
fn test_diagonal_gaps_do_not_leak() {
    // The diamond's pieces touch only at corners, but reach moves
    // orthogonally and cannot slip between them.
    let grid = resolve_text(
        ". . . . .
         . . A . .
         . A . A .
         . . A . .
         . . . . .",
    );
    assert_eq!(grid.territory(Coord::new(2, 2)), Some(PlayerId::A));
    assert_eq!(grid.count_territory(PlayerId::A), 1);
}

#[test]
fn test_unreachable_by_both_has_no_owner() {
    // A ring of A inside a ring of B. A cannot get past B's ring, and B
    // cannot get past A's ring, so the center is reachable by neither.
    let text = ". . . . . . .
                . B B B B B .
                . B A A A B .
                . B A . A B .
                . B A A A B .
                . B B B B B .
                . . . . . . .";
    let mut grid = parse_board(text).unwrap();
    let resolution = resolve(&mut grid);

    assert_eq!(grid.territory(Coord::new(3, 3)), None);
    assert_eq!(resolution.sealed, 1);
    assert_eq!(resolution.territory_a, 0);
    assert_eq!(resolution.territory_b, 0);
    assert!(check_invariants(&grid).is_empty());
}

#[test]
fn test_place_then_resolve_flow() {
    let mut grid = Grid::new(3).unwrap();
    let moves = [
        (Coord::new(0, 1), PlayerId::A),
        (Coord::new(2, 2), PlayerId::B),
        (Coord::new(1, 0), PlayerId::A),
        (Coord::new(0, 2), PlayerId::B),
        (Coord::new(1, 2), PlayerId::A),
        (Coord::new(2, 0), PlayerId::B),
    ];
    for (coord, player) in moves {
        grid.place(coord, player).unwrap();
        resolve(&mut grid);
        assert!(check_invariants(&grid).is_empty());
    }
    assert_eq!(grid.territory(Coord::new(1, 1)), None);

    grid.place(Coord::new(2, 1), PlayerId::A).unwrap();
    resolve(&mut grid);
    assert_eq!(grid.territory(Coord::new(1, 1)), Some(PlayerId::A));
    // Corner (0, 0) sits on the edge, so it stays open despite A's neighbours
    assert_eq!(grid.territory(Coord::new(0, 0)), None);

    // Playing into enclosed territory clears the mark on that cell
    grid.place(Coord::new(1, 1), PlayerId::B).unwrap();
    resolve(&mut grid);
    assert_eq!(grid.get(Coord::new(1, 1)), Some(&Cell::occupied(PlayerId::B)));
    assert!(check_invariants(&grid).is_empty());
}

#[test]
fn test_render_after_resolve() {
    let grid = resolve_text(
        ". B .
         B . B
         . B .",
    );
    assert_eq!(render_board(&grid), ". B .\nB b B\n. B .\n");
}
