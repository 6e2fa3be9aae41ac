//! Board layer for encircle.
//!
//! Holds the caller-owned game board:
//! - Square grid of cells, each with an occupant and a territory mark
//! - The two player identities
//! - Placement of pieces on empty cells
//! - Invariant checks over a resolved board

mod grid;
mod invariants;
mod player;

pub use grid::{Cell, Coord, DEFAULT_BOARD_SIZE, Grid};
pub use invariants::{InvariantViolation, assert_invariants, check_invariants};
pub use player::PlayerId;
