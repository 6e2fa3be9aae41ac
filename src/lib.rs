// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Encircle: territory resolution for two-player enclosure grid games.
//!
//! Two players take turns placing pieces on a square grid. An empty cell
//! belongs to a player when the opponent cannot reach it from the edge of
//! the board, walking up, down, left and right through empty cells and
//! their own pieces.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Analysis / Sweep (rayon)          │
//! ├─────────────────────────────────────┤
//! │   Territory engine                  │
//! │   reachability → ownership          │
//! ├─────────────────────────────────────┤
//! │   Board: grid, cells, players       │
//! └─────────────────────────────────────┘
//! ```
//!
//! The engine is stateless: callers own the [`Grid`], place pieces with
//! [`Grid::place`], then call [`resolve`] to refresh every territory mark.
//!
//! ```
//! use encircle::{Coord, Grid, PlayerId, resolve};
//!
//! let mut grid = Grid::new(3).unwrap();
//! for coord in [Coord::new(0, 1), Coord::new(1, 0), Coord::new(1, 2), Coord::new(2, 1)] {
//!     grid.place(coord, PlayerId::A).unwrap();
//! }
//! let resolution = resolve(&mut grid);
//! assert_eq!(grid.territory(Coord::new(1, 1)), Some(PlayerId::A));
//! assert_eq!(resolution.territory_a, 1);
//! ```

pub mod analysis;
pub mod board;
pub mod error;
pub mod notation;
pub mod sweep;
pub mod territory;

pub use error::{GridError, GridResult};

// Re-export key types at crate root for convenience
pub use board::{Cell, Coord, Grid, PlayerId};
pub use territory::{Resolution, resolve, resolved};
