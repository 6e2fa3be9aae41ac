//! Seeded random games for exercising the engine at volume.
//!
//! A sweep plays many games of random alternating placements, resolves
//! each final position, and aggregates ownership statistics. Games are
//! independent and run in parallel with rayon.

// RNG math uses intentional truncating casts
#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::board::{DEFAULT_BOARD_SIZE, Grid, PlayerId};
use crate::error::GridResult;
use crate::territory::{Resolution, resolve};

/// Deterministic PRNG using xorshift64.
#[derive(Debug, Clone, Copy)]
struct Rng {
    state: u64,
}

impl Rng {
    /// Create a new RNG with the given seed.
    const fn new(seed: u64) -> Self {
        // Ensure non-zero state
        let state = if seed == 0 { 0x5555_5555_5555_5555 } else { seed };
        Self { state }
    }

    /// Generate next random u64.
    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate random index in [0, len). `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize {
        (self.next_u64() % len as u64) as usize
    }
}

/// Configuration for a sweep.
#[derive(Debug, Clone, Copy)]
pub struct SweepConfig {
    /// Number of games to play.
    pub games: u64,
    /// Board side length.
    pub size: u16,
    /// Placements per game, alternating A then B. Capped by the cell count.
    pub moves: u32,
    /// Seed of the first game; game `i` uses `seed + i`.
    pub seed: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            games: 1000,
            size: DEFAULT_BOARD_SIZE,
            moves: 40,
            seed: 0,
        }
    }
}

/// Play one random game and return the resolved final board.
///
/// A moves first. Each placement picks a uniformly random empty cell, and
/// the board is resolved after every placement as a real game would.
///
/// # Errors
///
/// Returns an error if `size` is zero.
pub fn play_random_game(seed: u64, size: u16, moves: u32) -> GridResult<(Grid, Resolution)> {
    let mut rng = Rng::new(seed);
    let mut grid = Grid::new(size)?;
    let mut resolution = resolve(&mut grid);
    let mut player = PlayerId::A;

    for _ in 0..moves {
        let empty: Vec<_> = grid.empty_cells().collect();
        if empty.is_empty() {
            break;
        }
        let coord = empty[rng.next_index(empty.len())];
        grid.place(coord, player)?;
        resolution = resolve(&mut grid);
        player = player.opponent();
    }

    Ok((grid, resolution))
}

/// Aggregate statistics across sweep games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SweepStats {
    /// Games completed.
    pub games_played: u64,
    /// Games where A held more territory.
    pub a_ahead: u64,
    /// Games where B held more territory.
    pub b_ahead: u64,
    /// Games with equal territory.
    pub level: u64,
    /// Games whose final board had at least one sealed cell.
    pub games_with_sealed: u64,
    /// Sum of per-game tallies.
    pub totals: SweepTotals,
}

/// Summed cell counts across games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SweepTotals {
    /// A territory cells.
    pub territory_a: u64,
    /// B territory cells.
    pub territory_b: u64,
    /// Open cells.
    pub open: u64,
    /// Sealed cells.
    pub sealed: u64,
}

impl SweepStats {
    /// Record one game's final resolution.
    pub fn add_result(&mut self, resolution: &Resolution) {
        self.games_played += 1;
        match resolution.territory_a.cmp(&resolution.territory_b) {
            std::cmp::Ordering::Greater => self.a_ahead += 1,
            std::cmp::Ordering::Less => self.b_ahead += 1,
            std::cmp::Ordering::Equal => self.level += 1,
        }
        if resolution.sealed > 0 {
            self.games_with_sealed += 1;
        }
        self.totals.territory_a += resolution.territory_a as u64;
        self.totals.territory_b += resolution.territory_b as u64;
        self.totals.open += resolution.open as u64;
        self.totals.sealed += resolution.sealed as u64;
    }

    /// Merge another accumulator into this one.
    pub fn merge(&mut self, other: &SweepStats) {
        self.games_played += other.games_played;
        self.a_ahead += other.a_ahead;
        self.b_ahead += other.b_ahead;
        self.level += other.level;
        self.games_with_sealed += other.games_with_sealed;
        self.totals.territory_a += other.totals.territory_a;
        self.totals.territory_b += other.totals.territory_b;
        self.totals.open += other.totals.open;
        self.totals.sealed += other.totals.sealed;
    }

    /// Mean territory per game for `player`.
    #[must_use]
    pub fn mean_territory(&self, player: PlayerId) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        let total = match player {
            PlayerId::A => self.totals.territory_a,
            PlayerId::B => self.totals.territory_b,
        };
        total as f64 / self.games_played as f64
    }
}

/// Play and resolve every game in the sweep in parallel.
///
/// `on_game` is called once per finished game, from worker threads.
/// Accumulates per thread and merges at the end, so the hot path takes
/// no locks.
///
/// # Errors
///
/// Returns an error if `config.size` is zero.
pub fn run_sweep<F>(config: &SweepConfig, on_game: F) -> GridResult<SweepStats>
where
    F: Fn() + Sync,
{
    // Validate once up front; every game below uses the same size.
    Grid::new(config.size)?;
    debug!(games = config.games, size = config.size, moves = config.moves, "starting sweep");

    let stats = (0..config.games)
        .into_par_iter()
        .fold(SweepStats::default, |mut local, i| {
            let seed = config.seed.wrapping_add(i);
            if let Ok((_, resolution)) = play_random_game(seed, config.size, config.moves) {
                local.add_result(&resolution);
            }
            on_game();
            local
        })
        .reduce(SweepStats::default, |mut a, b| {
            a.merge(&b);
            a
        });

    Ok(stats)
}
