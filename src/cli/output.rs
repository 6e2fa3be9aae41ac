//! Output formatting utilities for CLI.

// Allow format! with push_str for readability
#![allow(clippy::format_push_string)]

use encircle::analysis::MoveEvaluation;
use encircle::notation::board_rows;
use encircle::sweep::{SweepConfig, SweepStats};
use encircle::{Grid, PlayerId, Resolution};
use serde::Serialize;

/// JSON-serializable resolved board.
#[derive(Debug, Serialize)]
pub(super) struct JsonBoard {
    /// Side length.
    pub(super) size: u16,
    /// One string per row, in board notation.
    pub(super) rows: Vec<String>,
    /// Ownership tally.
    pub(super) resolution: Resolution,
}

impl JsonBoard {
    /// Create from a resolved grid.
    pub(super) fn new(grid: &Grid, resolution: Resolution) -> Self {
        Self {
            size: grid.size(),
            rows: board_rows(grid),
            resolution,
        }
    }
}

/// JSON-serializable move ranking.
#[derive(Debug, Serialize)]
pub(super) struct JsonMoves {
    /// Player to move.
    pub(super) player: PlayerId,
    /// Legal placements considered.
    pub(super) candidates: usize,
    /// Best moves first.
    pub(super) moves: Vec<MoveEvaluation>,
}

/// JSON-serializable sweep result.
#[derive(Debug, Serialize)]
pub(super) struct JsonSweep {
    /// Starting seed.
    pub(super) seed: u64,
    /// Board side length.
    pub(super) size: u16,
    /// Placements per game.
    pub(super) moves: u32,
    /// Aggregated statistics.
    pub(super) stats: SweepStats,
    /// Mean A territory per game.
    pub(super) mean_territory_a: f64,
    /// Mean B territory per game.
    pub(super) mean_territory_b: f64,
}

impl JsonSweep {
    /// Create from sweep statistics.
    pub(super) fn from_stats(stats: SweepStats, config: &SweepConfig) -> Self {
        Self {
            seed: config.seed,
            size: config.size,
            moves: config.moves,
            mean_territory_a: stats.mean_territory(PlayerId::A),
            mean_territory_b: stats.mean_territory(PlayerId::B),
            stats,
        }
    }
}

/// Format an ownership tally as human-readable text.
pub(super) fn format_resolution(resolution: &Resolution) -> String {
    format!(
        "Territory A: {}\nTerritory B: {}\nOpen:        {}\nSealed:      {}\n",
        resolution.territory_a, resolution.territory_b, resolution.open, resolution.sealed
    )
}

/// Format a move ranking as human-readable text.
pub(super) fn format_moves(player: PlayerId, candidates: usize, moves: &[MoveEvaluation]) -> String {
    let mut output = format!("Moves for {player} ({candidates} candidates)\n");
    if moves.is_empty() {
        output.push_str("  No empty cells\n");
        return output;
    }

    for (rank, evaluation) in moves.iter().enumerate() {
        let coord = evaluation.coord.to_string();
        output.push_str(&format!(
            "  {:>3}. {coord:<10} swing {:+}  (A {} / B {})\n",
            rank + 1,
            evaluation.swing,
            evaluation.after.territory_a,
            evaluation.after.territory_b,
        ));
    }

    output
}

/// Format sweep statistics as human-readable text.
// Game counts stay well below 2^52
#[allow(clippy::cast_precision_loss)]
pub(super) fn format_sweep(stats: &SweepStats, config: &SweepConfig) -> String {
    let mut output = String::new();
    let games = stats.games_played.max(1) as f64;

    output.push_str(&format!(
        "Sweep: {} games on {}x{} with {} moves (seed {})\n\n",
        stats.games_played, config.size, config.size, config.moves, config.seed
    ));
    output.push_str(&format!(
        "  A ahead: {:>6} ({:.1}%)\n",
        stats.a_ahead,
        stats.a_ahead as f64 * 100.0 / games
    ));
    output.push_str(&format!(
        "  B ahead: {:>6} ({:.1}%)\n",
        stats.b_ahead,
        stats.b_ahead as f64 * 100.0 / games
    ));
    output.push_str(&format!(
        "  Level:   {:>6} ({:.1}%)\n\n",
        stats.level,
        stats.level as f64 * 100.0 / games
    ));
    output.push_str(&format!(
        "  Mean territory: A {:.2}, B {:.2}\n",
        stats.mean_territory(PlayerId::A),
        stats.mean_territory(PlayerId::B)
    ));
    output.push_str(&format!(
        "  Games with sealed cells: {} ({} cells total)\n",
        stats.games_with_sealed, stats.totals.sealed
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use encircle::Coord;

    #[test]
    fn test_format_resolution() {
        let text = format_resolution(&Resolution {
            territory_a: 2,
            territory_b: 0,
            open: 5,
            sealed: 1,
        });
        assert!(text.contains("Territory A: 2"));
        assert!(text.contains("Sealed:      1"));
    }

    #[test]
    fn test_format_moves() {
        let evaluation = MoveEvaluation {
            coord: Coord::new(0, 2),
            player: PlayerId::A,
            after: Resolution {
                territory_a: 2,
                ..Resolution::default()
            },
            swing: 2,
        };
        let text = format_moves(PlayerId::A, 17, &[evaluation]);
        assert!(text.starts_with("Moves for A (17 candidates)"));
        assert!(text.contains("1. (0, 2)"));
        assert!(text.contains("swing +2"));
        assert!(format_moves(PlayerId::B, 0, &[]).contains("No empty cells"));
    }

    #[test]
    fn test_json_board() {
        let grid = encircle::notation::parse_board("A.\n.B").unwrap();
        let json = serde_json::to_value(JsonBoard::new(&grid, Resolution::default())).unwrap();
        assert_eq!(json["size"], 2);
        assert_eq!(json["rows"][0], "A.");
        assert_eq!(json["resolution"]["open"], 0);
    }
}
