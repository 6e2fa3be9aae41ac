//! Board invariants - sanity checks that detect bugs.
//!
//! After a resolve these should NEVER trigger. A board loaded from outside
//! (a file, a hand-built grid) may break them, which is how stale or forged
//! territory marks are caught.

use crate::board::{Grid, PlayerId};
use crate::territory::resolved;

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all board invariants.
///
/// Returns a list of violations found, or empty if all invariants hold:
/// - an occupied cell never carries territory
/// - every territory mark matches what a fresh resolve would write
#[must_use]
pub fn check_invariants(grid: &Grid) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    for (coord, cell) in grid.iter() {
        if let (Some(occupant), Some(territory)) = (cell.occupant, cell.territory) {
            violations.push(InvariantViolation {
                message: format!(
                    "Cell {coord} is occupied by {occupant} but marked as {territory} territory"
                ),
            });
        }
    }

    let (fresh, _) = resolved(grid);
    for ((coord, cell), expected) in grid.iter().zip(fresh.cells()) {
        if cell.is_empty() && cell.territory != expected.territory {
            violations.push(InvariantViolation {
                message: format!(
                    "Cell {coord} is marked {} but resolves to {}",
                    describe(cell.territory),
                    describe(expected.territory)
                ),
            });
        }
    }

    violations
}

fn describe(territory: Option<PlayerId>) -> String {
    territory.map_or_else(|| "no owner".to_string(), |player| format!("{player} territory"))
}

/// Assert all board invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(grid: &Grid) {
    let violations = check_invariants(grid);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Board invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_grid: &Grid) {}
