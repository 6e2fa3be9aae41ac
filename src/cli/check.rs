//! Board check command implementation.

use super::{CliError, load_board};
use encircle::board::check_invariants;
use std::path::Path;

/// Execute the check command.
///
/// # Errors
///
/// Returns an error if the board cannot be read, or if any territory mark
/// disagrees with a fresh resolve.
pub(crate) fn execute(board: &Path) -> Result<(), CliError> {
    let grid = load_board(board)?;

    println!("Checking: {}", board.display());
    println!("  Size: {0}x{0}", grid.size());
    println!();

    let violations = check_invariants(&grid);
    if violations.is_empty() {
        print_check("Territory marks", true);
        println!();
        println!("Board is consistent.");
        return Ok(());
    }

    print_check("Territory marks", false);
    for violation in &violations {
        println!("    - {}", violation.message);
    }

    Err(CliError::new(format!(
        "{} invariant violation(s) in {}",
        violations.len(),
        board.display()
    )))
}

fn print_check(name: &str, ok: bool) {
    let status = if ok { "OK" } else { "FAILED" };
    let symbol = if ok { "✓" } else { "✗" };
    println!("  {symbol} {name}: {status}");
}
