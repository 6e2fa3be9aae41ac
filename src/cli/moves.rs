//! Move ranking command implementation.

use super::output::{JsonMoves, format_moves};
use super::{CliError, OutputFormat, configure_threads, load_board};
use encircle::PlayerId;
use encircle::analysis::evaluate_moves;
use std::path::Path;

/// Execute the moves command.
///
/// # Errors
///
/// Returns an error if the board cannot be read or parsed.
pub(crate) fn execute(
    board: &Path,
    player: PlayerId,
    top: usize,
    threads: Option<usize>,
    format: OutputFormat,
) -> Result<(), CliError> {
    configure_threads(threads);

    let grid = load_board(board)?;
    let mut moves = evaluate_moves(&grid, player);
    let candidates = moves.len();
    moves.truncate(top);

    match format {
        OutputFormat::Text => {
            print!("{}", format_moves(player, candidates, &moves));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonMoves {
                player,
                candidates,
                moves,
            })?;
            println!("{json}");
        }
    }

    Ok(())
}
