//! Resolve command implementation.

use super::output::{JsonBoard, format_resolution};
use super::{CliError, OutputFormat, load_board};
use encircle::notation::render_board;
use encircle::resolve;
use std::path::Path;

/// Execute the resolve command.
///
/// # Errors
///
/// Returns an error if the board cannot be read or parsed.
pub(crate) fn execute(board: &Path, format: OutputFormat) -> Result<(), CliError> {
    let mut grid = load_board(board)?;
    let resolution = resolve(&mut grid);

    match format {
        OutputFormat::Text => {
            print!("{}", render_board(&grid));
            println!();
            print!("{}", format_resolution(&resolution));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonBoard::new(&grid, resolution))?;
            println!("{json}");
        }
    }

    Ok(())
}
