//! Sweep command implementation.

use super::output::{JsonSweep, format_sweep};
use super::{CliError, OutputFormat, configure_threads};
use encircle::sweep::{SweepConfig, run_sweep};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;

/// Execute the sweep command.
///
/// # Errors
///
/// Returns an error if the board size is invalid.
#[allow(clippy::too_many_arguments)]
pub(crate) fn execute(
    games: u64,
    size: u16,
    moves: u32,
    seed: Option<u64>,
    threads: Option<usize>,
    format: OutputFormat,
    progress: bool,
) -> Result<(), CliError> {
    configure_threads(threads);

    // Base seed
    let seed = seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(42, |d| d.as_secs())
    });

    let config = SweepConfig {
        games,
        size,
        moves,
        seed,
    };

    // Progress bar
    let pb = if progress {
        let pb = ProgressBar::new(games);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} games ({per_sec})")
            .map_err(|e| CliError::new(format!("Invalid progress template: {e}")))?
            .progress_chars("=>-");
        pb.set_style(style);
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();
    let stats = run_sweep(&config, || {
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    })?;
    if let Some(pb) = pb {
        pb.finish_with_message("done");
    }
    let duration = start.elapsed();

    match format {
        OutputFormat::Text => {
            println!();
            print!("{}", format_sweep(&stats, &config));
            println!();
            println!("Duration: {:.2}s", duration.as_secs_f64());
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonSweep::from_stats(stats, &config))?;
            println!("{json}");
        }
    }

    Ok(())
}
