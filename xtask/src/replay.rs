//! xtask replay: recompute coverage from a captured trace log.
//!
//! Replays every cycle of the log against the selected display and prints the
//! recomputed coverage next to the percent recorded at capture time. Cycles
//! where the two differ are highlighted.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use coverage_trace::replay::{replay_log, ReplayOutcome};

use crate::geometry::DisplayArgs;

/// Entry point called from main.rs
pub fn run(log: &Path, display: &DisplayArgs, json: bool) -> Result<()> {
    let geometry = display.resolve()?;
    tracing::debug!(path = %log.display(), total_area = geometry.total_area(), "Replaying trace log");
    let text = std::fs::read_to_string(log).with_context(|| format!("Failed to read {}", log.display()))?;
    let outcomes = replay_log(geometry, &text).with_context(|| format!("Failed to replay {}", log.display()))?;

    if json {
        for outcome in &outcomes {
            println!("{}", serde_json::to_string(outcome)?);
        }
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "Replaying {} on {}×{} {} (drawable area {} px)",
            log.display(),
            geometry.width,
            geometry.height,
            geometry.shape,
            geometry.total_area()
        )
        .cyan()
        .bold()
    );
    for outcome in &outcomes {
        println!("{}", format_outcome(outcome));
    }

    let diverging = outcomes.iter().filter(|o| o.diverges()).count();
    if diverging > 0 {
        println!("{}", format!("{diverging} cycle(s) differ from the recorded coverage").yellow());
    }
    Ok(())
}

fn format_outcome(outcome: &ReplayOutcome) -> String {
    let recorded = outcome
        .recorded_percent
        .map_or_else(|| "-".to_string(), |p| format!("{p}%"));
    let line = format!(
        "  {:>4}  {:>4} ops  {:>9} px  {:>3}%  (recorded {})",
        outcome.cycle_index, outcome.operations, outcome.area_drawn, outcome.coverage_percent, recorded
    );
    if outcome.diverges() {
        line.yellow().to_string()
    } else {
        line
    }
}
