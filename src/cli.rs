//! CLI interface for Waypoint.
//!
//! Running `waypoint` with no subcommand opens the interactive
//! onboarding TUI. The subcommands are non-interactive: arguments in,
//! structured output out, for scripts and quick checks.

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::model::StepId;
use crate::sequencer::Sequencer;
use crate::storage::Storage;
use crate::tui;

/// Waypoint — guided onboarding.
#[derive(Debug, Parser)]
#[command(name = "waypoint")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print onboarding progress: one line per step, plus the total.
    Status,

    /// Archive the current onboarding record and start over.
    ///
    /// The old record stays inspectable under the archive directory;
    /// the next run begins at the first step.
    Reset,
}

/// Run the CLI, returning an error message on failure.
pub fn run(config: &Config, storage: &Storage) -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        None => tui::run(config, storage).map_err(|e| format!("terminal error: {e}")),
        Some(Command::Status) => cmd_status(storage),
        Some(Command::Reset) => cmd_reset(storage),
    }
}

fn cmd_status(storage: &Storage) -> Result<(), String> {
    let sequencer =
        Sequencer::load_or_start(storage).map_err(|e| format!("failed to load progress: {e}"))?;

    for step in StepId::ALL {
        let mark = if sequencer.is_completed(step) {
            "done"
        } else if step == sequencer.current_step() {
            "current"
        } else if sequencer.can_navigate_to(step) {
            "available"
        } else {
            "locked"
        };
        println!("{:<12} {}", step.slug(), mark);
    }

    let progress = sequencer.step_progress();
    println!("\n{}% complete", progress.percentage.round());
    Ok(())
}

fn cmd_reset(storage: &Storage) -> Result<(), String> {
    let mut sequencer =
        Sequencer::load_or_start(storage).map_err(|e| format!("failed to load progress: {e}"))?;

    let old_id = sequencer.progress().id;
    sequencer.dismiss();
    println!("archived {old_id}");
    Ok(())
}
