//! Strategy tree build command
//!
//! Orchestrates the load-or-build flow: reuse an existing snapshot unless a
//! rebuild is forced, otherwise run the full minimax construction and save
//! the result. Status goes to stderr so stdout stays reserved for the
//! rendered tree.

use crate::codespace::{ALL_CODES, DISTINCT_CODES};
use crate::output::format_duration;
use crate::snapshot;
use crate::solver::StrategyNode;
use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::ProgressBar;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Configuration for the build command
#[derive(Debug)]
pub struct BuildOptions {
    /// Secret universe admits repeated symbols (1296 candidates vs 360)
    pub allow_repeats: bool,
    /// Rebuild even if a snapshot exists
    pub force: bool,
    /// Snapshot location
    pub snapshot: PathBuf,
}

/// Result of the build command
#[derive(Debug)]
pub struct BuildOutcome {
    pub root: StrategyNode,
    /// Whether the tree came from the snapshot instead of a fresh build
    pub loaded: bool,
    pub elapsed: Duration,
}

impl BuildOutcome {
    /// One-line summary for the stderr report: candidate count, universe
    /// mode, tree depth, source, and elapsed time
    #[must_use]
    pub fn summary(&self, allow_repeats: bool) -> String {
        let mode = if allow_repeats {
            "repeats allowed"
        } else {
            "distinct symbols"
        };
        let source = if self.loaded { "loaded" } else { "built" };
        format!(
            "{} candidates ({mode}), depth {}, {source} in {}",
            self.root.candidates().len(),
            self.root.max_depth(),
            format_duration(self.elapsed).trim()
        )
    }
}

/// Load the strategy tree from the snapshot, or build and save it
///
/// # Errors
///
/// Returns an error if:
/// - An existing snapshot cannot be read or parsed (pass `--force` to
///   rebuild instead of trusting it)
/// - The freshly built tree cannot be saved
pub fn run_build(options: &BuildOptions) -> Result<BuildOutcome> {
    let start = Instant::now();

    if snapshot::exists(&options.snapshot) && !options.force {
        eprintln!(
            "{} {}",
            "Loading snapshot".cyan(),
            options.snapshot.display()
        );
        let root = snapshot::load(&options.snapshot).with_context(|| {
            format!(
                "Failed to load snapshot {} (pass --force to rebuild)",
                options.snapshot.display()
            )
        })?;
        return Ok(BuildOutcome {
            root,
            loaded: true,
            elapsed: start.elapsed(),
        });
    }

    let candidates: Vec<_> = if options.allow_repeats {
        ALL_CODES.clone()
    } else {
        DISTINCT_CODES.clone()
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!(
        "Building strategy tree over {} candidates...",
        candidates.len()
    ));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let root = StrategyNode::build(candidates).context("Strategy tree construction failed")?;
    spinner.finish_and_clear();

    eprintln!(
        "{} {}",
        "Saving snapshot".cyan(),
        options.snapshot.display()
    );
    snapshot::save(&options.snapshot, &root).with_context(|| {
        format!("Failed to save snapshot {}", options.snapshot.display())
    })?;

    Ok(BuildOutcome {
        root,
        loaded: false,
        elapsed: start.elapsed(),
    })
}
