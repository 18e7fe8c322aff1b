//! Hit & Blow strategy tree builder - CLI
//!
//! Builds (or loads) the complete minimax decision tree for Hit & Blow and
//! prints its textual rendering to stdout.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use hit_and_blow::commands::{BuildOptions, run_build};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hit_and_blow",
    about = "Exhaustive minimax strategy tree builder for the Hit & Blow code-breaking game",
    version,
    author
)]
struct Cli {
    /// Rebuild the tree even if a snapshot exists
    #[arg(short, long)]
    force: bool,

    /// Snapshot location
    #[arg(short, long, default_value = "strategy.json")]
    snapshot: PathBuf,

    /// Allow repeated symbols in the secret universe (1296 candidates
    /// instead of 360)
    #[arg(short = 'd', long)]
    allow_repeats: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let options = BuildOptions {
        allow_repeats: cli.allow_repeats,
        force: cli.force,
        snapshot: cli.snapshot,
    };
    let outcome = run_build(&options)?;

    eprintln!(
        "{} {}",
        "Strategy tree:".cyan().bold(),
        outcome.summary(options.allow_repeats)
    );

    println!("{}", outcome.root);
    Ok(())
}
