//! Command implementations

pub mod build;

pub use build::{BuildOptions, BuildOutcome, run_build};
