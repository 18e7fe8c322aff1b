//! Minimax strategy tree construction
//!
//! Partitioning of candidate sets by feedback, the minimax guess scan, and
//! the eager recursive tree builder.

mod partition;
mod search;
mod tree;

pub use partition::{BuildError, Partition};
pub use search::select_best_guess;
pub use tree::StrategyNode;
