//! Hit & Blow strategy tree builder
//!
//! Computes an exhaustive minimax-optimal guessing strategy for the Hit &
//! Blow code-breaking game: 4-symbol codes over the alphabet 1-6, with
//! (hits, blows) feedback after every guess. The output is a complete
//! decision tree covering every reachable feedback sequence, so a player
//! following it needs no search at play time.
//!
//! # Quick Start
//!
//! ```rust
//! use hit_and_blow::core::{Code, Feedback};
//! use hit_and_blow::solver::StrategyNode;
//!
//! let candidates = vec![
//!     Code::new([1, 2, 3, 4]).unwrap(),
//!     Code::new([1, 2, 3, 5]).unwrap(),
//! ];
//!
//! let root = StrategyNode::build(candidates).unwrap();
//! assert_eq!(root.guess(), Some(Code::new([1, 2, 3, 4]).unwrap()));
//! assert_eq!(root.max_depth(), 1);
//! ```

// Core domain types
pub mod core;

// Candidate universes
pub mod codespace;

// Minimax tree construction
pub mod solver;

// Snapshot persistence
pub mod snapshot;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
