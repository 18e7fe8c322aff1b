//! Strategy tree construction
//!
//! A `StrategyNode` owns a candidate set and, when that set holds more than
//! one code, a chosen guess plus one child per feedback the guess can
//! produce. Construction is eager: building the root builds the entire tree.
//! Following the tree at play time needs no further search — observe the
//! feedback for the node's guess and descend into the child keyed by it.

use super::partition::{BuildError, Partition};
use super::search::select_best_guess;
use crate::core::{Code, Feedback};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One node of the minimax strategy tree
///
/// Invariants:
/// - a node is a leaf iff it holds exactly one candidate and no guess;
/// - an internal node's children partition its candidate set exactly;
/// - candidate-set size strictly decreases along any root-to-leaf path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyNode {
    pub(crate) candidates: Vec<Code>,
    pub(crate) guess: Option<Code>,
    pub(crate) children: Vec<(Feedback, StrategyNode)>,
}

impl StrategyNode {
    /// Build the full strategy tree for a candidate set
    ///
    /// - One candidate: the node is a leaf.
    /// - Two candidates: guess the first one. It resolves the pair in one
    ///   step — against itself it yields `(4, 0)`, and no distinct code can
    ///   produce `(4, 0)` against the same guess.
    /// - More: scan the entire guess universe for the minimax-best guess and
    ///   recurse into every feedback bucket.
    ///
    /// # Errors
    /// Returns `BuildError::EmptyCandidateSet` if `candidates` is empty.
    pub fn build(candidates: Vec<Code>) -> Result<Self, BuildError> {
        match candidates.len() {
            0 => Err(BuildError::EmptyCandidateSet),
            1 => Ok(Self {
                candidates,
                guess: None,
                children: Vec::new(),
            }),
            2 => {
                let guess = candidates[0];
                let partition = Partition::compute(&guess, &candidates)?;
                Self::from_partition(candidates, guess, partition)
            }
            _ => {
                let (guess, partition) = select_best_guess(&candidates)?;
                Self::from_partition(candidates, guess, partition)
            }
        }
    }

    fn from_partition(
        candidates: Vec<Code>,
        guess: Code,
        partition: Partition,
    ) -> Result<Self, BuildError> {
        let mut children = Vec::with_capacity(partition.buckets().len());
        for (feedback, bucket) in partition.into_buckets() {
            children.push((feedback, Self::build(bucket)?));
        }
        Ok(Self {
            candidates,
            guess: Some(guess),
            children,
        })
    }

    /// The candidate set this node represents
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    /// The chosen guess; present iff the node is internal
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> Option<Code> {
        self.guess
    }

    /// Children in creation order, keyed by feedback
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[(Feedback, StrategyNode)] {
        &self.children
    }

    /// Whether this node is a leaf (a single resolved candidate)
    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.guess.is_none()
    }

    /// The child to descend into after observing `feedback` for this node's
    /// guess, or `None` on a leaf or an unreachable feedback
    #[must_use]
    pub fn child(&self, feedback: Feedback) -> Option<&StrategyNode> {
        self.children
            .iter()
            .find(|(key, _)| *key == feedback)
            .map(|(_, child)| child)
    }

    /// Maximum number of guesses on any path below this node
    ///
    /// A leaf has depth 0; an internal node adds one guess on top of its
    /// deepest child.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.children
            .iter()
            .map(|(_, child)| child.max_depth())
            .max()
            .map_or(0, |deepest| deepest + 1)
    }
}

impl fmt::Display for StrategyNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::output::render(self))
    }
}
