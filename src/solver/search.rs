//! Minimax guess selection
//!
//! Scans the entire guess universe (all 1296 codes, repeats included, even
//! when the secret universe forbids them — a guess may legally repeat
//! symbols) and picks the guess minimizing the worst-case bucket size,
//! breaking ties by the larger (hit-weight, blow-weight) score and then by
//! the earliest position in the enumeration order.

use super::partition::{BuildError, Partition};
use crate::codespace::ALL_CODES;
use crate::core::Code;
use rayon::prelude::*;
use std::cmp::Reverse;

/// Select the minimax-best guess for a candidate set
///
/// Returns the winning guess and its partition of `candidates`.
///
/// The scan is parallel but the reduction key `(worst, Reverse(score),
/// enumeration index)` makes the result identical to a sequential
/// first-best-wins scan in lexicographic guess order.
///
/// # Errors
/// Returns `BuildError::EmptyCandidateSet` if `candidates` is empty.
pub fn select_best_guess(candidates: &[Code]) -> Result<(Code, Partition), BuildError> {
    if candidates.is_empty() {
        return Err(BuildError::EmptyCandidateSet);
    }

    let (_, guess) = ALL_CODES
        .par_iter()
        .enumerate()
        .map(|(index, guess)| {
            // Non-empty input, so the partition cannot fail
            let partition = Partition::compute(guess, candidates)?;
            Ok(((partition.worst(), Reverse(partition.score()), index), guess))
        })
        .collect::<Result<Vec<_>, BuildError>>()?
        .into_iter()
        .min_by_key(|(key, _)| *key)
        .ok_or(BuildError::EmptyCandidateSet)?;

    let partition = Partition::compute(guess, candidates)?;
    Ok((*guess, partition))
}
