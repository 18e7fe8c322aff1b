//! Candidate partitioning by feedback
//!
//! Given a guess and a set of candidate secrets, groups the candidates by the
//! feedback each would produce against that guess. Bucket order is the order
//! in which each feedback value is first produced during the scan, which the
//! renderer relies on.

use crate::core::{Code, Feedback};
use rustc_hash::FxHashMap;

/// Error type for precondition violations in the solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// An empty candidate set was passed to the partitioner or the builder
    EmptyCandidateSet,
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCandidateSet => {
                write!(f, "Candidate set must be non-empty")
            }
        }
    }
}

impl std::error::Error for BuildError {}

/// Candidates grouped by the feedback they produce against a single guess
///
/// Buckets are disjoint and their concatenation equals the input candidate
/// set exactly; within a bucket, candidates keep their input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    buckets: Vec<(Feedback, Vec<Code>)>,
}

impl Partition {
    /// Group `candidates` by their feedback against `guess`
    ///
    /// # Errors
    /// Returns `BuildError::EmptyCandidateSet` if `candidates` is empty.
    ///
    /// # Examples
    /// ```
    /// use hit_and_blow::core::Code;
    /// use hit_and_blow::solver::Partition;
    ///
    /// let guess = Code::new([1, 2, 3, 4]).unwrap();
    /// let candidates = vec![guess, Code::new([1, 2, 3, 5]).unwrap()];
    ///
    /// let partition = Partition::compute(&guess, &candidates).unwrap();
    /// assert_eq!(partition.buckets().len(), 2);
    /// ```
    pub fn compute(guess: &Code, candidates: &[Code]) -> Result<Self, BuildError> {
        if candidates.is_empty() {
            return Err(BuildError::EmptyCandidateSet);
        }

        let mut buckets: Vec<(Feedback, Vec<Code>)> = Vec::new();
        let mut slots: FxHashMap<Feedback, usize> = FxHashMap::default();

        for &candidate in candidates {
            let feedback = Feedback::evaluate(guess, &candidate);
            let slot = *slots.entry(feedback).or_insert_with(|| {
                buckets.push((feedback, Vec::new()));
                buckets.len() - 1
            });
            buckets[slot].1.push(candidate);
        }

        Ok(Self { buckets })
    }

    /// The buckets in first-seen feedback order
    #[inline]
    #[must_use]
    pub fn buckets(&self) -> &[(Feedback, Vec<Code>)] {
        &self.buckets
    }

    /// Consume the partition, yielding the buckets
    #[inline]
    #[must_use]
    pub fn into_buckets(self) -> Vec<(Feedback, Vec<Code>)> {
        self.buckets
    }

    /// Size of the largest bucket — the worst-case number of candidates
    /// left indistinguishable after the guess
    #[must_use]
    pub fn worst(&self) -> usize {
        self.buckets
            .iter()
            .map(|(_, bucket)| bucket.len())
            .max()
            .unwrap_or(0)
    }

    /// Tie-break score: (hit-weighted, blow-weighted) bucket-size sums,
    /// compared lexicographically with larger being better
    #[must_use]
    pub fn score(&self) -> (u32, u32) {
        let mut hit_weight = 0;
        let mut blow_weight = 0;
        for (feedback, bucket) in &self.buckets {
            hit_weight += u32::from(feedback.hits()) * bucket.len() as u32;
            blow_weight += u32::from(feedback.blows()) * bucket.len() as u32;
        }
        (hit_weight, blow_weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codespace::DISTINCT_CODES;

    fn code(symbols: [u8; 4]) -> Code {
        Code::new(symbols).unwrap()
    }

    #[test]
    fn partition_empty_candidates_fails() {
        let guess = code([1, 2, 3, 4]);
        assert_eq!(
            Partition::compute(&guess, &[]),
            Err(BuildError::EmptyCandidateSet)
        );
    }

    #[test]
    fn partition_single_candidate() {
        let guess = code([1, 2, 3, 4]);
        let partition = Partition::compute(&guess, &[guess]).unwrap();

        assert_eq!(partition.buckets().len(), 1);
        assert_eq!(partition.buckets()[0].0, Feedback::PERFECT);
        assert_eq!(partition.buckets()[0].1, vec![guess]);
        assert_eq!(partition.worst(), 1);
    }

    #[test]
    fn partition_buckets_keyed_by_feedback() {
        let guess = code([1, 2, 3, 4]);
        let candidates = vec![
            code([1, 2, 3, 4]), // (4, 0)
            code([1, 2, 3, 5]), // (3, 0)
            code([1, 2, 5, 4]), // (3, 0)
            code([5, 6, 5, 6]), // (0, 0)
        ];

        let partition = Partition::compute(&guess, &candidates).unwrap();
        let buckets = partition.buckets();

        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets[0].0, Feedback::new(4, 0));
        assert_eq!(buckets[1].0, Feedback::new(3, 0));
        assert_eq!(buckets[1].1, vec![code([1, 2, 3, 5]), code([1, 2, 5, 4])]);
        assert_eq!(buckets[2].0, Feedback::new(0, 0));
        assert_eq!(partition.worst(), 2);
    }

    #[test]
    fn partition_preserves_insertion_order() {
        // Bucket order is first-seen feedback order, not feedback order
        let guess = code([1, 2, 3, 4]);
        let candidates = vec![
            code([5, 6, 5, 6]), // (0, 0) seen first
            code([1, 2, 3, 4]), // (4, 0) seen second
        ];

        let partition = Partition::compute(&guess, &candidates).unwrap();
        assert_eq!(partition.buckets()[0].0, Feedback::new(0, 0));
        assert_eq!(partition.buckets()[1].0, Feedback::PERFECT);
    }

    #[test]
    fn partition_is_exact_over_full_universe() {
        // Buckets are disjoint and their concatenation is the input
        let guess = code([1, 1, 2, 2]);
        let partition = Partition::compute(&guess, &DISTINCT_CODES).unwrap();

        let total: usize = partition
            .buckets()
            .iter()
            .map(|(_, bucket)| bucket.len())
            .sum();
        assert_eq!(total, DISTINCT_CODES.len());

        let mut rebuilt: Vec<Code> = Vec::with_capacity(DISTINCT_CODES.len());
        for (feedback, bucket) in partition.buckets() {
            for candidate in bucket {
                assert_eq!(Feedback::evaluate(&guess, candidate), *feedback);
                rebuilt.push(*candidate);
            }
        }
        rebuilt.sort_by_key(|c| *c.symbols());

        let mut expected: Vec<Code> = DISTINCT_CODES.clone();
        expected.sort_by_key(|c| *c.symbols());
        assert_eq!(rebuilt, expected);
    }

    #[test]
    fn score_weights_buckets_by_size() {
        let guess = code([1, 2, 3, 4]);
        let candidates = vec![
            code([1, 2, 3, 4]), // (4, 0), weight 1
            code([1, 2, 4, 3]), // (2, 2), weight 1
            code([2, 1, 4, 3]), // (0, 4), weight 1
        ];

        let partition = Partition::compute(&guess, &candidates).unwrap();
        // hits: 4*1 + 2*1 + 0*1 = 6; blows: 0*1 + 2*1 + 4*1 = 6
        assert_eq!(partition.score(), (6, 6));
    }

    #[test]
    fn worst_bounded_by_candidate_count() {
        let guess = code([6, 6, 6, 6]);
        let candidates = vec![code([1, 2, 3, 4]), code([2, 3, 4, 5]), code([1, 3, 2, 4])];
        let partition = Partition::compute(&guess, &candidates).unwrap();
        assert!(partition.worst() <= candidates.len());
        assert!(partition.worst() >= 1);
    }
}
