//! Hit & Blow feedback calculation and representation
//!
//! Feedback is the (hits, blows) pair returned after comparing a guess to a
//! secret:
//! - hits: positions where guess and secret match exactly
//! - blows: non-hit positions whose secret symbol appears somewhere among the
//!   guess's non-hit symbols

use super::code::{CODE_LENGTH, Code};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Feedback for a Hit & Blow guess
///
/// An ordered pair of counts with `hits + blows <= 4`. Used as the key for
/// partition buckets and tree children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Feedback {
    hits: u8,
    blows: u8,
}

impl Feedback {
    /// All hits (the guess equals the secret)
    pub const PERFECT: Self = Self { hits: 4, blows: 0 };

    /// Create feedback from raw counts
    ///
    /// # Panics
    /// Panics in debug mode if `hits + blows > 4`
    #[inline]
    #[must_use]
    pub const fn new(hits: u8, blows: u8) -> Self {
        debug_assert!(hits + blows <= CODE_LENGTH as u8);
        Self { hits, blows }
    }

    /// Count of exact position matches
    #[inline]
    #[must_use]
    pub const fn hits(self) -> u8 {
        self.hits
    }

    /// Count of misplaced-symbol matches
    #[inline]
    #[must_use]
    pub const fn blows(self) -> u8 {
        self.blows
    }

    /// Check whether the guess resolved the secret exactly
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.hits == CODE_LENGTH as u8
    }

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// # Algorithm
    /// 1. Count hits and blank out the matched guess positions.
    /// 2. For each remaining position, count a blow if the secret symbol at
    ///    that position appears anywhere among the remaining guess symbols.
    ///
    /// The blow pass tests membership against the full remaining set each
    /// time and never consumes a matched guess symbol. A secret symbol that
    /// repeats across non-hit positions can therefore be credited once per
    /// occurrence against a single guess symbol. This is the reference
    /// behavior and is deliberately kept, repeats and all.
    ///
    /// # Examples
    /// ```
    /// use hit_and_blow::core::{Code, Feedback};
    ///
    /// let guess = Code::new([1, 2, 3, 4]).unwrap();
    /// let secret = Code::new([1, 2, 4, 3]).unwrap();
    /// assert_eq!(Feedback::evaluate(&guess, &secret), Feedback::new(2, 2));
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Code, secret: &Code) -> Self {
        let mut hits = 0;
        let mut blows = 0;

        // First pass: hits, removing matched guess positions from the pool
        let mut remaining: [Option<u8>; CODE_LENGTH] = guess.symbols().map(Some);
        for i in 0..CODE_LENGTH {
            if guess.symbol_at(i) == secret.symbol_at(i) {
                hits += 1;
                remaining[i] = None;
            }
        }

        // Second pass: blows, membership-tested against the whole pool
        for i in 0..CODE_LENGTH {
            if remaining[i].is_some() && remaining.contains(&Some(secret.symbol_at(i))) {
                blows += 1;
            }
        }

        Self { hits, blows }
    }
}

impl fmt::Display for Feedback {
    /// Prints the pair in tuple form, e.g. `(3, 0)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.hits, self.blows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(symbols: [u8; 4]) -> Code {
        Code::new(symbols).unwrap()
    }

    #[test]
    fn feedback_perfect_constant() {
        assert_eq!(Feedback::PERFECT.hits(), 4);
        assert_eq!(Feedback::PERFECT.blows(), 0);
        assert!(Feedback::PERFECT.is_perfect());
    }

    #[test]
    fn evaluate_self_is_perfect() {
        for symbols in [[1, 2, 3, 4], [6, 6, 6, 6], [5, 1, 5, 1], [2, 4, 6, 2]] {
            let c = code(symbols);
            assert_eq!(Feedback::evaluate(&c, &c), Feedback::PERFECT);
        }
    }

    #[test]
    fn evaluate_no_overlap() {
        let guess = code([1, 2, 3, 4]);
        let secret = code([5, 6, 5, 6]);
        assert_eq!(Feedback::evaluate(&guess, &secret), Feedback::new(0, 0));
    }

    #[test]
    fn evaluate_pure_hits() {
        let guess = code([1, 2, 3, 4]);
        let secret = code([1, 2, 3, 5]);
        assert_eq!(Feedback::evaluate(&guess, &secret), Feedback::new(3, 0));
    }

    #[test]
    fn evaluate_pure_blows() {
        let guess = code([1, 2, 3, 4]);
        let secret = code([4, 3, 2, 1]);
        assert_eq!(Feedback::evaluate(&guess, &secret), Feedback::new(0, 4));
    }

    #[test]
    fn evaluate_mixed() {
        let guess = code([1, 2, 3, 4]);
        let secret = code([1, 2, 4, 3]);
        assert_eq!(Feedback::evaluate(&guess, &secret), Feedback::new(2, 2));
    }

    #[test]
    fn evaluate_hit_consumes_guess_symbol() {
        // The hit at position 0 removes the lone 1 from the pool, so the
        // secret's remaining 1 at position 1 finds no blow partner.
        let guess = code([1, 2, 3, 4]);
        let secret = code([1, 1, 5, 5]);
        assert_eq!(Feedback::evaluate(&guess, &secret), Feedback::new(1, 0));
    }

    #[test]
    fn evaluate_repeated_secret_symbol_double_credited() {
        // Reference quirk: the single 1 in the guess satisfies a blow check
        // for each of the secret's two 1s, because matched guess symbols are
        // never consumed during the blow pass. Strict Mastermind counting
        // would report (0, 1).
        let guess = code([1, 2, 3, 4]);
        let secret = code([5, 5, 1, 1]);
        assert_eq!(Feedback::evaluate(&guess, &secret), Feedback::new(0, 2));
    }

    #[test]
    fn evaluate_repeated_guess_symbols() {
        let guess = code([1, 1, 2, 2]);
        let secret = code([2, 2, 1, 1]);
        assert_eq!(Feedback::evaluate(&guess, &secret), Feedback::new(0, 4));
    }

    #[test]
    fn evaluate_counts_bounded() {
        let guess = code([1, 1, 1, 1]);
        let secret = code([1, 2, 3, 4]);
        let fb = Feedback::evaluate(&guess, &secret);
        assert_eq!(fb, Feedback::new(1, 0));
        assert!(fb.hits() + fb.blows() <= 4);
    }

    #[test]
    fn feedback_display_tuple_form() {
        assert_eq!(format!("{}", Feedback::new(4, 0)), "(4, 0)");
        assert_eq!(format!("{}", Feedback::new(0, 3)), "(0, 3)");
        assert_eq!(format!("{}", Feedback::new(1, 2)), "(1, 2)");
    }

    #[test]
    fn feedback_serde_round_trip() {
        let fb = Feedback::new(2, 1);
        let json = serde_json::to_string(&fb).unwrap();
        let back: Feedback = serde_json::from_str(&json).unwrap();
        assert_eq!(fb, back);
    }
}
