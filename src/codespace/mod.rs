//! Candidate universes for Hit & Blow
//!
//! Provides the two code universes as lazily-computed shared constants:
//! every 4-symbol code over the alphabet 1-6, and the subset with no
//! repeated symbols. Both are generated once and shared read-only.

use crate::core::{ALPHABET_SIZE, Code};
use std::sync::LazyLock;

/// Number of codes with repetition allowed (6^4)
pub const ALL_CODES_COUNT: usize = 1296;

/// Number of codes with all-distinct symbols (6 * 5 * 4 * 3)
pub const DISTINCT_CODES_COUNT: usize = 360;

/// All codes over the alphabet, repetition allowed, in lexicographic
/// product order. This is also the guess universe for the minimax search.
pub static ALL_CODES: LazyLock<Vec<Code>> = LazyLock::new(all_codes);

/// All codes with no repeated symbol, in the same lexicographic order.
pub static DISTINCT_CODES: LazyLock<Vec<Code>> = LazyLock::new(distinct_codes);

fn all_codes() -> Vec<Code> {
    let mut codes = Vec::with_capacity(ALL_CODES_COUNT);
    for a in 1..=ALPHABET_SIZE {
        for b in 1..=ALPHABET_SIZE {
            for c in 1..=ALPHABET_SIZE {
                for d in 1..=ALPHABET_SIZE {
                    // Symbols are all in range, construction cannot fail
                    if let Ok(code) = Code::new([a, b, c, d]) {
                        codes.push(code);
                    }
                }
            }
        }
    }
    codes
}

fn distinct_codes() -> Vec<Code> {
    // Filtering the product order for distinctness yields exactly the
    // lexicographic permutation order.
    ALL_CODES
        .iter()
        .copied()
        .filter(|code| {
            let s = code.symbols();
            s.iter()
                .enumerate()
                .all(|(i, sym)| !s[..i].contains(sym))
        })
        .collect()
}
