//! Hit & Blow code representation
//!
//! A Code is an ordered sequence of exactly 4 symbols drawn from the alphabet 1-6.
//! It serves as both a candidate secret and a guess.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of symbols in a code
pub const CODE_LENGTH: usize = 4;

/// Number of distinct symbols in the alphabet (symbols are 1..=6)
pub const ALPHABET_SIZE: u8 = 6;

/// A 4-symbol code over the alphabet 1-6
///
/// Immutable value type; two codes are equal iff all positions match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Code([u8; CODE_LENGTH]);

/// Error type for malformed codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeError {
    SymbolOutOfRange(u8),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SymbolOutOfRange(sym) => {
                write!(f, "Symbol must be in 1..={ALPHABET_SIZE}, got {sym}")
            }
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a new Code from four symbols
    ///
    /// # Errors
    /// Returns `CodeError::SymbolOutOfRange` if any symbol is outside `1..=6`.
    ///
    /// # Examples
    /// ```
    /// use hit_and_blow::core::Code;
    ///
    /// let code = Code::new([1, 2, 3, 4]).unwrap();
    /// assert_eq!(code.to_string(), "1234");
    ///
    /// assert!(Code::new([1, 2, 3, 7]).is_err());
    /// assert!(Code::new([0, 2, 3, 4]).is_err());
    /// ```
    pub fn new(symbols: [u8; CODE_LENGTH]) -> Result<Self, CodeError> {
        for &sym in &symbols {
            if !(1..=ALPHABET_SIZE).contains(&sym) {
                return Err(CodeError::SymbolOutOfRange(sym));
            }
        }
        Ok(Self(symbols))
    }

    /// Get the symbols as a fixed-size array
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }

    /// Get the symbol at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn symbol_at(&self, position: usize) -> u8 {
        self.0[position]
    }
}

impl fmt::Display for Code {
    /// Prints the four symbols adjacently with no separators, e.g. `1234`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &sym in &self.0 {
            write!(f, "{sym}")?;
        }
        Ok(())
    }
}
