//! Error types for the range printer and the echo calculator.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CharstepError>;

#[derive(Debug, Error)]
pub enum CharstepError {
    /// The character is outside the accepted range.
    #[error("Invalid input! Please enter a character between {lower} and {upper}.")]
    InvalidInput { input: char, lower: char, upper: char },

    /// The selector is not one of `c`, `i` or `f`.
    #[error("Invalid input type! Please enter 'c', 'i', or 'f'.")]
    InvalidType(char),

    #[error("expected {expected}, found {token:?}")]
    Malformed {
        expected: &'static str,
        token: String,
    },

    #[error("unexpected end of input")]
    EndOfInput,

    #[error("{base} + {offset} does not fit in a 32-bit integer")]
    IntegerOverflow { base: i32, offset: i64 },

    #[error("{base:?} has no character {offset} code points ahead")]
    CodePointOutOfRange { base: char, offset: u32 },

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

impl CharstepError {
    /// Returns true for the two kinds that are reported to the user as a
    /// regular message rather than treated as a failure.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::InvalidInput { .. } | Self::InvalidType(_))
    }
}
