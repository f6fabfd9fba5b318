//! Range printer.
//!
//! Accepts one character, uppercases it, and if it falls inside an inclusive
//! range lists the characters that follow it in code-point order.

use std::fmt::{self, Display};

use tracing::debug;

use crate::error::{CharstepError, Result};

pub const DEFAULT_LOWER: char = 'A';
pub const DEFAULT_UPPER: char = 'J';
pub const DEFAULT_COUNT: u32 = 6;

/// Accepted range and the number of successors to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSpec {
    lower: char,
    upper: char,
    count: u32,
}

impl Default for RangeSpec {
    fn default() -> Self {
        Self::new(DEFAULT_LOWER, DEFAULT_UPPER, DEFAULT_COUNT)
    }
}

impl RangeSpec {
    /// Creates a spec accepting `lower..=upper` and printing `count` successors.
    ///
    /// Bounds are compared against the ASCII-uppercased input, so lowercase
    /// bounds never match a letter.
    pub fn new(lower: char, upper: char, count: u32) -> Self {
        debug_assert!(lower <= upper, "inverted range {lower}..={upper}");
        Self {
            lower,
            upper,
            count,
        }
    }

    pub fn lower(&self) -> char {
        self.lower
    }

    pub fn upper(&self) -> char {
        self.upper
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn prompt(&self) -> String {
        format!(
            "Enter a character between {} and {}: ",
            self.lower, self.upper
        )
    }

    /// Whether `c` is accepted once normalized.
    pub fn contains(&self, c: char) -> bool {
        (self.lower..=self.upper).contains(&c.to_ascii_uppercase())
    }

    /// Returns the `count` characters following the normalized input.
    ///
    /// # Errors
    ///
    /// [`CharstepError::InvalidInput`] when the input is outside the range.
    pub fn successors(&self, input: char) -> Result<Successors> {
        let base = input.to_ascii_uppercase();
        if !self.contains(base) {
            debug!(%input, lower = %self.lower, upper = %self.upper, "input outside range");
            return Err(CharstepError::InvalidInput {
                input,
                lower: self.lower,
                upper: self.upper,
            });
        }

        let chars = step_chars(base, self.count)?;
        debug!(%base, count = chars.len(), "computed successors");

        Ok(Successors { base, chars })
    }
}

/// Returns the `count` characters at code points `base + 1 ..= base + count`.
pub fn step_chars(base: char, count: u32) -> Result<Vec<char>> {
    (1..=count)
        .map(|offset| {
            u32::from(base)
                .checked_add(offset)
                .and_then(char::from_u32)
                .ok_or(CharstepError::CodePointOutOfRange { base, offset })
        })
        .collect()
}

/// Characters following an accepted input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successors {
    base: char,
    chars: Vec<char>,
}

impl Successors {
    /// The normalized input the successors were computed from.
    pub fn base(&self) -> char {
        self.base
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl Display for Successors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "The next {} characters are: ", self.chars.len())?;
        for c in &self.chars {
            write!(f, "{c} ")?;
        }
        Ok(())
    }
}
