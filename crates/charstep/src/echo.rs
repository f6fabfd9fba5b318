//! Typed echo calculator.
//!
//! A one-character selector picks the type of the value to read. The value is
//! then echoed back as a short progression together with the storage size of
//! its type.

use std::fmt::{self, Display};
use std::io::BufRead;
use std::mem::size_of;

use tracing::debug;

use crate::error::{CharstepError, Result};
use crate::range::step_chars;
use crate::scanner::Scanner;

pub const DEFAULT_COUNT: u32 = 4;
pub const DEFAULT_STRIDE: i32 = 3;
pub const DEFAULT_PRECISION: usize = 2;

pub const SELECTOR_PROMPT: &str =
    "Enter the type of input (c for character, i for integer, f for float): ";

/// Which kind of value to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeSelector {
    Character,
    Integer,
    Float,
}

impl TryFrom<char> for TypeSelector {
    type Error = CharstepError;

    fn try_from(c: char) -> Result<Self> {
        match c {
            'c' => Ok(Self::Character),
            'i' => Ok(Self::Integer),
            'f' => Ok(Self::Float),
            other => Err(CharstepError::InvalidType(other)),
        }
    }
}

impl TypeSelector {
    pub fn name(self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Integer => "integer",
            Self::Float => "float",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Self::Character => "Enter a character: ",
            Self::Integer => "Enter an integer: ",
            Self::Float => "Enter a float: ",
        }
    }

    /// Size in bytes of the Rust type carried by the matching [`TypedValue`].
    pub fn storage_size(self) -> usize {
        match self {
            Self::Character => size_of::<char>(),
            Self::Integer => size_of::<i32>(),
            Self::Float => size_of::<f32>(),
        }
    }
}

impl Display for TypeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value read according to a [`TypeSelector`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypedValue {
    Character(char),
    Integer(i32),
    Float(f32),
}

impl TypedValue {
    /// Reads one value of the selected type.
    pub fn read<R: BufRead>(selector: TypeSelector, scanner: &mut Scanner<R>) -> Result<Self> {
        match selector {
            TypeSelector::Character => scanner.next_char().map(Self::Character),
            TypeSelector::Integer => scanner.next_value("an integer").map(Self::Integer),
            TypeSelector::Float => scanner.next_value("a float").map(Self::Float),
        }
    }

    pub fn selector(&self) -> TypeSelector {
        match self {
            Self::Character(_) => TypeSelector::Character,
            Self::Integer(_) => TypeSelector::Integer,
            Self::Float(_) => TypeSelector::Float,
        }
    }
}

/// How many derived values to print, the numeric step between them, and the
/// number of decimals used for floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EchoSpec {
    count: u32,
    stride: i32,
    precision: usize,
}

impl Default for EchoSpec {
    fn default() -> Self {
        Self::new(DEFAULT_COUNT, DEFAULT_STRIDE, DEFAULT_PRECISION)
    }
}

impl EchoSpec {
    pub fn new(count: u32, stride: i32, precision: usize) -> Self {
        Self {
            count,
            stride,
            precision,
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn stride(&self) -> i32 {
        self.stride
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Computes the derived values for `value`.
    ///
    /// Characters step by one code point. Integers and floats step by the
    /// stride, with floats widened to `f64` before the offset is added.
    pub fn report(&self, value: TypedValue) -> Result<EchoReport> {
        let successors: Vec<String> = match value {
            TypedValue::Character(c) => step_chars(c, self.count)?
                .into_iter()
                .map(String::from)
                .collect(),
            TypedValue::Integer(n) => (1..=self.count)
                .map(|k| {
                    let offset = i64::from(self.stride) * i64::from(k);
                    i32::try_from(i64::from(n) + offset)
                        .map(|v| v.to_string())
                        .map_err(|_| CharstepError::IntegerOverflow { base: n, offset })
                })
                .collect::<Result<Vec<_>>>()?,
            TypedValue::Float(x) => (1..=self.count)
                .map(|k| {
                    let offset = f64::from(self.stride) * f64::from(k);
                    format_float(f64::from(x) + offset, self.precision)
                })
                .collect(),
        };
        debug!(selector = %value.selector(), ?successors, "computed echo values");

        Ok(EchoReport {
            value,
            stride: self.stride,
            successors,
        })
    }
}

/// Formats `value` with `precision` decimals, spelling non-finite values the
/// way C's `%f` does (`nan`, `inf`, `-inf`).
fn format_float(value: f64, precision: usize) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        if value.is_sign_negative() { "-inf" } else { "inf" }.to_string()
    } else {
        format!("{value:.precision$}")
    }
}

/// Everything printed for one echo run.
#[derive(Debug, Clone, PartialEq)]
pub struct EchoReport {
    value: TypedValue,
    stride: i32,
    successors: Vec<String>,
}

impl EchoReport {
    pub fn value(&self) -> TypedValue {
        self.value
    }

    /// Derived values, already formatted.
    pub fn successors(&self) -> &[String] {
        &self.successors
    }

    /// Code point of the input, for character reports only.
    pub fn code(&self) -> Option<u32> {
        match self.value {
            TypedValue::Character(c) => Some(u32::from(c)),
            _ => None,
        }
    }

    pub fn storage_size(&self) -> usize {
        self.value.selector().storage_size()
    }

    /// Output lines, without trailing newlines.
    pub fn lines(&self) -> Vec<String> {
        let n = self.successors.len();
        let mut first = match self.value.selector() {
            TypeSelector::Character => format!("The next {n} characters are: "),
            TypeSelector::Integer => format!(
                "The next {n} integers (in multiples of {}) are: ",
                self.stride
            ),
            TypeSelector::Float => {
                format!("The next {n} floats in multiples of {} are: ", self.stride)
            }
        };
        for s in &self.successors {
            first.push_str(s);
            first.push(' ');
        }

        let mut lines = vec![first];
        if let Some(code) = self.code() {
            lines.push(format!("Code point: {code}"));
        }
        lines.push(format!(
            "Size of {}: {} bytes",
            self.value.selector(),
            self.storage_size()
        ));

        lines
    }
}

impl Display for EchoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}
