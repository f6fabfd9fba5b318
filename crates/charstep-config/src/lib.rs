//! Configuration management for charstep
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. Environment variables (CHARSTEP_* prefix, `__` between levels)
//! 2. charstep.local.toml (gitignored, local overrides)
//! 3. charstep.toml (project config)
//! 4. ~/.config/charstep/config.toml (user defaults)
//! 5. Built-in defaults (lowest precedence)

use charstep::{EchoSpec, RangeSpec, echo, range};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

mod error;
mod loader;
mod paths;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use paths::Paths;

/// Largest number of decimals accepted for float output.
pub const MAX_PRECISION: usize = 9;

/// Largest number of successors either program may print.
pub const MAX_COUNT: u32 = 64;

/// First code point of the UTF-16 surrogate gap.
const SURROGATE_START: u32 = 0xD800;

/// Main charstep configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharstepConfig {
    pub range: RangeConfig,
    pub echo: EchoConfig,
    pub output: OutputConfig,
}

/// Range printer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeConfig {
    #[serde(deserialize_with = "deserialize_bound")]
    pub lower: char,
    #[serde(deserialize_with = "deserialize_bound")]
    pub upper: char,
    pub count: u32,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            lower: range::DEFAULT_LOWER,
            upper: range::DEFAULT_UPPER,
            count: range::DEFAULT_COUNT,
        }
    }
}

/// Accepts a one-character string or a single digit.
///
/// Environment values are parsed eagerly, so `CHARSTEP_RANGE__LOWER=0`
/// arrives as the integer 0 rather than the string "0".
fn deserialize_bound<'de, D: Deserializer<'de>>(deserializer: D) -> Result<char, D::Error> {
    struct BoundVisitor;

    impl Visitor<'_> for BoundVisitor {
        type Value = char;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a single character or a digit 0-9")
        }

        fn visit_char<E: de::Error>(self, c: char) -> Result<char, E> {
            Ok(c)
        }

        fn visit_str<E: de::Error>(self, s: &str) -> Result<char, E> {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(c),
                _ => Err(E::invalid_value(de::Unexpected::Str(s), &self)),
            }
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<char, E> {
            u32::try_from(v)
                .ok()
                .and_then(|d| char::from_digit(d, 10))
                .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(v), &self))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<char, E> {
            u64::try_from(v)
                .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
                .and_then(|v| self.visit_u64(v))
        }
    }

    deserializer.deserialize_any(BoundVisitor)
}

impl RangeConfig {
    pub fn spec(&self) -> RangeSpec {
        RangeSpec::new(self.lower, self.upper, self.count)
    }
}

/// Echo calculator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EchoConfig {
    pub count: u32,
    pub stride: i32,
    pub precision: usize,
}

impl Default for EchoConfig {
    fn default() -> Self {
        Self {
            count: echo::DEFAULT_COUNT,
            stride: echo::DEFAULT_STRIDE,
            precision: echo::DEFAULT_PRECISION,
        }
    }
}

impl EchoConfig {
    pub fn spec(&self) -> EchoSpec {
        EchoSpec::new(self.count, self.stride, self.precision)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Style output when stdout is a terminal
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl CharstepConfig {
    /// Check the invariants the programs rely on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let RangeConfig {
            lower,
            upper,
            count,
        } = self.range;

        if lower > upper {
            return Err(ConfigError::ValidationError(format!(
                "range.lower ({lower:?}) is above range.upper ({upper:?})"
            )));
        }
        if lower.to_ascii_uppercase() != lower || upper.to_ascii_uppercase() != upper {
            return Err(ConfigError::ValidationError(
                "range bounds must be uppercase, input is uppercased before comparison"
                    .to_string(),
            ));
        }
        if count == 0 || count > MAX_COUNT {
            return Err(ConfigError::ValidationError(format!(
                "range.count must be between 1 and {MAX_COUNT}"
            )));
        }

        // Every successor of every accepted character must be a scalar value
        let last = u32::from(upper).checked_add(count);
        let crosses_gap = u32::from(lower) < SURROGATE_START
            && last.is_some_and(|end| end >= SURROGATE_START);
        if crosses_gap || last.is_none_or(|end| end > u32::from(char::MAX)) {
            return Err(ConfigError::ValidationError(format!(
                "range {lower:?}..={upper:?} stepped by {count} leaves the Unicode scalar range"
            )));
        }

        if self.echo.count == 0 || self.echo.count > MAX_COUNT {
            return Err(ConfigError::ValidationError(format!(
                "echo.count must be between 1 and {MAX_COUNT}"
            )));
        }
        if self.echo.precision > MAX_PRECISION {
            return Err(ConfigError::ValidationError(format!(
                "echo.precision must be at most {MAX_PRECISION}"
            )));
        }

        Ok(())
    }
}
