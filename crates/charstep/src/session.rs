//! One pass of each program over an input and an output stream.
//!
//! Sessions write prompts, read input, and hand the computed result back to
//! the caller, which decides how to render it.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::echo::{EchoReport, EchoSpec, SELECTOR_PROMPT, TypeSelector, TypedValue};
use crate::error::Result;
use crate::range::{RangeSpec, Successors};
use crate::scanner::Scanner;

/// Prompts for a character and computes its successors.
pub fn run_range_printer<R: BufRead, W: Write>(
    scanner: &mut Scanner<R>,
    out: &mut W,
    spec: &RangeSpec,
) -> Result<Successors> {
    write!(out, "{}", spec.prompt())?;
    out.flush()?;

    let input = scanner.next_char()?;
    debug!(%input, "range printer input");

    spec.successors(input)
}

/// Prompts for a selector, then for a value of the selected type, and
/// computes the echo report.
pub fn run_echo_calculator<R: BufRead, W: Write>(
    scanner: &mut Scanner<R>,
    out: &mut W,
    spec: &EchoSpec,
) -> Result<EchoReport> {
    write!(out, "{SELECTOR_PROMPT}")?;
    out.flush()?;

    let selector = TypeSelector::try_from(scanner.next_char()?)?;
    debug!(%selector, "dispatching on selector");

    write!(out, "{}", selector.prompt())?;
    out.flush()?;

    let value = TypedValue::read(selector, scanner)?;
    spec.report(value)
}
