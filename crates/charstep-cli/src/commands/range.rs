//! Range printer command.

use std::io;

use anyhow::{Context, Result};
use charstep::{Scanner, run_range_printer};
use charstep_config::CharstepConfig;
use tracing::info;

use crate::style::{print_rejection, print_result};

pub fn run(config: &CharstepConfig) -> Result<()> {
    let spec = config.range.spec();
    let mut scanner = Scanner::new(io::stdin().lock());

    let outcome = run_range_printer(&mut scanner, &mut io::stdout().lock(), &spec);

    match outcome {
        Ok(successors) => {
            info!(base = %successors.base(), "printed successors");
            print_result(&successors.to_string());
        }
        Err(e) if e.is_rejection() => {
            info!(error = %e, "input rejected");
            print_rejection(&e.to_string());
        }
        Err(e) => return Err(e).context("range printer failed"),
    }

    Ok(())
}
