//! Typed echo calculator command.

use std::io;

use anyhow::{Context, Result};
use charstep::{Scanner, run_echo_calculator};
use charstep_config::CharstepConfig;
use tracing::info;

use crate::style::{print_detail, print_rejection, print_result};

pub fn run(config: &CharstepConfig) -> Result<()> {
    let spec = config.echo.spec();
    let mut scanner = Scanner::new(io::stdin().lock());

    let outcome = run_echo_calculator(&mut scanner, &mut io::stdout().lock(), &spec);

    match outcome {
        Ok(report) => {
            info!(selector = %report.value().selector(), "printed echo report");
            let lines = report.lines();
            if let Some((first, rest)) = lines.split_first() {
                print_result(first);
                for line in rest {
                    print_detail(line);
                }
            }
        }
        Err(e) if e.is_rejection() => {
            info!(error = %e, "selector rejected");
            print_rejection(&e.to_string());
        }
        Err(e) => return Err(e).context("echo calculator failed"),
    }

    Ok(())
}
