//! Range printer.
//!
//! Reads one character from stdin and, if it lies between A and J
//! (case-insensitive), prints the six characters that follow it.
//!
//! ```bash
//! $ echo b | range-printer
//! Enter a character between A and J: The next 6 characters are: C D E F G H
//! ```

use anyhow::Result;
use clap::Parser;

/// Print the six characters that follow a letter between A and J.
#[derive(Parser)]
#[command(name = "range-printer")]
#[command(version, long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let config = charstep_cli::init();
    charstep_cli::commands::range::run(&config)
}
