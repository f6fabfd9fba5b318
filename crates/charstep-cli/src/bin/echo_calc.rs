//! Typed echo calculator.
//!
//! Reads a type selector (`c`, `i` or `f`) and a value of that type from
//! stdin, then prints four derived values and the storage size of the type.
//!
//! ```bash
//! $ printf 'i\n5\n' | echo-calc
//! Enter the type of input (c for character, i for integer, f for float): Enter an integer: The next 4 integers (in multiples of 3) are: 8 11 14 17
//! Size of integer: 4 bytes
//! ```

use anyhow::Result;
use clap::Parser;

/// Echo a character, integer or float as a short progression with its storage size.
#[derive(Parser)]
#[command(name = "echo-calc")]
#[command(version, long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let config = charstep_cli::init();
    charstep_cli::commands::echo::run(&config)
}
