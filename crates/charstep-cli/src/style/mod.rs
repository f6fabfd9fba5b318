//! Terminal styling for program output.
//!
//! Provides semantic colors and output helpers. Styling never changes the
//! text itself, only wraps it in escape codes when colour is enabled.

use std::env;
use std::io::{self, IsTerminal};
use std::sync::atomic::{AtomicBool, Ordering};

use charstep_config::OutputConfig;

pub mod colors;
pub mod output;

pub use output::*;

/// Global flag to track if colors are disabled.
static NO_COLOR: AtomicBool = AtomicBool::new(false);

/// Sets the global no-color flag.
pub fn set_no_color(value: bool) {
    NO_COLOR.store(value, Ordering::SeqCst);
}

/// Checks if colors are disabled.
pub fn no_color() -> bool {
    NO_COLOR.load(Ordering::SeqCst)
}

/// Disables colour unless the config allows it, `NO_COLOR` is unset and
/// stdout is a terminal.
pub fn configure(output: &OutputConfig) {
    let disabled =
        !output.color || env::var_os("NO_COLOR").is_some() || !io::stdout().is_terminal();
    set_no_color(disabled);
}
