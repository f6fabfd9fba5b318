//! Output helper functions for consistent styled messages.
//!
//! Everything goes to stdout, rejections included.

use super::colors::SemanticStyle;

/// Prints the main result line.
pub fn print_result(line: &str) {
    println!("{}", line.info());
}

/// Prints a secondary line such as a code point or a storage size.
pub fn print_detail(line: &str) {
    println!("{}", line.muted());
}

/// Prints a rejection message for input outside the accepted set.
pub fn print_rejection(msg: &str) {
    println!("{}", msg.error());
}
