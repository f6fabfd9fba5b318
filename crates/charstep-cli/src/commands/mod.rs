//! CLI command implementations.

pub mod echo;
pub mod range;
