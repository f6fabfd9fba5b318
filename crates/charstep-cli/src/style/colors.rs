//! Semantic color palette for terminal output.
//!
//! Uses owo-colors for zero-allocation terminal coloring.

use owo_colors::{OwoColorize, Style};

/// Returns the style for rejection messages (red bold).
pub fn error_style() -> Style {
    Style::new().red().bold()
}

/// Returns the style for computed results (cyan).
pub fn info_style() -> Style {
    Style::new().cyan()
}

/// Returns the style for secondary details (dimmed).
pub fn muted_style() -> Style {
    Style::new().dimmed()
}

/// Trait extension to apply semantic styles.
pub trait SemanticStyle: Sized {
    /// Apply error styling (red bold).
    fn error(&self) -> String;
    /// Apply info styling (cyan).
    fn info(&self) -> String;
    /// Apply muted styling (dimmed).
    fn muted(&self) -> String;
}

impl<T: std::fmt::Display> SemanticStyle for T {
    fn error(&self) -> String {
        styled(self, error_style())
    }

    fn info(&self) -> String {
        styled(self, info_style())
    }

    fn muted(&self) -> String {
        styled(self, muted_style())
    }
}

fn styled<T: std::fmt::Display>(value: &T, style: Style) -> String {
    if super::no_color() {
        value.to_string()
    } else {
        value.style(style).to_string()
    }
}
