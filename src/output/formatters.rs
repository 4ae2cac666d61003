//! Formatting utilities for terminal output

use crate::game::{Message, MessageStyle};
use colored::{ColoredString, Colorize};

/// Colour a console line according to its style
#[must_use]
pub fn styled_line(message: &Message) -> ColoredString {
    let text = message.text.as_str();
    match message.style {
        MessageStyle::Info => text.normal(),
        MessageStyle::Success => text.bright_green().bold(),
        MessageStyle::Warning => text.yellow(),
        MessageStyle::Error => text.red(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Share of `count` in `total`, as a percentage
#[must_use]
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
