//! Formatting utilities for terminal output

use crate::core::Row;
use colored::{ColoredString, Colorize};

/// Format a row as emoji squares
#[must_use]
pub fn row_to_emoji(row: &Row) -> String {
    row.iter().map(|color| color.emoji()).collect()
}

/// Create a bar string `width` characters wide
#[must_use]
pub fn create_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64).round().max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Rarity as a percentage, or a dash for designs missing from the table
#[must_use]
pub fn rarity_label(rarity: i32) -> String {
    if rarity < 0 {
        "  -".to_string()
    } else {
        format!("{rarity:>2}%")
    }
}

/// Rarity label colored from rare (green) to common (dimmed)
#[must_use]
pub fn colored_rarity(rarity: i32) -> ColoredString {
    let label = rarity_label(rarity);
    match rarity {
        r if r < 0 => label.bright_black(),
        0..=10 => label.bright_green().bold(),
        11..=40 => label.yellow(),
        _ => label.normal(),
    }
}

/// Join up to `max` words, noting how many were left out
#[must_use]
pub fn word_list(words: &[String], max: usize) -> String {
    let shown: Vec<String> = words.iter().take(max).map(|w| w.to_uppercase()).collect();
    let hidden = words.len().saturating_sub(max);

    if hidden == 0 {
        shown.join(", ")
    } else {
        format!("{} (+{hidden} more)", shown.join(", "))
    }
}
