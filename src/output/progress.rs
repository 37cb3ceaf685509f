//! Progress bar for the rarity batch

use crate::checker::RarityProgress;
use indicatif::{ProgressBar, ProgressStyle};

/// A percent-based bar fed from `RarityProgress` reports
#[must_use]
pub fn rarity_progress_bar() -> ProgressBar {
    let pb = ProgressBar::new(100);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}% | {msg}")
        .map_or_else(|_| ProgressStyle::default_bar(), |style| style.progress_chars("█▓▒░"));
    pb.set_style(style);
    pb
}

/// Move the bar to the reported percentage
pub fn update_rarity_progress(pb: &ProgressBar, progress: &RarityProgress) {
    pb.set_position(progress.percent as u64);
    pb.set_message(format!(
        "{}/{} words, ~{}s left",
        progress.completed,
        progress.total,
        progress.remaining.as_secs()
    ));
}
