//! Scores attached to achievable designs

use crate::core::{FeedbackColor, GridDesign, is_uniform};

/// Percent of cells that are not grey, rounded to the nearest integer
///
/// # Examples
/// ```
/// use wordle_art::checker::color_fill;
/// use wordle_art::core::{FeedbackColor::{Green, Grey}, GridDesign};
///
/// let half = GridDesign::new("Half", false, vec![[Grey; 5], [Green; 5]]).unwrap();
/// assert_eq!(color_fill(&half), 50);
/// ```
#[must_use]
pub fn color_fill(design: &GridDesign) -> u8 {
    let total = design.cells();
    if total == 0 {
        return 0;
    }
    let grey = design.grey_cells() as f64 / total as f64;
    (100.0 - 100.0 * grey).round() as u8
}

/// Sum of `max_words - matches` over the rows that take real effort to hit
///
/// All-grey rows, all-green rows and exact repeats of an earlier row add nothing.
/// `guesses[i]` holds the matches found for row `i`.
#[must_use]
pub fn difficulty(design: &GridDesign, guesses: &[Vec<String>], max_words: usize) -> usize {
    let grid = design.grid();

    grid.iter()
        .zip(guesses)
        .enumerate()
        .filter(|&(i, (row, _))| {
            !is_uniform(row, FeedbackColor::Grey)
                && !is_uniform(row, FeedbackColor::Green)
                && !grid[..i].contains(row)
        })
        .map(|(_, (_, matches))| max_words.saturating_sub(matches.len()))
        .sum()
}
