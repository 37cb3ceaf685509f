//! Structural validation of grid designs
//!
//! A game ends on the guess that comes back all green, so at most one all-green
//! row may appear and only all-grey (unplayed) rows may follow it.

use crate::core::{FeedbackColor, GridDesign, is_uniform};

/// True if the design's rows could come from a single game
///
/// # Examples
/// ```
/// use wordle_art::checker::is_valid;
/// use wordle_art::core::{FeedbackColor::{Green, Grey, Yellow}, GridDesign};
///
/// let ends_solved = GridDesign::new("Ok", false, vec![[Yellow; 5], [Green; 5], [Grey; 5]]).unwrap();
/// let keeps_going = GridDesign::new("Bad", false, vec![[Green; 5], [Yellow; 5]]).unwrap();
///
/// assert!(is_valid(&ends_solved));
/// assert!(!is_valid(&keeps_going));
/// ```
#[must_use]
pub fn is_valid(design: &GridDesign) -> bool {
    let mut solved = false;

    for row in design.grid() {
        if solved && !is_uniform(row, FeedbackColor::Grey) {
            return false;
        }
        if is_uniform(row, FeedbackColor::Green) {
            solved = true;
        }
    }

    true
}
