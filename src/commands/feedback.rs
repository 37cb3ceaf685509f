//! Feedback command
//!
//! Shows the colors a guess receives against a solution.

use crate::core::{Row, Word, feedback};

/// Result of scoring one guess
pub struct FeedbackResult {
    pub guess: String,
    pub solution: String,
    pub row: Row,
}

/// Score `guess` against `solution`
///
/// Neither word has to be in the dictionary.
///
/// # Errors
///
/// Returns an error if either word is not 5 ASCII letters.
pub fn score_guess(guess: &str, solution: &str) -> Result<FeedbackResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let solution = Word::new(solution).map_err(|e| format!("Invalid solution: {e}"))?;

    Ok(FeedbackResult {
        row: feedback(&guess, &solution),
        guess: guess.text().to_string(),
        solution: solution.text().to_string(),
    })
}
