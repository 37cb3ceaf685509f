//! Wordle feedback colors and the feedback evaluator
//!
//! Colors keep the numeric encoding used by design files:
//! - 0 = Grey (letter not in word)
//! - -1 = Yellow (letter in word, wrong position)
//! - 1 = Green (letter in correct position)

use super::design::DesignError;
use super::{WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum FeedbackColor {
    Grey,
    Yellow,
    Green,
}

/// One guess row of feedback
pub type Row = [FeedbackColor; WORD_LENGTH];

impl FeedbackColor {
    /// All colors in encoding order (Yellow, Grey, Green)
    pub const ALL: [Self; 3] = [Self::Yellow, Self::Grey, Self::Green];

    /// Numeric encoding used in design and rarity files
    #[inline]
    #[must_use]
    pub const fn value(self) -> i8 {
        match self {
            Self::Grey => 0,
            Self::Yellow => -1,
            Self::Green => 1,
        }
    }

    /// Emoji square for terminal output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Grey => '⬜',
            Self::Yellow => '🟨',
            Self::Green => '🟩',
        }
    }
}

impl TryFrom<i8> for FeedbackColor {
    type Error = DesignError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Grey),
            -1 => Ok(Self::Yellow),
            1 => Ok(Self::Green),
            other => Err(DesignError::InvalidCell(other)),
        }
    }
}

impl From<FeedbackColor> for i8 {
    fn from(color: FeedbackColor) -> Self {
        color.value()
    }
}

/// True if every cell of `row` is `color`
#[inline]
#[must_use]
pub fn is_uniform(row: &Row, color: FeedbackColor) -> bool {
    row.iter().all(|&cell| cell == color)
}

/// Calculate the feedback when `candidate` is guessed and `solution` is the answer
///
/// This implements Wordle's exact feedback rules, including duplicate letters.
///
/// # Algorithm
/// 1. Greens left to right, each one consuming a letter from the solution's counts
/// 2. Letters present elsewhere in the solution are deferred
/// 3. Deferred positions, left to right, become Yellow while the letter's count
///    lasts and Grey after it runs out
///
/// # Examples
/// ```
/// use wordle_art::core::{FeedbackColor::{Green, Grey, Yellow}, Word, feedback};
///
/// let guess = Word::new("crane").unwrap();
/// let answer = Word::new("slate").unwrap();
///
/// assert_eq!(feedback(&guess, &answer), [Grey, Grey, Green, Grey, Green]);
/// assert_eq!(
///     feedback(&Word::new("react").unwrap(), &answer),
///     [Grey, Yellow, Green, Grey, Yellow]
/// );
/// ```
#[must_use]
pub fn feedback(candidate: &Word, solution: &Word) -> Row {
    let mut result = [FeedbackColor::Grey; WORD_LENGTH];
    let mut remaining = solution.letter_counts();
    let mut deferred = [false; WORD_LENGTH];

    for (i, (&letter, &target)) in candidate.chars().iter().zip(solution.chars()).enumerate() {
        if letter == target {
            result[i] = FeedbackColor::Green;
            remaining[usize::from(letter - b'a')] -= 1;
        } else if solution.has_letter(letter) {
            deferred[i] = true;
        }
    }

    for (i, &letter) in candidate.chars().iter().enumerate() {
        if !deferred[i] {
            continue;
        }
        let count = &mut remaining[usize::from(letter - b'a')];
        if *count > 0 {
            result[i] = FeedbackColor::Yellow;
            *count -= 1;
        }
    }

    result
}
