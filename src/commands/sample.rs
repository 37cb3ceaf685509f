//! Drawing one example game for an achievable design

use crate::core::ValidGridDesign;
use rand::prelude::IndexedRandom;

/// How a guess is chosen among a row's matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplePicker {
    /// First match in dictionary order
    #[default]
    First,
    Random,
}

impl SamplePicker {
    fn pick<'a>(self, words: &[&'a String]) -> Option<&'a String> {
        match self {
            Self::First => words.first().copied(),
            Self::Random => words.choose(&mut rand::rng()).copied(),
        }
    }
}

/// Pick one guess per row, avoiding words already played in earlier rows
///
/// Falls back to a repeated word when a row has nothing new to offer.
///
/// # Examples
/// ```
/// use wordle_art::catalog::RarityTable;
/// use wordle_art::checker::Checker;
/// use wordle_art::commands::{SamplePicker, sample_guesses};
/// use wordle_art::core::{FeedbackColor::{Green, Grey}, GridDesign};
/// use wordle_art::wordlists::Dictionary;
///
/// let dictionary = Dictionary::embedded();
/// let rarity = RarityTable::new();
/// let design = GridDesign::new("Blank Then Win", false, vec![[Grey; 5], [Green; 5]]).unwrap();
/// let result = Checker::new(&dictionary, &rarity).check("crane", &design, 10).unwrap();
///
/// let sample = sample_guesses(&result, SamplePicker::First);
/// assert_eq!(sample.len(), 2);
/// assert_eq!(sample[1], "crane");
/// ```
#[must_use]
pub fn sample_guesses(result: &ValidGridDesign, picker: SamplePicker) -> Vec<String> {
    let mut played: Vec<String> = Vec::with_capacity(result.guesses.len());

    for matches in &result.guesses {
        let fresh: Vec<&String> = matches.iter().filter(|w| !played.contains(w)).collect();
        let all: Vec<&String> = matches.iter().collect();

        let choice = picker
            .pick(&fresh)
            .or_else(|| picker.pick(&all))
            .cloned()
            .unwrap_or_default();
        played.push(choice);
    }

    played
}
