//! Catalog check command
//!
//! Finds every catalog design a solution word can draw and attaches one sample
//! game to each.

use super::sample::{SamplePicker, sample_guesses};
use crate::checker::{Checker, DEFAULT_MAX_WORDS};
use crate::core::{GridDesign, ValidGridDesign, Word};

/// Configuration for checking a word against the catalog
pub struct CheckConfig {
    pub word: String,
    pub max_words: usize,
    /// Keep only the first N designs of the ranking
    pub limit: Option<usize>,
    pub picker: SamplePicker,
}

impl CheckConfig {
    #[must_use]
    pub const fn new(word: String) -> Self {
        Self {
            word,
            max_words: DEFAULT_MAX_WORDS,
            limit: None,
            picker: SamplePicker::First,
        }
    }
}

/// An achievable design together with one way to play it
pub struct DesignReport {
    pub result: ValidGridDesign,
    pub sample: Vec<String>,
}

impl DesignReport {
    #[must_use]
    pub fn new(result: ValidGridDesign, picker: SamplePicker) -> Self {
        let sample = sample_guesses(&result, picker);
        Self { result, sample }
    }
}

/// Result of a catalog check
pub struct CheckResult {
    pub word: String,
    pub designs: Vec<DesignReport>,
    /// Achievable designs before `limit` was applied
    pub total: usize,
    pub max_words: usize,
}

/// Check a word against every design in `catalog`
///
/// # Errors
///
/// Returns an error if:
/// - The word is not 5 ASCII letters
/// - The word is not in the dictionary
pub fn check_word(
    config: CheckConfig,
    checker: &Checker<'_>,
    catalog: &[GridDesign],
) -> Result<CheckResult, String> {
    let word = Word::new(&config.word).map_err(|e| format!("Invalid word: {e}"))?;
    if !checker.is_word_valid(word.text()) {
        return Err(format!("Word '{}' not in word list", word.text()));
    }

    let mut results = checker.check_all(word.text(), catalog, config.max_words);
    let total = results.len();
    if let Some(limit) = config.limit {
        results.truncate(limit);
    }

    let designs = results
        .into_iter()
        .map(|result| DesignReport::new(result, config.picker))
        .collect();

    Ok(CheckResult {
        word: word.text().to_string(),
        designs,
        total,
        max_words: config.max_words,
    })
}
