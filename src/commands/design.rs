//! Custom design command
//!
//! Checks a user-drawn grid against a solution word, both as drawn and through
//! all of its variations.

use super::check::DesignReport;
use super::sample::SamplePicker;
use crate::checker::{Checker, is_valid};
use crate::core::{GridDesign, Pattern, Row, Word};

/// Name given to designs drawn without one
pub const CUSTOM_DESIGN_NAME: &str = "Custom Design";

/// Configuration for checking a custom design
pub struct DesignConfig {
    pub word: String,
    /// Rows separated by `/`, e.g. `"--Y--/-YGY-/GGGGG"`
    pub grid: String,
    pub name: String,
    pub can_mirror: bool,
    pub max_words: usize,
    pub picker: SamplePicker,
}

impl DesignConfig {
    #[must_use]
    pub fn new(word: String, grid: String) -> Self {
        Self {
            word,
            grid,
            name: CUSTOM_DESIGN_NAME.to_string(),
            can_mirror: true,
            max_words: crate::checker::DEFAULT_MAX_WORDS,
            picker: SamplePicker::First,
        }
    }
}

/// Result of checking a custom design
pub struct DesignResult {
    pub word: String,
    pub design: GridDesign,
    /// The grid as drawn, if it can be played
    pub direct: Option<DesignReport>,
    /// Every achievable variation, ranked like a catalog check
    pub variations: Vec<DesignReport>,
}

/// Parse rows written as `G`/`Y`/`-` (or emoji) separated by `/`
///
/// # Errors
///
/// Returns an error naming the first row that is not five valid cells.
///
/// # Examples
/// ```
/// use wordle_art::commands::parse_grid;
/// use wordle_art::core::FeedbackColor::{Green, Grey, Yellow};
///
/// let grid = parse_grid("-Y-Y-/GGGGG").unwrap();
/// assert_eq!(grid, vec![[Grey, Yellow, Grey, Yellow, Grey], [Green; 5]]);
/// assert!(parse_grid("GGGG").is_err());
/// ```
pub fn parse_grid(text: &str) -> Result<Vec<Row>, String> {
    text.split('/')
        .enumerate()
        .map(|(i, row)| {
            Pattern::parse(row)
                .map(Pattern::to_row)
                .ok_or_else(|| format!("Row {} '{}' must be 5 cells of G, Y or -", i + 1, row.trim()))
        })
        .collect()
}

/// Check a custom design against a solution word
///
/// # Errors
///
/// Returns an error if:
/// - The word is not 5 ASCII letters or not in the dictionary
/// - The grid cannot be parsed or the name is empty
/// - The grid could not come from a real game (colored rows after the win)
pub fn check_design(config: DesignConfig, checker: &Checker<'_>) -> Result<DesignResult, String> {
    let word = Word::new(&config.word).map_err(|e| format!("Invalid word: {e}"))?;
    if !checker.is_word_valid(word.text()) {
        return Err(format!("Word '{}' not in word list", word.text()));
    }

    let grid = parse_grid(&config.grid)?;
    let design = GridDesign::new(config.name, config.can_mirror, grid).map_err(|e| e.to_string())?;
    if !is_valid(&design) {
        return Err("Only grey rows may follow an all-green row".to_string());
    }

    let direct = checker
        .check(word.text(), &design, config.max_words)
        .map(|result| DesignReport::new(result, config.picker));

    let variations = checker
        .check_all(word.text(), std::slice::from_ref(&design), config.max_words)
        .into_iter()
        .map(|result| DesignReport::new(result, config.picker))
        .collect();

    Ok(DesignResult {
        word: word.text().to_string(),
        design,
        direct,
        variations,
    })
}
