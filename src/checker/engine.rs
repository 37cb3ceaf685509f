//! Design and catalog checking
//!
//! Ties the row matcher, the variation generator and the scores together
//! against one dictionary and one rarity table.

use super::row_matcher::{RowMatchCache, match_row};
use super::scoring::{color_fill, difficulty};
use super::variations::variations;
use crate::catalog::RarityTable;
use crate::core::{GridDesign, Pattern, ValidGridDesign, Word};
use crate::wordlists::Dictionary;

/// Guesses kept per row when no other limit is given
pub const DEFAULT_MAX_WORDS: usize = 10;

/// Checks grid designs against solution words
///
/// Holds only shared, read-only data, so one checker can serve any number of
/// threads. Mutable row caches live on the stack of each call.
#[derive(Debug, Clone, Copy)]
pub struct Checker<'a> {
    dictionary: &'a Dictionary,
    rarity: &'a RarityTable,
}

impl<'a> Checker<'a> {
    pub const fn new(dictionary: &'a Dictionary, rarity: &'a RarityTable) -> Self {
        Self { dictionary, rarity }
    }

    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    #[inline]
    #[must_use]
    pub const fn rarity_table(&self) -> &'a RarityTable {
        self.rarity
    }

    /// True iff `word` is in the dictionary
    #[must_use]
    pub fn is_word_valid(&self, word: &str) -> bool {
        self.dictionary.is_word_valid(word)
    }

    /// Check a single design, returning `None` if any row has no matching guess
    ///
    /// Words outside the dictionary are never achievable.
    ///
    /// # Examples
    /// ```
    /// use wordle_art::catalog::RarityTable;
    /// use wordle_art::checker::Checker;
    /// use wordle_art::core::{FeedbackColor::{Green, Grey}, GridDesign};
    /// use wordle_art::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::embedded();
    /// let rarity = RarityTable::new();
    /// let checker = Checker::new(&dictionary, &rarity);
    ///
    /// let design = GridDesign::new("Blank Then Win", false, vec![[Grey; 5], [Green; 5]]).unwrap();
    /// let result = checker.check("crane", &design, 10).unwrap();
    ///
    /// assert_eq!(result.guesses[1], vec!["crane"]);
    /// assert_eq!(result.color_fill, 50);
    /// assert_eq!(result.rarity, -1);
    /// assert!(checker.check("zzzzz", &design, 10).is_none());
    /// ```
    #[must_use]
    pub fn check(&self, word: &str, design: &GridDesign, max_words: usize) -> Option<ValidGridDesign> {
        let solution = self.dictionary.get(word)?;
        let mut cache = RowMatchCache::default();
        self.check_with_cache(solution, design, max_words, &mut cache)
    }

    /// Check a design reusing row matches from earlier designs
    ///
    /// The cache must only ever have seen `solution` and `max_words`.
    pub fn check_with_cache(
        &self,
        solution: &Word,
        design: &GridDesign,
        max_words: usize,
        cache: &mut RowMatchCache,
    ) -> Option<ValidGridDesign> {
        let mut guesses = Vec::with_capacity(design.rows());

        for row in design.grid() {
            let matches = cache
                .entry(Pattern::from_row(row))
                .or_insert_with(|| match_row(row, solution, self.dictionary, max_words));
            if matches.is_empty() {
                return None;
            }
            guesses.push(matches.clone());
        }

        let difficulty = difficulty(design, &guesses, max_words);
        Some(ValidGridDesign {
            design: design.clone(),
            guesses,
            rarity: self.rarity.rarity(design.name(), self.dictionary.len()),
            difficulty,
            color_fill: color_fill(design),
        })
    }

    /// Every achievable variation of every catalog design, rarest first
    ///
    /// Ties on rarity go to the design with more colored cells. Returns an empty
    /// list for words outside the dictionary.
    #[must_use]
    pub fn check_all(&self, word: &str, catalog: &[GridDesign], max_words: usize) -> Vec<ValidGridDesign> {
        let Some(solution) = self.dictionary.get(word) else {
            return Vec::new();
        };

        let mut cache = RowMatchCache::default();
        let mut results: Vec<ValidGridDesign> = catalog
            .iter()
            .flat_map(variations)
            .filter_map(|variant| self.check_with_cache(solution, &variant, max_words, &mut cache))
            .collect();

        results.sort_by(|a, b| {
            a.rarity
                .cmp(&b.rarity)
                .then_with(|| b.color_fill.cmp(&a.color_fill))
        });
        results
    }
}
