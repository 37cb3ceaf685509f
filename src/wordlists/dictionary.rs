//! The dictionary of valid solution and guess words
//!
//! Keeps words in a fixed enumeration order (row matches and the rarity batch
//! both follow it) next to a hash index for O(1) membership tests.

use super::WORDS;
use super::loader::words_from_slice;
use crate::core::Word;
use rustc_hash::FxHashMap;

/// Ordered, de-duplicated set of 5-letter words
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashMap<String, usize>,
}

impl Dictionary {
    /// Build a dictionary, keeping the first occurrence of repeated words
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let mut index = FxHashMap::default();
        let mut unique = Vec::with_capacity(words.len());

        for word in words {
            if !index.contains_key(word.text()) {
                index.insert(word.text().to_string(), unique.len());
                unique.push(word);
            }
        }

        Self {
            words: unique,
            index,
        }
    }

    /// Dictionary compiled into the binary from `data/words.txt`
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(WORDS))
    }

    /// True iff `word` is a member of the dictionary (case-insensitive)
    ///
    /// # Examples
    /// ```
    /// use wordle_art::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::embedded();
    /// assert!(dictionary.is_word_valid("crane"));
    /// assert!(dictionary.is_word_valid("CRANE"));
    /// assert!(!dictionary.is_word_valid("zzzzz"));
    /// assert!(!dictionary.is_word_valid("cranes"));
    /// ```
    #[must_use]
    pub fn is_word_valid(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Look up a word, returning the dictionary's copy
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&Word> {
        self.index
            .get(word.to_ascii_lowercase().as_str())
            .map(|&i| &self.words[i])
    }

    /// Words in enumeration order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::new(words_from_slice(words))
    }

    #[test]
    fn membership() {
        let dict = dictionary(&["crane", "slate"]);
        assert!(dict.is_word_valid("crane"));
        assert!(dict.is_word_valid("Slate"));
        assert!(!dict.is_word_valid("irate"));
        assert!(!dict.is_word_valid(""));
    }

    #[test]
    fn keeps_order_and_drops_duplicates() {
        let dict = dictionary(&["slate", "crane", "slate", "irate"]);
        let texts: Vec<&str> = dict.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["slate", "crane", "irate"]);
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn get_returns_dictionary_word() {
        let dict = dictionary(&["alloy"]);
        assert_eq!(dict.get("ALLOY").map(Word::text), Some("alloy"));
        assert!(dict.get("llama").is_none());
    }

    #[test]
    fn embedded_dictionary_loads() {
        let dict = Dictionary::embedded();
        assert_eq!(dict.len(), WORDS.len());
        assert!(!dict.is_empty());
    }
}
