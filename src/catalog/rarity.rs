//! Rarity lookup table
//!
//! Maps a design variant name to the solution words that make it achievable.
//! Only the first few words are kept; past the cap an entry collapses to a count.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Solution words recorded for one design name
///
/// Serialized as either a JSON array of words or a JSON integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RarityEntry {
    Words(Vec<String>),
    Count(usize),
}

impl RarityEntry {
    /// Number of solution words this entry stands for
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Self::Words(words) => words.len(),
            Self::Count(n) => *n,
        }
    }
}

/// Design name → `RarityEntry`
///
/// Sorted keys keep serialized tables stable between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RarityTable {
    entries: BTreeMap<String, RarityEntry>,
}

impl RarityTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RarityEntry> {
        self.entries.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RarityEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Percent of `dictionary_size` words for which `name` is achievable
    ///
    /// Returns -1 for names missing from the table.
    ///
    /// # Examples
    /// ```
    /// use wordle_art::catalog::RarityTable;
    ///
    /// let mut table = RarityTable::new();
    /// table.record("Heart", "crane", 10);
    /// table.record("Heart", "slate", 10);
    ///
    /// assert_eq!(table.rarity("Heart", 8), 25);
    /// assert_eq!(table.rarity("Smiley", 8), -1);
    /// ```
    #[must_use]
    pub fn rarity(&self, name: &str, dictionary_size: usize) -> i32 {
        match self.entries.get(name) {
            Some(entry) if dictionary_size > 0 => {
                (100.0 * entry.count() as f64 / dictionary_size as f64).round() as i32
            }
            _ => -1,
        }
    }

    /// Record that `name` is achievable for `word`
    ///
    /// Keeps up to `max_words_to_track` words, then switches the entry to a
    /// count of `max_words_to_track + 1` and increments from there.
    pub fn record(&mut self, name: &str, word: &str, max_words_to_track: usize) {
        let Some(entry) = self.entries.get_mut(name) else {
            self.entries
                .insert(name.to_string(), RarityEntry::Words(vec![word.to_string()]));
            return;
        };

        match entry {
            RarityEntry::Words(words) if words.len() < max_words_to_track => {
                words.push(word.to_string());
            }
            RarityEntry::Words(words) => {
                let count = words.len() + 1;
                *entry = RarityEntry::Count(count);
            }
            RarityEntry::Count(n) => *n += 1,
        }
    }
}

impl FromIterator<(String, RarityEntry)> for RarityTable {
    fn from_iter<I: IntoIterator<Item = (String, RarityEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
