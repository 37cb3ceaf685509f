//! Offline rarity precomputation
//!
//! Runs the catalog check for every dictionary word and counts, per design
//! variant, how many solutions make it achievable. The batch is meant to run
//! once and ship its output as `data/rarity.json`.

use super::engine::Checker;
use crate::catalog::RarityTable;
use crate::core::GridDesign;
use crate::wordlists::Dictionary;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Words evaluated in parallel between two ordered merges
const CHUNK_SIZE: usize = 64;

/// Tunables for `compute_rarity_table`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RarityConfig {
    /// Solution words listed per design before switching to a plain count
    pub max_words_to_track: usize,
    /// Report progress each time this many percent complete; 0 disables reports
    pub notify_every_percent: usize,
}

impl Default for RarityConfig {
    fn default() -> Self {
        Self {
            max_words_to_track: 10,
            notify_every_percent: 5,
        }
    }
}

/// Snapshot passed to the progress callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RarityProgress {
    pub percent: usize,
    pub completed: usize,
    pub total: usize,
    pub elapsed: Duration,
    /// Estimate from the average time per word so far
    pub remaining: Duration,
}

/// Build the rarity table for `catalog` over every word in `dictionary`
///
/// Only existence of a match matters here, so each row stops at its first
/// matching guess. Words are checked in parallel but merged in dictionary order,
/// so the table is the same as a sequential run.
///
/// # Examples
/// ```
/// use wordle_art::checker::{RarityConfig, compute_rarity_table};
/// use wordle_art::core::{FeedbackColor, GridDesign};
/// use wordle_art::wordlists::{Dictionary, loader::words_from_slice};
///
/// let dictionary = Dictionary::new(words_from_slice(&["crane", "slate", "fight"]));
/// let catalog = vec![GridDesign::filled("Win", 1, FeedbackColor::Green).unwrap()];
///
/// let table = compute_rarity_table(&dictionary, &catalog, &RarityConfig::default(), |_| {});
/// assert_eq!(table.rarity("Win", dictionary.len()), 100);
/// ```
pub fn compute_rarity_table<F>(
    dictionary: &Dictionary,
    catalog: &[GridDesign],
    config: &RarityConfig,
    mut on_progress: F,
) -> RarityTable
where
    F: FnMut(&RarityProgress),
{
    // Result order from check_all is irrelevant here, only the names are kept
    let unranked = RarityTable::new();
    let checker = Checker::new(dictionary, &unranked);

    let total = dictionary.len();
    let step = config.notify_every_percent;
    let mut next_percent = step;
    let mut completed = 0;
    let mut table = RarityTable::new();
    let start = Instant::now();

    for chunk in dictionary.words().chunks(CHUNK_SIZE) {
        let achieved: Vec<Vec<String>> = chunk
            .par_iter()
            .map(|word| {
                checker
                    .check_all(word.text(), catalog, 1)
                    .into_iter()
                    .map(|result| result.name().to_string())
                    .collect()
            })
            .collect();

        for (word, names) in chunk.iter().zip(achieved) {
            for name in &names {
                table.record(name, word.text(), config.max_words_to_track);
            }

            completed += 1;
            while step > 0 && next_percent <= 100 && completed * 100 >= next_percent * total {
                on_progress(&progress(next_percent, completed, total, start.elapsed()));
                next_percent += step;
            }
        }
    }

    table
}

fn progress(percent: usize, completed: usize, total: usize, elapsed: Duration) -> RarityProgress {
    let left = total - completed;
    let remaining = if completed == 0 {
        Duration::ZERO
    } else {
        elapsed.mul_f64(left as f64 / completed as f64)
    };

    RarityProgress {
        percent,
        completed,
        total,
        elapsed,
        remaining,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RarityEntry;
    use crate::checker::DEFAULT_MAX_WORDS;
    use crate::core::FeedbackColor::{Green, Grey, Yellow};
    use crate::wordlists::loader::words_from_slice;

    fn small_dictionary() -> Dictionary {
        Dictionary::new(words_from_slice(&[
            "trace", "crane", "crate", "brace", "grace", "fight", "sulky",
        ]))
    }

    fn small_catalog() -> Vec<GridDesign> {
        vec![
            GridDesign::filled("Win", 1, Green).unwrap(),
            GridDesign::new("Hook", false, vec![[Grey, Green, Green, Yellow, Green]]).unwrap(),
        ]
    }

    #[test]
    fn records_words_then_counts() {
        let config = RarityConfig {
            max_words_to_track: 2,
            notify_every_percent: 0,
        };
        let table = compute_rarity_table(&small_dictionary(), &small_catalog(), &config, |_| {});

        assert_eq!(table.len(), 6);
        assert_eq!(
            table.get("Hook"),
            Some(&RarityEntry::Words(vec!["crane".into(), "crate".into()]))
        );
        assert_eq!(table.get("Hook 102"), Some(&RarityEntry::Count(3)));
        for name in ["Win", "Win 021", "Win 102", "Win 201"] {
            assert_eq!(table.get(name), Some(&RarityEntry::Count(7)), "{name}");
        }
        // All-yellow rows need an anagram
        assert!(table.get("Win 120").is_none());
        assert!(table.get("Win 210").is_none());
    }

    #[test]
    fn matches_sequential_catalog_checks() {
        let dictionary = Dictionary::embedded();
        let words = Dictionary::new(dictionary.words().iter().step_by(97).cloned().collect());
        let catalog = crate::catalog::default_catalog().unwrap();
        let config = RarityConfig::default();

        let table = compute_rarity_table(&words, &catalog, &config, |_| {});

        let unranked = RarityTable::new();
        let checker = Checker::new(&words, &unranked);
        let mut expected = RarityTable::new();
        for word in words.words() {
            for result in checker.check_all(word.text(), &catalog, 1) {
                expected.record(result.name(), word.text(), config.max_words_to_track);
            }
        }

        assert!(!table.is_empty());
        assert_eq!(table, expected);
    }

    #[test]
    fn reports_each_threshold_once() {
        let config = RarityConfig {
            max_words_to_track: DEFAULT_MAX_WORDS,
            notify_every_percent: 25,
        };
        let mut reports = Vec::new();
        compute_rarity_table(&small_dictionary(), &small_catalog(), &config, |p| {
            reports.push((p.percent, p.completed, p.total));
        });

        // 7 words: 2/7 = 28%, 4/7 = 57%, 6/7 = 86%, 7/7
        assert_eq!(reports, [(25, 2, 7), (50, 4, 7), (75, 6, 7), (100, 7, 7)]);
    }

    #[test]
    fn coarse_dictionary_still_reports_every_threshold() {
        let dictionary = Dictionary::new(words_from_slice(&["crane", "fight"]));
        let config = RarityConfig {
            max_words_to_track: DEFAULT_MAX_WORDS,
            notify_every_percent: 10,
        };
        let mut percents = Vec::new();
        compute_rarity_table(&dictionary, &small_catalog(), &config, |p| percents.push(p.percent));

        assert_eq!(percents, (1..=10).map(|i| i * 10).collect::<Vec<_>>());
    }

    #[test]
    fn zero_step_disables_progress() {
        let config = RarityConfig {
            max_words_to_track: DEFAULT_MAX_WORDS,
            notify_every_percent: 0,
        };
        let mut calls = 0;
        compute_rarity_table(&small_dictionary(), &small_catalog(), &config, |_| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn final_report_has_nothing_remaining() {
        let mut last = None;
        compute_rarity_table(
            &small_dictionary(),
            &small_catalog(),
            &RarityConfig::default(),
            |p| last = Some(*p),
        );

        let last = last.unwrap();
        assert_eq!(last.percent, 100);
        assert_eq!(last.remaining, Duration::ZERO);
    }
}
