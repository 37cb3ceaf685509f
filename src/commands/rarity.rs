//! Rarity table command
//!
//! Recomputes the rarity table for a catalog over the whole dictionary.

use crate::catalog::RarityTable;
use crate::checker::{RarityConfig, RarityProgress, compute_rarity_table};
use crate::core::GridDesign;
use crate::wordlists::Dictionary;
use std::time::{Duration, Instant};

/// Result of a rarity run
pub struct RarityResult {
    pub table: RarityTable,
    pub words: usize,
    pub designs: usize,
    pub duration: Duration,
}

impl RarityResult {
    /// Names achievable for at most `max_words_to_track` words
    #[must_use]
    pub fn tracked(&self) -> usize {
        self.table
            .iter()
            .filter(|(_, entry)| matches!(entry, crate::catalog::RarityEntry::Words(_)))
            .count()
    }
}

/// Run the rarity batch, forwarding progress to `on_progress`
///
/// # Errors
///
/// Returns an error if the dictionary or catalog is empty.
pub fn run_rarity<F>(
    dictionary: &Dictionary,
    catalog: &[GridDesign],
    config: &RarityConfig,
    on_progress: F,
) -> Result<RarityResult, String>
where
    F: FnMut(&RarityProgress),
{
    if dictionary.is_empty() {
        return Err("Word list is empty".to_string());
    }
    if catalog.is_empty() {
        return Err("Design catalog is empty".to_string());
    }

    let start = Instant::now();
    let table = compute_rarity_table(dictionary, catalog, config, on_progress);

    Ok(RarityResult {
        table,
        words: dictionary.len(),
        designs: catalog.len(),
        duration: start.elapsed(),
    })
}
