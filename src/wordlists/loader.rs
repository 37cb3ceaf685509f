//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::Dictionary;
use crate::core::Word;
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

/// Load a dictionary from a file with one word per line
///
/// Blank lines are skipped. Entries that are not 5-letter words are skipped as
/// well, since public word lists mix lengths freely.
///
/// # Errors
///
/// Returns an error if the file cannot be read or contains no usable words.
///
/// # Examples
/// ```no_run
/// use wordle_art::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading word list {}", path.display()))?;

    let words: Vec<Word> = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    if words.is_empty() {
        bail!("word list {} contains no 5-letter words", path.display());
    }

    Ok(Dictionary::new(words))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_art::wordlists::loader::words_from_slice;
/// use wordle_art::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn load_from_missing_file_fails() {
        let err = load_from_file("definitely/not/here.txt").unwrap_err();
        assert!(err.to_string().contains("reading word list"));
    }

    #[test]
    fn load_from_file_skips_blank_and_invalid_lines() {
        let path = std::env::temp_dir().join("wordle_art_loader_test_words.txt");
        fs::write(&path, "crane\n\n  slate  \nnope\nCRANE\n").unwrap();

        let dictionary = load_from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.is_word_valid("slate"));
    }
}
