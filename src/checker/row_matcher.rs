//! Row matching
//!
//! Finds dictionary words whose feedback against the solution equals a target
//! row. The feedback rules are applied inline so a word is dropped at the first
//! cell that disagrees with the target.

use crate::core::{FeedbackColor, Pattern, Row, WORD_LENGTH, Word};
use crate::wordlists::Dictionary;
use rustc_hash::FxHashMap;

/// Matched words per row signature, scoped to a single catalog check
pub type RowMatchCache = FxHashMap<Pattern, Vec<String>>;

/// Find up to `max_words` dictionary words that produce `target` against `solution`
///
/// Words come back in dictionary order.
///
/// # Examples
/// ```
/// use wordle_art::checker::match_row;
/// use wordle_art::core::{Pattern, Word};
/// use wordle_art::wordlists::Dictionary;
///
/// let dictionary = Dictionary::embedded();
/// let solution = Word::new("crane").unwrap();
/// let target = Pattern::parse("GGGGG").unwrap().to_row();
///
/// assert_eq!(match_row(&target, &solution, &dictionary, 10), vec!["crane"]);
/// ```
#[must_use]
pub fn match_row(
    target: &Row,
    solution: &Word,
    dictionary: &Dictionary,
    max_words: usize,
) -> Vec<String> {
    dictionary
        .words()
        .iter()
        .filter(|candidate| produces_row(candidate, solution, target))
        .take(max_words)
        .map(|candidate| candidate.text().to_string())
        .collect()
}

/// True iff `feedback(candidate, solution) == target`, rejecting early
///
/// Same two passes as `core::feedback`: greens consume letter counts first,
/// then deferred positions resolve left to right.
#[must_use]
pub fn produces_row(candidate: &Word, solution: &Word, target: &Row) -> bool {
    let mut remaining = solution.letter_counts();
    let mut deferred = [false; WORD_LENGTH];

    for (i, (&letter, &answer)) in candidate.chars().iter().zip(solution.chars()).enumerate() {
        if letter == answer {
            if target[i] != FeedbackColor::Green {
                return false;
            }
            remaining[usize::from(letter - b'a')] -= 1;
        } else if solution.has_letter(letter) {
            if target[i] == FeedbackColor::Green {
                return false;
            }
            deferred[i] = true;
        } else if target[i] != FeedbackColor::Grey {
            return false;
        }
    }

    for (i, &letter) in candidate.chars().iter().enumerate() {
        if !deferred[i] {
            continue;
        }
        let count = &mut remaining[usize::from(letter - b'a')];
        let expected = if *count > 0 {
            *count -= 1;
            FeedbackColor::Yellow
        } else {
            FeedbackColor::Grey
        };
        if target[i] != expected {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::feedback;
    use crate::wordlists::loader::words_from_slice;

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::new(words_from_slice(words))
    }

    fn row(s: &str) -> Row {
        Pattern::parse(s).unwrap().to_row()
    }

    #[test]
    fn finds_words_in_dictionary_order() {
        let dict = dictionary(&["trace", "crane", "crate", "brace", "grace"]);
        let solution = Word::new("crane").unwrap();

        assert_eq!(match_row(&row("GGG-G"), &solution, &dict, 10), ["crate"]);
        // TRACE, BRACE and GRACE differ only in the grey first letter
        assert_eq!(
            match_row(&row("-GGYG"), &solution, &dict, 10),
            ["trace", "brace", "grace"]
        );
    }

    #[test]
    fn stops_at_max_words() {
        let dict = dictionary(&["fight", "sulky", "moody", "plump", "crane"]);
        let solution = Word::new("crane").unwrap();

        assert_eq!(
            match_row(&row("-----"), &solution, &dict, 2),
            ["fight", "sulky"]
        );
        assert!(match_row(&row("-----"), &solution, &dict, 0).is_empty());
    }

    #[test]
    fn duplicate_letter_tie_break() {
        let dict = dictionary(&["llama", "alloy"]);
        let solution = Word::new("alloy").unwrap();

        assert_eq!(match_row(&row("YGY--"), &solution, &dict, 10), ["llama"]);
        // A naive per-letter check would also call the second A yellow
        assert!(match_row(&row("YGY-Y"), &solution, &dict, 10).is_empty());
    }

    #[test]
    fn agrees_with_feedback_for_every_word() {
        let dict = Dictionary::embedded();
        let solutions = ["alloy", "crane", "geese", "llama", "speed"];

        for solution in solutions.iter().filter_map(|s| dict.get(s)) {
            for candidate in dict.words().iter().step_by(7) {
                let actual = feedback(candidate, solution);
                assert!(
                    produces_row(candidate, solution, &actual),
                    "{candidate} vs {solution}"
                );

                let mut other = actual;
                other[0] = match other[0] {
                    FeedbackColor::Grey => FeedbackColor::Yellow,
                    FeedbackColor::Yellow => FeedbackColor::Green,
                    FeedbackColor::Green => FeedbackColor::Grey,
                };
                assert!(!produces_row(candidate, solution, &other));
            }
        }
    }

    #[test]
    fn full_scan_is_complete_and_sound() {
        let dict = Dictionary::embedded();
        let solution = Word::new("crane").unwrap();
        let target = row("-YY--");

        let matched = match_row(&target, &solution, &dict, dict.len());
        let expected: Vec<String> = dict
            .words()
            .iter()
            .filter(|w| feedback(w, &solution) == target)
            .map(|w| w.text().to_string())
            .collect();

        assert!(!matched.is_empty());
        assert_eq!(matched, expected);
    }
}
