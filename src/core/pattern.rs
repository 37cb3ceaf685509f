//! Canonical row signatures
//!
//! A pattern encodes one row of feedback using base-3 encoding:
//! - 0 = Grey
//! - 1 = Yellow
//! - 2 = Green
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total. The encoding is lossless, so a
//! pattern can key the per-call row match cache.

use super::WORD_LENGTH;
use super::feedback::{FeedbackColor, Row};

/// Lossless signature of a feedback row
///
/// Value range: 0-242 (3^5 - 1 = 243 possible rows)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(u8);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// All greys
    pub const BLANK: Self = Self(0);

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Encode a feedback row
    #[must_use]
    pub fn from_row(row: &Row) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for &color in row {
            pattern += digit(color) * multiplier;
            multiplier = multiplier.saturating_mul(3);
        }
        Self(pattern)
    }

    /// Decode back into a feedback row
    #[must_use]
    pub fn to_row(self) -> Row {
        let mut row = [FeedbackColor::Grey; WORD_LENGTH];
        let mut val = self.0;
        for cell in &mut row {
            *cell = match val % 3 {
                2 => FeedbackColor::Green,
                1 => FeedbackColor::Yellow,
                _ => FeedbackColor::Grey,
            };
            val /= 3;
        }
        row
    }

    /// Parse a row from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/'.'/⬜/⬛ for grey
    ///
    /// # Examples
    /// ```
    /// use wordle_art::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GY-GY").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// assert!(Pattern::parse("GYX--").is_none());
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.trim().chars().collect();

        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut row = [FeedbackColor::Grey; WORD_LENGTH];
        for (cell, ch) in row.iter_mut().zip(chars) {
            *cell = match ch {
                'G' | 'g' | '🟩' => FeedbackColor::Green,
                'Y' | 'y' | '🟨' => FeedbackColor::Yellow,
                '-' | '_' | '.' | '⬜' | '⬛' => FeedbackColor::Grey,
                _ => return None,
            };
        }

        Some(Self::from_row(&row))
    }

}

const fn digit(color: FeedbackColor) -> u8 {
    match color {
        FeedbackColor::Grey => 0,
        FeedbackColor::Yellow => 1,
        FeedbackColor::Green => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::FeedbackColor::{Green, Grey, Yellow};
    use super::*;

    #[test]
    fn perfect_and_blank_constants() {
        assert_eq!(Pattern::from_row(&[Green; 5]), Pattern::PERFECT);
        assert_eq!(Pattern::from_row(&[Grey; 5]), Pattern::BLANK);
        assert_eq!(Pattern::PERFECT.to_row(), [Green; 5]);
    }

    #[test]
    fn row_signature_is_lossless() {
        for value in 0..243u8 {
            let pattern = Pattern::new(value);
            assert_eq!(Pattern::from_row(&pattern.to_row()), pattern);
        }
    }

    #[test]
    fn distinct_rows_have_distinct_signatures() {
        let a = Pattern::from_row(&[Yellow, Grey, Grey, Grey, Grey]);
        let b = Pattern::from_row(&[Grey, Grey, Grey, Grey, Yellow]);
        assert_ne!(a, b);
    }

    #[test]
    fn parse_valid() {
        let p1 = Pattern::parse("GYG--").unwrap();
        let p2 = Pattern::parse("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Pattern::parse("gyg._").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        // 2 + 1×3 + 2×9 = 23
        assert_eq!(p1.value(), 23);
        assert_eq!(p1.to_row(), [Green, Yellow, Green, Grey, Grey]);
    }

    #[test]
    fn parse_invalid() {
        assert!(Pattern::parse("GYGGYX").is_none());
        assert!(Pattern::parse("GYG").is_none());
        assert!(Pattern::parse("GXGGY").is_none());
        assert!(Pattern::parse("").is_none());
    }
}
