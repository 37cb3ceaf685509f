//! Core domain types for Wordle art
//!
//! This module contains the fundamental domain types: words, feedback colors,
//! row signatures and grid designs. Nothing here knows about the dictionary.

mod design;
mod feedback;
mod pattern;
mod word;

/// Letters per word and cells per grid row
pub const WORD_LENGTH: usize = 5;

pub use design::{DesignError, GridDesign, ValidGridDesign, validate_catalog};
pub use feedback::{FeedbackColor, Row, feedback, is_uniform};
pub use pattern::Pattern;
pub use word::{Word, WordError};
