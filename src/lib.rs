//! Wordle Art
//!
//! Finds which Wordle art grid designs (pictures drawn with the colored feedback
//! squares of a game) can be achieved for a solution word, and with which guesses.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_art::catalog::{default_catalog, default_rarity_table};
//! use wordle_art::checker::{Checker, DEFAULT_MAX_WORDS};
//! use wordle_art::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::embedded();
//! let rarity = default_rarity_table().unwrap();
//! let catalog = default_catalog().unwrap();
//!
//! let checker = Checker::new(&dictionary, &rarity);
//! for design in checker.check_all("crane", &catalog, DEFAULT_MAX_WORDS) {
//!     println!("{}: {:?}", design.name(), design.guesses);
//! }
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Design catalog and rarity data
pub mod catalog;

// Design checking
pub mod checker;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
