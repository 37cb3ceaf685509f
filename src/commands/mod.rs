//! Command implementations

pub mod check;
pub mod design;
pub mod feedback;
pub mod rarity;
pub mod sample;

pub use check::{CheckConfig, CheckResult, DesignReport, check_word};
pub use design::{CUSTOM_DESIGN_NAME, DesignConfig, DesignResult, check_design, parse_grid};
pub use feedback::{FeedbackResult, score_guess};
pub use rarity::{RarityResult, run_rarity};
pub use sample::{SamplePicker, sample_guesses};
