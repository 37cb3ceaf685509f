//! Terminal output formatting
//!
//! Display utilities for CLI results and the rarity progress bar.

pub mod display;
pub mod formatters;
pub mod progress;

pub use display::{
    print_check_result, print_design_result, print_feedback_result, print_rarity_result,
};
pub use progress::{rarity_progress_bar, update_rarity_progress};
