//! Design checking against a solution word
//!
//! This module contains the row matcher, the structural validator, the
//! variation generator, the design and catalog checks and the rarity batch.

mod engine;
mod rarity;
mod row_matcher;
mod scoring;
mod structure;
mod variations;

pub use engine::{Checker, DEFAULT_MAX_WORDS};
pub use rarity::{RarityConfig, RarityProgress, compute_rarity_table};
pub use row_matcher::{RowMatchCache, match_row, produces_row};
pub use scoring::{color_fill, difficulty};
pub use structure::is_valid;
pub use variations::{RELABELINGS, Relabeling, mirror, relabel, variations};
