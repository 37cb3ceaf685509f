//! Embedded catalog data
//!
//! Design and rarity files compiled into the binary.

/// Default grid design catalog (`data/designs.json`)
pub const DESIGNS_JSON: &str = include_str!("../../data/designs.json");

/// Precomputed rarity table for the default catalog (`data/rarity.json`)
pub const RARITY_JSON: &str = include_str!("../../data/rarity.json");
