//! Grid design catalog and rarity data
//!
//! The default catalog and its rarity table are compiled into the binary;
//! either can be replaced by a JSON file at run time.

mod embedded;
pub mod loader;
mod rarity;

pub use embedded::{DESIGNS_JSON, RARITY_JSON};
pub use loader::{default_catalog, default_rarity_table};
pub use rarity::{RarityEntry, RarityTable};
