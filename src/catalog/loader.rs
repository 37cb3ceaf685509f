//! Catalog and rarity table loading
//!
//! Malformed files are rejected here with a descriptive error so the checker
//! never sees a ragged grid.

use super::embedded::{DESIGNS_JSON, RARITY_JSON};
use super::rarity::RarityTable;
use crate::core::{GridDesign, validate_catalog};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse a catalog from JSON text: an array of `{name, canMirror, grid}`
///
/// # Errors
///
/// Returns an error for invalid JSON, malformed designs or an empty catalog.
pub fn parse_catalog(json: &str) -> Result<Vec<GridDesign>> {
    let catalog: Vec<GridDesign> = serde_json::from_str(json).context("parsing design catalog")?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// The catalog compiled into the binary
///
/// # Errors
///
/// Only fails if `data/designs.json` was edited into an invalid state.
///
/// # Examples
/// ```
/// use wordle_art::catalog::default_catalog;
///
/// let catalog = default_catalog().unwrap();
/// assert!(catalog.iter().any(|design| design.name() == "Heart"));
/// ```
pub fn default_catalog() -> Result<Vec<GridDesign>> {
    parse_catalog(DESIGNS_JSON)
}

/// Load a catalog from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<GridDesign>> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading design catalog {}", path.display()))?;
    parse_catalog(&json).with_context(|| format!("in {}", path.display()))
}

/// The rarity table compiled into the binary
///
/// # Errors
///
/// Only fails if `data/rarity.json` was edited into an invalid state.
pub fn default_rarity_table() -> Result<RarityTable> {
    serde_json::from_str(RARITY_JSON).context("parsing embedded rarity table")
}

/// Load a rarity table from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse.
pub fn load_rarity_table<P: AsRef<Path>>(path: P) -> Result<RarityTable> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading rarity table {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("parsing rarity table {}", path.display()))
}

/// Write a rarity table as pretty JSON
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_rarity_table<P: AsRef<Path>>(table: &RarityTable, path: P) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(table)?;
    fs::write(path, json + "\n")
        .with_context(|| format!("writing rarity table {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses() {
        let catalog = default_catalog().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.iter().all(|design| design.rows() > 0));
    }

    #[test]
    fn embedded_rarity_table_parses() {
        let table = default_rarity_table().unwrap();
        assert!(!table.is_empty());
        assert!(table.get("Heart").is_some());
    }

    #[test]
    fn empty_catalog_rejected() {
        let err = parse_catalog("[]").unwrap_err();
        assert!(format!("{err:#}").contains("at least one design"));
    }

    #[test]
    fn ragged_grid_rejected() {
        let json = r#"[{"name": "Ragged", "canMirror": false, "grid": [[0, 0, 0, 0, 0], [0, 0, 0]]}]"#;
        let err = parse_catalog(json).unwrap_err();
        assert!(format!("{err:#}").contains("row 2 has 3 cells"), "{err:#}");
    }

    #[test]
    fn rarity_table_file_round_trip() {
        let table = default_rarity_table().unwrap();
        let path = std::env::temp_dir().join("wordle_art_rarity_round_trip.json");

        save_rarity_table(&table, &path).unwrap();
        let loaded = load_rarity_table(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(loaded, table);
    }
}
