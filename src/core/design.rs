//! Grid designs and checked results
//!
//! A `GridDesign` is immutable once built. Loading validates the shape, so the
//! rest of the crate can assume every row has exactly five cells and every
//! grid has at least one row.

use super::WORD_LENGTH;
use super::feedback::{FeedbackColor, Row};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error type for malformed design data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesignError {
    EmptyName,
    EmptyGrid { name: String },
    RowWidth {
        name: String,
        row: usize,
        width: usize,
    },
    InvalidCell(i8),
    EmptyCatalog,
}

impl fmt::Display for DesignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Design name must not be empty"),
            Self::EmptyGrid { name } => write!(f, "Design '{name}' has no rows"),
            Self::RowWidth { name, row, width } => write!(
                f,
                "Design '{name}' row {row} has {width} cells, expected {WORD_LENGTH}"
            ),
            Self::InvalidCell(value) => {
                write!(f, "Cell value {value} is not one of -1 (yellow), 0 (grey), 1 (green)")
            }
            Self::EmptyCatalog => write!(f, "Design catalog must contain at least one design"),
        }
    }
}

impl std::error::Error for DesignError {}

/// A pattern of feedback colors across one or more guess rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGridDesign", rename_all = "camelCase")]
pub struct GridDesign {
    name: String,
    can_mirror: bool,
    grid: Vec<Row>,
}

/// Unvalidated design as it appears in catalog files
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGridDesign {
    name: String,
    #[serde(default)]
    can_mirror: bool,
    grid: Vec<Vec<FeedbackColor>>,
}

impl TryFrom<RawGridDesign> for GridDesign {
    type Error = DesignError;

    fn try_from(raw: RawGridDesign) -> Result<Self, Self::Error> {
        let mut grid = Vec::with_capacity(raw.grid.len());
        for (i, cells) in raw.grid.into_iter().enumerate() {
            let width = cells.len();
            let row: Row = cells.try_into().map_err(|_| DesignError::RowWidth {
                name: raw.name.clone(),
                row: i + 1,
                width,
            })?;
            grid.push(row);
        }
        Self::new(raw.name, raw.can_mirror, grid)
    }
}

impl GridDesign {
    /// Create a design, rejecting empty names and empty grids
    ///
    /// # Errors
    /// Returns `DesignError::EmptyName` or `DesignError::EmptyGrid`.
    ///
    /// # Examples
    /// ```
    /// use wordle_art::core::{FeedbackColor::{Green, Grey}, GridDesign};
    ///
    /// let design = GridDesign::new("Line", false, vec![[Grey; 5], [Green; 5]]).unwrap();
    /// assert_eq!(design.rows(), 2);
    /// assert!(GridDesign::new("Empty", false, Vec::new()).is_err());
    /// ```
    pub fn new(name: impl Into<String>, can_mirror: bool, grid: Vec<Row>) -> Result<Self, DesignError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DesignError::EmptyName);
        }
        if grid.is_empty() {
            return Err(DesignError::EmptyGrid { name });
        }
        Ok(Self {
            name,
            can_mirror,
            grid,
        })
    }

    /// A design of `rows` rows all set to one color
    ///
    /// # Errors
    /// Returns `DesignError` if `name` is empty or `rows` is zero.
    pub fn filled(
        name: impl Into<String>,
        rows: usize,
        color: FeedbackColor,
    ) -> Result<Self, DesignError> {
        Self::new(name, true, vec![[color; WORD_LENGTH]; rows])
    }

    /// Build a derived design from an already validated one
    pub(crate) fn derive(&self, name: String, can_mirror: bool, grid: Vec<Row>) -> Self {
        debug_assert_eq!(grid.len(), self.grid.len());
        Self {
            name,
            can_mirror,
            grid,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub const fn can_mirror(&self) -> bool {
        self.can_mirror
    }

    #[inline]
    #[must_use]
    pub fn grid(&self) -> &[Row] {
        &self.grid
    }

    /// Number of guess rows
    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    /// Total number of cells
    #[inline]
    #[must_use]
    pub fn cells(&self) -> usize {
        self.grid.len() * WORD_LENGTH
    }

    /// Number of grey cells across the grid
    #[must_use]
    pub fn grey_cells(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|&&cell| cell == FeedbackColor::Grey)
            .count()
    }

    /// True if every row reads the same left to right and right to left
    #[must_use]
    pub fn is_horizontally_symmetric(&self) -> bool {
        self.grid
            .iter()
            .all(|row| (0..WORD_LENGTH / 2).all(|i| row[i] == row[WORD_LENGTH - 1 - i]))
    }
}

/// A design that is achievable for a solution word, with its scores
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidGridDesign {
    #[serde(flatten)]
    pub design: GridDesign,
    /// Matching guesses for each row, in dictionary order
    pub guesses: Vec<Vec<String>>,
    /// Percent of dictionary words for which the design is achievable, -1 if unknown
    pub rarity: i32,
    pub difficulty: usize,
    /// Percent of cells that are not grey
    pub color_fill: u8,
}

impl ValidGridDesign {
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        self.design.name()
    }
}

/// Check a catalog is usable before any check runs
///
/// # Errors
/// Returns `DesignError::EmptyCatalog` for an empty catalog.
pub fn validate_catalog(catalog: &[GridDesign]) -> Result<(), DesignError> {
    if catalog.is_empty() {
        return Err(DesignError::EmptyCatalog);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::FeedbackColor::{Green, Grey, Yellow};
    use super::*;

    #[test]
    fn deserializes_catalog_format() {
        let json = r#"{"name": "Dot", "canMirror": true, "grid": [[0, 0, -1, 0, 0], [1, 1, 1, 1, 1]]}"#;
        let design: GridDesign = serde_json::from_str(json).unwrap();

        assert_eq!(design.name(), "Dot");
        assert!(design.can_mirror());
        assert_eq!(design.grid()[0], [Grey, Grey, Yellow, Grey, Grey]);
        assert_eq!(design.grid()[1], [Green; 5]);
    }

    #[test]
    fn rejects_short_row() {
        let json = r#"{"name": "Short", "canMirror": false, "grid": [[0, 0, 0, 0]]}"#;
        let err = serde_json::from_str::<GridDesign>(json).unwrap_err();
        assert!(err.to_string().contains("row 1 has 4 cells"), "{err}");
    }

    #[test]
    fn rejects_unknown_cell_value() {
        let json = r#"{"name": "Bad", "canMirror": false, "grid": [[0, 0, 2, 0, 0]]}"#;
        let err = serde_json::from_str::<GridDesign>(json).unwrap_err();
        assert!(err.to_string().contains("Cell value 2"), "{err}");
    }

    #[test]
    fn rejects_empty_grid_and_name() {
        assert_eq!(
            GridDesign::new("Nothing", false, Vec::new()),
            Err(DesignError::EmptyGrid {
                name: "Nothing".into()
            })
        );
        assert_eq!(
            GridDesign::new("  ", false, vec![[Grey; 5]]),
            Err(DesignError::EmptyName)
        );
    }

    #[test]
    fn symmetry() {
        let symmetric =
            GridDesign::new("Sym", true, vec![[Yellow, Grey, Green, Grey, Yellow]]).unwrap();
        let asymmetric =
            GridDesign::new("Asym", true, vec![[Yellow, Grey, Green, Grey, Grey]]).unwrap();

        assert!(symmetric.is_horizontally_symmetric());
        assert!(!asymmetric.is_horizontally_symmetric());
    }

    #[test]
    fn filled_grid_counts() {
        let design = GridDesign::filled("Blank", 6, Grey).unwrap();
        assert_eq!(design.cells(), 30);
        assert_eq!(design.grey_cells(), 30);
        assert!(GridDesign::filled("None", 0, Grey).is_err());
    }

    #[test]
    fn empty_catalog_rejected() {
        assert_eq!(validate_catalog(&[]), Err(DesignError::EmptyCatalog));
    }
}
