//! Design variations
//!
//! A base design can be drawn with its three colors swapped around and, when
//! allowed, flipped left to right. Every transform builds a new design; the base
//! is never modified.

use super::structure::is_valid;
use crate::core::{FeedbackColor, GridDesign, Row};

/// New color for each of the three original roles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relabeling {
    pub yellow: FeedbackColor,
    pub grey: FeedbackColor,
    pub green: FeedbackColor,
}

impl Relabeling {
    const fn new(yellow: FeedbackColor, grey: FeedbackColor, green: FeedbackColor) -> Self {
        Self {
            yellow,
            grey,
            green,
        }
    }

    /// Apply to a single cell
    #[inline]
    #[must_use]
    pub const fn apply(self, color: FeedbackColor) -> FeedbackColor {
        match color {
            FeedbackColor::Yellow => self.yellow,
            FeedbackColor::Grey => self.grey,
            FeedbackColor::Green => self.green,
        }
    }

    /// Name suffix: each new value shifted by one, in yellow-grey-green order
    ///
    /// Rarity tables are keyed by names carrying this code, so it must not change.
    #[must_use]
    pub fn code(self) -> String {
        [self.yellow, self.grey, self.green]
            .iter()
            .map(|color| char::from(b'0' + (color.value() + 1) as u8))
            .collect()
    }
}

/// The five non-identity color orderings
///
/// | code | yellow | grey   | green  |
/// |------|--------|--------|--------|
/// | 021  | yellow | green  | grey   |
/// | 102  | grey   | yellow | green  |
/// | 120  | grey   | green  | yellow |
/// | 201  | green  | yellow | grey   |
/// | 210  | green  | grey   | yellow |
pub const RELABELINGS: [Relabeling; 5] = {
    use FeedbackColor::{Green, Grey, Yellow};
    [
        Relabeling::new(Yellow, Green, Grey),
        Relabeling::new(Grey, Yellow, Green),
        Relabeling::new(Grey, Green, Yellow),
        Relabeling::new(Green, Yellow, Grey),
        Relabeling::new(Green, Grey, Yellow),
    ]
};

/// Swap the design's colors, returning `None` if the result is not a playable game
///
/// Swapping can move the all-green row, or turn a colored row into a second
/// solved row, so every relabeling is validated again.
#[must_use]
pub fn relabel(design: &GridDesign, relabeling: Relabeling) -> Option<GridDesign> {
    let grid: Vec<Row> = design
        .grid()
        .iter()
        .map(|row| row.map(|cell| relabeling.apply(cell)))
        .collect();

    let relabeled = design.derive(
        format!("{} {}", design.name(), relabeling.code()),
        design.can_mirror(),
        grid,
    );

    is_valid(&relabeled).then_some(relabeled)
}

/// Flip the design left to right
#[must_use]
pub fn mirror(design: &GridDesign) -> GridDesign {
    let grid: Vec<Row> = design
        .grid()
        .iter()
        .map(|row| {
            let mut flipped = *row;
            flipped.reverse();
            flipped
        })
        .collect();

    design.derive(format!("{} (Mirror)", design.name()), true, grid)
}

/// Every variation of a base design, starting with the design itself
///
/// Order: base, its valid relabelings, then (for mirrorable, asymmetric designs)
/// the mirror and its valid relabelings. At most 12 designs.
///
/// # Examples
/// ```
/// use wordle_art::checker::variations;
/// use wordle_art::core::{FeedbackColor::{Green, Grey, Yellow}, GridDesign};
///
/// let design = GridDesign::new("Corner", true, vec![[Yellow, Grey, Grey, Grey, Grey]]).unwrap();
/// let names: Vec<String> = variations(&design).iter().map(|d| d.name().to_string()).collect();
///
/// assert_eq!(names.len(), 12);
/// assert_eq!(names[0], "Corner");
/// assert_eq!(names[1], "Corner 021");
/// assert_eq!(names[6], "Corner (Mirror)");
/// ```
#[must_use]
pub fn variations(design: &GridDesign) -> Vec<GridDesign> {
    let mut result = vec![design.clone()];
    result.extend(valid_relabelings(design));

    if design.can_mirror() && !design.is_horizontally_symmetric() {
        let mirrored = mirror(design);
        let swapped: Vec<GridDesign> = valid_relabelings(&mirrored).collect();
        result.push(mirrored);
        result.extend(swapped);
    }

    result
}

fn valid_relabelings(design: &GridDesign) -> impl Iterator<Item = GridDesign> + '_ {
    RELABELINGS.iter().filter_map(move |&r| relabel(design, r))
}
