//! Logical portrait coordinates to physical strip indices.
//!
//! The strip is wired as a landscape matrix `width` LEDs wide and `height`
//! LEDs tall, but the show is composed on the display stood on its side:
//! a portrait grid with `width` rows and `height` columns. Logical row `r`
//! runs along a landscape column (right to left), logical column `c` picks
//! the landscape row.

use crate::ConfigError;

/// Largest supported strip side, in LEDs.
pub const MAX_DIMENSION: i32 = 4096;

/// Physical dimensions of the LED strip in its wired (landscape) orientation.
///
/// Both sides must be in `1..=MAX_DIMENSION`: `to_coord` divides by `width`
/// and `to_index` multiplies by it. [`Geometry::try_new`] checks this;
/// [`Geometry::new`] does not.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    /// LEDs per landscape row (also the number of portrait rows)
    pub width: i32,
    /// Landscape rows (also the number of portrait columns)
    pub height: i32,
}

impl Default for Geometry {
    fn default() -> Self {
        Self::new(16, 10)
    }
}

impl Geometry {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Checked constructor for dimensions from outside the program.
    pub fn try_new(width: u32, height: u32) -> Result<Self, ConfigError> {
        let side = |v: u32| i32::try_from(v).ok().filter(|v| (1..=MAX_DIMENSION).contains(v));
        match (side(width), side(height)) {
            (Some(w), Some(h)) => Ok(Self::new(w, h)),
            _ => Err(ConfigError::InvalidGeometry { width, height }),
        }
    }

    /// Number of addressable LEDs on the strip.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }

    /// Map a portrait `(row, col)` to a strip index. See [`to_index`].
    #[inline]
    pub fn to_index(&self, row: i32, col: i32) -> i32 {
        to_index(row, col, self.width, self.height)
    }

    /// Map a strip index back to a portrait `(row, col)`. See [`to_coord`].
    #[inline]
    pub fn to_coord(&self, index: i32) -> (i32, i32) {
        to_coord(index, self.width, self.height)
    }

    /// Whether `index` addresses an LED on the strip.
    #[inline]
    pub fn contains_index(&self, index: i32) -> bool {
        index >= 0 && (index as usize) < self.pixel_count()
    }
}

/// Convert a portrait `(row, col)` to a flat strip index.
///
/// No bounds checking: coordinates off the grid map to indices the renderer
/// ignores (or, for `row >= width`, to an unrelated LED). `height` only
/// bounds the strip length and takes no part in the mapping.
///
/// ```rust
/// use matrix_show::coords::{to_coord, to_index};
///
/// assert_eq!(to_index(0, 0, 16, 10), 15);
/// assert_eq!(to_index(15, 9, 16, 10), 144);
/// assert_eq!(to_coord(144, 16, 10), (15, 9));
/// ```
#[inline]
pub fn to_index(row: i32, col: i32, width: i32, _height: i32) -> i32 {
    let landscape_row = col;
    let landscape_col = width - 1 - row;
    landscape_row * width + landscape_col
}

/// Convert a flat strip index to a portrait `(row, col)`.
///
/// Exact inverse of [`to_index`] for `0 <= row < width`.
#[inline]
pub fn to_coord(index: i32, width: i32, _height: i32) -> (i32, i32) {
    let landscape_row = index.div_euclid(width);
    let landscape_col = index.rem_euclid(width);
    (width - 1 - landscape_col, landscape_row)
}
