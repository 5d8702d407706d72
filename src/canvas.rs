//! The per-frame compositing surface.

use std::collections::BTreeMap;

use crate::Color;

/// A sparse frame buffer keyed by physical strip index.
///
/// A canvas lives for exactly one frame: the driver creates it empty, the
/// animation manager threads it through every running animation in binding
/// order and the renderer consumes it. Writes never blend; the last write to
/// an index wins. Indices are not validated here, the renderer drops those
/// that fall outside the strip.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Canvas {
    background: Option<Color>,
    pixels: BTreeMap<i32, Color>,
}

impl Canvas {
    /// Create an empty canvas with no background.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty canvas with a preset background.
    pub fn with_background(background: Color) -> Self {
        Self {
            background: Some(background),
            pixels: BTreeMap::new(),
        }
    }

    /// Write `color` at `index`, replacing any earlier write.
    #[inline]
    pub fn set(&mut self, index: i32, color: Color) {
        self.pixels.insert(index, color);
    }

    #[inline]
    pub fn get(&self, index: i32) -> Option<Color> {
        self.pixels.get(&index).copied()
    }

    /// Replace the background color.
    #[inline]
    pub fn set_background(&mut self, color: Color) {
        self.background = Some(color);
    }

    #[inline]
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// Remove and return the background color.
    pub fn take_background(&mut self) -> Option<Color> {
        self.background.take()
    }

    /// Number of written pixels (the background is not counted).
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Iterate written pixels in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, Color)> + '_ {
        self.pixels.iter().map(|(&index, &color)| (index, color))
    }

    /// Drop every pixel and the background.
    pub fn clear(&mut self) {
        self.background = None;
        self.pixels.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{DARK_BLUE, RED, WHITE};

    #[test]
    fn test_last_write_wins() {
        let mut canvas = Canvas::new();
        canvas.set(7, RED);
        canvas.set(7, WHITE);
        assert_eq!(canvas.get(7), Some(WHITE));
        assert_eq!(canvas.len(), 1);
    }

    #[test]
    fn test_background_is_separate_from_pixels() {
        let mut canvas = Canvas::with_background(DARK_BLUE);
        assert!(canvas.is_empty());
        canvas.set(0, RED);
        assert_eq!(canvas.take_background(), Some(DARK_BLUE));
        assert_eq!(canvas.background(), None);
        assert_eq!(canvas.get(0), Some(RED));
    }

    #[test]
    fn test_iter_is_ordered_and_keeps_out_of_range() {
        let mut canvas = Canvas::new();
        canvas.set(300, RED);
        canvas.set(-4, WHITE);
        canvas.set(12, RED);
        let indices: Vec<i32> = canvas.iter().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![-4, 12, 300]);

        canvas.clear();
        assert!(canvas.is_empty());
        assert_eq!(canvas.background(), None);
    }
}
