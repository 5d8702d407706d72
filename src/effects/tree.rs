use crate::color::{BROWN, DARK_GREEN, LIGHT_GREEN, MAGENTA, RED};
use crate::{Animation, Canvas, Color, Geometry, Lifecycle};

/// Tree sprite on the 16 x 10 portrait grid, as `(row, col, color)`.
#[rustfmt::skip]
const TREE: &[(i32, i32, Color)] = &[
    (8, 4, LIGHT_GREEN), (8, 5, LIGHT_GREEN),
    (9, 3, DARK_GREEN), (9, 4, LIGHT_GREEN), (9, 5, RED), (9, 6, DARK_GREEN),
    (10, 2, DARK_GREEN), (10, 3, MAGENTA), (10, 4, LIGHT_GREEN), (10, 5, LIGHT_GREEN),
    (10, 6, DARK_GREEN), (10, 7, DARK_GREEN),
    (11, 3, DARK_GREEN), (11, 4, LIGHT_GREEN), (11, 5, LIGHT_GREEN), (11, 6, DARK_GREEN),
    (12, 2, DARK_GREEN), (12, 3, DARK_GREEN), (12, 4, MAGENTA), (12, 5, LIGHT_GREEN),
    (12, 6, RED), (12, 7, DARK_GREEN),
    (13, 1, DARK_GREEN), (13, 2, RED), (13, 3, DARK_GREEN), (13, 4, LIGHT_GREEN),
    (13, 5, LIGHT_GREEN), (13, 6, DARK_GREEN), (13, 7, DARK_GREEN), (13, 8, DARK_GREEN),
    // trunk
    (14, 4, BROWN), (14, 5, BROWN), (15, 4, BROWN), (15, 5, BROWN),
];

/// Paint the tree sprite.
pub fn draw_tree(canvas: &mut Canvas, geometry: &Geometry) {
    for &(row, col, color) in TREE {
        canvas.set(geometry.to_index(row, col), color);
    }
}

/// A static decorated tree.
#[derive(Clone, Debug)]
pub struct ChristmasTreeAnimation {
    lifecycle: Lifecycle,
    geometry: Geometry,
}

impl ChristmasTreeAnimation {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            lifecycle: Lifecycle::new("Christmas tree"),
            geometry,
        }
    }
}

impl Animation for ChristmasTreeAnimation {
    fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    fn lifecycle_mut(&mut self) -> &mut Lifecycle {
        &mut self.lifecycle
    }

    fn update(&mut self, canvas: &mut Canvas) {
        if self.lifecycle.tick() {
            draw_tree(canvas, &self.geometry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draws_sprite_when_running() {
        let geometry = Geometry::default();
        let mut tree = ChristmasTreeAnimation::new(geometry);
        let mut canvas = Canvas::new();

        tree.update(&mut canvas);
        assert!(canvas.is_empty());

        tree.start();
        tree.update(&mut canvas);
        assert_eq!(canvas.len(), TREE.len());
        assert_eq!(canvas.get(geometry.to_index(15, 4)), Some(BROWN));
        assert!(canvas.iter().all(|(i, _)| geometry.contains_index(i)));
    }
}
