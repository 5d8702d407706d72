use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::color::{DARK_BLUE, WHITE};
use crate::{Animation, Canvas, Geometry, Lifecycle};

/// Columns a new flake may not share with the flakes placed just before it.
const COLUMN_MEMORY: usize = 5;

/// Options for [`SnowfallAnimation`].
#[derive(Clone, Debug)]
pub struct SnowfallOptions {
    pub name: String,
    pub flakes: usize,
    /// Rows fallen per frame
    pub speed: f32,
    /// Per-frame chance that a flake disappears, when melting is enabled
    pub melt_probability: f32,
    pub melting: bool,
    pub seed: u64,
}

impl Default for SnowfallOptions {
    fn default() -> Self {
        Self {
            name: "Snowflake".into(),
            flakes: 25,
            speed: 1.0,
            melt_probability: 0.05,
            melting: false,
            seed: 42,
        }
    }
}

#[derive(Clone, Debug)]
struct Flake {
    row: f32,
    col: i32,
    visible: bool,
}

/// Snow falling over a dark blue sky.
///
/// Flakes start staggered two rows apart and wrap back to the top after
/// leaving the grid. The sky background is painted on every running
/// frame. Every instance owns its own random generator, so two snowfalls
/// with the same seed behave identically.
#[derive(Clone, Debug)]
pub struct SnowfallAnimation {
    lifecycle: Lifecycle,
    geometry: Geometry,
    flakes: Vec<Flake>,
    speed: f32,
    melt_probability: f32,
    melting: bool,
    wrap_row: f32,
    rng: SmallRng,
}

impl SnowfallAnimation {
    pub fn new(options: SnowfallOptions, geometry: Geometry) -> Self {
        let mut rng = SmallRng::seed_from_u64(options.seed);
        let mut cols: Vec<i32> = Vec::with_capacity(options.flakes);
        for _ in 0..options.flakes {
            let recent = &cols[cols.len().saturating_sub(COLUMN_MEMORY)..];
            let candidates: Vec<i32> = (0..geometry.height).filter(|c| !recent.contains(c)).collect();
            let col = candidates
                .choose(&mut rng)
                .copied()
                .unwrap_or_else(|| rng.gen_range(0..geometry.height.max(1)));
            cols.push(col);
        }

        let flakes: Vec<Flake> = cols
            .into_iter()
            .enumerate()
            .map(|(i, col)| Flake {
                row: (i * 2) as f32,
                col,
                visible: true,
            })
            .collect();
        let highest = flakes.iter().map(|f| f.row).fold(0.0, f32::max);

        Self {
            lifecycle: Lifecycle::new(options.name),
            geometry,
            flakes,
            speed: options.speed,
            melt_probability: options.melt_probability,
            melting: options.melting,
            wrap_row: (highest + 2.0).max(geometry.width as f32),
            rng,
        }
    }

    /// Portrait `(row, col)` of every flake currently drawn.
    pub fn visible_flakes(&self) -> Vec<(i32, i32)> {
        self.flakes
            .iter()
            .filter(|f| f.visible && f.row < self.geometry.width as f32)
            .map(|f| (f.row as i32, f.col))
            .collect()
    }
}

impl Animation for SnowfallAnimation {
    fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    fn lifecycle_mut(&mut self) -> &mut Lifecycle {
        &mut self.lifecycle
    }

    fn update(&mut self, canvas: &mut Canvas) {
        if !self.lifecycle.tick() {
            return;
        }
        canvas.set_background(DARK_BLUE);

        for flake in &mut self.flakes {
            flake.row += self.speed;
            if self.melting && self.rng.gen::<f32>() < self.melt_probability {
                flake.visible = false;
            }
            if flake.row >= self.wrap_row {
                flake.row = 0.0;
                flake.visible = true;
            }
        }

        for (row, col) in self.visible_flakes() {
            canvas.set(self.geometry.to_index(row, col), WHITE);
        }
    }

    fn reset(&mut self) {
        self.lifecycle.reset();
        for (i, flake) in self.flakes.iter_mut().enumerate() {
            flake.row = (i * 2) as f32;
            flake.visible = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snow(seed: u64) -> SnowfallAnimation {
        let options = SnowfallOptions {
            seed,
            ..Default::default()
        };
        SnowfallAnimation::new(options, Geometry::default())
    }

    fn columns(anim: &SnowfallAnimation) -> Vec<i32> {
        anim.flakes.iter().map(|f| f.col).collect()
    }

    #[test]
    fn test_columns_avoid_recent_choices() {
        let anim = snow(42);
        let cols = columns(&anim);
        assert_eq!(cols.len(), 25);
        for (i, col) in cols.iter().enumerate() {
            assert!((0..10).contains(col));
            let recent = &cols[i.saturating_sub(COLUMN_MEMORY)..i];
            assert!(!recent.contains(col), "flake {} repeats column {}", i, col);
        }
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        assert_eq!(columns(&snow(7)), columns(&snow(7)));

        let mut a = snow(7);
        let mut b = snow(7);
        a.start();
        b.start();
        for _ in 0..20 {
            let mut ca = Canvas::new();
            let mut cb = Canvas::new();
            a.update(&mut ca);
            b.update(&mut cb);
            assert_eq!(ca, cb);
        }
    }

    #[test]
    fn test_idle_is_noop() {
        let mut anim = snow(1);
        let mut canvas = Canvas::new();
        anim.update(&mut canvas);
        assert_eq!(canvas, Canvas::new());

        anim.start();
        anim.update(&mut canvas);
        assert_eq!(canvas.background(), Some(DARK_BLUE));
    }

    #[test]
    fn test_custom_name() {
        let options = SnowfallOptions {
            name: "Flurry".into(),
            ..Default::default()
        };
        let anim = SnowfallAnimation::new(options, Geometry::default());
        assert_eq!(anim.name(), "Flurry");
        assert_eq!(snow(1).name(), "Snowflake");
    }

    #[test]
    fn test_flakes_fall_and_wrap() {
        let mut anim = snow(3);
        anim.start();
        anim.update(&mut Canvas::new());
        // flake 0 started on row 0 and fell one row
        assert_eq!(anim.flakes[0].row, 1.0);

        // the lowest flake starts at row 48 and wraps at 50
        anim.update(&mut Canvas::new());
        assert_eq!(anim.flakes[24].row, 0.0);
    }

    #[test]
    fn test_only_on_grid_flakes_are_drawn() {
        let mut anim = snow(5);
        anim.start();
        let mut canvas = Canvas::new();
        anim.update(&mut canvas);
        let geometry = Geometry::default();
        assert!(canvas.iter().all(|(i, _)| geometry.contains_index(i)));
        assert_eq!(canvas.len(), anim.visible_flakes().len());
    }

    #[test]
    fn test_reset_restores_rows() {
        let mut anim = snow(9);
        anim.start();
        for _ in 0..4 {
            anim.update(&mut Canvas::new());
        }
        anim.reset();
        let rows: Vec<f32> = anim.flakes.iter().map(|f| f.row).collect();
        assert_eq!(rows[..3], [0.0, 2.0, 4.0]);
        assert!(anim.flakes.iter().all(|f| f.visible));
    }
}
