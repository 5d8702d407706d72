use log::debug;

use crate::color::{BRIGHT_YELLOW, DARK_BLUE, LIGHT_YELLOW, ORANGE, WHITE, YELLOW};
use crate::{Animation, Canvas, Color, Geometry, Lifecycle};

/// Sphere colors from the center outwards.
pub const EXPLOSION_COLORS: [Color; 5] = [DARK_BLUE, WHITE, BRIGHT_YELLOW, YELLOW, ORANGE];

fn in_bounds(geometry: &Geometry, row: i32, col: i32) -> bool {
    (0..geometry.width).contains(&row) && (0..geometry.height).contains(&col)
}

/// Draw a star centered on portrait `(row, col)`.
///
/// Size 1 is a single point, 2 adds a cross, 3 adds diagonal rays and 4 or
/// more draws a shaded disc of diameter `size`. Neighbours off the grid are
/// skipped.
pub fn draw_star(canvas: &mut Canvas, geometry: &Geometry, position: (i32, i32), size: i32) {
    let (row, col) = position;
    let mut put = |r: i32, c: i32, color: Color| {
        if in_bounds(geometry, r, c) {
            canvas.set(geometry.to_index(r, c), color);
        }
    };

    if size >= 4 {
        put(row, col, WHITE);
        let half = size as f32 / 2.0;
        for dr in (-size + 1)..(size - 1) {
            for dc in (-size + 1)..(size - 1) {
                let distance = ((dr * dr + dc * dc) as f32).sqrt();
                if distance > half {
                    continue;
                }
                let color = if distance < size as f32 / 4.0 {
                    BRIGHT_YELLOW
                } else if distance < half * 0.75 {
                    YELLOW
                } else {
                    LIGHT_YELLOW
                };
                put(row + dr, col + dc, color);
            }
        }
        return;
    }

    put(row, col, BRIGHT_YELLOW);
    if size >= 2 {
        for (dr, dc) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
            put(row + dr, col + dc, YELLOW);
        }
    }
    if size == 3 {
        for (dr, dc) in [(-1, -1), (-1, 1), (1, -1), (1, 1)] {
            put(row + dr, col + dc, LIGHT_YELLOW);
        }
    }
}

/// Draw a filled circle of `radius` around portrait `center`, shaded by
/// relative distance with `colors` (center first).
pub fn draw_expanding_sphere(
    canvas: &mut Canvas,
    geometry: &Geometry,
    center: (i32, i32),
    radius: f32,
    colors: &[Color; 5],
) {
    let (center_row, center_col) = (center.0 as f32, center.1 as f32);
    for row in 0..geometry.width {
        let r = row as f32;
        if r < center_row - radius - 1.0 || r > center_row + radius + 1.0 {
            continue;
        }
        for col in 0..geometry.height {
            let c = col as f32;
            if c < center_col - radius - 1.0 || c > center_col + radius + 1.0 {
                continue;
            }
            let distance = ((r - center_row).powi(2) + (c - center_col).powi(2)).sqrt();
            if distance > radius {
                continue;
            }
            let norm = distance / radius.max(0.1);
            let color = match norm {
                n if n < 0.2 => colors[0],
                n if n < 0.3 => colors[1],
                n if n < 0.6 => colors[2],
                n if n < 0.8 => colors[3],
                _ => colors[4],
            };
            canvas.set(geometry.to_index(row, col), color);
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarPhase {
    Waiting,
    Growing,
    Exploding,
    UniformScreen,
}

/// Options for [`StarOfBethlehemAnimation`].
#[derive(Clone, Debug)]
pub struct StarOptions {
    pub name: String,
    /// Portrait position of the small star
    pub start_pos: (i32, i32),
    /// Where the growing star travels to and the sphere is centered
    pub end_pos: (i32, i32),
    pub wait_frames: u32,
    pub growth_frames: u32,
    pub explosion_frames: u32,
}

impl Default for StarOptions {
    fn default() -> Self {
        Self {
            name: "Star of Bethlehem".into(),
            start_pos: (1, 4),
            end_pos: (7, 4),
            wait_frames: 100,
            growth_frames: 50,
            explosion_frames: 30,
        }
    }
}

/// A small star that grows, travels down and explodes into a sphere which
/// finally floods the display with the sphere's center color.
#[derive(Clone, Debug)]
pub struct StarOfBethlehemAnimation {
    lifecycle: Lifecycle,
    geometry: Geometry,
    start_pos: (i32, i32),
    end_pos: (i32, i32),
    wait_frames: u32,
    growth_frames: u32,
    explosion_frames: u32,
    phase: StarPhase,
    phase_frame: i64,
}

impl StarOfBethlehemAnimation {
    pub fn new(options: StarOptions, geometry: Geometry) -> Self {
        Self {
            lifecycle: Lifecycle::new(options.name),
            geometry,
            start_pos: options.start_pos,
            end_pos: options.end_pos,
            wait_frames: options.wait_frames,
            growth_frames: options.growth_frames,
            explosion_frames: options.explosion_frames,
            phase: StarPhase::Waiting,
            phase_frame: 0,
        }
    }

    #[inline]
    pub fn phase(&self) -> StarPhase {
        self.phase
    }

    fn phase_start(&self, phase: StarPhase) -> i64 {
        let (wait, grow, explode) = (
            self.wait_frames as i64,
            self.growth_frames as i64,
            self.explosion_frames as i64,
        );
        match phase {
            StarPhase::Waiting => 0,
            StarPhase::Growing => wait,
            StarPhase::Exploding => wait + grow,
            StarPhase::UniformScreen => wait + grow + explode,
        }
    }

    fn enter(&mut self, phase: StarPhase) {
        self.phase = phase;
        self.phase_frame = 0;
        debug!(
            "effect: star phase={:?} frame={}",
            phase,
            self.lifecycle.frame_count()
        );
    }
}

fn progress(frame: i64, length: u32) -> f32 {
    frame as f32 / length.max(1) as f32
}

impl Animation for StarOfBethlehemAnimation {
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
        self.phase_frame += 1;

        match self.phase {
            StarPhase::Waiting => {
                draw_star(canvas, &self.geometry, self.start_pos, 1);
                if self.phase_frame >= self.wait_frames as i64 {
                    self.enter(StarPhase::Growing);
                }
            }
            StarPhase::Growing => {
                let t = progress(self.phase_frame, self.growth_frames);
                let size = 1 + (t * t * 4.0) as i32;
                let lerp = |a: i32, b: i32| (a as f32 + (b - a) as f32 * t) as i32;
                let position = (
                    lerp(self.start_pos.0, self.end_pos.0),
                    lerp(self.start_pos.1, self.end_pos.1),
                );
                draw_star(canvas, &self.geometry, position, size);
                if self.phase_frame >= self.growth_frames as i64 {
                    self.enter(StarPhase::Exploding);
                }
            }
            StarPhase::Exploding => {
                let radius = 2.0 + progress(self.phase_frame, self.explosion_frames) * 50.0;
                draw_expanding_sphere(
                    canvas,
                    &self.geometry,
                    self.end_pos,
                    radius,
                    &EXPLOSION_COLORS,
                );
                if self.phase_frame >= self.explosion_frames as i64 {
                    self.enter(StarPhase::UniformScreen);
                }
            }
            StarPhase::UniformScreen => canvas.set_background(EXPLOSION_COLORS[0]),
        }
    }

    fn reset(&mut self) {
        self.lifecycle.reset();
        self.phase = StarPhase::Waiting;
        self.phase_frame = 0;
    }

    /// Selects the phase containing `frame`. A negative frame stretches the
    /// waiting phase. The animation never stops itself.
    fn set_frame(&mut self, frame: i64) {
        self.lifecycle.set_frame_count(frame.clamp(0, u32::MAX as i64) as u32);
        let phase = [
            StarPhase::UniformScreen,
            StarPhase::Exploding,
            StarPhase::Growing,
        ]
        .into_iter()
        .find(|&p| frame >= self.phase_start(p))
        .unwrap_or(StarPhase::Waiting);
        self.phase = phase;
        self.phase_frame = frame - self.phase_start(phase);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AnimationState;

    fn star(wait: u32, grow: u32, explode: u32) -> StarOfBethlehemAnimation {
        let options = StarOptions {
            wait_frames: wait,
            growth_frames: grow,
            explosion_frames: explode,
            ..Default::default()
        };
        StarOfBethlehemAnimation::new(options, Geometry::default())
    }

    #[test]
    fn test_draw_star_sizes() {
        let geometry = Geometry::default();
        let count = |size| {
            let mut canvas = Canvas::new();
            draw_star(&mut canvas, &geometry, (5, 5), size);
            canvas.len()
        };
        assert_eq!(count(1), 1);
        assert_eq!(count(2), 5);
        assert_eq!(count(3), 9);
    }

    #[test]
    fn test_draw_star_clips_at_edges() {
        let geometry = Geometry::default();
        let mut canvas = Canvas::new();
        draw_star(&mut canvas, &geometry, (0, 0), 3);
        // center, two cross arms and one diagonal stay on the grid
        assert_eq!(canvas.len(), 4);
        assert_eq!(canvas.get(geometry.to_index(0, 0)), Some(BRIGHT_YELLOW));
        assert_eq!(canvas.get(geometry.to_index(1, 1)), Some(LIGHT_YELLOW));
    }

    #[test]
    fn test_large_star_is_a_disc() {
        let geometry = Geometry::default();
        let mut canvas = Canvas::new();
        draw_star(&mut canvas, &geometry, (7, 4), 4);
        assert_eq!(canvas.get(geometry.to_index(7, 4)), Some(BRIGHT_YELLOW));
        // distance 2 is on the rim
        assert_eq!(canvas.get(geometry.to_index(5, 4)), Some(LIGHT_YELLOW));
        assert_eq!(canvas.get(geometry.to_index(4, 4)), None);
    }

    #[test]
    fn test_sphere_covers_radius() {
        let geometry = Geometry::default();
        let mut canvas = Canvas::new();
        draw_expanding_sphere(&mut canvas, &geometry, (7, 4), 1.0, &EXPLOSION_COLORS);
        assert_eq!(canvas.len(), 5);
        assert_eq!(canvas.get(geometry.to_index(7, 4)), Some(DARK_BLUE));
        assert_eq!(canvas.get(geometry.to_index(6, 4)), Some(ORANGE));

        canvas.clear();
        draw_expanding_sphere(&mut canvas, &geometry, (7, 4), 50.0, &EXPLOSION_COLORS);
        assert_eq!(canvas.len(), geometry.pixel_count());
    }

    #[test]
    fn test_phase_progression() {
        let geometry = Geometry::default();
        let mut anim = star(2, 2, 2);
        anim.start();

        let mut canvas = Canvas::new();
        anim.update(&mut canvas);
        assert_eq!(canvas.len(), 1);
        assert_eq!(canvas.get(geometry.to_index(1, 4)), Some(BRIGHT_YELLOW));
        assert_eq!(anim.phase(), StarPhase::Waiting);

        anim.update(&mut Canvas::new());
        assert_eq!(anim.phase(), StarPhase::Growing);
        anim.update(&mut Canvas::new());
        anim.update(&mut Canvas::new());
        assert_eq!(anim.phase(), StarPhase::Exploding);
        anim.update(&mut Canvas::new());
        anim.update(&mut Canvas::new());
        assert_eq!(anim.phase(), StarPhase::UniformScreen);

        let mut canvas = Canvas::new();
        anim.update(&mut canvas);
        assert!(canvas.is_empty());
        assert_eq!(canvas.background(), Some(DARK_BLUE));
        assert!(anim.is_running());
    }

    #[test]
    fn test_set_frame_selects_phase() {
        let mut anim = star(20, 50, 50);
        anim.start();

        anim.set_frame(10);
        assert_eq!(anim.phase(), StarPhase::Waiting);
        anim.set_frame(20);
        assert_eq!(anim.phase(), StarPhase::Growing);
        anim.set_frame(119);
        assert_eq!(anim.phase(), StarPhase::Exploding);
        anim.set_frame(5000);
        assert_eq!(anim.phase(), StarPhase::UniformScreen);
        assert_eq!(anim.state(), AnimationState::Running);
        assert_eq!(anim.frame_count(), 5000);
    }

    #[test]
    fn test_negative_frame_waits_longer() {
        let mut anim = star(1, 5, 5);
        anim.start();
        anim.set_frame(-2);
        assert_eq!(anim.frame_count(), 0);
        anim.update(&mut Canvas::new());
        anim.update(&mut Canvas::new());
        assert_eq!(anim.phase(), StarPhase::Waiting);
        anim.update(&mut Canvas::new());
        assert_eq!(anim.phase(), StarPhase::Growing);
    }

    #[test]
    fn test_reset() {
        let mut anim = star(1, 1, 1);
        anim.start();
        for _ in 0..4 {
            anim.update(&mut Canvas::new());
        }
        anim.reset();
        assert_eq!(anim.phase(), StarPhase::Waiting);
        assert_eq!(anim.state(), AnimationState::Initialized);
    }
}
