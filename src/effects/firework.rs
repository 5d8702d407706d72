use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::color::{BLUE, GREEN, MAGENTA, RED, WHITE, YELLOW};
use crate::{Animation, Canvas, Color, Geometry, Lifecycle};

/// Particles may only appear on every second row and column.
const GRID_STEP: usize = 2;

/// Options for [`FireworkAnimation`].
#[derive(Clone, Debug)]
pub struct FireworkOptions {
    pub name: String,
    /// Spawn probability per grid point on the first frame
    pub initial_spawn_rate: f32,
    /// Spawn probability once the ramp is complete
    pub final_spawn_rate: f32,
    /// Frames over which the spawn rate rises
    pub spawn_ramp_duration: u32,
    /// Frames a particle stays visible
    pub particle_lifetime: u32,
    pub colors: Vec<Color>,
    pub background_color: Color,
    pub seed: u64,
}

impl Default for FireworkOptions {
    fn default() -> Self {
        Self {
            name: "Firework".into(),
            initial_spawn_rate: 0.05,
            final_spawn_rate: 0.3,
            spawn_ramp_duration: 100,
            particle_lifetime: 5,
            colors: vec![RED, GREEN, BLUE, YELLOW, MAGENTA],
            background_color: WHITE,
            seed: 42,
        }
    }
}

#[derive(Clone, Debug)]
struct Particle {
    row: i32,
    col: i32,
    lifetime: u32,
    color: Color,
}

/// Confetti flickering over a solid background, getting denser over time.
#[derive(Clone, Debug)]
pub struct FireworkAnimation {
    lifecycle: Lifecycle,
    geometry: Geometry,
    initial_spawn_rate: f32,
    final_spawn_rate: f32,
    spawn_ramp_duration: u32,
    particle_lifetime: u32,
    colors: Vec<Color>,
    background_color: Color,
    particles: Vec<Particle>,
    rng: SmallRng,
}

impl FireworkAnimation {
    pub fn new(options: FireworkOptions, geometry: Geometry) -> Self {
        Self {
            lifecycle: Lifecycle::new(options.name),
            geometry,
            initial_spawn_rate: options.initial_spawn_rate,
            final_spawn_rate: options.final_spawn_rate,
            spawn_ramp_duration: options.spawn_ramp_duration,
            particle_lifetime: options.particle_lifetime,
            colors: options.colors,
            background_color: options.background_color,
            particles: Vec::new(),
            rng: SmallRng::seed_from_u64(options.seed),
        }
    }

    /// Spawn probability after `frame` running frames.
    pub fn spawn_rate(&self, frame: u32) -> f32 {
        let progress = if self.spawn_ramp_duration == 0 {
            1.0
        } else {
            (frame as f32 / self.spawn_ramp_duration as f32).clamp(0.0, 1.0)
        };
        self.initial_spawn_rate + (self.final_spawn_rate - self.initial_spawn_rate) * progress
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    fn spawn(&mut self) {
        let rate = self.spawn_rate(self.lifecycle.frame_count());
        for row in (0..self.geometry.width).step_by(GRID_STEP) {
            for col in (0..self.geometry.height).step_by(GRID_STEP) {
                if self.rng.gen::<f32>() >= rate {
                    continue;
                }
                if let Some(&color) = self.colors.choose(&mut self.rng) {
                    self.particles.push(Particle {
                        row,
                        col,
                        lifetime: self.particle_lifetime,
                        color,
                    });
                }
            }
        }
    }
}

impl Animation for FireworkAnimation {
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
        canvas.set_background(self.background_color);
        self.spawn();

        let geometry = self.geometry;
        self.particles.retain_mut(|p| {
            if p.lifetime == 0 {
                return false;
            }
            canvas.set(geometry.to_index(p.row, p.col), p.color);
            p.lifetime -= 1;
            true
        });
    }

    fn reset(&mut self) {
        self.lifecycle.reset();
        self.particles.clear();
    }

    /// Negative frames are ignored; otherwise only the spawn ramp position
    /// changes.
    fn set_frame(&mut self, frame: i64) {
        if frame >= 0 {
            self.lifecycle.set_frame_count(frame.min(u32::MAX as i64) as u32);
        }
    }
}
