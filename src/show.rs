//! The Christmas and New Year show.

use crate::color::{DARK_BLUE, WHITE};
use crate::effects::{
    ChristmasTreeAnimation, FireworkAnimation, FireworkOptions, SnowfallAnimation,
    SnowfallOptions, StarOfBethlehemAnimation, StarOptions, TextFlashAnimation, TextFlashOptions,
    TextScrollAnimation, TextScrollOptions,
};
use crate::font::Margins;
use crate::{AnimationManager, Color, ConfigError, FrameDuration, Geometry, LoopMode};

/// Build the full show timeline.
///
/// | frames    | animation                          |
/// |-----------|------------------------------------|
/// | 0..210    | tree                               |
/// | 0..200    | snowfall                           |
/// | 30..180   | "MERRY CHRISTMAS!" scrolling       |
/// | 140..340  | star growing into a sphere         |
/// | 220..430  | fireworks                          |
/// | 250..400  | "AND HAPPY NEW YEAR!" flashing     |
///
/// The show then pauses for 20 frames and starts over.
///
/// ## Example
///
/// ```rust
/// use matrix_show::show::christmas_show;
/// use matrix_show::{Canvas, FrameDuration, Geometry};
///
/// let mut show = christmas_show(Geometry::default())?;
/// assert_eq!(show.duration(), Some(FrameDuration::Finite(430)));
///
/// let mut canvas = Canvas::new();
/// show.update(&mut canvas);
/// assert!(!canvas.is_empty());
/// # Ok::<(), matrix_show::ConfigError>(())
/// ```
pub fn christmas_show(geometry: Geometry) -> Result<AnimationManager, ConfigError> {
    let mut manager = AnimationManager::new()
        .with_loop_mode(LoopMode::Loop)
        .with_frames_between_loops(20);

    let snow = SnowfallOptions {
        speed: 0.5,
        ..Default::default()
    };
    let greeting = TextScrollOptions {
        color: Color::new(5, 0, 5),
        speed: 1.0,
        offset: (1, geometry.height + 1),
        font_size: 6,
        loop_mode: LoopMode::Once,
        ..Default::default()
    };
    let star = StarOptions {
        wait_frames: 20,
        growth_frames: 50,
        explosion_frames: 50,
        ..Default::default()
    };
    let fireworks = FireworkOptions {
        initial_spawn_rate: 0.02,
        final_spawn_rate: 0.08,
        spawn_ramp_duration: 100,
        particle_lifetime: 5,
        background_color: DARK_BLUE,
        ..Default::default()
    };
    let new_year = TextFlashOptions {
        color: WHITE,
        box_color: Some(DARK_BLUE),
        box_margins: Some(Margins::new(1, 0, 0, 0)),
        offset: (4, 1),
        font_size: 9,
        frames_on: 9,
        frames_off: 1,
        loop_mode: LoopMode::Once,
        ..Default::default()
    };

    manager.add_animation(
        Box::new(ChristmasTreeAnimation::new(geometry)),
        0,
        FrameDuration::Finite(210),
    );
    manager.add_animation(
        Box::new(SnowfallAnimation::new(snow, geometry)),
        0,
        FrameDuration::Finite(200),
    );
    manager.add_animation(
        Box::new(TextScrollAnimation::new("MERRY CHRISTMAS! ", greeting, geometry)?),
        30,
        FrameDuration::Finite(150),
    );
    manager.add_animation(
        Box::new(StarOfBethlehemAnimation::new(star, geometry)),
        140,
        FrameDuration::Finite(200),
    );
    manager.add_animation(
        Box::new(FireworkAnimation::new(fireworks, geometry)),
        220,
        FrameDuration::Finite(210),
    );
    manager.add_animation(
        Box::new(TextFlashAnimation::new("AND HAPPY NEW YEAR! ", new_year, geometry)?),
        250,
        FrameDuration::Finite(150),
    );

    Ok(manager)
}
