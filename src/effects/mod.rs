//! Concrete animations.
//!
//! Every effect draws in portrait `(row, col)` coordinates and converts to
//! strip indices through the [`Geometry`](crate::Geometry) it was built
//! with. Effects that use randomness own a seeded generator, so identical
//! options always produce identical frames.

mod firework;
mod snowfall;
mod star;
mod text_flash;
mod text_scroll;
mod tree;

pub use firework::{FireworkAnimation, FireworkOptions};
pub use snowfall::{SnowfallAnimation, SnowfallOptions};
pub use star::{
    draw_expanding_sphere, draw_star, StarOfBethlehemAnimation, StarOptions, StarPhase,
    EXPLOSION_COLORS,
};
pub use text_flash::{TextFlashAnimation, TextFlashOptions};
pub use text_scroll::{TextScrollAnimation, TextScrollOptions};
pub use tree::{draw_tree, ChristmasTreeAnimation};
