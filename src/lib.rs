//! # matrix-show
//!
//! Frame-scheduled light shows for small addressable LED matrices.
//!
//! This crate provides hardware-agnostic building blocks for:
//! - Mapping a portrait drawing grid onto a landscape-wired LED strip
//! - Compositing animations into a sparse per-frame canvas
//! - Scheduling animations on a looping frame timeline
//! - Drawing bitmap text (flashing and scrolling layouts)
//! - Handing finished frames to an LED strip driver
//!
//! The embedding program owns the real-time loop: once per tick it creates
//! a [`Canvas`], calls [`AnimationManager::update`] and passes the canvas to
//! [`render::render`], then sleeps for [`ShowConfig::frame_interval_ms`].
//!
//! ## Features
//!
//! - `serde` - Enable serialization/deserialization for data structures
//! - `toml` - Load a [`ShowConfig`] from a TOML file
//!
//! ## Example
//!
//! ```rust
//! use matrix_show::render::{render, FrameBuffer, LedStrip};
//! use matrix_show::show::christmas_show;
//! use matrix_show::{Canvas, ShowConfig};
//!
//! let config = ShowConfig::default();
//! let geometry = config.geometry();
//!
//! let mut strip = FrameBuffer::new(geometry.pixel_count());
//! strip.set_brightness(config.brightness());
//!
//! let mut show = christmas_show(geometry)?;
//! for _ in 0..3 {
//!     let mut canvas = Canvas::new();
//!     show.update(&mut canvas);
//!     render(&mut strip, canvas, config.background());
//! }
//! assert_eq!(strip.flushes(), 3);
//! # Ok::<(), matrix_show::ConfigError>(())
//! ```

mod animation;
mod canvas;
pub mod color;
mod config;
pub mod coords;
pub mod effects;
mod error;
pub mod font;
mod manager;
pub mod render;
pub mod show;

pub use animation::{Animation, AnimationState, Lifecycle, LoopMode};
pub use canvas::Canvas;
pub use color::Color;
pub use config::ShowConfig;
pub use coords::Geometry;
pub use error::ConfigError;
pub use manager::{AnimationManager, BindingId, FrameDuration};
