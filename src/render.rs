//! Handing composited frames to the LED strip.

use crate::{Canvas, Color};

/// An addressable LED strip.
///
/// Implement this for the hardware driver. Colors are written raw; how
/// `brightness` is applied is up to the strip.
pub trait LedStrip {
    /// Number of LEDs on the strip.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Set every LED to `color`.
    fn fill(&mut self, color: Color);

    /// Set one LED. `index` is always below [`len`](Self::len).
    fn set_pixel(&mut self, index: usize, color: Color);

    /// Push the buffered colors to the LEDs.
    fn show(&mut self);

    fn set_brightness(&mut self, brightness: f32);

    fn brightness(&self) -> f32;
}

/// Draw a composited frame onto `strip` and flush it.
///
/// The whole strip is first filled with the canvas background (or
/// `default_background` if no animation set one), then every pixel is
/// written in ascending index order. Indices outside the strip are
/// dropped silently, so glyphs and margins may overhang the display.
///
/// ## Example
///
/// ```rust
/// use matrix_show::render::{render, FrameBuffer};
/// use matrix_show::{Canvas, Color};
///
/// let mut canvas = Canvas::new();
/// canvas.set(3, Color::new(5, 0, 5));
/// canvas.set(500, Color::new(5, 0, 5));
///
/// let mut strip = FrameBuffer::new(160);
/// render(&mut strip, canvas, Color::new(0, 0, 2));
///
/// assert_eq!(strip.shown()[3], Color::new(5, 0, 5));
/// assert_eq!(strip.shown()[0], Color::new(0, 0, 2));
/// assert_eq!(strip.flushes(), 1);
/// ```
pub fn render<S: LedStrip + ?Sized>(strip: &mut S, mut canvas: Canvas, default_background: Color) {
    let background = canvas.take_background().unwrap_or(default_background);
    strip.fill(background);

    let len = strip.len();
    for (index, color) in canvas.iter() {
        if index >= 0 && (index as usize) < len {
            strip.set_pixel(index as usize, color);
        }
    }

    strip.show();
}

/// An in-memory [`LedStrip`].
///
/// Keeps a working buffer like a real driver and copies it to the shown
/// frame on [`show`](LedStrip::show). Useful for simulators and tests.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    pending: Vec<Color>,
    shown: Vec<Color>,
    brightness: f32,
    flushes: usize,
}

impl FrameBuffer {
    /// Create a dark strip of `len` LEDs at brightness 1.0.
    pub fn new(len: usize) -> Self {
        Self {
            pending: vec![Color::default(); len],
            shown: vec![Color::default(); len],
            brightness: 1.0,
            flushes: 0,
        }
    }

    /// Raw colors of the last shown frame.
    #[inline]
    pub fn shown(&self) -> &[Color] {
        &self.shown
    }

    /// Shown color of one LED with brightness applied.
    pub fn scaled(&self, index: usize) -> Option<Color> {
        self.shown.get(index).map(|c| c.scaled(self.brightness))
    }

    /// How many times the strip has been shown.
    #[inline]
    pub fn flushes(&self) -> usize {
        self.flushes
    }
}

impl LedStrip for FrameBuffer {
    fn len(&self) -> usize {
        self.pending.len()
    }

    fn fill(&mut self, color: Color) {
        self.pending.fill(color);
    }

    fn set_pixel(&mut self, index: usize, color: Color) {
        if let Some(pixel) = self.pending.get_mut(index) {
            *pixel = color;
        }
    }

    fn show(&mut self) {
        self.shown.clone_from(&self.pending);
        self.flushes += 1;
    }

    fn set_brightness(&mut self, brightness: f32) {
        self.brightness = brightness;
    }

    fn brightness(&self) -> f32 {
        self.brightness
    }
}
