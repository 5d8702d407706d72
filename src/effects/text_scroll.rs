use log::debug;

use crate::font::{select_font, Font, GlyphStyle};
use crate::{Animation, Canvas, Color, ConfigError, Geometry, Lifecycle, LoopMode};

/// Pixels added after every character's ink width.
const CHAR_SPACING: i32 = 2;

/// Options for [`TextScrollAnimation`].
#[derive(Clone, Debug)]
pub struct TextScrollOptions {
    pub name: String,
    pub color: Color,
    /// Canvas background painted every running frame
    pub background_color: Option<Color>,
    /// Portrait `(row, col)` where the first character starts
    pub offset: (i32, i32),
    /// Columns scrolled per frame
    pub speed: f32,
    pub font_size: usize,
    pub loop_mode: LoopMode,
}

impl Default for TextScrollOptions {
    fn default() -> Self {
        Self {
            name: "Text scroll".into(),
            color: Color::new(5, 0, 5),
            background_color: None,
            offset: (4, 1),
            speed: 2.0,
            font_size: 6,
            loop_mode: LoopMode::Loop,
        }
    }
}

/// Scrolls a line of variable-width text across the display.
///
/// Character advances (ink width plus two columns) and left ink offsets are
/// measured once. The scroll position accumulates as a real number and is
/// truncated to a column when drawing; characters outside the visible
/// window are skipped. Once the position passes the text width plus the
/// starting column it wraps to zero, and in [`LoopMode::Once`] the
/// animation stops there.
#[derive(Clone, Debug)]
pub struct TextScrollAnimation {
    lifecycle: Lifecycle,
    chars: Vec<char>,
    advances: Vec<i32>,
    ink_offsets: Vec<i32>,
    font: Font,
    geometry: Geometry,
    style: GlyphStyle,
    background_color: Option<Color>,
    offset: (i32, i32),
    speed: f32,
    loop_mode: LoopMode,
    scroll_offset: f32,
}

impl TextScrollAnimation {
    /// Fails if `options.font_size` has no built-in font.
    pub fn new(
        text: &str,
        options: TextScrollOptions,
        geometry: Geometry,
    ) -> Result<Self, ConfigError> {
        let font = select_font(options.font_size)?;
        let chars: Vec<char> = text.chars().collect();
        let advances = chars
            .iter()
            .map(|&c| font.char_width(c) as i32 + CHAR_SPACING)
            .collect();
        let ink_offsets = chars.iter().map(|&c| font.char_bounds(c).0 as i32).collect();

        Ok(Self {
            lifecycle: Lifecycle::new(options.name),
            chars,
            advances,
            ink_offsets,
            font,
            geometry,
            style: GlyphStyle::new(options.color),
            background_color: options.background_color,
            offset: options.offset,
            speed: options.speed,
            loop_mode: options.loop_mode,
            scroll_offset: 0.0,
        })
    }

    /// Current scroll position in columns.
    #[inline]
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Sum of all character advances.
    pub fn total_width(&self) -> i32 {
        self.advances.iter().sum()
    }

    fn stop_at_end(&mut self, at: i64) {
        self.lifecycle.stop();
        debug!(
            "effect: stop animation name={:?} frame={} reason=scrolled_out",
            self.lifecycle.name(),
            at
        );
    }
}

impl Animation for TextScrollAnimation {
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
        if let Some(background) = self.background_color {
            canvas.set_background(background);
        }

        let (row, start_col) = self.offset;
        let scrolled = self.scroll_offset as i32;
        let mut pen = start_col;
        for (i, &ch) in self.chars.iter().enumerate() {
            let advance = self.advances[i];
            let col = pen - scrolled - self.ink_offsets[i];
            if -advance < col && col < self.geometry.width {
                self.font
                    .draw(canvas, &self.geometry, ch, (row, col), &self.style);
            }
            pen += advance;
        }

        self.scroll_offset += self.speed;
        if self.scroll_offset > (self.total_width() + start_col) as f32 {
            self.scroll_offset = 0.0;
            if self.loop_mode == LoopMode::Once {
                self.stop_at_end(self.lifecycle.frame_count() as i64);
            }
        }
    }

    fn reset(&mut self) {
        self.lifecycle.reset();
        self.scroll_offset = 0.0;
    }

    /// Negative frames are ignored. The position becomes `frame * speed`; in
    /// [`LoopMode::Once`] the animation stops itself once that passes the
    /// text width (the starting column is not added here).
    fn set_frame(&mut self, frame: i64) {
        if frame < 0 {
            return;
        }
        let scroll_offset = frame as f32 * self.speed;
        if self.loop_mode == LoopMode::Once && scroll_offset > self.total_width() as f32 {
            self.stop_at_end(frame);
        }
        self.scroll_offset = scroll_offset;
        self.lifecycle.set_frame_count(frame.min(u32::MAX as i64) as u32);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AnimationState;

    const INK: Color = Color::new(5, 0, 5);

    fn scroll(text: &str, speed: f32, offset: (i32, i32), loop_mode: LoopMode) -> TextScrollAnimation {
        let options = TextScrollOptions {
            speed,
            offset,
            loop_mode,
            ..Default::default()
        };
        TextScrollAnimation::new(text, options, Geometry::default()).unwrap()
    }

    fn render(anim: &mut TextScrollAnimation) -> Canvas {
        let mut canvas = Canvas::new();
        anim.update(&mut canvas);
        canvas
    }

    #[test]
    fn test_layout_is_precomputed() {
        // 6x6: 'I' ink is cols 1..=3, 'A' cols 0..=3
        let anim = scroll("IA", 1.0, (0, 0), LoopMode::Loop);
        assert_eq!(anim.advances, vec![5, 6]);
        assert_eq!(anim.ink_offsets, vec![1, 0]);
        assert_eq!(anim.total_width(), 11);
    }

    #[test]
    fn test_first_frame_aligns_ink_to_offset() {
        let mut anim = scroll("I", 1.0, (0, 2), LoopMode::Loop);
        anim.start();
        let canvas = render(&mut anim);
        let geometry = Geometry::default();

        // the cell is shifted left by the ink offset, so ink starts at col 2
        assert_eq!(canvas.get(geometry.to_index(0, 2)), Some(INK));
        assert_eq!(canvas.get(geometry.to_index(0, 1)), None);
        assert_eq!(anim.scroll_offset(), 1.0);
    }

    #[test]
    fn test_text_moves_left() {
        let geometry = Geometry::default();
        let mut anim = scroll("I", 1.0, (0, 2), LoopMode::Loop);
        anim.start();
        render(&mut anim);
        let canvas = render(&mut anim);
        assert_eq!(canvas.get(geometry.to_index(0, 1)), Some(INK));
        assert_eq!(canvas.get(geometry.to_index(0, 4)), None);
    }

    #[test]
    fn test_fractional_speed_truncates() {
        let geometry = Geometry::default();
        let mut anim = scroll("I", 0.5, (0, 2), LoopMode::Loop);
        anim.start();
        let first = render(&mut anim);
        let second = render(&mut anim);
        let third = render(&mut anim);
        assert_eq!(first, second);
        assert_ne!(second, third);
        assert_eq!(third.get(geometry.to_index(0, 1)), Some(INK));
    }

    #[test]
    fn test_offscreen_characters_are_culled() {
        let mut anim = scroll("IIIIIIII", 1.0, (0, 0), LoopMode::Loop);
        anim.start();
        let canvas = render(&mut anim);
        // only cells starting left of the window edge are drawn
        let drawn = (0..8)
            .filter(|i| {
                let col = i * 5 - 1;
                -5 < col && col < 16
            })
            .count();
        // each 'I' has 9 set bits
        assert_eq!(canvas.len(), drawn * 9);
    }

    #[test]
    fn test_once_stops_after_scrolling_out() {
        // total width 5, start col 1: wraps once the offset passes 6
        let mut anim = scroll("I", 1.0, (0, 1), LoopMode::Once);
        anim.start();
        for _ in 0..6 {
            render(&mut anim);
            assert!(anim.is_running());
        }
        render(&mut anim);
        assert_eq!(anim.state(), AnimationState::Stopped);
        assert_eq!(anim.scroll_offset(), 0.0);

        assert!(render(&mut anim).is_empty());
    }

    #[test]
    fn test_loop_wraps_to_zero() {
        let mut anim = scroll("I", 2.0, (0, 0), LoopMode::Loop);
        anim.start();
        for _ in 0..3 {
            render(&mut anim);
        }
        assert_eq!(anim.scroll_offset(), 0.0);
        assert!(anim.is_running());
    }

    #[test]
    fn test_background() {
        let options = TextScrollOptions {
            background_color: Some(Color::new(0, 0, 2)),
            ..Default::default()
        };
        let mut anim = TextScrollAnimation::new("HI", options, Geometry::default()).unwrap();
        anim.start();
        assert_eq!(render(&mut anim).background(), Some(Color::new(0, 0, 2)));
    }

    #[test]
    fn test_set_frame() {
        let mut anim = scroll("IA", 2.0, (0, 1), LoopMode::Once);
        anim.start();

        anim.set_frame(-1);
        assert_eq!(anim.scroll_offset(), 0.0);

        anim.set_frame(5);
        assert_eq!(anim.scroll_offset(), 10.0);
        assert!(anim.is_running());

        // 12 > total width 11, even though the start column would allow 12
        anim.set_frame(6);
        assert_eq!(anim.state(), AnimationState::Stopped);
    }

    #[test]
    fn test_reset() {
        let mut anim = scroll("IA", 2.0, (0, 1), LoopMode::Loop);
        anim.start();
        render(&mut anim);
        anim.reset();
        assert_eq!(anim.scroll_offset(), 0.0);
        assert_eq!(anim.state(), AnimationState::Initialized);
    }
}
