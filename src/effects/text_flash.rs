use log::debug;

use crate::font::{select_font, Font, GlyphStyle, Margins};
use crate::{Animation, Canvas, Color, ConfigError, Geometry, Lifecycle, LoopMode};

/// Options for [`TextFlashAnimation`].
#[derive(Clone, Debug)]
pub struct TextFlashOptions {
    pub name: String,
    pub color: Color,
    /// Canvas background painted every running frame
    pub background_color: Option<Color>,
    /// Fill for the glyph box (unset bits and margins)
    pub box_color: Option<Color>,
    pub box_margins: Option<Margins>,
    pub variable_box: bool,
    /// Portrait `(row, col)` of the glyph cell
    pub offset: (i32, i32),
    pub font_size: usize,
    /// Frames each character is shown
    pub frames_on: u32,
    /// Blank frames after each character
    pub frames_off: u32,
    pub loop_mode: LoopMode,
}

impl Default for TextFlashOptions {
    fn default() -> Self {
        Self {
            name: "Text flash".into(),
            color: Color::new(5, 0, 5),
            background_color: None,
            box_color: None,
            box_margins: None,
            variable_box: true,
            offset: (4, 1),
            font_size: 6,
            frames_on: 10,
            frames_off: 1,
            loop_mode: LoopMode::Loop,
        }
    }
}

/// Shows a text one character at a time.
///
/// Each character period lasts `frames_on + frames_off` updates: the glyph
/// is drawn on the first `frames_on` of them and nothing on the rest. The
/// next character is selected on the last update of the period. Spaces are
/// dropped from the text. In [`LoopMode::Once`] the animation stops itself
/// when it would move past the last character.
#[derive(Clone, Debug)]
pub struct TextFlashAnimation {
    lifecycle: Lifecycle,
    chars: Vec<char>,
    font: Font,
    geometry: Geometry,
    style: GlyphStyle,
    background_color: Option<Color>,
    offset: (i32, i32),
    frames_on: u32,
    frames_off: u32,
    loop_mode: LoopMode,
    char_index: usize,
    period_frame: u32,
}

impl TextFlashAnimation {
    /// Fails if `options.font_size` has no built-in font.
    pub fn new(
        text: &str,
        options: TextFlashOptions,
        geometry: Geometry,
    ) -> Result<Self, ConfigError> {
        let font = select_font(options.font_size)?;
        let style = GlyphStyle::new(options.color)
            .with_background(options.box_color)
            .with_margins(options.box_margins)
            .with_variable_box(options.variable_box);

        Ok(Self {
            lifecycle: Lifecycle::new(options.name),
            chars: text.chars().filter(|&c| c != ' ').collect(),
            font,
            geometry,
            style,
            background_color: options.background_color,
            offset: options.offset,
            frames_on: options.frames_on,
            frames_off: options.frames_off,
            loop_mode: options.loop_mode,
            char_index: 0,
            period_frame: 0,
        })
    }

    /// Index of the character currently shown (or about to be shown).
    #[inline]
    pub fn char_index(&self) -> usize {
        self.char_index
    }

    /// The text being flashed, without spaces.
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    fn period(&self) -> u32 {
        (self.frames_on + self.frames_off).max(1)
    }

    fn finish(&mut self, at: i64) {
        self.lifecycle.stop();
        debug!(
            "effect: stop animation name={:?} frame={} reason=end_of_text",
            self.lifecycle.name(),
            at
        );
    }
}

impl Animation for TextFlashAnimation {
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
        if self.chars.is_empty() {
            if self.loop_mode == LoopMode::Once {
                self.finish(self.lifecycle.frame_count() as i64);
            }
            return;
        }

        self.period_frame += 1;
        if self.period_frame <= self.frames_on {
            self.font.draw(
                canvas,
                &self.geometry,
                self.chars[self.char_index],
                self.offset,
                &self.style,
            );
        }

        if self.period_frame >= self.period() {
            self.period_frame = 0;
            let next = self.char_index + 1;
            if self.loop_mode == LoopMode::Once && next >= self.chars.len() {
                self.finish(self.lifecycle.frame_count() as i64);
            } else {
                self.char_index = next % self.chars.len();
            }
        }
    }

    fn reset(&mut self) {
        self.lifecycle.reset();
        self.char_index = 0;
        self.period_frame = 0;
    }

    /// Negative frames are ignored. Past the end of the text in
    /// [`LoopMode::Once`] the animation stops itself.
    fn set_frame(&mut self, frame: i64) {
        if frame < 0 {
            return;
        }
        let period = self.period() as i64;
        let index = (frame / period) as usize;

        self.lifecycle.set_frame_count(frame.min(u32::MAX as i64) as u32);
        if self.chars.is_empty() {
            if self.loop_mode == LoopMode::Once {
                self.finish(frame);
            }
        } else if self.loop_mode == LoopMode::Once && index >= self.chars.len() {
            self.finish(frame);
        } else {
            self.char_index = index % self.chars.len();
            self.period_frame = (frame % period) as u32;
        }
    }
}
