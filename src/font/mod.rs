//! Bitmap fonts and glyph drawing.
//!
//! A [`Font`] is a square `size x size` bitmap per character. Each glyph's
//! horizontal ink extent is measured once at construction so text can be
//! laid out with variable widths: see [`Font::char_bounds`] and
//! [`Font::text_width`].

mod glyphs;

use std::collections::BTreeMap;

use crate::{Canvas, Color, ConfigError, Geometry};

/// Extra cells cleared around a glyph's box, in pixels per side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margins {
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
}

impl Margins {
    pub const fn new(top: i32, bottom: i32, left: i32, right: i32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }
}

/// How a glyph is painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphStyle {
    /// Color of set bits
    pub color: Color,
    /// Color of unset bits and margins; `None` leaves them transparent
    pub background: Option<Color>,
    /// Border filled with `background` around the glyph box
    pub margins: Option<Margins>,
    /// Restrict the box to the glyph's ink columns instead of the full cell
    pub variable_box: bool,
}

impl Default for GlyphStyle {
    fn default() -> Self {
        Self::new(Color::new(15, 15, 15))
    }
}

impl GlyphStyle {
    /// Transparent, fixed-box style in the given color.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            background: None,
            margins: None,
            variable_box: false,
        }
    }

    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    pub fn with_margins(mut self, margins: Option<Margins>) -> Self {
        self.margins = margins;
        self
    }

    pub fn with_variable_box(mut self, variable_box: bool) -> Self {
        self.variable_box = variable_box;
        self
    }
}

/// An immutable square bitmap font.
///
/// ## Example
///
/// ```rust
/// use matrix_show::font::{select_font, GlyphStyle};
/// use matrix_show::{Canvas, Color, Geometry};
///
/// let font = select_font(6)?;
/// assert_eq!(font.char_bounds('i'), (1, 3));
/// assert_eq!(font.text_width("HI", 2), 4 + 2 + 3);
///
/// let mut canvas = Canvas::new();
/// let geometry = Geometry::default();
/// font.draw(&mut canvas, &geometry, 'I', (0, 0), &GlyphStyle::new(Color::new(5, 0, 5)));
/// assert_eq!(canvas.get(geometry.to_index(0, 1)), Some(Color::new(5, 0, 5)));
/// # Ok::<(), matrix_show::ConfigError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Font {
    size: usize,
    glyphs: BTreeMap<char, Vec<u16>>,
    bounds: BTreeMap<char, (usize, usize)>,
}

impl Font {
    /// Build a font from `(character, rows)` pairs.
    ///
    /// Characters are stored uppercased. Every glyph must have exactly `size`
    /// rows, and `size` must fit a `u16` row mask.
    pub fn new<I>(size: usize, glyphs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (char, Vec<u16>)>,
    {
        if size == 0 || size > 16 {
            return Err(ConfigError::UnsupportedFontSize { size });
        }

        let mut table = BTreeMap::new();
        for (ch, rows) in glyphs {
            if rows.len() != size {
                return Err(ConfigError::MalformedGlyph {
                    ch,
                    expected: size,
                    actual: rows.len(),
                });
            }
            table.insert(normalize(ch), rows);
        }

        let bounds = table
            .iter()
            .filter_map(|(&ch, rows)| ink_bounds(size, rows).map(|b| (ch, b)))
            .collect();

        Ok(Self {
            size,
            glyphs: table,
            bounds,
        })
    }

    fn from_table(size: usize, table: &[(char, &[u16])]) -> Result<Self, ConfigError> {
        Self::new(size, table.iter().map(|&(ch, rows)| (ch, rows.to_vec())))
    }

    /// Cell size in pixels (glyphs are square).
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the font has a glyph for `ch` (case-insensitive).
    pub fn contains(&self, ch: char) -> bool {
        self.glyphs.contains_key(&normalize(ch))
    }

    /// Inclusive `(left, right)` columns holding set bits.
    ///
    /// Blank glyphs and characters missing from the font report
    /// `(0, size / 2)`.
    pub fn char_bounds(&self, ch: char) -> (usize, usize) {
        self.bounds
            .get(&normalize(ch))
            .copied()
            .unwrap_or((0, self.size / 2))
    }

    /// Ink width of `ch` in pixels.
    pub fn char_width(&self, ch: char) -> usize {
        let (left, right) = self.char_bounds(ch);
        right - left + 1
    }

    /// Width of `text` with `spacing` pixels between adjacent characters.
    pub fn text_width(&self, text: &str, spacing: usize) -> usize {
        let mut total = 0;
        for (i, ch) in text.chars().enumerate() {
            if i > 0 {
                total += spacing;
            }
            total += self.char_width(ch);
        }
        total
    }

    /// Paint `ch` with its cell's top-left corner at portrait `origin`
    /// (`(row, col)`).
    ///
    /// Characters missing from the font are drawn as a space. Columns are
    /// not shifted for variable boxes: the glyph keeps its cell position and
    /// only the visited range shrinks to `[left, right]`. Margins are only
    /// painted when the style has a background.
    pub fn draw(
        &self,
        canvas: &mut Canvas,
        geometry: &Geometry,
        ch: char,
        origin: (i32, i32),
        style: &GlyphStyle,
    ) {
        let ch = normalize(ch);
        let (glyph, rows) = match self.glyphs.get(&ch) {
            Some(rows) => (ch, Some(rows)),
            None => (' ', self.glyphs.get(&' ')),
        };

        let (left, right) = if style.variable_box {
            self.char_bounds(glyph)
        } else {
            (0, self.size - 1)
        };
        let (row_offset, col_offset) = origin;

        for row in 0..self.size {
            let bits = rows.map_or(0, |rows| rows[row]);
            for col in left..=right {
                let index = geometry.to_index(row_offset + row as i32, col_offset + col as i32);
                if bit_at(bits, self.size, col) {
                    canvas.set(index, style.color);
                } else if let Some(background) = style.background {
                    canvas.set(index, background);
                }
            }
        }

        if let (Some(margins), Some(background)) = (style.margins, style.background) {
            let size = self.size as i32;
            let box_left = col_offset + left as i32;
            let box_right = col_offset + right as i32 + 1;
            let mut fill = |rows: std::ops::Range<i32>, cols: std::ops::Range<i32>| {
                for r in rows {
                    for c in cols.clone() {
                        canvas.set(geometry.to_index(r, c), background);
                    }
                }
            };

            let top = row_offset - margins.top;
            let bottom = row_offset + size + margins.bottom;
            fill(top..row_offset, box_left - margins.left..box_right + margins.right);
            fill(row_offset + size..bottom, box_left - margins.left..box_right + margins.right);
            fill(top..bottom, box_left - margins.left..box_left);
            fill(top..bottom, box_right..box_right + margins.right);
        }
    }
}

/// Return the built-in font for `size` (6, 7, 8 or 9).
pub fn select_font(size: usize) -> Result<Font, ConfigError> {
    match size {
        6 => Font::from_table(6, glyphs::FONT_6X6),
        7 => Font::from_table(7, glyphs::FONT_7X7),
        8 => Font::from_table(8, glyphs::FONT_8X8),
        9 => Font::from_table(9, glyphs::FONT_9X9),
        _ => Err(ConfigError::UnsupportedFontSize { size }),
    }
}

#[inline]
fn normalize(ch: char) -> char {
    ch.to_ascii_uppercase()
}

#[inline]
fn bit_at(bits: u16, size: usize, col: usize) -> bool {
    (bits >> (size - 1 - col)) & 1 == 1
}

fn ink_bounds(size: usize, rows: &[u16]) -> Option<(usize, usize)> {
    let mut left = size;
    let mut right = 0;
    for &bits in rows {
        for col in 0..size {
            if bit_at(bits, size, col) {
                left = left.min(col);
                right = right.max(col);
            }
        }
    }
    (left <= right).then_some((left, right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, DARK_BLUE, WHITE};

    const INK: Color = Color::new(5, 0, 5);

    fn pixel(canvas: &Canvas, row: i32, col: i32) -> Option<Color> {
        canvas.get(Geometry::default().to_index(row, col))
    }

    #[test]
    fn test_select_font() {
        for size in 6..=9 {
            let font = select_font(size).unwrap();
            assert_eq!(font.size(), size);
            assert!(font.contains('A') && font.contains('9') && font.contains(' '));
        }
        assert_eq!(
            select_font(5).unwrap_err(),
            ConfigError::UnsupportedFontSize { size: 5 }
        );
        assert!(select_font(10).is_err());
    }

    #[test]
    fn test_bounds_of_every_glyph() {
        for size in 6..=9 {
            let font = select_font(size).unwrap();
            for (&ch, rows) in &font.glyphs {
                let (left, right) = font.char_bounds(ch);
                if rows.iter().any(|&r| r != 0) {
                    assert!(left <= right, "{:?} in {}x{}", ch, size, size);
                    assert!(font.char_width(ch) >= 1);
                } else {
                    assert_eq!((left, right), (0, size / 2));
                }
            }
        }
    }

    #[test]
    fn test_bounds_a_6x6() {
        let font = Font::new(
            6,
            [('A', vec![0b011000, 0b100100, 0b111100, 0b100100, 0b100100, 0b000000])],
        )
        .unwrap();
        assert_eq!(font.char_bounds('A'), (0, 3));
        assert_eq!(font.char_width('A'), 4);
        assert_eq!(font.char_bounds('a'), (0, 3));
    }

    #[test]
    fn test_unknown_char_measures_half_cell() {
        let font = select_font(8).unwrap();
        assert_eq!(font.char_bounds('@'), (0, 4));
        assert_eq!(font.char_width('@'), 5);
        assert_eq!(font.char_width(' '), 5);
    }

    #[test]
    fn test_custom_font_validation() {
        let err = Font::new(6, [('X', vec![0b1; 5])]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MalformedGlyph {
                ch: 'X',
                expected: 6,
                actual: 5
            }
        );
        assert!(Font::new(0, Vec::new()).is_err());
        assert!(Font::new(17, Vec::new()).is_err());
    }

    #[test]
    fn test_text_width() {
        let font = select_font(6).unwrap();
        assert_eq!(font.text_width("", 2), 0);
        assert_eq!(font.text_width("A", 2), 4);
        // A=4, B=4, C=4
        assert_eq!(font.text_width("ABC", 2), 4 + 2 + 4 + 2 + 4);
        assert_eq!(font.text_width("abc", 0), 12);
    }

    #[test]
    fn test_draw_transparent() {
        let font = select_font(6).unwrap();
        let mut canvas = Canvas::new();
        font.draw(&mut canvas, &Geometry::default(), 'A', (2, 1), &GlyphStyle::new(INK));

        // 'A' has 12 set bits
        assert_eq!(canvas.len(), 12);
        assert_eq!(pixel(&canvas, 2, 2), Some(INK));
        assert_eq!(pixel(&canvas, 2, 1), None);
        assert_eq!(pixel(&canvas, 4, 4), Some(INK));
    }

    #[test]
    fn test_draw_lowercase_and_unknown() {
        let font = select_font(6).unwrap();
        let geometry = Geometry::default();

        let mut upper = Canvas::new();
        let mut lower = Canvas::new();
        font.draw(&mut upper, &geometry, 'K', (0, 0), &GlyphStyle::new(INK));
        font.draw(&mut lower, &geometry, 'k', (0, 0), &GlyphStyle::new(INK));
        assert_eq!(upper, lower);

        let mut unknown = Canvas::new();
        font.draw(&mut unknown, &geometry, '#', (0, 0), &GlyphStyle::new(INK));
        assert!(unknown.is_empty());

        font.draw(
            &mut unknown,
            &geometry,
            '#',
            (0, 0),
            &GlyphStyle::new(INK).with_background(Some(BLACK)),
        );
        assert_eq!(unknown.len(), 36);
        assert!(unknown.iter().all(|(_, c)| c == BLACK));
    }

    #[test]
    fn test_draw_variable_box_keeps_cell_position() {
        let font = select_font(6).unwrap();
        let mut canvas = Canvas::new();
        let style = GlyphStyle::new(INK)
            .with_background(Some(BLACK))
            .with_variable_box(true);
        // 'I' occupies columns 1..=3
        font.draw(&mut canvas, &Geometry::default(), 'I', (0, 0), &style);

        assert_eq!(canvas.len(), 6 * 3);
        assert_eq!(pixel(&canvas, 0, 0), None);
        assert_eq!(pixel(&canvas, 0, 1), Some(INK));
        assert_eq!(pixel(&canvas, 1, 1), Some(BLACK));
        assert_eq!(pixel(&canvas, 0, 4), None);
    }

    #[test]
    fn test_margins_need_background() {
        let font = select_font(6).unwrap();
        let mut canvas = Canvas::new();
        let style = GlyphStyle::new(INK).with_margins(Some(Margins::new(1, 1, 1, 1)));
        font.draw(&mut canvas, &Geometry::default(), 'A', (2, 2), &style);
        assert_eq!(canvas.len(), 12);
    }

    #[test]
    fn test_margins_fill_border() {
        let font = select_font(6).unwrap();
        let mut canvas = Canvas::new();
        let style = GlyphStyle::new(WHITE)
            .with_background(Some(DARK_BLUE))
            .with_margins(Some(Margins::new(1, 2, 1, 1)))
            .with_variable_box(true);
        // 'A' box is columns 0..=3 at col offset 2 -> cols 2..=5, rows 3..=8
        font.draw(&mut canvas, &Geometry::default(), 'A', (3, 2), &style);

        // (1 + 6 + 2) rows x (1 + 4 + 1) cols
        assert_eq!(canvas.len(), 9 * 6);
        assert_eq!(pixel(&canvas, 2, 1), Some(DARK_BLUE));
        assert_eq!(pixel(&canvas, 2, 6), Some(DARK_BLUE));
        assert_eq!(pixel(&canvas, 10, 1), Some(DARK_BLUE));
        assert_eq!(pixel(&canvas, 10, 6), Some(DARK_BLUE));
        assert_eq!(pixel(&canvas, 3, 3), Some(WHITE));
        assert_eq!(pixel(&canvas, 11, 3), None);
        assert_eq!(pixel(&canvas, 5, 7), None);
    }
}
