//! Raw per-channel LED colors and the show palette.

/// A raw LED intensity triple.
///
/// Channels are driver intensities, not sRGB values. The show palette keeps
/// them small so the strip's brightness scaling has headroom.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale every channel by `factor`, saturating at 255.
    pub fn scaled(self, factor: f32) -> Self {
        let scale = |c: u8| (c as f32 * factor).round().clamp(0.0, 255.0) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

pub const DARK_GREEN: Color = Color::new(0, 2, 0);
pub const LIGHT_GREEN: Color = Color::new(0, 3, 0);
pub const GREEN: Color = Color::new(0, 2, 0);
pub const BROWN: Color = Color::new(4, 2, 0);
pub const YELLOW: Color = Color::new(5, 5, 0);
pub const WHITE: Color = Color::new(4, 4, 7);
pub const BLACK: Color = Color::new(0, 0, 0);
pub const DARK_BLUE: Color = Color::new(0, 0, 2);
pub const BLUE: Color = Color::new(0, 0, 4);
pub const RED: Color = Color::new(2, 0, 0);
pub const MAGENTA: Color = Color::new(2, 0, 2);
pub const ORANGE: Color = Color::new(5, 2, 0);
pub const BRIGHT_YELLOW: Color = Color::new(8, 8, 0);
pub const LIGHT_YELLOW: Color = Color::new(4, 4, 2);

/// Parse a color string into a [`Color`].
///
/// Supports:
/// - Palette names: dark_green, light_green, green, brown, yellow, white,
///   black, dark_blue, blue, red, magenta, orange, bright_yellow,
///   light_yellow (`-` or a space may replace `_`)
/// - Hex: `#RGB` (expanded to `#RRGGBB`), `#RRGGBB`
/// - Decimal triple: `r,g,b`
/// - Case-insensitive, trims whitespace
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if s.starts_with('#') {
        parse_hex(s)
    } else if s.contains(',') {
        parse_triple(s)
    } else {
        parse_named(s)
    }
}

fn parse_hex(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            Some(Color::new(r * 17, g * 17, b * 17))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::new(r, g, b))
        }
        _ => None,
    }
}

fn parse_triple(s: &str) -> Option<Color> {
    let mut parts = s.split(',').map(|p| p.trim().parse::<u8>());
    let r = parts.next()?.ok()?;
    let g = parts.next()?.ok()?;
    let b = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Color::new(r, g, b))
}

fn parse_named(s: &str) -> Option<Color> {
    let name = s.to_lowercase().replace(['-', ' '], "_");
    match name.as_str() {
        "dark_green"    => Some(DARK_GREEN),
        "light_green"   => Some(LIGHT_GREEN),
        "green"         => Some(GREEN),
        "brown"         => Some(BROWN),
        "yellow"        => Some(YELLOW),
        "white"         => Some(WHITE),
        "black"         => Some(BLACK),
        "dark_blue"     => Some(DARK_BLUE),
        "blue"          => Some(BLUE),
        "red"           => Some(RED),
        "magenta"       => Some(MAGENTA),
        "orange"        => Some(ORANGE),
        "bright_yellow" => Some(BRIGHT_YELLOW),
        "light_yellow"  => Some(LIGHT_YELLOW),
        _               => None,
    }
}
