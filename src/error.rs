//! Construction-time errors.

/// Error type for invalid show configuration.
///
/// Everything that can go wrong in this crate goes wrong while building
/// fonts, effects or configs. Once a show is assembled, frame updates and
/// drawing are infallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No built-in font exists for the requested size
    UnsupportedFontSize { size: usize },
    /// A glyph's row count does not match the font size
    MalformedGlyph { ch: char, expected: usize, actual: usize },
    /// A color string could not be parsed
    InvalidColor(String),
    /// Strip dimensions outside `1..=MAX_DIMENSION`
    InvalidGeometry { width: u32, height: u32 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::UnsupportedFontSize { size } => {
                write!(f, "Unsupported font size: {} (available: 6, 7, 8, 9)", size)
            }
            ConfigError::MalformedGlyph {
                ch,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Malformed glyph {:?}: expected {} rows, got {}",
                    ch, expected, actual
                )
            }
            ConfigError::InvalidColor(value) => write!(f, "Invalid color: {:?}", value),
            ConfigError::InvalidGeometry { width, height } => write!(
                f,
                "Invalid geometry: {}x{} (each side must be 1 to {})",
                width,
                height,
                crate::coords::MAX_DIMENSION
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            ConfigError::UnsupportedFontSize { size: 12 }.to_string(),
            "Unsupported font size: 12 (available: 6, 7, 8, 9)"
        );
        assert_eq!(
            ConfigError::MalformedGlyph {
                ch: 'A',
                expected: 6,
                actual: 5
            }
            .to_string(),
            "Malformed glyph 'A': expected 6 rows, got 5"
        );
        assert_eq!(
            ConfigError::InvalidColor("mauve".into()).to_string(),
            "Invalid color: \"mauve\""
        );
        assert_eq!(
            ConfigError::InvalidGeometry {
                width: 0,
                height: 10
            }
            .to_string(),
            "Invalid geometry: 0x10 (each side must be 1 to 4096)"
        );
    }
}
