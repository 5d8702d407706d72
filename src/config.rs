use crate::color::{parse_color, DARK_BLUE};
use crate::{Color, ConfigError, Geometry, LoopMode};

/// Show settings from a `show.toml` file.
///
/// All fields are optional so old and new files keep loading; missing
/// values resolve to the defaults of a 16 x 10 strip at 10 fps.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShowConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub fps: Option<u32>,
    pub brightness: Option<f32>,
    pub background_color: Option<String>,
    #[cfg_attr(feature = "serde", serde(rename = "loop"))]
    pub looping: Option<bool>,
    pub frames_between_loops: Option<u32>,
}

impl ShowConfig {
    /// Parse a `show.toml` string into a `ShowConfig`.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Strip dimensions, 16 x 10 when unset or out of range.
    pub fn geometry(&self) -> Geometry {
        self.try_geometry().unwrap_or_default()
    }

    /// Like [`geometry`](Self::geometry) but reports invalid dimensions.
    pub fn try_geometry(&self) -> Result<Geometry, ConfigError> {
        Geometry::try_new(self.width.unwrap_or(16), self.height.unwrap_or(10))
    }

    /// Milliseconds per frame. Defaults to 10 fps; `fps = 0` is treated as 1.
    pub fn frame_interval_ms(&self) -> u64 {
        1000 / u64::from(self.fps.unwrap_or(10).max(1))
    }

    pub fn brightness(&self) -> f32 {
        self.brightness.unwrap_or(1.8)
    }

    /// Fallback background, dark blue when unset or unparseable.
    pub fn background(&self) -> Color {
        self.try_background().unwrap_or(DARK_BLUE)
    }

    /// Like [`background`](Self::background) but reports invalid colors.
    pub fn try_background(&self) -> Result<Color, ConfigError> {
        match self.background_color.as_deref() {
            None => Ok(DARK_BLUE),
            Some(s) => parse_color(s).ok_or_else(|| ConfigError::InvalidColor(s.to_string())),
        }
    }

    pub fn loop_mode(&self) -> LoopMode {
        match self.looping {
            Some(false) => LoopMode::Once,
            _ => LoopMode::Loop,
        }
    }

    pub fn frames_between_loops(&self) -> u32 {
        self.frames_between_loops.unwrap_or(20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShowConfig::default();
        assert_eq!(config.geometry(), Geometry::new(16, 10));
        assert_eq!(config.frame_interval_ms(), 100);
        assert_eq!(config.brightness(), 1.8);
        assert_eq!(config.background(), DARK_BLUE);
        assert_eq!(config.loop_mode(), LoopMode::Loop);
        assert_eq!(config.frames_between_loops(), 20);
    }

    #[test]
    fn test_custom_values() {
        let config = ShowConfig {
            width: Some(32),
            height: Some(8),
            fps: Some(25),
            background_color: Some("#000".into()),
            looping: Some(false),
            ..Default::default()
        };
        assert_eq!(config.geometry(), Geometry::new(32, 8));
        assert_eq!(config.frame_interval_ms(), 40);
        assert_eq!(config.background(), Color::new(0, 0, 0));
        assert_eq!(config.loop_mode(), LoopMode::Once);
    }

    #[test]
    fn test_zero_fps() {
        let config = ShowConfig {
            fps: Some(0),
            ..Default::default()
        };
        assert_eq!(config.frame_interval_ms(), 1000);
    }

    #[test]
    fn test_invalid_background_fallback() {
        let config = ShowConfig {
            background_color: Some("notacolor".into()),
            ..Default::default()
        };
        assert_eq!(config.background(), DARK_BLUE);
        assert_eq!(
            config.try_background(),
            Err(ConfigError::InvalidColor("notacolor".into()))
        );
    }

    #[test]
    fn test_invalid_geometry() {
        let config = ShowConfig {
            width: Some(0),
            ..Default::default()
        };
        assert_eq!(
            config.try_geometry(),
            Err(ConfigError::InvalidGeometry {
                width: 0,
                height: 10
            })
        );
        assert_eq!(config.geometry(), Geometry::default());

        let huge = ShowConfig {
            height: Some(u32::MAX),
            ..Default::default()
        };
        assert!(huge.try_geometry().is_err());
    }

    #[test]
    fn test_palette_background() {
        let config = ShowConfig {
            background_color: Some("Bright Yellow".into()),
            ..Default::default()
        };
        assert_eq!(config.try_background(), Ok(Color::new(8, 8, 0)));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_from_toml() {
        let config = ShowConfig::from_toml_str(
            r#"
            fps = 20
            brightness = 0.5
            background_color = "1,2,3"
            loop = false
            "#,
        )
        .unwrap();
        assert_eq!(config.frame_interval_ms(), 50);
        assert_eq!(config.brightness(), 0.5);
        assert_eq!(config.background(), Color::new(1, 2, 3));
        assert_eq!(config.loop_mode(), LoopMode::Once);
        assert_eq!(config.geometry(), Geometry::default());
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_from_toml_empty() {
        let config = ShowConfig::from_toml_str("").unwrap();
        assert_eq!(config, ShowConfig::default());
    }
}
