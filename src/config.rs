//! Run configuration: icon style and the list of icons to produce
//!
//! Defaults reproduce the standard 192px and 512px PWA icons. A TOML file can
//! override any part:
//!
//! ```toml
//! [style]
//! background = "#EA580C"
//! foreground = "#FFFFFF"
//! glyph = "B"
//! font_scale = 0.6
//! font_path = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf"
//!
//! [[icons]]
//! size = 192
//! path = "public/icon-192.png"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::icon::{IconRequest, IconStyle};

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    pub style: IconStyle,
    pub icons: Vec<IconRequest>,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            style: IconStyle::default(),
            icons: IconRequest::defaults(),
        }
    }
}

impl IconConfig {
    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&contents)?;
        tracing::debug!(path = %path.display(), icons = config.icons.len(), "config loaded");
        Ok(config)
    }

    /// Parse and validate TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: IconConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the preferred font when one was given on the command line
    pub fn with_font_override(mut self, font: Option<PathBuf>) -> Self {
        if let Some(font) = font {
            self.style.font_path = font;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.icons.is_empty() {
            return Err(ConfigError::Invalid("no icons listed".to_string()));
        }
        if let Some(icon) = self.icons.iter().find(|icon| icon.size == 0) {
            return Err(ConfigError::Invalid(format!(
                "icon {} has size 0",
                icon.path.display()
            )));
        }
        if self.style.glyph.trim().is_empty() {
            return Err(ConfigError::Invalid("glyph is empty".to_string()));
        }
        if !self.style.font_scale.is_finite() || self.style.font_scale <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "font_scale must be positive, got {}",
                self.style.font_scale
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::{Rgb, DEFAULT_FONT_PATH};

    #[test]
    fn test_default_config_matches_builtin_icons() {
        let config = IconConfig::default();
        assert_eq!(config.icons, IconRequest::defaults());
        assert_eq!(config.style, IconStyle::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(IconConfig::from_toml("").unwrap(), IconConfig::default());
    }

    #[test]
    fn test_partial_style_override() {
        let config = IconConfig::from_toml(
            r##"
            [style]
            background = "#112233"
            glyph = "Q"
            "##,
        )
        .unwrap();

        assert_eq!(config.style.background, Rgb::new(0x11, 0x22, 0x33));
        assert_eq!(config.style.foreground, Rgb::WHITE);
        assert_eq!(config.style.glyph, "Q");
        assert_eq!(config.style.font_path, PathBuf::from(DEFAULT_FONT_PATH));
        assert_eq!(config.icons, IconRequest::defaults());
    }

    #[test]
    fn test_custom_icon_list() {
        let config = IconConfig::from_toml(
            r#"
            [[icons]]
            size = 48
            path = "out/icon-48.png"
            "#,
        )
        .unwrap();

        assert_eq!(config.icons, vec![IconRequest::new(48, "out/icon-48.png")]);
    }

    #[test]
    fn test_rejects_bad_color() {
        let err = IconConfig::from_toml(
            r#"
            [style]
            background = "orange"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_invalid_values() {
        let cases = [
            "icons = []",
            "[[icons]]\nsize = 0\npath = \"a.png\"",
            "[style]\nglyph = \"  \"",
            "[style]\nfont_scale = 0.0",
            "[style]\nfont_scale = -1.5",
        ];
        for case in cases {
            let err = IconConfig::from_toml(case).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{case}: {err}");
        }
    }

    #[test]
    fn test_font_override_replaces_font_path() {
        let config =
            IconConfig::default().with_font_override(Some(PathBuf::from("/fonts/Inter.ttf")));
        assert_eq!(config.style.font_path, PathBuf::from("/fonts/Inter.ttf"));
        assert_eq!(config.icons, IconRequest::defaults());
    }

    #[test]
    fn test_no_font_override_keeps_config() {
        let config = IconConfig::from_toml("[style]\nfont_path = \"/fonts/a.ttf\"")
            .unwrap()
            .with_font_override(None);
        assert_eq!(config.style.font_path, PathBuf::from("/fonts/a.ttf"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = IconConfig::load(Path::new("/nonexistent/icons.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
