//! Configuration for the gallery viewer
//!
//! Settings come from `~/.config/gallery-lightbox/config.toml` (or the file
//! given with `--config`), then command line overrides. The file is only
//! read, never written.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::state::GalleryOptions;

/// Color theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Manifest file or gallery directory opened at startup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery_path: Option<PathBuf>,

    /// Edge length of grid thumbnails, in logical pixels
    pub thumbnail_size: f32,

    /// Close the lightbox when the filter changes underneath it
    pub close_on_filter_change: bool,

    pub theme: ThemeChoice,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gallery_path: None,
            thumbnail_size: 180.0,
            close_on_filter_change: false,
            theme: ThemeChoice::Dark,
        }
    }
}

/// Command line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub gallery_path: Option<PathBuf>,
    pub thumbnail_size: Option<f32>,
    pub close_on_filter_change: bool,
    pub theme: Option<ThemeChoice>,
}

impl Settings {
    /// Get the path to the default config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("gallery-lightbox").join("config.toml"))
    }

    /// Load settings from `explicit`, or from the default location.
    ///
    /// A missing default file yields the defaults; a missing explicit file is an error.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match explicit {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::config_path()?, false),
        };

        Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(required))
            .build()?
            .try_deserialize()
    }

    /// Parse settings from TOML text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the text is not valid TOML for `Settings`.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Render the effective settings as TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }

    /// Apply command line overrides
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(path) = &overrides.gallery_path {
            self.gallery_path = Some(path.clone());
        }
        if let Some(size) = overrides.thumbnail_size {
            self.thumbnail_size = size;
        }
        if overrides.close_on_filter_change {
            self.close_on_filter_change = true;
        }
        if let Some(theme) = overrides.theme {
            self.theme = theme;
        }
        self
    }

    pub fn gallery_options(&self) -> GalleryOptions {
        GalleryOptions {
            close_on_filter_change: self.close_on_filter_change,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_parse_values() {
        let settings = Settings::from_toml(
            r#"
            gallery_path = "/srv/site/gallery"
            thumbnail_size = 240.0
            close_on_filter_change = true
            theme = "light"
            "#,
        )
        .unwrap();

        assert_eq!(settings.gallery_path, Some(PathBuf::from("/srv/site/gallery")));
        assert_eq!(settings.thumbnail_size, 240.0);
        assert!(settings.close_on_filter_change);
        assert_eq!(settings.theme, ThemeChoice::Light);
    }

    #[test]
    fn test_overrides_take_precedence() {
        let file = Settings::from_toml("gallery_path = \"/from/file\"\ntheme = \"light\"").unwrap();
        let settings = file.with_overrides(&Overrides {
            gallery_path: Some(PathBuf::from("/from/cli")),
            thumbnail_size: None,
            close_on_filter_change: true,
            theme: None,
        });

        assert_eq!(settings.gallery_path, Some(PathBuf::from("/from/cli")));
        assert_eq!(settings.theme, ThemeChoice::Light);
        assert_eq!(settings.thumbnail_size, 180.0);
        assert!(settings.gallery_options().close_on_filter_change);
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "thumbnail_size = 96.0\n").unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.thumbnail_size, 96.0);

        assert!(Settings::load(Some(&dir.path().join("missing.toml"))).is_err());
    }

    #[test]
    fn test_to_toml_round_trips() {
        let settings = Settings {
            gallery_path: Some(PathBuf::from("/g")),
            ..Settings::default()
        };
        let text = settings.to_toml().unwrap();
        assert_eq!(Settings::from_toml(&text).unwrap(), settings);
    }
}
