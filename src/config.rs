use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading the settings file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Catalog to open at startup (JSON manifest or image folder)
    pub catalog: Option<PathBuf>,
    /// Fixed category controls; derived from the catalog when unset
    pub categories: Option<Vec<String>>,
    /// Window title
    pub title: String,
    /// Width of one gallery tile in logical pixels
    pub tile_width: f32,
    /// Gap between gallery tiles
    pub spacing: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog: None,
            categories: None,
            title: "Image Gallery".to_string(),
            tile_width: 240.0,
            spacing: 12.0,
        }
    }
}

impl Settings {
    /// Load settings.
    ///
    /// An explicit path must exist. Without one, the per-user settings file is
    /// read if present, and defaults are used otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Read settings from a JSON file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let settings = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("⚙️  Settings loaded from {}", path.display());
        Ok(settings)
    }

    /// Get the path where the settings file lives
    /// - Linux: ~/.config/image-gallery/settings.json
    /// - macOS: ~/Library/Application Support/image-gallery/settings.json
    /// - Windows: %APPDATA%\image-gallery\settings.json
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("image-gallery");
            path.push("settings.json");
            path
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_fill_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"catalog": "photos/images.json", "categories": ["nature", "city"]}"#).unwrap();

        let settings = Settings::load(Some(&path)).unwrap();

        assert_eq!(settings.catalog, Some(PathBuf::from("photos/images.json")));
        assert_eq!(
            settings.categories,
            Some(vec!["nature".to_string(), "city".to_string()])
        );
        assert_eq!(settings.title, "Image Gallery");
        assert_eq!(settings.tile_width, 240.0);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = Settings::load(Some(&dir.path().join("missing.json"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        let err = Settings::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
