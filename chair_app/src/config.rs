//! Viewer configuration
//!
//! Optional TOML settings file for the window and resource locations. A
//! missing file falls back to defaults; a malformed file is fatal so a typo
//! never silently reverts the viewer to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Window settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Window title
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            title: "Chair Scene".to_owned(),
        }
    }
}

/// Resource directory settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    /// Root directory holding meshes/, shaders/ and textures/
    pub root: PathBuf,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("chair_app/resources"),
        }
    }
}

/// Complete viewer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Window settings
    pub window: WindowConfig,
    /// Resource directory settings
    pub resources: ResourceConfig,
    /// Background color (RGBA)
    pub clear_color: [f32; 4],
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            resources: ResourceConfig::default(),
            clear_color: [0.08, 0.08, 0.1, 1.0],
        }
    }
}

impl ViewerConfig {
    /// Load the config file, or fall back to defaults when it does not
    /// exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!(
                "no config file at {}, using built-in defaults",
                path.display()
            );
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Resolve the resource root, trying common launch directories.
    ///
    /// The configured root wins when it exists; otherwise `resources/`
    /// (running from the crate directory) and `chair_app/resources/`
    /// (running from the workspace root) are tried before giving up and
    /// returning the configured root so later errors name the right path.
    pub fn resource_root(&self) -> PathBuf {
        let candidates = [
            self.resources.root.clone(),
            PathBuf::from("resources"),
            PathBuf::from("chair_app/resources"),
        ];
        for candidate in &candidates {
            if candidate.is_dir() {
                return candidate.clone();
            }
        }
        self.resources.root.clone()
    }

    /// Path of a mesh data file
    pub fn mesh_path(&self, file: &str) -> PathBuf {
        self.resource_root().join("meshes").join(file)
    }

    /// Path of a shader source file
    pub fn shader_path(&self, file: &str) -> PathBuf {
        self.resource_root().join("shaders").join(file)
    }

    /// Path of a texture image file
    pub fn texture_path(&self, file: &str) -> PathBuf {
        self.resource_root().join("textures").join(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_window() {
        let config = ViewerConfig::default();
        assert_eq!(config.window.width, 640);
        assert_eq!(config.window.height, 480);
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config: ViewerConfig = toml::from_str(
            r#"
            [window]
            width = 1280
            "#,
        )
        .unwrap();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.window.height, 480);
        assert_eq!(config.window.title, "Chair Scene");
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = ViewerConfig::default();
        let text = toml::to_string(&config).unwrap();
        let back: ViewerConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.window.width, config.window.width);
        assert_eq!(back.clear_color, config.clear_color);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = ViewerConfig::load_or_default(Path::new("no/such/config.toml")).unwrap();
        assert_eq!(config.window.width, 640);
    }
}
