//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/layertree/layertree.toml`
//! 3. Explicit config file (`--config <file>`)
//!
//! The library itself never loads configuration: trees receive a
//! [`TreeOptions`] value when they are created.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::TreeOptions;

/// Settings for textual display of layers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplaySettings {
    /// Layers with more nodes are elided after this many entries
    pub max_shown_nodes: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            max_shown_nodes: 16,
        }
    }
}

/// Unified configuration for layertree.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Options handed to every tree that gets built or imported
    pub tree: TreeOptions,
    /// Display settings for the inspector
    pub display: DisplaySettings,
}

/// Get the XDG config directory for layertree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "layertree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("layertree.toml"))
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `explicit` - Optional config file; it must exist when given
    pub fn load(explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut sources = Vec::new();
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                sources.push(global_path);
            }
        }
        if let Some(path) = explicit {
            sources.push(path.to_path_buf());
        }
        Self::from_files(&sources)
    }

    /// Load compiled defaults overlaid with a single config file.
    pub fn load_from(path: &Path) -> Result<Self, ApplicationError> {
        Self::from_files(&[path.to_path_buf()])
    }

    fn from_files(paths: &[PathBuf]) -> Result<Self, ApplicationError> {
        let mut builder = Config::builder();
        for path in paths {
            if !path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            builder = builder.add_source(File::from(path.clone()).format(FileFormat::Toml));
        }

        let config = builder.build().map_err(config_err)?;
        let settings: Self = config.try_deserialize().map_err(config_err)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ApplicationError> {
        if self.display.max_shown_nodes == 0 {
            return Err(ApplicationError::Config {
                message: "display.max_shown_nodes must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Render the effective settings as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: e.to_string(),
        })
    }
}
