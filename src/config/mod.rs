//! Configuration loading and management

mod io;
mod settings;

pub use io::write_atomic;
pub use settings::Settings;

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    /// Load configuration for a working directory.
    ///
    /// Looks for: `.flowstats/config.toml` in `dir`, then the global
    /// `~/.flowstats/config.toml`, then falls back to defaults.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let local_path = Self::local_config_path(dir);
        if local_path.exists() {
            debug!(path = %local_path.display(), "Loading local config");
            return Self::from_file(&local_path);
        }

        let global_path = Self::global_config_path();
        if global_path.exists() {
            debug!(path = %global_path.display(), "Loading global config");
            return Self::from_file(&global_path);
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load from an explicit path when given, otherwise from `dir`.
    pub fn load(dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => Self::from_dir(dir),
        }
    }
}
