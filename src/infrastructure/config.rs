//! Configuration management

use crate::error::{LabbookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional configuration file, looked up in the working
/// directory next to the notebook database.
pub const CONFIG_FILE: &str = "labbook.toml";

/// Default database file name when no configuration overrides it.
pub const DEFAULT_DATABASE: &str = "notebook.db";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the SQLite notebook file.
    pub database: PathBuf,
    /// Directory exported documents are written to.
    pub export_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database: PathBuf::from(DEFAULT_DATABASE),
            export_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Load `labbook.toml` from the given directory, falling back to the
    /// defaults when the file does not exist.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Config::default());
            }
            Err(e) => return Err(LabbookError::Io(e)),
        };

        toml::from_str(&contents).map_err(|e| {
            LabbookError::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e))
        })
    }

    /// Save this config to `labbook.toml` in the given directory.
    pub fn save_to_dir(&self, dir: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(dir.join(CONFIG_FILE), contents)?;
        Ok(())
    }
}
