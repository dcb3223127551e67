//! Config management use case

use crate::error::{LabbookError, Result};
use crate::infrastructure::Config;
use std::path::PathBuf;

/// Service for reading and changing the notebook configuration.
pub struct ConfigService {
    dir: PathBuf,
}

impl ConfigService {
    /// Create a config service rooted at the given directory.
    pub fn new(dir: PathBuf) -> Self {
        ConfigService { dir }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = Config::load_from_dir(&self.dir)?;

        match key {
            "database" => Ok(config.database.display().to_string()),
            "export_dir" => Ok(config.export_dir.display().to_string()),
            _ => Err(LabbookError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: database, export_dir",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load_from_dir(&self.dir)?;

        match key {
            "database" => config.database = PathBuf::from(value),
            "export_dir" => config.export_dir = PathBuf::from(value),
            _ => {
                return Err(LabbookError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: database, export_dir",
                    key
                )));
            }
        }

        config.save_to_dir(&self.dir)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        Config::load_from_dir(&self.dir)
    }
}
