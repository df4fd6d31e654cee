//! World-cup configuration loaded from TOML

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, WorldcupError};

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "worldcup.toml";

/// Route the winner is handed off to
pub const DEFAULT_RESULTS_PATH: &str = "/worldcup/game-page/result";

/// Bracket size used when neither config nor flags choose one
pub const DEFAULT_STAGE: usize = 16;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldcupConfig {
    /// Number of candidates entering the first round
    pub stage: usize,
    /// Path of the results view the winner id is appended to
    pub results_path: String,
    /// Candidate file used when none is passed on the command line
    pub candidates: Option<PathBuf>,
    /// Fixed shuffle seed (None = fresh entropy each game)
    pub seed: Option<u64>,
}

impl Default for WorldcupConfig {
    fn default() -> Self {
        Self {
            stage: DEFAULT_STAGE,
            results_path: DEFAULT_RESULTS_PATH.to_string(),
            candidates: None,
            seed: None,
        }
    }
}

impl WorldcupConfig {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| WorldcupError::io(path, e))?;
        let config: Self = toml::from_str(&contents).map_err(|e| WorldcupError::parse(path, e))?;
        config.validate()?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `path` if given, otherwise `worldcup.toml` if it exists, otherwise defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::load(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.stage.is_power_of_two() {
            return Err(WorldcupError::Config(format!(
                "stage must be a positive power of two, got {}",
                self.stage
            )));
        }
        if !self.results_path.starts_with('/') {
            return Err(WorldcupError::Config(format!(
                "results_path must be absolute, got {:?}",
                self.results_path
            )));
        }
        Ok(())
    }

    /// Save config to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents =
            toml::to_string_pretty(self).map_err(|e| WorldcupError::Config(e.to_string()))?;
        std::fs::write(path, contents).map_err(|e| WorldcupError::io(path, e))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
