//! Settings layer
//!
//! Defaults for the candidate safety bound and the solver time limit, with an
//! optional user config file (`~/.config/slidr/config.toml` on Linux) layered
//! on top. CLI flags override both.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

/// Default upper bound on generated slide candidates. Vertical pairing grows
/// quadratically, so this also bounds the score matrix and the model size.
pub const DEFAULT_MAX_CANDIDATES: usize = 5_000;

const fn default_max_candidates() -> usize {
    DEFAULT_MAX_CANDIDATES
}

/// Run settings, file-loadable and CLI-overridable
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Refuse to generate more candidate slides than this
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,

    /// Solver time limit in seconds; unset means run to convergence
    #[serde(default)]
    pub time_limit_secs: Option<u64>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { max_candidates: DEFAULT_MAX_CANDIDATES, time_limit_secs: None, quiet: false }
    }
}

impl Settings {
    /// Get the path to the config file
    ///
    /// # Errors
    /// Returns `ConfigError` if the system config directory cannot be
    /// determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;
        Ok(config_dir.join("slidr").join("config.toml"))
    }

    /// Load settings, falling back to defaults when no config file exists
    ///
    /// # Errors
    /// Returns `ConfigError` if an existing config file cannot be read or
    /// parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let settings = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save settings to the config file
    ///
    /// # Errors
    /// Returns `ConfigError` if the config directory cannot be created, the
    /// settings cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize settings: {e}")))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))
    }

    /// Overlay CLI flags; flags win over file values
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(bound) = cli.max_candidates {
            self.max_candidates = bound;
        }
        if let Some(secs) = cli.time_limit {
            self.time_limit_secs = Some(secs);
        }
        if cli.quiet {
            self.quiet = true;
        }
    }

    /// The solver time limit as a duration, if one is configured
    #[must_use]
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_secs.map(Duration::from_secs)
    }
}
