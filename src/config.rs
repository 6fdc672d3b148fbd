//! Configuration handling for the analyzer.
//!
//! Settings come from an optional `homophones.toml` file. Missing fields and
//! a missing file fall back to defaults.
//!
//! ## Environment Variables
//!
//! The following environment variables override config file settings:
//!
//! - `HOMOPHONES_DICTIONARY` - Path to the word list
//! - `HOMOPHONES_TOP` - Number of groups to report
//! - `HOMOPHONES_FORMAT` - Report format (`text` or `json`)
//! - `HOMOPHONES_PARALLEL` - Group on the rayon pool (`true`/`false`)
//!
//! These can be set in a `.env` file next to the config file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{HomophoneError, HomophoneResult};
use crate::grouping::DEFAULT_TOP;
use crate::report::OutputFormat;

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "homophones.toml";

/// Environment variable names
pub const ENV_DICTIONARY: &str = "HOMOPHONES_DICTIONARY";
pub const ENV_TOP: &str = "HOMOPHONES_TOP";
pub const ENV_FORMAT: &str = "HOMOPHONES_FORMAT";
pub const ENV_PARALLEL: &str = "HOMOPHONES_PARALLEL";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Word list, one word per line (relative to the config directory)
    #[serde(default = "default_dictionary")]
    pub dictionary: PathBuf,
    /// Group words on the rayon pool
    #[serde(default)]
    pub parallel: bool,
    /// Report configuration
    #[serde(default)]
    pub report: ReportConfig,
}

/// Report-specific configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Number of groups to print
    #[serde(default = "default_top")]
    pub top: usize,
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_dictionary() -> PathBuf {
    PathBuf::from("words.txt")
}

fn default_top() -> usize {
    DEFAULT_TOP
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top: default_top(),
            format: OutputFormat::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: default_dictionary(),
            parallel: false,
            report: ReportConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a directory
    ///
    /// This also loads any `.env` file in the directory and applies
    /// environment variable overrides.
    pub fn load(dir: &Path) -> HomophoneResult<Self> {
        let env_path = dir.join(".env");
        if env_path.exists() {
            let _ = dotenvy::from_path(&env_path);
        }

        let mut config = Self::from_file(dir)?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Read `homophones.toml` from `dir` without looking at the environment.
    pub fn from_file(dir: &Path) -> HomophoneResult<Self> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %config_path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Apply overrides looked up through `var` (normally the process environment)
    pub fn apply_env_overrides<F>(&mut self, var: F) -> HomophoneResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dictionary) = var(ENV_DICTIONARY).filter(|v| !v.is_empty()) {
            self.dictionary = PathBuf::from(dictionary);
        }

        if let Some(top) = var(ENV_TOP).filter(|v| !v.is_empty()) {
            self.report.top = top.trim().parse::<usize>().map_err(|_| {
                HomophoneError::InvalidArgument(format!("{} must be a count, got '{}'", ENV_TOP, top))
            })?;
        }

        if let Some(format) = var(ENV_FORMAT).filter(|v| !v.is_empty()) {
            self.report.format = format.trim().parse()?;
        }

        if let Some(parallel) = var(ENV_PARALLEL).filter(|v| !v.is_empty()) {
            self.parallel = match parallel.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(HomophoneError::InvalidArgument(format!(
                        "{} must be a boolean, got '{}'",
                        ENV_PARALLEL, parallel
                    )))
                }
            };
        }

        Ok(())
    }

    /// Save configuration to a directory
    pub fn save(&self, dir: &Path) -> HomophoneResult<PathBuf> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(config_path)
    }

    /// Get the absolute dictionary path
    pub fn dictionary_path(&self, config_dir: &Path) -> PathBuf {
        if self.dictionary.is_absolute() {
            self.dictionary.clone()
        } else {
            config_dir.join(&self.dictionary)
        }
    }
}
