use crate::time::{Precision, range_span};
use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Overrides the configuration directory (defaults to `~/.tomato-clock`).
pub const HOME_ENV: &str = "TOMATO_CLOCK_HOME";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Default precision range used when `format` is called without one.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DisplayConfig {
    #[serde(default = "default_upper")]
    pub upper: Precision,
    #[serde(default = "default_lower")]
    pub lower: Precision,
}

fn default_upper() -> Precision {
    Precision::Min
}

fn default_lower() -> Precision {
    Precision::Sec
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            upper: default_upper(),
            lower: default_lower(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<()> {
        range_span(self.upper, self.lower).context("Invalid [display] range")?;
        Ok(())
    }
}

impl LogConfig {
    pub fn level(&self) -> Result<tracing::Level> {
        self.level
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid log level '{}'", self.level))
    }

    pub fn validate(&self) -> Result<()> {
        self.level().map(|_| ())
    }
}

impl Config {
    /// Validate all configuration
    pub fn validate(&self) -> Result<()> {
        self.display.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(dir));
    }
    Ok(home::home_dir()
        .context("Could not find home directory")?
        .join(".tomato-clock"))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let loader = ConfigBuilder::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .build()
        .context("Failed to build config loader")?;

    let config: Config = loader
        .try_deserialize()
        .context("Failed to parse config file")?;

    config.validate()?;
    Ok(config)
}

pub fn save_to_path<P: AsRef<Path>>(config: &Config, path: P) -> Result<()> {
    let toml_string = toml::to_string_pretty(config).context("Failed to serialize config")?;

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }
    std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

    Ok(())
}
