//! Configuration loading and persistence.
//!
//! The config file is TOML. Every field has a default, so a missing file or a
//! partial file is fine; only malformed TOML is an error.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::reveal::DEFAULT_THRESHOLD;
use crate::shell::profile;
use crate::theme::{theme_named, Theme};
use crate::typewriter::Timing;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "FOLIO_CONFIG";

/// Errors from reading or writing the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub typewriter: TypewriterConfig,
    pub reveal: RevealConfig,
    pub shell: ShellConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

/// Banner animation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub enabled: bool,
    pub roles: Vec<String>,
    pub type_delay_ms: u64,
    pub delete_delay_ms: u64,
    pub pause_full_ms: u64,
    pub pause_empty_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        let timing = Timing::default();
        Self {
            enabled: true,
            roles: profile::ROLES.iter().map(|r| r.to_string()).collect(),
            type_delay_ms: millis(timing.type_delay),
            delete_delay_ms: millis(timing.delete_delay),
            pause_full_ms: millis(timing.pause_full),
            pause_empty_ms: millis(timing.pause_empty),
        }
    }
}

impl TypewriterConfig {
    pub fn timing(&self) -> Timing {
        Timing {
            type_delay: Duration::from_millis(self.type_delay_ms),
            delete_delay: Duration::from_millis(self.delete_delay_ms),
            pause_full: Duration::from_millis(self.pause_full_ms),
            pause_empty: Duration::from_millis(self.pause_empty_ms),
        }
    }
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

/// Page fade-in settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Fraction of a section that must be visible before it is revealed.
    /// Clamped to `0.0..=1.0` by the revealer.
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Shell settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub prompt: String,
    /// Commands submitted when the TUI starts.
    pub startup: Vec<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: profile::PROMPT.to_string(),
            startup: vec!["welcome".to_string()],
        }
    }
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub theme: String,
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            tick_rate_ms: 250,
        }
    }
}

impl UiConfig {
    pub fn theme(&self) -> Theme {
        theme_named(&self.theme)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing` filter directive; `FOLIO_LOG` takes precedence.
    pub level: String,
    /// Log file for the TUI. Defaults to the platform data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Path of the config file: `$FOLIO_CONFIG` or `<config_dir>/folio/config.toml`.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        dirs::config_dir()
            .map(|dir| dir.join("folio").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Serialize as pretty TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml()?;
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(path, content).map_err(write_err)
    }
}
