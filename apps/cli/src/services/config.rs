use crate::ui::diagnostic::ConfigSyntaxError;
use risk_register::domain::{SortDirection, SortKey, SortState};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_DIR: &str = ".risk-register";
const CONFIG_FILE: &str = "config.toml";

/// Presentation and logging preferences. Never holds register data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub display: DisplaySettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplaySettings {
    pub default_sort: SortKey,
    pub descending: bool,
    pub color: bool,
    pub banner: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            default_sort: SortKey::Inherent,
            descending: true,
            color: true,
            banner: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSettings {
    /// `tracing` filter directive, e.g. `warn` or `domain=debug`.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Settings {
    pub fn initial_sort(&self) -> SortState {
        let direction = if self.display.descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        SortState::new(self.display.default_sort, direction)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not find home directory")]
    NoHome,

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Syntax(#[from] ConfigSyntaxError),
}

pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Uses `explicit` when given, else `~/.risk-register/config.toml`.
    pub fn new(explicit: Option<PathBuf>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path,
            None => dirs::home_dir()
                .ok_or(ConfigError::NoHome)?
                .join(CONFIG_DIR)
                .join(CONFIG_FILE),
        };
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The file settings are read from, or `None` when defaults apply.
    pub fn source(&self) -> Option<&Path> {
        self.path.is_file().then_some(self.path.as_path())
    }

    /// Load the settings. Returns defaults if the file doesn't exist.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        if self.source().is_none() {
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;

        toml::from_str(&content).map_err(|err| {
            ConfigSyntaxError::from_toml(&self.path.to_string_lossy(), &content, &err).into()
        })
    }
}
