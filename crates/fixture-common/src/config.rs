//! ---
//! fx_section: "02-ambient"
//! fx_subsection: "module"
//! fx_type: "source"
//! fx_scope: "code"
//! fx_description: "Shared configuration, errors, and tracing bootstrap."
//! fx_version: "v0.1.0"
//! fx_owner: "tbd"
//! ---
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::logging::LogFormat;

/// Files checked, in order, when no explicit path or env override is given.
pub const DEFAULT_CANDIDATES: [&str; 2] = ["fixture.toml", "configs/fixture.toml"];

fn default_logging_directory() -> PathBuf {
    PathBuf::from("target/logs")
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

fn default_name() -> String {
    "fixture".to_owned()
}

/// Primary configuration object for the fixture tooling.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FixtureConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Metadata describing where a [`FixtureConfig`] was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedFixtureConfig {
    pub config: FixtureConfig,
    /// `None` when no file was found and built-in defaults apply.
    pub source: Option<PathBuf>,
}

impl FixtureConfig {
    pub const ENV_CONFIG_PATH: &'static str = "FIXTURE_CONFIG";

    /// Resolve configuration from an explicit path, the `FIXTURE_CONFIG`
    /// override, then the candidate list. Falls back to defaults when none
    /// of them exists; an explicit or env path that is missing is an error.
    pub fn load_with_source<P: AsRef<Path>>(
        explicit: Option<&Path>,
        candidates: &[P],
    ) -> Result<LoadedFixtureConfig> {
        if let Some(path) = explicit {
            return Self::loaded_from(path.to_path_buf());
        }

        if let Ok(env_path) = std::env::var(Self::ENV_CONFIG_PATH) {
            if !env_path.trim().is_empty() {
                return Self::loaded_from(PathBuf::from(env_path));
            }
        }

        for candidate in candidates {
            if candidate.as_ref().exists() {
                return Self::loaded_from(candidate.as_ref().to_path_buf());
            }
        }

        debug!("no configuration file found, using defaults");
        Ok(LoadedFixtureConfig {
            config: Self::default(),
            source: None,
        })
    }

    fn loaded_from(path: PathBuf) -> Result<LoadedFixtureConfig> {
        let config = Self::from_path(&path)?;
        Ok(LoadedFixtureConfig {
            config,
            source: Some(path),
        })
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        debug!(config_path = %path.display(), "loading configuration");
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        contents.parse()
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.defaults.name {
            if name.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "defaults.name must not be empty".to_owned(),
                ));
            }
        }
        Ok(())
    }

    /// Name used when the caller does not supply one.
    pub fn default_name(&self) -> String {
        self.defaults.name.clone().unwrap_or_else(default_name)
    }
}

impl std::str::FromStr for FixtureConfig {
    type Err = ConfigError;

    fn from_str(content: &str) -> std::result::Result<Self, Self::Err> {
        let config: FixtureConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
    /// Also write a daily rolling JSON log under `directory`.
    #[serde(default)]
    pub file: bool,
    #[serde(default = "default_logging_directory")]
    pub directory: PathBuf,
    #[serde(default)]
    pub file_prefix: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: default_log_format(),
            file: false,
            directory: default_logging_directory(),
            file_prefix: None,
        }
    }
}

/// Initial values applied by the CLI when no argument overrides them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub value: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
}
