use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use cups_util::errors::{CupsError, CupsResult};
use cups_util::fs::{expand_home, home_dir};

use crate::properties::load_env_file;
use crate::source::AssociationSource;

/// Global user configuration loaded from `~/.cups/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CupsConfig {
    #[serde(default)]
    pub associations: AssociationsConfig,
}

/// Association settings from `[associations]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssociationsConfig {
    /// Properties files, lowest precedence first.
    #[serde(default)]
    pub sources: Vec<PathBuf>,
    /// `KEY=value` file consulted for `${env:VAR}` references.
    #[serde(default, rename = "env-file")]
    pub env_file: Option<PathBuf>,
}

impl CupsConfig {
    /// Load the configuration from `~/.cups/config.toml`, or return defaults if the file doesn't exist.
    pub fn load() -> CupsResult<Self> {
        let path = Self::default_path();
        if path.is_file() {
            Self::load_from(&path)
        } else {
            tracing::debug!(path = %path.display(), "no global config, using defaults");
            Ok(Self::default())
        }
    }

    /// Load the configuration from an explicit path, which must exist.
    pub fn load_from(path: &Path) -> CupsResult<Self> {
        let content = cups_util::fs::read_to_string(path).map_err(|e| CupsError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::parse(&content).map_err(|e| {
            CupsError::Config {
                message: format!("Failed to parse {}: {e}", path.display()),
            }
            .into()
        })
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }

    /// The configured sources in precedence order, with `~/` expanded.
    pub fn sources(&self) -> Vec<AssociationSource> {
        self.associations
            .sources
            .iter()
            .map(|p| AssociationSource::File(expand_home(p)))
            .collect()
    }

    /// Variables from the configured env file, or an empty map.
    pub fn env_overrides(&self) -> CupsResult<BTreeMap<String, String>> {
        match &self.associations.env_file {
            Some(path) => load_env_file(&expand_home(path)),
            None => Ok(BTreeMap::new()),
        }
    }
}

/// Returns the path to the cups data directory (`~/.cups/`).
pub fn dirs_path() -> PathBuf {
    home_dir().join(".cups")
}
