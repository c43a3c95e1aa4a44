use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use cups_util::errors::{CupsError, CupsResult};

use crate::properties::{read_properties, resolve_values};

/// One configuration source of association pairs.
///
/// Sources are read in the order they are supplied; later sources override
/// earlier ones for the same key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssociationSource {
    /// A properties file on disk.
    File(PathBuf),
    /// Pairs held in memory, e.g. built-in defaults or test fixtures.
    Inline {
        name: String,
        pairs: Vec<(String, String)>,
    },
}

impl AssociationSource {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    pub fn inline<K, V>(name: impl Into<String>, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::Inline {
            name: name.into(),
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Read the raw pairs without interpolating values.
    pub fn read_raw(&self) -> CupsResult<Vec<(String, String)>> {
        match self {
            Self::File(path) => read_properties(path).map_err(|source| {
                CupsError::SourceRead {
                    path: path.clone(),
                    source,
                }
                .into()
            }),
            Self::Inline { pairs, .. } => Ok(pairs.clone()),
        }
    }

    /// Read the pairs with every value interpolated.
    pub fn read(
        &self,
        env_overrides: &BTreeMap<String, String>,
    ) -> CupsResult<Vec<(String, String)>> {
        let pairs = self.read_raw()?;
        tracing::debug!(source = %self, pairs = pairs.len(), "read association source");
        Ok(resolve_values(pairs, env_overrides))
    }
}

impl fmt::Display for AssociationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Inline { name, .. } => write!(f, "<{name}>"),
        }
    }
}
