//! The association index: artifact identity to version token to value.

use std::collections::{BTreeMap, HashMap};

use cups_core::artifact::ArtifactIdentity;
use cups_core::key::classify;
use cups_core::source::AssociationSource;
use cups_util::errors::CupsResult;

/// Version token (a literal version or `*`) to associated value.
pub type VersionMap = BTreeMap<String, String>;

static EMPTY: VersionMap = BTreeMap::new();

/// Associations merged from every source, read-only once built.
///
/// To pick up changed sources, build a new index and swap it in; an index is
/// never modified after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssociationIndex {
    associations: HashMap<ArtifactIdentity, VersionMap>,
}

impl AssociationIndex {
    /// Merge already-read sources, in order, into an index.
    ///
    /// Keys that are not `group/name` or `group/name/version` are skipped.
    /// An unversioned key is stored under the wildcard token. When the same
    /// key appears more than once, the last value read wins.
    pub fn build<S, P, K, V>(sources: S) -> Self
    where
        S: IntoIterator<Item = P>,
        P: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut associations: HashMap<ArtifactIdentity, VersionMap> = HashMap::new();
        for (position, source) in sources.into_iter().enumerate() {
            for (key, value) in source {
                let key = key.as_ref();
                let Some((identity, token)) = classify(key).association() else {
                    tracing::debug!(source = position, key, "skipping non-artifact key");
                    continue;
                };
                let versions = associations.entry(identity).or_default();
                if let Some(previous) = versions.insert(token.to_string(), value.into()) {
                    tracing::debug!(source = position, key, %previous, "association overridden");
                }
            }
        }
        Self { associations }
    }

    /// Read every source and merge them into an index.
    ///
    /// The first source that cannot be read aborts the whole build.
    pub fn load(
        sources: &[AssociationSource],
        env_overrides: &BTreeMap<String, String>,
    ) -> CupsResult<Self> {
        let pairs = sources
            .iter()
            .map(|source| source.read(env_overrides))
            .collect::<CupsResult<Vec<_>>>()?;
        let index = Self::build(pairs);
        tracing::info!(
            sources = sources.len(),
            artifacts = index.len(),
            "built association index"
        );
        Ok(index)
    }

    /// All version tokens and values for `identity`; empty when unknown.
    pub fn lookup_identity(&self, identity: &ArtifactIdentity) -> &VersionMap {
        self.associations.get(identity).unwrap_or(&EMPTY)
    }

    /// Number of artifact identities with at least one association.
    pub fn len(&self) -> usize {
        self.associations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.associations.is_empty()
    }
}
