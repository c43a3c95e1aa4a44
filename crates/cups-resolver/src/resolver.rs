//! Resolution of a requested artifact version to its associated value.

use std::collections::BTreeMap;

use cups_core::artifact::{Artifact, ArtifactIdentity};
use cups_core::source::AssociationSource;
use cups_core::WILDCARD_VERSION;
use cups_util::errors::CupsResult;

use crate::index::AssociationIndex;
use crate::version::{MavenSelector, VersionSelector};

/// Looks up the value associated with an artifact at a requested version.
#[derive(Debug, Clone)]
pub struct Resolver<S = MavenSelector> {
    index: AssociationIndex,
    selector: S,
}

impl Resolver<MavenSelector> {
    /// A resolver using Maven version matching.
    pub fn new(index: AssociationIndex) -> Self {
        Self::with_selector(index, MavenSelector)
    }

    /// Read `sources` and build a resolver over them.
    pub fn load(
        sources: &[AssociationSource],
        env_overrides: &BTreeMap<String, String>,
    ) -> CupsResult<Self> {
        Ok(Self::new(AssociationIndex::load(sources, env_overrides)?))
    }
}

impl<S: VersionSelector> Resolver<S> {
    pub fn with_selector(index: AssociationIndex, selector: S) -> Self {
        Self { index, selector }
    }

    pub fn index(&self) -> &AssociationIndex {
        &self.index
    }

    /// The value for `identity` at `requested`, or `None`.
    ///
    /// The selector chooses among the concrete versions on record; when it
    /// chooses none, the wildcard entry applies if there is one.
    pub fn resolve(&self, identity: &ArtifactIdentity, requested: &str) -> Option<&str> {
        let versions = self.index.lookup_identity(identity);
        let candidates: Vec<&str> = versions
            .keys()
            .map(String::as_str)
            .filter(|token| *token != WILDCARD_VERSION)
            .collect();

        if let Some(selected) = self.selector.select(requested, &candidates) {
            match versions.get(&selected) {
                Some(value) => {
                    tracing::debug!(%identity, requested, %selected, "matched versioned association");
                    return Some(value.as_str());
                }
                None => {
                    tracing::warn!(%identity, requested, %selected, "selector returned a version with no association");
                }
            }
        }

        let fallback = versions.get(WILDCARD_VERSION).map(String::as_str);
        if fallback.is_some() {
            tracing::debug!(%identity, requested, "using wildcard association");
        }
        fallback
    }

    /// Resolve by group, name and version.
    pub fn resolve_coordinates(&self, group: &str, name: &str, requested: &str) -> Option<&str> {
        self.resolve(&ArtifactIdentity::new(group, name), requested)
    }

    /// Resolve a parsed artifact.
    pub fn get(&self, artifact: &Artifact) -> Option<&str> {
        self.resolve(&artifact.identity, &artifact.version)
    }
}
