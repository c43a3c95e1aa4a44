use std::fmt;
use std::str::FromStr;

use cups_util::errors::CupsError;

/// An artifact without its version: the key under which associations are
/// grouped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtifactIdentity {
    pub group: String,
    pub name: String,
}

impl ArtifactIdentity {
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
        }
    }

    /// Attach a version to this identity.
    pub fn with_version(self, version: impl Into<String>) -> Artifact {
        Artifact {
            identity: self,
            version: version.into(),
        }
    }
}

impl fmt::Display for ArtifactIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.group, self.name)
    }
}

impl FromStr for ArtifactIdentity {
    type Err = CupsError;

    /// Parse `"group/name"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split('/').collect::<Vec<_>>().as_slice() {
            [group, name] if !group.is_empty() && !name.is_empty() => {
                Ok(Self::new(*group, *name))
            }
            _ => Err(CupsError::InvalidArtifact {
                input: s.to_string(),
            }),
        }
    }
}

/// A concrete artifact request: group, name and version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Artifact {
    pub identity: ArtifactIdentity,
    pub version: String,
}

impl Artifact {
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        ArtifactIdentity::new(group, name).with_version(version)
    }

    pub fn group(&self) -> &str {
        &self.identity.group
    }

    pub fn name(&self) -> &str {
        &self.identity.name
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.identity, self.version)
    }
}

impl FromStr for Artifact {
    type Err = CupsError;

    /// Parse `"group/name/version"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split('/').collect::<Vec<_>>().as_slice() {
            [group, name, version] if [group, name, version].iter().all(|p| !p.is_empty()) => {
                Ok(Self::new(*group, *name, *version))
            }
            _ => Err(CupsError::InvalidArtifact {
                input: s.to_string(),
            }),
        }
    }
}
