//! Association index and resolver.
//!
//! Associations read from ordered sources are merged into an
//! [`index::AssociationIndex`]; a [`resolver::Resolver`] answers requests
//! against it through a [`version::VersionSelector`], falling back to the
//! wildcard entry.

pub mod index;
pub mod resolver;
pub mod version;

pub use index::{AssociationIndex, VersionMap};
pub use resolver::Resolver;
pub use version::{MavenSelector, VersionSelector};
