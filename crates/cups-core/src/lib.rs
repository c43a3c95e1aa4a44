//! Core data types for cups.
//!
//! This crate defines the artifact identity types, the classifier for
//! association keys, the properties reader and value interpolation used to
//! read association sources, and the global configuration.
//!
//! This crate is intentionally free of version ordering; that lives in
//! `cups-resolver` together with the index.

/// The version token that applies to every version of an artifact.
pub const WILDCARD_VERSION: &str = "*";

pub mod artifact;
pub mod config;
pub mod key;
pub mod properties;
pub mod source;
