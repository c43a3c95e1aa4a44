use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all cups operations.
#[derive(Debug, Error, Diagnostic)]
pub enum CupsError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An association source could not be read. Aborts index construction.
    #[error("Failed to read association source {}: {source}", path.display())]
    #[diagnostic(help("Check that the file exists and is readable"))]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid or unreadable configuration file.
    #[error("Configuration error: {message}")]
    #[diagnostic(help("Check the configuration file for syntax errors"))]
    Config { message: String },

    /// An artifact argument that is not of the form `group/name/version`.
    #[error("Invalid artifact '{input}'")]
    #[diagnostic(help("Artifacts are written as group/name/version"))]
    InvalidArtifact { input: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type CupsResult<T> = miette::Result<T>;
