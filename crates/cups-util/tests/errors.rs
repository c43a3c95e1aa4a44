use std::path::PathBuf;

use cups_util::errors::CupsError;

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = CupsError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_source_read_error_names_path() {
    let err = CupsError::SourceRead {
        path: PathBuf::from("/etc/cups/commands.properties"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(
        err.to_string(),
        "Failed to read association source /etc/cups/commands.properties: denied"
    );
}

#[test]
fn test_config_error_display() {
    let err = CupsError::Config {
        message: "bad syntax".to_string(),
    };
    assert_eq!(err.to_string(), "Configuration error: bad syntax");
}

#[test]
fn test_config_error_help_is_path_neutral() {
    use miette::Diagnostic;

    let err = CupsError::Config {
        message: "Failed to parse /srv/cups.toml".to_string(),
    };
    let help = err.help().map(|h| h.to_string()).unwrap_or_default();
    assert_eq!(help, "Check the configuration file for syntax errors");
}

#[test]
fn test_invalid_artifact_display() {
    let err = CupsError::InvalidArtifact {
        input: "a/b".to_string(),
    };
    assert_eq!(err.to_string(), "Invalid artifact 'a/b'");
}

#[test]
fn test_io_error_from_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let cups_err: CupsError = io_err.into();
    assert!(matches!(cups_err, CupsError::Io(_)));
}
