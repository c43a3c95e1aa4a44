use std::path::{Path, PathBuf};

/// Returns the user's home directory from `HOME` (or `USERPROFILE`), falling
/// back to the current directory.
pub fn home_dir() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home)
}

/// Expand a leading `~/` (or a bare `~`) against `home`.
pub fn expand_home_in(path: &Path, home: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}

/// Expand a leading `~/` against the current user's home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    expand_home_in(path, &home_dir())
}

/// Read a whole file to a string, logging the path at trace level.
pub fn read_to_string(path: &Path) -> std::io::Result<String> {
    tracing::trace!(path = %path.display(), "reading file");
    std::fs::read_to_string(path)
}

/// Read a whole file as raw bytes, logging the path at trace level.
pub fn read_bytes(path: &Path) -> std::io::Result<Vec<u8>> {
    tracing::trace!(path = %path.display(), "reading file");
    std::fs::read(path)
}
