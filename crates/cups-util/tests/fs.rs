use std::path::{Path, PathBuf};

use cups_util::fs::{expand_home_in, read_bytes, read_to_string};
use tempfile::TempDir;

#[test]
fn expand_home_replaces_tilde_prefix() {
    let home = Path::new("/home/builder");
    assert_eq!(
        expand_home_in(Path::new("~/.cups/config.toml"), home),
        PathBuf::from("/home/builder/.cups/config.toml")
    );
}

#[test]
fn expand_home_bare_tilde_is_home() {
    let home = Path::new("/home/builder");
    assert_eq!(expand_home_in(Path::new("~"), home), home.to_path_buf());
}

#[test]
fn expand_home_leaves_other_paths_alone() {
    let home = Path::new("/home/builder");
    assert_eq!(
        expand_home_in(Path::new("/etc/cups/commands.properties"), home),
        PathBuf::from("/etc/cups/commands.properties")
    );
    assert_eq!(
        expand_home_in(Path::new("relative/~file"), home),
        PathBuf::from("relative/~file")
    );
}

#[test]
fn read_to_string_reads_file_contents() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("a.properties");
    std::fs::write(&path, "a/b=install-a\n").unwrap();
    assert_eq!(read_to_string(&path).unwrap(), "a/b=install-a\n");
}

#[test]
fn read_to_string_missing_file_errors() {
    let tmp = TempDir::new().unwrap();
    let err = read_to_string(&tmp.path().join("missing")).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn read_bytes_keeps_non_utf8_content() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("legacy.properties");
    std::fs::write(&path, b"a/b=caf\xe9").unwrap();
    assert_eq!(read_bytes(&path).unwrap(), b"a/b=caf\xe9".to_vec());
}
