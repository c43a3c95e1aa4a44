use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[allow(deprecated)]
fn cups_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cups").unwrap();
    cmd.env("HOME", home).env_remove("CUPS_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_show_lists_tokens_sorted() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("commands.properties");
    fs::write(
        &source,
        "a/b/2.0 = two\na/b = all\na/b/1.0 = one\nc/d = other\n",
    )
    .unwrap();

    cups_cmd(tmp.path())
        .args(["show", "a/b", "--source"])
        .arg(&source)
        .assert()
        .success()
        .stdout("a/b (3 entries):\n  * = all\n  1.0 = one\n  2.0 = two\n");
}

#[test]
fn test_show_unknown_identity() {
    let tmp = TempDir::new().unwrap();

    cups_cmd(tmp.path())
        .args(["show", "x/y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No associations for x/y"));
}

#[test]
fn test_show_rejects_versioned_argument() {
    let tmp = TempDir::new().unwrap();

    cups_cmd(tmp.path())
        .args(["show", "a/b/1.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid artifact"));
}
