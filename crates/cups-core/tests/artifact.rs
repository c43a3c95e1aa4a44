use cups_core::artifact::{Artifact, ArtifactIdentity};
use std::collections::HashSet;

#[test]
fn identity_equality_is_by_value() {
    let a = ArtifactIdentity::new("com.example", "widget");
    let b = ArtifactIdentity::new(String::from("com.example"), String::from("widget"));
    assert_eq!(a, b);

    let mut set = HashSet::new();
    set.insert(a);
    assert!(set.contains(&b));
    assert!(!set.contains(&ArtifactIdentity::new("widget", "com.example")));
}

#[test]
fn parse_artifact_three_segments() {
    let artifact: Artifact = "com.example/widget/1.2.3".parse().unwrap();
    assert_eq!(artifact.group(), "com.example");
    assert_eq!(artifact.name(), "widget");
    assert_eq!(artifact.version, "1.2.3");
    assert_eq!(artifact.to_string(), "com.example/widget/1.2.3");
}

#[test]
fn parse_artifact_rejects_other_shapes() {
    for input in ["", "a/b", "a/b/c/d", "a//c", "a/b/"] {
        let err = input.parse::<Artifact>().unwrap_err();
        assert!(err.to_string().contains("Invalid artifact"), "input: {input:?}");
    }
}

#[test]
fn parse_identity_two_segments() {
    let identity: ArtifactIdentity = "com.example/widget".parse().unwrap();
    assert_eq!(identity, ArtifactIdentity::new("com.example", "widget"));
    assert_eq!(identity.to_string(), "com.example/widget");
    assert!("com.example/widget/1.0".parse::<ArtifactIdentity>().is_err());
    assert!("/widget".parse::<ArtifactIdentity>().is_err());
}

#[test]
fn with_version_keeps_identity() {
    let artifact = ArtifactIdentity::new("a", "b").with_version("2.0");
    assert_eq!(artifact, Artifact::new("a", "b", "2.0"));
    assert_eq!(artifact.identity, ArtifactIdentity::new("a", "b"));
}
