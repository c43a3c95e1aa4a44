//! Classification of association keys.
//!
//! A key names either every version of an artifact (`group/name`) or one
//! version of it (`group/name/version`). Segments are one or more characters
//! other than `/`. Anything else is not an artifact key.

use crate::artifact::ArtifactIdentity;
use crate::WILDCARD_VERSION;

/// The shape of a raw configuration key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyClass<'a> {
    Unversioned { group: &'a str, name: &'a str },
    Versioned {
        group: &'a str,
        name: &'a str,
        version: &'a str,
    },
    NotAnArtifactKey,
}

impl<'a> KeyClass<'a> {
    /// The identity and version token for an artifact key, or `None` when the
    /// key is not one. Unversioned keys map to the wildcard token.
    pub fn association(&self) -> Option<(ArtifactIdentity, &'a str)> {
        match *self {
            KeyClass::Unversioned { group, name } => {
                Some((ArtifactIdentity::new(group, name), WILDCARD_VERSION))
            }
            KeyClass::Versioned {
                group,
                name,
                version,
            } => Some((ArtifactIdentity::new(group, name), version)),
            KeyClass::NotAnArtifactKey => None,
        }
    }
}

/// Classify `raw` as an unversioned key, a versioned key, or neither.
///
/// The unversioned shape is tested first.
pub fn classify(raw: &str) -> KeyClass<'_> {
    if let Some([group, name]) = segments::<2>(raw) {
        return KeyClass::Unversioned { group, name };
    }
    if let Some([group, name, version]) = segments::<3>(raw) {
        return KeyClass::Versioned {
            group,
            name,
            version,
        };
    }
    KeyClass::NotAnArtifactKey
}

/// Split `raw` into exactly `N` non-empty `/`-separated segments.
fn segments<const N: usize>(raw: &str) -> Option<[&str; N]> {
    let mut out = [""; N];
    let mut parts = raw.split('/');
    for slot in out.iter_mut() {
        let part = parts.next()?;
        if part.is_empty() {
            return None;
        }
        *slot = part;
    }
    match parts.next() {
        Some(_) => None,
        None => Some(out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_segments_are_unversioned() {
        assert_eq!(
            classify("com.example/widget"),
            KeyClass::Unversioned {
                group: "com.example",
                name: "widget"
            }
        );
    }

    #[test]
    fn three_segments_are_versioned() {
        assert_eq!(
            classify("com.example/widget/1.2.3"),
            KeyClass::Versioned {
                group: "com.example",
                name: "widget",
                version: "1.2.3"
            }
        );
    }

    #[test]
    fn other_segment_counts_are_rejected() {
        for key in ["", "widget", "a/b/c/d", "a/b/c/d/e"] {
            assert_eq!(classify(key), KeyClass::NotAnArtifactKey, "key: {key:?}");
        }
    }

    #[test]
    fn empty_segments_are_rejected() {
        for key in ["/", "a/", "/b", "a//c", "a/b/", "//", "a/b//"] {
            assert_eq!(classify(key), KeyClass::NotAnArtifactKey, "key: {key:?}");
        }
    }

    #[test]
    fn whitespace_is_an_ordinary_character() {
        assert_eq!(
            classify("a b/c"),
            KeyClass::Unversioned {
                group: "a b",
                name: "c"
            }
        );
    }

    #[test]
    fn association_uses_wildcard_for_unversioned() {
        let (identity, token) = classify("a/b").association().unwrap();
        assert_eq!(identity, ArtifactIdentity::new("a", "b"));
        assert_eq!(token, "*");

        let (_, token) = classify("a/b/1.0").association().unwrap();
        assert_eq!(token, "1.0");

        assert!(classify("a/b/c/d").association().is_none());
    }
}
