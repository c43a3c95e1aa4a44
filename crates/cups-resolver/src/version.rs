//! Maven version parsing, comparison, range matching, and the version
//! selector used to pick an association for a requested version.
//!
//! Maven versions use a custom ordering that differs from semver:
//! - Segments are split on `.` and `-`
//! - Numeric segments compare as numbers
//! - String qualifiers have a special ordering:
//!   `alpha` < `beta` < `milestone` < `rc` < `snapshot` < `""` (release) < `sp`
//! - Trailing zero segments are insignificant (`1.0` == `1.0.0`)

use std::cmp::Ordering;

/// Chooses the best concrete version for a request from a set of candidates.
///
/// Implementations return at most one of `candidates`, deterministically,
/// and `None` when nothing matches (always for an empty set).
pub trait VersionSelector {
    fn select(&self, requested: &str, candidates: &[&str]) -> Option<String>;
}

impl<F> VersionSelector for F
where
    F: Fn(&str, &[&str]) -> Option<String>,
{
    fn select(&self, requested: &str, candidates: &[&str]) -> Option<String> {
        self(requested, candidates)
    }
}

/// The default selector, matching requests by Maven version semantics.
///
/// - `[1.0,2.0)` style ranges pick the highest candidate in the range.
/// - `1.2.+` dynamic versions pick the highest candidate with that prefix.
/// - Anything else picks a candidate equal to the request, preferring an
///   exact literal match.
///
/// Candidates of equal order tie-break on the smallest literal.
#[derive(Debug, Clone, Copy, Default)]
pub struct MavenSelector;

impl VersionSelector for MavenSelector {
    fn select(&self, requested: &str, candidates: &[&str]) -> Option<String> {
        let requested = requested.trim();
        if let Some(range) = VersionRange::parse(requested) {
            return highest(
                candidates
                    .iter()
                    .copied()
                    .filter(|c| range.contains(&MavenVersion::parse(c))),
            );
        }
        if let Some(prefix) = requested.strip_suffix('+') {
            return highest(candidates.iter().copied().filter(|c| c.starts_with(prefix)));
        }
        if candidates.contains(&requested) {
            return Some(requested.to_string());
        }
        let wanted = MavenVersion::parse(requested);
        candidates
            .iter()
            .copied()
            .filter(|c| MavenVersion::parse(c) == wanted)
            .min()
            .map(str::to_string)
    }
}

fn highest<'a>(candidates: impl Iterator<Item = &'a str>) -> Option<String> {
    candidates
        .map(|c| (MavenVersion::parse(c), c))
        .max_by(|(va, a), (vb, b)| va.cmp(vb).then_with(|| b.cmp(a)))
        .map(|(_, c)| c.to_string())
}

/// A parsed Maven version with comparable segments.
#[derive(Debug, Clone)]
pub struct MavenVersion {
    segments: Vec<Segment>,
}

impl PartialEq for MavenVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MavenVersion {}

#[derive(Debug, Clone, Eq, PartialEq)]
enum Segment {
    Numeric(u64),
    Qualifier(QualifierKind),
    Text(String),
}

/// Well-known Maven qualifiers with defined ordering.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
enum QualifierKind {
    Alpha,
    Beta,
    Milestone,
    Rc,
    Snapshot,
    Release,
    Sp,
}

impl MavenVersion {
    pub fn parse(version: &str) -> Self {
        Self {
            segments: parse_segments(version),
        }
    }
}

impl Ord for MavenVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let max_len = self.segments.len().max(other.segments.len());
        (0..max_len)
            .map(|i| compare_segments(self.segments.get(i), other.segments.get(i)))
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for MavenVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn compare_segments(a: Option<&Segment>, b: Option<&Segment>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (Some(s), None) => compare_segment_to_empty(s),
        (None, Some(s)) => compare_segment_to_empty(s).reverse(),
        (Some(a), Some(b)) => compare_two_segments(a, b),
    }
}

fn compare_segment_to_empty(seg: &Segment) -> Ordering {
    match seg {
        Segment::Numeric(0) => Ordering::Equal,
        Segment::Numeric(_) => Ordering::Greater,
        Segment::Qualifier(q) => q.cmp(&QualifierKind::Release),
        Segment::Text(_) => Ordering::Less,
    }
}

fn compare_two_segments(a: &Segment, b: &Segment) -> Ordering {
    match (a, b) {
        (Segment::Numeric(a), Segment::Numeric(b)) => a.cmp(b),
        (Segment::Qualifier(a), Segment::Qualifier(b)) => a.cmp(b),
        (Segment::Numeric(_), _) => Ordering::Greater,
        (_, Segment::Numeric(_)) => Ordering::Less,
        (Segment::Text(a), Segment::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
        (Segment::Qualifier(q), Segment::Text(_)) => {
            if *q >= QualifierKind::Release {
                Ordering::Greater
            } else {
                Ordering::Less
            }
        }
        (Segment::Text(_), Segment::Qualifier(q)) => {
            if *q >= QualifierKind::Release {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        }
    }
}

fn parse_segments(version: &str) -> Vec<Segment> {
    version
        .split(['.', '-'])
        .filter(|token| !token.is_empty())
        .map(classify)
        .collect()
}

fn classify(token: &str) -> Segment {
    if let Ok(n) = token.parse::<u64>() {
        return Segment::Numeric(n);
    }
    match token.to_lowercase().as_str() {
        "alpha" | "a" => Segment::Qualifier(QualifierKind::Alpha),
        "beta" | "b" => Segment::Qualifier(QualifierKind::Beta),
        "milestone" | "m" => Segment::Qualifier(QualifierKind::Milestone),
        "rc" | "cr" => Segment::Qualifier(QualifierKind::Rc),
        "snapshot" => Segment::Qualifier(QualifierKind::Snapshot),
        "ga" | "final" | "release" => Segment::Qualifier(QualifierKind::Release),
        "sp" => Segment::Qualifier(QualifierKind::Sp),
        _ => Segment::Text(token.to_string()),
    }
}

/// A Maven version range expression.
///
/// Supports: `[1.0,2.0)`, `[1.0,]`, `(,2.0)`, `[1.5]` (exact).
#[derive(Debug, Clone)]
pub struct VersionRange {
    pub lower: Option<Bound>,
    pub upper: Option<Bound>,
}

#[derive(Debug, Clone)]
pub struct Bound {
    pub version: MavenVersion,
    pub inclusive: bool,
}

impl Bound {
    fn new(version: &str, inclusive: bool) -> Option<Self> {
        let version = version.trim();
        (!version.is_empty()).then(|| Self {
            version: MavenVersion::parse(version),
            inclusive,
        })
    }
}

impl VersionRange {
    /// Parse a Maven version range string.
    ///
    /// Returns `None` for bare versions and unbalanced brackets.
    pub fn parse(spec: &str) -> Option<Self> {
        let s = spec.trim();
        let open_inclusive = match s.chars().next()? {
            '[' => true,
            '(' => false,
            _ => return None,
        };
        let close_inclusive = match s.chars().last()? {
            ']' => true,
            ')' => false,
            _ => return None,
        };
        let inner = &s[1..s.len() - 1];

        match inner.split_once(',') {
            Some((lower, upper)) => Some(VersionRange {
                lower: Bound::new(lower, open_inclusive),
                upper: Bound::new(upper, close_inclusive),
            }),
            // [1.0] means exactly 1.0
            None => {
                let exact = Bound::new(inner, true)?;
                Some(VersionRange {
                    lower: Some(exact.clone()),
                    upper: Some(exact),
                })
            }
        }
    }

    /// Check if a version satisfies this range.
    pub fn contains(&self, version: &MavenVersion) -> bool {
        if let Some(ref lower) = self.lower {
            let cmp = version.cmp(&lower.version);
            if cmp == Ordering::Less || (cmp == Ordering::Equal && !lower.inclusive) {
                return false;
            }
        }
        if let Some(ref upper) = self.upper {
            let cmp = version.cmp(&upper.version);
            if cmp == Ordering::Greater || (cmp == Ordering::Equal && !upper.inclusive) {
                return false;
            }
        }
        true
    }
}
