//! Classification of the most significant field that differs between two versions
//!
//! Pre-release and build are compared as whole literal strings, not by
//! precedence: `1.0.0-rc.1` and `1.0.0-rc.01x` differ as "prerelease" even
//! though nothing about their ordering is consulted here.

use std::fmt;
use std::str::FromStr;

use crate::version::error::ParseError;
use crate::version::semver::{SemanticVersion, parse};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffKind {
    Major,
    Minor,
    Patch,
    Prerelease,
    Build,
    None,
}

impl DiffKind {
    /// Name as printed by the `diff` command; `None` prints as an empty string
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffKind::Major => "major",
            DiffKind::Minor => "minor",
            DiffKind::Patch => "patch",
            DiffKind::Prerelease => "prerelease",
            DiffKind::Build => "build",
            DiffKind::None => "",
        }
    }
}

impl fmt::Display for DiffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffKind::None => f.write_str("none"),
            other => f.write_str(other.as_str()),
        }
    }
}

impl FromStr for DiffKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "major" => Ok(DiffKind::Major),
            "minor" => Ok(DiffKind::Minor),
            "patch" => Ok(DiffKind::Patch),
            "prerel" | "prerelease" => Ok(DiffKind::Prerelease),
            "build" => Ok(DiffKind::Build),
            "none" | "" => Ok(DiffKind::None),
            other => Err(format!("unknown diff kind: {other}")),
        }
    }
}

/// Name the highest-precedence field that differs between `a` and `b`
pub fn classify(a: &SemanticVersion, b: &SemanticVersion) -> DiffKind {
    if a.major() != b.major() {
        DiffKind::Major
    } else if a.minor() != b.minor() {
        DiffKind::Minor
    } else if a.patch() != b.patch() {
        DiffKind::Patch
    } else if a.prerelease_str() != b.prerelease_str() {
        DiffKind::Prerelease
    } else if a.build_str() != b.build_str() {
        DiffKind::Build
    } else {
        DiffKind::None
    }
}

/// Parse both strings and classify their difference
pub fn classify_str(a: &str, b: &str) -> Result<DiffKind, ParseError> {
    Ok(classify(&parse(a)?, &parse(b)?))
}
