//! Semantic version value type and parser
//!
//! Accepts the semver 2.0.0 grammar with an optional leading `v` or `V`:
//! `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::version::error::ParseError;

// `\d` is Unicode-aware in the regex crate, so digits are spelled out as [0-9].
static SEMVER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[vV]?(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)",
        r"(?:-((?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)",
        r"(?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*))?",
        r"(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
    ))
    .expect("semver grammar regex is valid")
});

/// One dot-separated component of a pre-release
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// Digits only, no leading zero unless exactly "0". Kept as text so that
    /// arbitrarily long numbers still compare correctly.
    Numeric(String),
    /// Contains at least one letter or hyphen
    AlphaNumeric(String),
}

impl Identifier {
    fn from_part(part: &str) -> Self {
        if part.bytes().all(|b| b.is_ascii_digit()) {
            Identifier::Numeric(part.to_string())
        } else {
            Identifier::AlphaNumeric(part.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Identifier::Numeric(s) | Identifier::AlphaNumeric(s) => s,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed semantic version.
///
/// Only constructed through [`parse`], so every value satisfies the grammar.
/// `PartialEq` is structural (build metadata included); precedence ordering
/// lives in [`crate::version::compare`] and ignores build metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SemanticVersion {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: Vec<Identifier>,
    build: Vec<String>,
}

impl SemanticVersion {
    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn prerelease(&self) -> &[Identifier] {
        &self.prerelease
    }

    pub fn build(&self) -> &[String] {
        &self.build
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// `MAJOR.MINOR.PATCH` without pre-release or build
    pub fn release(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }

    /// Pre-release text without the leading `-`, empty when absent
    pub fn prerelease_str(&self) -> String {
        join_parts(self.prerelease.iter().map(Identifier::as_str))
    }

    /// Build metadata text without the leading `+`, empty when absent
    pub fn build_str(&self) -> String {
        join_parts(self.build.iter().map(String::as_str))
    }

    /// Extract a single field as text
    pub fn get(&self, field: VersionField) -> String {
        match field {
            VersionField::Major => self.major.to_string(),
            VersionField::Minor => self.minor.to_string(),
            VersionField::Patch => self.patch.to_string(),
            VersionField::Release => self.release(),
            VersionField::Prerelease => self.prerelease_str(),
            VersionField::Build => self.build_str(),
        }
    }
}

fn join_parts<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts.collect::<Vec<_>>().join(".")
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease_str())?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build_str())?;
        }
        Ok(())
    }
}

impl FromStr for SemanticVersion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parse a version string.
///
/// Examples:
/// - "1.2.3" -> 1.2.3
/// - "v1.0.0-rc.1+build.5" -> 1.0.0-rc.1+build.5
/// - "1.2" -> error
pub fn parse(text: &str) -> Result<SemanticVersion, ParseError> {
    let caps = SEMVER_RE
        .captures(text)
        .ok_or_else(|| ParseError::new(text))?;

    let number = |idx: usize| -> Result<u64, ParseError> {
        caps.get(idx)
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .ok_or_else(|| ParseError::new(text))
    };

    let prerelease = caps
        .get(4)
        .map(|m| m.as_str().split('.').map(Identifier::from_part).collect())
        .unwrap_or_default();

    let build = caps
        .get(5)
        .map(|m| m.as_str().split('.').map(str::to_string).collect())
        .unwrap_or_default();

    Ok(SemanticVersion {
        major: number(1)?,
        minor: number(2)?,
        patch: number(3)?,
        prerelease,
        build,
    })
}

/// Check a version string against the grammar
pub fn is_valid(text: &str) -> bool {
    parse(text).is_ok()
}

/// Field selector for [`SemanticVersion::get`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionField {
    Major,
    Minor,
    Patch,
    Release,
    Prerelease,
    Build,
}

impl VersionField {
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionField::Major => "major",
            VersionField::Minor => "minor",
            VersionField::Patch => "patch",
            VersionField::Release => "release",
            VersionField::Prerelease => "prerel",
            VersionField::Build => "build",
        }
    }
}

impl FromStr for VersionField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "major" => Ok(VersionField::Major),
            "minor" => Ok(VersionField::Minor),
            "patch" => Ok(VersionField::Patch),
            "release" => Ok(VersionField::Release),
            "prerel" | "prerelease" => Ok(VersionField::Prerelease),
            "build" => Ok(VersionField::Build),
            other => Err(format!("unknown version field: {other}")),
        }
    }
}
