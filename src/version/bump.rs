//! Version bumping
//!
//! `prerelease` and `build` take a prototype. A pre-release prototype ending
//! in `.` asks for a numbered pre-release: the trailing digits of the previous
//! pre-release are incremented when the prefix matches, otherwise numbering
//! restarts at 1. The prototype `+.` reuses whatever prefix was there before.

use std::fmt;
use std::str::FromStr;

use crate::version::error::BumpError;
use crate::version::semver::{SemanticVersion, parse};

/// Prototype used when `bump prerelease` is given no explicit prototype
pub const AUTO_PROTOTYPE: &str = "+.";

/// Marker inside a dotted prototype meaning "keep the previous prefix"
const KEEP_PREFIX: &str = "+";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
    /// Strip pre-release and build without incrementing
    Release,
    Prerelease,
    Build,
}

impl BumpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
            BumpKind::Release => "release",
            BumpKind::Prerelease => "prerel",
            BumpKind::Build => "build",
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BumpKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "major" => Ok(BumpKind::Major),
            "minor" => Ok(BumpKind::Minor),
            "patch" => Ok(BumpKind::Patch),
            "release" => Ok(BumpKind::Release),
            "prerel" | "prerelease" => Ok(BumpKind::Prerelease),
            "build" => Ok(BumpKind::Build),
            other => Err(format!("unknown bump kind: {other}")),
        }
    }
}

/// Produce the bumped version.
///
/// The result is re-parsed, so a prototype that yields an invalid version is
/// reported as [`BumpError::InvalidResult`] instead of producing bad output.
pub fn bump(
    kind: BumpKind,
    version: &SemanticVersion,
    prototype: Option<&str>,
) -> Result<SemanticVersion, BumpError> {
    let (major, minor, patch) = (version.major(), version.minor(), version.patch());

    let text = match kind {
        BumpKind::Major => format!("{}.0.0", increment(major)?),
        BumpKind::Minor => format!("{major}.{}.0", increment(minor)?),
        BumpKind::Patch => format!("{major}.{minor}.{}", increment(patch)?),
        BumpKind::Release => version.release(),
        BumpKind::Prerelease => {
            let prototype = prototype.unwrap_or(AUTO_PROTOTYPE);
            let prerelease = next_prerelease(prototype, &version.prerelease_str())?;
            format!("{}-{prerelease}", version.release())
        }
        BumpKind::Build => {
            let prototype = prototype.ok_or(BumpError::MissingPrototype {
                kind: BumpKind::Build.as_str(),
            })?;
            let mut text = version.release();
            if version.is_prerelease() {
                text.push('-');
                text.push_str(&version.prerelease_str());
            }
            format!("{text}+{prototype}")
        }
    };

    parse(&text).map_err(|_| BumpError::InvalidResult {
        version: version.to_string(),
        prototype: prototype.unwrap_or_default().to_string(),
        result: text,
    })
}

/// Parse `version`, bump it and format the result
pub fn bump_str(
    kind: BumpKind,
    version: &str,
    prototype: Option<&str>,
) -> Result<String, BumpError> {
    let version = parse(version)?;
    bump(kind, &version, prototype).map(|v| v.to_string())
}

fn increment(n: u64) -> Result<u64, BumpError> {
    n.checked_add(1).ok_or_else(|| BumpError::CounterOverflow {
        value: n.to_string(),
    })
}

fn next_prerelease(prototype: &str, previous: &str) -> Result<String, BumpError> {
    let Some(prefix) = prototype.strip_suffix('.') else {
        return Ok(prototype.to_string());
    };

    let (prev_prefix, prev_numeric) = split_trailing_digits(previous);

    if prefix != KEEP_PREFIX && prefix != prev_prefix {
        return Ok(format!("{prefix}1"));
    }

    match prev_numeric {
        Some(digits) => Ok(format!("{prev_prefix}{}", increment_digits(digits))),
        None => Ok(format!("{prev_prefix}1")),
    }
}

/// Add one to a run of ASCII digits without a width limit.
/// Leading zeros are dropped from the result: "009" -> "10".
fn increment_digits(digits: &str) -> String {
    let mut bytes = digits.trim_start_matches('0').as_bytes().to_vec();
    let mut carry = true;
    for b in bytes.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            carry = false;
            break;
        }
    }
    if carry {
        bytes.insert(0, b'1');
    }
    bytes.into_iter().map(char::from).collect()
}

/// Split "rc.12" into ("rc.", Some("12")) and "beta" into ("beta", None)
fn split_trailing_digits(text: &str) -> (&str, Option<&str>) {
    let prefix = text.trim_end_matches(|c: char| c.is_ascii_digit());
    let digits = &text[prefix.len()..];
    if digits.is_empty() {
        (prefix, None)
    } else {
        (prefix, Some(digits))
    }
}
