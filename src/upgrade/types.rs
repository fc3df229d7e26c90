//! Common types for the upgrade pipeline

use std::fmt;

use crate::filter::{Pattern, PatternList};
use crate::version::DiffKind;

/// One outdated dependency as reported by the package manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    /// Package name (e.g., "react", "@babel/core")
    pub name: String,
    /// Installed version
    pub current_version: String,
    /// Proposed version
    pub target_version: String,
    /// Dependency group (e.g., "dependencies", "devDependencies")
    pub group: String,
}

impl PackageRecord {
    pub fn new(
        name: impl Into<String>,
        current_version: impl Into<String>,
        target_version: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            current_version: current_version.into(),
            target_version: target_version.into(),
            group: group.into(),
        }
    }
}

/// Which of the two versions of a record failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionRole {
    Current,
    Target,
}

impl fmt::Display for VersionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionRole::Current => f.write_str("current"),
            VersionRole::Target => f.write_str("target"),
        }
    }
}

/// Why a record was not upgraded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    GroupMismatch { group: String },
    Excluded { pattern: Pattern },
    NotIncluded { include: PatternList },
    InvalidVersion { role: VersionRole, version: String },
    TypeMismatch { kind: DiffKind },
    NoOp { version: String },
}

impl SkipReason {
    /// Short stable tag, used in logs
    pub fn tag(&self) -> &'static str {
        match self {
            SkipReason::GroupMismatch { .. } => "group-mismatch",
            SkipReason::Excluded { .. } => "excluded",
            SkipReason::NotIncluded { .. } => "not-included",
            SkipReason::InvalidVersion { .. } => "invalid-version",
            SkipReason::TypeMismatch { .. } => "type-mismatch",
            SkipReason::NoOp { .. } => "no-op",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::GroupMismatch { group } => write!(f, "package group is {group}"),
            SkipReason::Excluded { pattern } => write!(f, "excluded by pattern {pattern}"),
            SkipReason::NotIncluded { include } => {
                write!(f, "not matched by include patterns {include}")
            }
            SkipReason::InvalidVersion { role, version } => {
                write!(f, "{role} version {version} is not a valid semver")
            }
            SkipReason::TypeMismatch { kind } => write!(f, "upgrade type is {kind}"),
            SkipReason::NoOp { version } => write!(f, "already at {version}"),
        }
    }
}

/// Outcome of the pipeline for one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Upgrade { target_version: String },
    Skip(SkipReason),
}

impl Verdict {
    pub fn is_upgrade(&self) -> bool {
        matches!(self, Verdict::Upgrade { .. })
    }
}
