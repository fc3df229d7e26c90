//! Standalone version utilities
//!
//! These expose the version engine on its own, for scripts and for checking
//! behavior without a package manager. Each returns the text to print.

use thiserror::Error;

use crate::version::{
    BumpError, BumpKind, ParseError, VersionField, bump_str, classify_str, compare_str, is_valid,
    parse,
};

/// Invalid invocation of a utility command
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Bump(#[from] BumpError),

    #[error("bump {kind} does not take a prototype argument")]
    UnexpectedPrototype { kind: BumpKind },
}

/// "valid" or "invalid"
pub fn validate(version: &str) -> &'static str {
    if is_valid(version) { "valid" } else { "invalid" }
}

/// -1, 0 or 1 by precedence
pub fn compare(v1: &str, v2: &str) -> Result<i8, UsageError> {
    Ok(compare_str(v1, v2)?)
}

/// Most significant differing field, empty when the versions are identical
pub fn diff(v1: &str, v2: &str) -> Result<&'static str, UsageError> {
    Ok(classify_str(v1, v2)?.as_str())
}

pub fn bump(kind: BumpKind, version: &str, prototype: Option<&str>) -> Result<String, UsageError> {
    let takes_prototype = matches!(kind, BumpKind::Prerelease | BumpKind::Build);
    if prototype.is_some() && !takes_prototype {
        return Err(UsageError::UnexpectedPrototype { kind });
    }
    Ok(bump_str(kind, version, prototype)?)
}

pub fn get(field: VersionField, version: &str) -> Result<String, UsageError> {
    Ok(parse(version)?.get(field))
}
