use thiserror::Error;

/// A version string that does not match `X.Y.Z(-PRERELEASE)(+BUILD)`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("version {input} does not match the semver scheme 'X.Y.Z(-PRERELEASE)(+BUILD)'")]
pub struct ParseError {
    pub input: String,
}

impl ParseError {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BumpError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("bump {kind} requires a prototype argument")]
    MissingPrototype { kind: &'static str },

    #[error("bumping {version} with prototype '{prototype}' produced invalid version {result}")]
    InvalidResult {
        version: String,
        prototype: String,
        result: String,
    },

    #[error("counter {value} cannot be incremented")]
    CounterOverflow { value: String },
}
