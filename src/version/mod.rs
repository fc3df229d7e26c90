//! Semantic version engine
//!
//! Everything the upgrade pipeline knows about versions lives here: parsing
//! against the semver 2.0.0 grammar, precedence ordering, diff classification
//! and bumping.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   semver    │────▶│   compare   │     │    bump     │
//! │  (parse)    │     │ (ordering)  │     │ (new value) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                                       ▲
//!        ├───────────────────────────────────────┘
//!        ▼
//! ┌─────────────┐
//! │    diff     │
//! │ (DiffKind)  │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`semver`]: `SemanticVersion` value type, parser and field access
//! - [`compare`]: Precedence ordering (build metadata ignored)
//! - [`diff`]: Literal field-by-field difference classification
//! - [`bump`]: Major/minor/patch/release/prerelease/build bumps
//! - [`error`]: Error types for parsing and bumping

pub mod bump;
pub mod compare;
pub mod diff;
pub mod error;
pub mod semver;

pub use bump::{BumpKind, bump, bump_str};
pub use compare::{compare, compare_str};
pub use diff::{DiffKind, classify, classify_str};
pub use error::{BumpError, ParseError};
pub use semver::{Identifier, SemanticVersion, VersionField, is_valid, parse};
