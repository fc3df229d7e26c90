//! Name filters applied before any version is looked at

pub mod pattern;

pub use pattern::{Pattern, PatternList, matches};
