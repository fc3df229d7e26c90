//! Package name patterns
//!
//! A pattern list is comma-separated. Each entry is one of:
//! - `react` - exact name
//! - `@babel/*` - prefix
//! - `*-es` - suffix
//! - `*lodash*` - substring
//!
//! A name matches the list when it matches any entry. Matching is
//! case-sensitive; a `*` anywhere but the ends is taken literally.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    Exact(String),
    Prefix(String),
    Suffix(String),
    Contains(String),
}

impl Pattern {
    pub fn parse(entry: &str) -> Self {
        if entry.len() >= 2 && entry.starts_with('*') && entry.ends_with('*') {
            Pattern::Contains(entry[1..entry.len() - 1].to_string())
        } else if let Some(suffix) = entry.strip_prefix('*') {
            Pattern::Suffix(suffix.to_string())
        } else if let Some(prefix) = entry.strip_suffix('*') {
            Pattern::Prefix(prefix.to_string())
        } else {
            Pattern::Exact(entry.to_string())
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            Pattern::Exact(exact) => name == exact,
            Pattern::Prefix(prefix) => name.starts_with(prefix.as_str()),
            Pattern::Suffix(suffix) => name.ends_with(suffix.as_str()),
            Pattern::Contains(inner) => name.contains(inner.as_str()),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Exact(s) => write!(f, "{s}"),
            Pattern::Prefix(s) => write!(f, "{s}*"),
            Pattern::Suffix(s) => write!(f, "*{s}"),
            Pattern::Contains(s) => write!(f, "*{s}*"),
        }
    }
}

/// A parsed, comma-separated list of name patterns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternList {
    patterns: Vec<Pattern>,
}

impl PatternList {
    /// Split on commas, trimming whitespace and dropping empty entries
    pub fn parse(list: &str) -> Self {
        let patterns = list
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(Pattern::parse)
            .collect();
        Self { patterns }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// First pattern that matches `name`, if any
    pub fn find_match(&self, name: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.matches(name))
    }

    pub fn matches(&self, name: &str) -> bool {
        self.find_match(name).is_some()
    }
}

impl fmt::Display for PatternList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self.patterns.iter().map(Pattern::to_string).collect();
        f.write_str(&entries.join(","))
    }
}

impl FromStr for PatternList {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Accepts either `"a,b*"` or `["a", "b*"]` in configuration files
impl<'de> Deserialize<'de> for PatternList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            List(String),
            Entries(Vec<String>),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::List(list) => PatternList::parse(&list),
            Raw::Entries(entries) => PatternList::parse(&entries.join(",")),
        })
    }
}

/// Match `name` against a comma-separated pattern list
pub fn matches(name: &str, pattern_list: &str) -> bool {
    PatternList::parse(pattern_list).matches(name)
}
