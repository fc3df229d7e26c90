//! `npm outdated --json --long` parser

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::parser::traits::{ListingError, OutdatedEntry, OutdatedParser};

/// One package entry of the npm listing
#[derive(Debug, Deserialize)]
struct NpmOutdatedEntry {
    current: Option<String>,
    wanted: Option<String>,
    latest: Option<String>,
    #[serde(rename = "type")]
    group: Option<String>,
}

/// Parser for `npm outdated --json --long` output
pub struct NpmOutdatedParser;

impl NpmOutdatedParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NpmOutdatedParser {
    fn default() -> Self {
        Self::new()
    }
}

impl OutdatedParser for NpmOutdatedParser {
    fn parse(&self, output: &str) -> Result<Vec<OutdatedEntry>, ListingError> {
        if output.trim().is_empty() {
            return Ok(Vec::new());
        }

        let listing: IndexMap<String, serde_json::Value> = serde_json::from_str(output)?;

        let results = listing
            .into_iter()
            .filter_map(|(name, value)| {
                // Workspaces report an array per package; those and entries
                // for uninstalled packages carry no usable current version.
                let entry = serde_json::from_value::<NpmOutdatedEntry>(value).ok();
                let Some(NpmOutdatedEntry {
                    current: Some(current),
                    wanted: Some(wanted),
                    latest: Some(latest),
                    group: Some(group),
                }) = entry
                else {
                    debug!("Skipping incomplete npm outdated entry: {}", name);
                    return None;
                };

                Some(OutdatedEntry {
                    name,
                    current,
                    wanted,
                    latest,
                    group,
                })
            })
            .collect();

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_extracts_entries_in_listing_order() {
        let output = r#"{
  "typescript": {
    "current": "5.1.6",
    "wanted": "5.1.6",
    "latest": "5.4.5",
    "dependent": "app",
    "location": "node_modules/typescript",
    "type": "devDependencies",
    "homepage": "https://www.typescriptlang.org/"
  },
  "axios": {
    "current": "1.4.0",
    "wanted": "1.6.8",
    "latest": "1.6.8",
    "dependent": "app",
    "location": "node_modules/axios",
    "type": "dependencies"
  }
}"#;

        let result = NpmOutdatedParser::new().parse(output).unwrap();

        assert_eq!(
            result,
            vec![
                OutdatedEntry {
                    name: "typescript".to_string(),
                    current: "5.1.6".to_string(),
                    wanted: "5.1.6".to_string(),
                    latest: "5.4.5".to_string(),
                    group: "devDependencies".to_string(),
                },
                OutdatedEntry {
                    name: "axios".to_string(),
                    current: "1.4.0".to_string(),
                    wanted: "1.6.8".to_string(),
                    latest: "1.6.8".to_string(),
                    group: "dependencies".to_string(),
                },
            ]
        );
    }

    #[test]
    fn parse_skips_incomplete_entries() {
        let output = r#"{
  "not-installed": { "wanted": "1.0.0", "latest": "1.0.0", "type": "dependencies" },
  "no-type": { "current": "1.0.0", "wanted": "1.0.0", "latest": "2.0.0" },
  "workspace-dup": [{ "current": "1.0.0" }],
  "ok": { "current": "1.0.0", "wanted": "1.0.0", "latest": "2.0.0", "type": "dependencies" }
}"#;

        let result = NpmOutdatedParser::new().parse(output).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "ok");
    }

    #[test]
    fn parse_returns_empty_for_empty_output() {
        assert!(NpmOutdatedParser::new().parse("").unwrap().is_empty());
        assert!(NpmOutdatedParser::new().parse("{}").unwrap().is_empty());
    }

    #[test]
    fn parse_rejects_invalid_json() {
        let result = NpmOutdatedParser::new().parse("npm ERR! something");
        assert!(matches!(result, Err(ListingError::InvalidJson(_))));
    }
}
