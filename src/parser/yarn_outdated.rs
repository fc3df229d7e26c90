//! `yarn outdated` parser
//!
//! Parses the plain-text table printed by yarn v1.
//!
//! Format example:
//! ```text
//! yarn outdated v1.22.19
//! info Color legend :
//!  "<red>"    : Major Update backward-incompatible updates
//! Package    Current Wanted  Latest  Package Type    URL
//! lodash     4.17.15 4.17.21 4.17.21 dependencies    https://lodash.com/
//! jest       28.1.0  28.1.3  29.7.0  devDependencies https://jestjs.io/
//! Done in 0.54s.
//! ```

use regex::Regex;
use tracing::{debug, warn};

use crate::parser::traits::{ListingError, OutdatedEntry, OutdatedParser};

/// Columns in a table row: name, current, wanted, latest, type, url
const ROW_FIELDS: usize = 6;

/// Parser for `yarn outdated` output
pub struct YarnOutdatedParser {
    /// Regex for the table header line
    header_re: Regex,
    /// Regex for ANSI color escapes yarn emits on a terminal
    ansi_re: Regex,
}

impl YarnOutdatedParser {
    pub fn new() -> Self {
        Self {
            header_re: Regex::new(r"^Package\s+Current\s+Wanted\s+Latest\s+Package Type\s+URL\s*$")
                .expect("header regex is valid"),
            ansi_re: Regex::new(r"\x1b\[[0-9;]*m").expect("ansi regex is valid"),
        }
    }
}

impl Default for YarnOutdatedParser {
    fn default() -> Self {
        Self::new()
    }
}

impl OutdatedParser for YarnOutdatedParser {
    fn parse(&self, output: &str) -> Result<Vec<OutdatedEntry>, ListingError> {
        let mut results = Vec::new();
        let mut in_table = false;
        let mut unknown_header = None;

        for line in output.lines() {
            let line = self.ansi_re.replace_all(line, "");
            let trimmed = line.trim();

            if !in_table {
                in_table = self.header_re.is_match(trimmed);
                if !in_table && trimmed.starts_with("Package ") {
                    unknown_header = Some(trimmed.to_string());
                }
                continue;
            }

            if trimmed.is_empty() || trimmed.starts_with("Done in") {
                break;
            }

            let fields: Vec<&str> = trimmed.split_whitespace().collect();
            let [name, current, wanted, latest, group, _url] = fields.as_slice() else {
                debug!(
                    "Skipping yarn outdated row with {} fields (expected {}): {}",
                    fields.len(),
                    ROW_FIELDS,
                    trimmed
                );
                continue;
            };

            results.push(OutdatedEntry {
                name: name.to_string(),
                current: current.to_string(),
                wanted: wanted.to_string(),
                latest: latest.to_string(),
                group: group.to_string(),
            });
        }

        if !in_table {
            if let Some(header) = unknown_header {
                warn!("Unrecognized yarn outdated table header, no packages read: {}", header);
            }
        }

        Ok(results)
    }
}
