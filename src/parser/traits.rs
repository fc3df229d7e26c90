//! Parser trait definition

use crate::config::TargetColumn;
use crate::upgrade::types::PackageRecord;

/// Trait for parsing the output of a package manager's outdated listing
pub trait OutdatedParser: Send + Sync {
    /// Parse the listing into entries, in the order they were reported.
    /// Rows that do not have the expected shape are skipped, not reported.
    fn parse(&self, output: &str) -> Result<Vec<OutdatedEntry>, ListingError>;
}

/// One row of an outdated listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutdatedEntry {
    pub name: String,
    /// Installed version
    pub current: String,
    /// Highest version satisfying the declared range
    pub wanted: String,
    /// Latest published version
    pub latest: String,
    /// Dependency group (e.g., "dependencies", "devDependencies")
    pub group: String,
}

impl OutdatedEntry {
    /// Convert into a pipeline record, choosing the target column
    pub fn into_record(self, target: TargetColumn) -> PackageRecord {
        let target_version = match target {
            TargetColumn::Latest => self.latest,
            TargetColumn::Wanted => self.wanted,
        };
        PackageRecord {
            name: self.name,
            current_version: self.current,
            target_version,
            group: self.group,
        }
    }
}

/// Error type for listing parsers
#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    /// The listing is not valid JSON
    #[error("Invalid JSON listing: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
