//! Package manager integration
//!
//! # Modules
//!
//! - [`command`]: Process execution behind the `CommandRunner` trait
//! - [`client`]: `OutdatedLister`/`Upgrader` implementation for yarn and npm
//! - [`error`]: Error types for package manager invocations

pub mod client;
pub mod command;
pub mod error;

use clap::ValueEnum;
use serde::Deserialize;

pub use client::PackageManagerClient;
pub use command::{CommandOutput, CommandRunner, SystemCommandRunner};
pub use error::ManagerError;

use crate::parser::{NpmOutdatedParser, OutdatedParser, YarnOutdatedParser};
use crate::upgrade::types::PackageRecord;

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Yarn,
    Npm,
}

impl PackageManager {
    /// Executable name
    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Yarn => "yarn",
            PackageManager::Npm => "npm",
        }
    }

    /// Arguments that list outdated packages
    pub fn outdated_args(&self) -> Vec<String> {
        match self {
            PackageManager::Yarn => vec!["outdated".to_string()],
            PackageManager::Npm => vec![
                "outdated".to_string(),
                "--json".to_string(),
                "--long".to_string(),
            ],
        }
    }

    /// Arguments that upgrade one package to an exact version
    pub fn upgrade_args(&self, record: &PackageRecord, target_version: &str) -> Vec<String> {
        let spec = format!("{}@{}", record.name, target_version);
        match self {
            PackageManager::Yarn => vec!["upgrade".to_string(), spec],
            PackageManager::Npm => {
                let mut args = vec!["install".to_string(), spec];
                if record.group == "devDependencies" {
                    args.push("--save-dev".to_string());
                }
                args
            }
        }
    }

    /// Parser for this manager's outdated listing
    pub fn parser(&self) -> Box<dyn OutdatedParser> {
        match self {
            PackageManager::Yarn => Box::new(YarnOutdatedParser::new()),
            PackageManager::Npm => Box::new(NpmOutdatedParser::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PackageManager::Yarn, "dependencies", &["upgrade", "react@18.2.0"])]
    #[case(PackageManager::Yarn, "devDependencies", &["upgrade", "react@18.2.0"])]
    #[case(PackageManager::Npm, "dependencies", &["install", "react@18.2.0"])]
    #[case(
        PackageManager::Npm,
        "devDependencies",
        &["install", "react@18.2.0", "--save-dev"]
    )]
    fn upgrade_args_returns_expected(
        #[case] manager: PackageManager,
        #[case] group: &str,
        #[case] expected: &[&str],
    ) {
        let record = PackageRecord::new("react", "17.0.2", "18.2.0", group);
        assert_eq!(manager.upgrade_args(&record, "18.2.0"), expected);
    }

    #[test]
    fn outdated_args_request_json_from_npm() {
        assert_eq!(PackageManager::Yarn.outdated_args(), ["outdated"]);
        assert_eq!(
            PackageManager::Npm.outdated_args(),
            ["outdated", "--json", "--long"]
        );
    }
}
