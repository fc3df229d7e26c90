//! Collaborator traits for the upgrade run
//!
//! The decision pipeline is pure; these traits are the seams to the package
//! manager and the terminal, so runs can be tested without either.

#[cfg(test)]
use mockall::automock;

use crate::manager::ManagerError;
use crate::upgrade::error::PromptError;
use crate::upgrade::types::PackageRecord;

/// Source of outdated package records
#[cfg_attr(test, automock)]
pub trait OutdatedLister {
    /// List outdated packages in the order the package manager reports them
    fn list(&self) -> Result<Vec<PackageRecord>, ManagerError>;
}

/// Applies a single upgrade
#[cfg_attr(test, automock)]
pub trait Upgrader {
    fn upgrade(&self, record: &PackageRecord, target_version: &str) -> Result<(), ManagerError>;
}

/// Operator answer to a proposed upgrade
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResponse {
    /// Keep the proposed target
    Accept,
    /// Use this target instead
    Replace(String),
    /// Stop the whole run
    Abort,
}

/// Asks the operator about each upgrade candidate
#[cfg_attr(test, automock)]
pub trait Prompter {
    fn confirm(&self, record: &PackageRecord) -> Result<PromptResponse, PromptError>;
}
