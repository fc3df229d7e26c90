use thiserror::Error;

use crate::manager::ManagerError;
use crate::upgrade::runner::RunSummary;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Prompt failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Interactive confirmation requires a terminal")]
    NotATty,
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("Failed to list outdated packages: {0}")]
    List(#[source] ManagerError),

    /// The prompt failed part way; `summary` holds what was done before it
    #[error("{source}")]
    Prompt {
        source: PromptError,
        summary: RunSummary,
    },
}
