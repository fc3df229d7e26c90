use thiserror::Error;

use crate::parser::ListingError;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("Failed to run {command}: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("{command} exited with status {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: i32,
        stderr: String,
    },

    #[error("{command} exited with status {status} and no output: {stderr}")]
    NoOutput {
        command: String,
        status: i32,
        stderr: String,
    },

    #[error(transparent)]
    Listing(#[from] ListingError),
}
