//! Upgrade decision layer
//!
//! # Modules
//!
//! - [`types`]: `PackageRecord`, `Verdict` and `SkipReason`
//! - [`decision`]: The per-record filter chain
//! - [`traits`]: Lister, upgrader and prompter seams
//! - [`runner`]: Runs the chain over a listing and applies upgrades
//! - [`error`]: Error types for a run

pub mod decision;
pub mod error;
pub mod runner;
pub mod traits;
pub mod types;

pub use decision::{decide, decide_with, try_decide_with};
pub use error::{PromptError, RunError};
pub use runner::{Outcome, PackageOutcome, RunOptions, RunSummary, run};
pub use traits::{OutdatedLister, PromptResponse, Prompter, Upgrader};
pub use types::{PackageRecord, SkipReason, Verdict, VersionRole};
