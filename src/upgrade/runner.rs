//! Drives the decision pipeline over every outdated package

use std::fmt;

use tracing::{info, warn};

use crate::config::FilterConfig;
use crate::upgrade::decision::try_decide_with;
use crate::upgrade::error::{PromptError, RunError};
use crate::upgrade::traits::{OutdatedLister, PromptResponse, Prompter, Upgrader};
use crate::upgrade::types::{PackageRecord, SkipReason, Verdict};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Decide but never invoke the upgrader
    pub dry_run: bool,
    /// Ask the operator before evaluating each candidate
    pub confirm_each: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Upgraded { target_version: String },
    /// Dry run: would have been upgraded
    Planned { target_version: String },
    Failed { target_version: String, error: String },
    Skipped(SkipReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageOutcome {
    pub name: String,
    pub current_version: String,
    pub outcome: Outcome,
}

impl fmt::Display for PackageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, current) = (&self.name, &self.current_version);
        match &self.outcome {
            Outcome::Upgraded { target_version } => {
                write!(f, "upgraded {name} {current} -> {target_version}")
            }
            Outcome::Planned { target_version } => {
                write!(f, "would upgrade {name} {current} -> {target_version}")
            }
            Outcome::Failed {
                target_version,
                error,
            } => write!(f, "failed {name} {current} -> {target_version}: {error}"),
            Outcome::Skipped(reason) => write!(f, "skipped {name}: {reason}"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub outcomes: Vec<PackageOutcome>,
    /// The operator stopped the run before every record was seen
    pub aborted: bool,
}

impl RunSummary {
    fn push(&mut self, record: &PackageRecord, outcome: Outcome) {
        self.outcomes.push(PackageOutcome {
            name: record.name.clone(),
            current_version: record.current_version.clone(),
            outcome,
        });
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.outcome)).count()
    }

    pub fn upgraded(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Upgraded { .. } | Outcome::Planned { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed { .. }))
    }
}

/// Why the prompt stopped a run
enum Interrupt {
    Abort,
    Failed(PromptError),
}

/// Evaluate every outdated record in listing order and apply the upgrades.
///
/// A failed upgrade is recorded and the run continues; only a listing or
/// prompt failure ends the run with an error. A prompt failure carries the
/// outcomes recorded before it.
pub fn run<L, U, P>(
    lister: &L,
    upgrader: &U,
    prompter: &P,
    filter: &FilterConfig,
    options: RunOptions,
) -> Result<RunSummary, RunError>
where
    L: OutdatedLister + ?Sized,
    U: Upgrader + ?Sized,
    P: Prompter + ?Sized,
{
    let records = lister.list().map_err(RunError::List)?;
    info!("Found {} outdated packages", records.len());

    let mut summary = RunSummary::default();

    for record in &records {
        let decision = try_decide_with(record, filter, |record| {
            if !options.confirm_each {
                return Ok(None);
            }
            match prompter.confirm(record) {
                Ok(PromptResponse::Accept) => Ok(None),
                Ok(PromptResponse::Replace(version)) => Ok(Some(version)),
                Ok(PromptResponse::Abort) => Err(Interrupt::Abort),
                Err(e) => Err(Interrupt::Failed(e)),
            }
        });

        let verdict = match decision {
            Ok(verdict) => verdict,
            Err(Interrupt::Abort) => {
                info!("Run aborted by operator at {}", record.name);
                summary.aborted = true;
                break;
            }
            Err(Interrupt::Failed(source)) => {
                summary.aborted = true;
                return Err(RunError::Prompt { source, summary });
            }
        };

        match verdict {
            Verdict::Skip(reason) => {
                if let SkipReason::InvalidVersion { .. } = reason {
                    warn!("{}: {}", record.name, reason);
                }
                summary.push(record, Outcome::Skipped(reason));
            }
            Verdict::Upgrade { target_version } if options.dry_run => {
                summary.push(record, Outcome::Planned { target_version });
            }
            Verdict::Upgrade { target_version } => {
                match upgrader.upgrade(record, &target_version) {
                    Ok(()) => {
                        info!(
                            "Upgraded {} {} -> {}",
                            record.name, record.current_version, target_version
                        );
                        summary.push(record, Outcome::Upgraded { target_version });
                    }
                    Err(e) => {
                        warn!("Failed to upgrade {} to {}: {}", record.name, target_version, e);
                        summary.push(
                            record,
                            Outcome::Failed {
                                target_version,
                                error: e.to_string(),
                            },
                        );
                    }
                }
            }
        }
    }

    Ok(summary)
}
