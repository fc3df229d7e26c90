//! Per-record upgrade decision
//!
//! Checks run in a fixed order and stop at the first failure:
//! group → exclude → include → (target override) → version validity →
//! diff type → no-op. The order decides which skip reason is reported.

use std::convert::Infallible;

use tracing::debug;

use crate::config::FilterConfig;
use crate::upgrade::types::{PackageRecord, SkipReason, Verdict, VersionRole};
use crate::version::{classify, parse};

/// Decide a record using its own target version
pub fn decide(record: &PackageRecord, config: &FilterConfig) -> Verdict {
    decide_with(record, config, |_| None)
}

/// Decide a record, letting `target_override` replace the target version.
///
/// The override is only consulted for records that pass the group and name
/// filters; returning `None` keeps the listed target.
pub fn decide_with<F>(record: &PackageRecord, config: &FilterConfig, target_override: F) -> Verdict
where
    F: FnOnce(&PackageRecord) -> Option<String>,
{
    match try_decide_with(record, config, |record| {
        Ok::<_, Infallible>(target_override(record))
    }) {
        Ok(verdict) => verdict,
        Err(never) => match never {},
    }
}

/// Like [`decide_with`], but the override may stop the decision with an
/// error, which is returned unchanged.
pub fn try_decide_with<F, E>(
    record: &PackageRecord,
    config: &FilterConfig,
    target_override: F,
) -> Result<Verdict, E>
where
    F: FnOnce(&PackageRecord) -> Result<Option<String>, E>,
{
    if let Some(reason) = filter_names(record, config) {
        return Ok(skip(record, reason));
    }

    let target = target_override(record)?.unwrap_or_else(|| record.target_version.clone());
    Ok(evaluate_versions(record, &target, config))
}

/// Group, exclude and include checks
pub fn filter_names(record: &PackageRecord, config: &FilterConfig) -> Option<SkipReason> {
    if !config.package_group.matches(&record.group) {
        return Some(SkipReason::GroupMismatch {
            group: record.group.clone(),
        });
    }

    if let Some(pattern) = config.exclude.find_match(&record.name) {
        return Some(SkipReason::Excluded {
            pattern: pattern.clone(),
        });
    }

    if !config.include.is_empty() && !config.include.matches(&record.name) {
        return Some(SkipReason::NotIncluded {
            include: config.include.clone(),
        });
    }

    None
}

/// Validity, diff type and no-op checks against `target`
pub fn evaluate_versions(record: &PackageRecord, target: &str, config: &FilterConfig) -> Verdict {
    let Ok(current) = parse(&record.current_version) else {
        return skip(
            record,
            SkipReason::InvalidVersion {
                role: VersionRole::Current,
                version: record.current_version.clone(),
            },
        );
    };

    let Ok(proposed) = parse(target) else {
        return skip(
            record,
            SkipReason::InvalidVersion {
                role: VersionRole::Target,
                version: target.to_string(),
            },
        );
    };

    let kind = classify(&current, &proposed);
    if !config.upgrade_type.accepts(kind) {
        return skip(record, SkipReason::TypeMismatch { kind });
    }

    if target == record.current_version {
        return skip(
            record,
            SkipReason::NoOp {
                version: target.to_string(),
            },
        );
    }

    debug!(
        "{}: upgrade {} -> {} ({})",
        record.name, record.current_version, target, kind
    );
    Verdict::Upgrade {
        target_version: target.to_string(),
    }
}

fn skip(record: &PackageRecord, reason: SkipReason) -> Verdict {
    debug!("{}: skip ({}) {}", record.name, reason.tag(), reason);
    Verdict::Skip(reason)
}
