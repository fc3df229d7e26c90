//! Selective dependency upgrades driven by semantic version differences.
//!
//! The [`version`] engine parses, orders, classifies and bumps semver
//! strings; [`filter`] matches package names; [`upgrade`] combines both into
//! a per-package upgrade/skip decision and runs it over a package manager's
//! outdated listing ([`manager`], [`parser`]).

pub mod commands;
pub mod config;
pub mod filter;
pub mod interaction;
pub mod logging;
pub mod manager;
pub mod parser;
pub mod upgrade;
pub mod version;
