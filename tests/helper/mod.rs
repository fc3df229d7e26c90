//! Shared test utilities

mod manager;

pub use manager::{FakeRunner, ScriptedPrompter, yarn_listing};
