//! Package manager test utilities

use std::cell::RefCell;
use std::collections::VecDeque;

use semver_upgrade::manager::{CommandOutput, CommandRunner, ManagerError};
use semver_upgrade::upgrade::{PromptError, PromptResponse, Prompter};
use semver_upgrade::upgrade::types::PackageRecord;

/// Command runner that answers the outdated listing with canned output and
/// records every other invocation
pub struct FakeRunner {
    listing: CommandOutput,
    failing_package: Option<String>,
    calls: RefCell<Vec<String>>,
}

impl FakeRunner {
    pub fn new(listing_stdout: &str) -> Self {
        Self {
            listing: CommandOutput {
                status: 1,
                stdout: listing_stdout.to_string(),
                stderr: String::new(),
            },
            failing_package: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Make upgrades whose spec starts with `name@` exit with status 1
    pub fn failing_on(mut self, name: &str) -> Self {
        self.failing_package = Some(format!("{name}@"));
        self
    }

    /// Every non-listing command, as "program arg1 arg2"
    pub fn upgrade_calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, ManagerError> {
        if args.first().map(String::as_str) == Some("outdated") {
            return Ok(self.listing.clone());
        }

        self.calls
            .borrow_mut()
            .push(format!("{} {}", program, args.join(" ")));

        let fails = self
            .failing_package
            .as_ref()
            .is_some_and(|prefix| args.iter().any(|a| a.starts_with(prefix.as_str())));

        Ok(CommandOutput {
            status: if fails { 1 } else { 0 },
            stdout: String::new(),
            stderr: if fails { "error".to_string() } else { String::new() },
        })
    }
}

/// Prompter that replays a fixed list of answers
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<PromptResponse>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<PromptResponse>) -> Self {
        Self {
            answers: RefCell::new(answers.into()),
            asked: RefCell::new(Vec::new()),
        }
    }

    /// Names of the packages the operator was asked about
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, record: &PackageRecord) -> Result<PromptResponse, PromptError> {
        self.asked.borrow_mut().push(record.name.clone());
        Ok(self
            .answers
            .borrow_mut()
            .pop_front()
            .unwrap_or(PromptResponse::Accept))
    }
}

/// Build `yarn outdated` output from (name, current, wanted, latest, group) rows
pub fn yarn_listing(rows: &[(&str, &str, &str, &str, &str)]) -> String {
    let mut output = String::from(
        "yarn outdated v1.22.19\nPackage Current Wanted Latest Package Type URL\n",
    );
    for (name, current, wanted, latest, group) in rows {
        output.push_str(&format!(
            "{name} {current} {wanted} {latest} {group} https://example.com/{name}\n"
        ));
    }
    output.push_str("Done in 0.42s.\n");
    output
}
