//! Terminal prompts

use std::io::{ErrorKind, IsTerminal};

use dialoguer::Input;

use crate::upgrade::error::PromptError;
use crate::upgrade::traits::{PromptResponse, Prompter};
use crate::upgrade::types::PackageRecord;

/// Asks for each candidate's target version on the terminal.
///
/// Enter keeps the proposed version, typing a different one replaces it,
/// and an interrupt aborts the run.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&self, record: &PackageRecord) -> Result<PromptResponse, PromptError> {
        if !std::io::stdin().is_terminal() {
            return Err(PromptError::NotATty);
        }

        let answer = Input::<String>::new()
            .with_prompt(format!(
                "Upgrade {} ({}) to",
                record.name, record.current_version
            ))
            .default(record.target_version.clone())
            .interact_text();

        match answer {
            Ok(version) => Ok(interpret_answer(record, &version)),
            Err(dialoguer::Error::IO(e)) if e.kind() == ErrorKind::Interrupted => {
                Ok(PromptResponse::Abort)
            }
            Err(dialoguer::Error::IO(e)) => Err(PromptError::Io(e)),
        }
    }
}

fn interpret_answer(record: &PackageRecord, answer: &str) -> PromptResponse {
    let answer = answer.trim();
    if answer.is_empty() || answer == record.target_version {
        PromptResponse::Accept
    } else {
        PromptResponse::Replace(answer.to_string())
    }
}
