//! yarn/npm backed lister and upgrader

use tracing::{debug, info};

use crate::config::TargetColumn;
use crate::manager::PackageManager;
use crate::manager::command::{CommandRunner, display_command};
use crate::manager::error::ManagerError;
use crate::upgrade::traits::{OutdatedLister, Upgrader};
use crate::upgrade::types::PackageRecord;

pub struct PackageManagerClient<R: CommandRunner> {
    manager: PackageManager,
    target: TargetColumn,
    runner: R,
}

impl<R: CommandRunner> PackageManagerClient<R> {
    pub fn new(manager: PackageManager, target: TargetColumn, runner: R) -> Self {
        Self {
            manager,
            target,
            runner,
        }
    }
}

impl<R: CommandRunner> OutdatedLister for PackageManagerClient<R> {
    fn list(&self) -> Result<Vec<PackageRecord>, ManagerError> {
        let program = self.manager.program();
        let args = self.manager.outdated_args();
        let output = self.runner.run(program, &args)?;

        // Both yarn and npm exit with 1 when something is outdated
        if !output.success() && output.stdout.trim().is_empty() {
            return Err(ManagerError::NoOutput {
                command: display_command(program, &args),
                status: output.status,
                stderr: output.stderr.trim().to_string(),
            });
        }

        let entries = self.manager.parser().parse(&output.stdout)?;
        debug!("{} reported {} outdated entries", program, entries.len());

        Ok(entries
            .into_iter()
            .map(|entry| entry.into_record(self.target))
            .collect())
    }
}

impl<R: CommandRunner> Upgrader for PackageManagerClient<R> {
    fn upgrade(&self, record: &PackageRecord, target_version: &str) -> Result<(), ManagerError> {
        let program = self.manager.program();
        let args = self.manager.upgrade_args(record, target_version);
        info!("Running {}", display_command(program, &args));

        let output = self.runner.run(program, &args)?;
        if !output.success() {
            return Err(ManagerError::CommandFailed {
                command: display_command(program, &args),
                status: output.status,
                stderr: output.stderr.trim().to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::command::{CommandOutput, MockCommandRunner};

    const YARN_OUTPUT: &str = "\
Package Current Wanted Latest Package Type URL
react 17.0.2 17.0.2 18.2.0 dependencies https://reactjs.org/
jest 29.0.0 29.7.0 29.7.0 devDependencies https://jestjs.io/
Done in 0.30s.
";

    fn runner_returning(expected_program: &'static str, output: CommandOutput) -> MockCommandRunner {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(move |program, _| program == expected_program)
            .times(1)
            .return_once(move |_, _| Ok(output));
        runner
    }

    #[test]
    fn list_parses_yarn_output_even_with_exit_code_one() {
        let runner = runner_returning(
            "yarn",
            CommandOutput {
                status: 1,
                stdout: YARN_OUTPUT.to_string(),
                stderr: String::new(),
            },
        );
        let client = PackageManagerClient::new(PackageManager::Yarn, TargetColumn::Latest, runner);

        let records = client.list().unwrap();

        assert_eq!(
            records,
            vec![
                PackageRecord::new("react", "17.0.2", "18.2.0", "dependencies"),
                PackageRecord::new("jest", "29.0.0", "29.7.0", "devDependencies"),
            ]
        );
    }

    #[test]
    fn list_uses_wanted_column_when_configured() {
        let runner = runner_returning(
            "yarn",
            CommandOutput {
                status: 1,
                stdout: YARN_OUTPUT.to_string(),
                stderr: String::new(),
            },
        );
        let client = PackageManagerClient::new(PackageManager::Yarn, TargetColumn::Wanted, runner);

        let records = client.list().unwrap();

        assert_eq!(records[0].target_version, "17.0.2");
        assert_eq!(records[1].target_version, "29.7.0");
    }

    #[test]
    fn list_fails_on_error_without_output() {
        let runner = runner_returning(
            "npm",
            CommandOutput {
                status: 254,
                stdout: String::new(),
                stderr: "npm ERR! enoent package.json\n".to_string(),
            },
        );
        let client = PackageManagerClient::new(PackageManager::Npm, TargetColumn::Latest, runner);

        let err = client.list().unwrap_err();

        assert_eq!(
            err.to_string(),
            "npm outdated --json --long exited with status 254 and no output: npm ERR! enoent package.json"
        );
    }

    #[test]
    fn upgrade_runs_manager_with_exact_version() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|program, args| {
                program == "npm" && args == ["install", "jest@29.7.0", "--save-dev"]
            })
            .times(1)
            .returning(|_, _| Ok(CommandOutput::default()));
        let client = PackageManagerClient::new(PackageManager::Npm, TargetColumn::Latest, runner);
        let record = PackageRecord::new("jest", "29.0.0", "29.7.0", "devDependencies");

        client.upgrade(&record, "29.7.0").unwrap();
    }

    #[test]
    fn upgrade_reports_failed_command() {
        let runner = runner_returning(
            "yarn",
            CommandOutput {
                status: 1,
                stdout: String::new(),
                stderr: "error Couldn't find package\n".to_string(),
            },
        );
        let client = PackageManagerClient::new(PackageManager::Yarn, TargetColumn::Latest, runner);
        let record = PackageRecord::new("nope", "1.0.0", "2.0.0", "dependencies");

        let err = client.upgrade(&record, "2.0.0").unwrap_err();

        assert!(matches!(
            err,
            ManagerError::CommandFailed { ref command, status: 1, .. } if command == "yarn upgrade nope@2.0.0"
        ));
    }
}
