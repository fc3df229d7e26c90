use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::debug;

use semver_upgrade::commands::{self, UsageError};
use semver_upgrade::config::{PackageGroup, TargetColumn, UpgradeConfig, UpgradeType};
use semver_upgrade::filter::PatternList;
use semver_upgrade::interaction::TerminalPrompter;
use semver_upgrade::manager::{PackageManager, PackageManagerClient, SystemCommandRunner};
use semver_upgrade::upgrade::{RunError, RunOptions, RunSummary, run};
use semver_upgrade::version::{BumpKind, VersionField};

#[derive(Parser)]
#[command(name = "semver-upgrade")]
#[command(version, about = "Selectively upgrade dependencies by semantic version change")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    /// Write logs to a file instead of stderr (defaults to the user data directory)
    #[arg(long, global = true, num_args = 0..=1, value_name = "PATH")]
    log_file: Option<Option<PathBuf>>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Upgrade outdated dependencies that pass the filters
    Upgrade(UpgradeArgs),
    /// Print "valid" or "invalid"
    Validate { version: String },
    /// Print -1, 0 or 1 by semver precedence
    Compare { v1: String, v2: String },
    /// Print the most significant differing field (empty when identical)
    Diff { v1: String, v2: String },
    /// Print the bumped version: bump <KIND> [PROTOTYPE] <VERSION>
    Bump {
        /// major, minor, patch, release, prerel or build
        kind: BumpKind,
        #[arg(required = true, num_args = 1..=2, value_names = ["PROTOTYPE", "VERSION"])]
        args: Vec<String>,
    },
    /// Print one field: major, minor, patch, release, prerel or build
    Get { field: VersionField, version: String },
}

#[derive(Args)]
struct UpgradeArgs {
    /// JSON config file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only upgrade changes of this kind
    #[arg(short = 't', long, value_enum)]
    upgrade_type: Option<UpgradeType>,

    /// Only upgrade packages in this dependency group
    #[arg(short = 'g', long, value_enum)]
    group: Option<PackageGroup>,

    /// Comma-separated names or patterns to leave alone
    #[arg(short = 'e', long)]
    exclude: Option<String>,

    /// Comma-separated names or patterns to restrict upgrades to
    #[arg(short = 'i', long)]
    include: Option<String>,

    /// Show what would be upgraded without changing anything
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Ask before each upgrade, allowing a different version
    #[arg(short = 'c', long)]
    confirm: bool,

    #[arg(short = 'm', long, value_enum)]
    package_manager: Option<PackageManager>,

    /// Listing column to upgrade to
    #[arg(long, value_enum)]
    target: Option<TargetColumn>,
}

impl UpgradeArgs {
    /// Command line flags override the config file
    fn apply(&self, config: &mut UpgradeConfig) {
        if let Some(upgrade_type) = self.upgrade_type {
            config.upgrade_type = upgrade_type;
        }
        if let Some(group) = self.group {
            config.package_group = group;
        }
        if let Some(exclude) = &self.exclude {
            config.exclude = PatternList::parse(exclude);
        }
        if let Some(include) = &self.include {
            config.include = PatternList::parse(include);
        }
        if let Some(manager) = self.package_manager {
            config.package_manager = manager;
        }
        if let Some(target) = self.target {
            config.target = target;
        }
        config.dry_run |= self.dry_run;
        config.confirm_each |= self.confirm;
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let log_file = cli
        .log_file
        .map(|path| path.unwrap_or_else(semver_upgrade::config::log_path));
    let _guard = semver_upgrade::logging::init(cli.verbose, cli.log_json, log_file.as_deref())?;

    match cli.command {
        Command::Upgrade(args) => upgrade(&args),
        Command::Validate { version } => {
            println!("{}", commands::validate(&version));
            Ok(ExitCode::SUCCESS)
        }
        Command::Compare { v1, v2 } => report(commands::compare(&v1, &v2)),
        Command::Diff { v1, v2 } => report(commands::diff(&v1, &v2)),
        Command::Bump { kind, args } => {
            let (prototype, version) = match args.as_slice() {
                [prototype, version] => (Some(prototype.as_str()), version.as_str()),
                _ => (None, args.first().map(String::as_str).unwrap_or_default()),
            };
            report(commands::bump(kind, version, prototype))
        }
        Command::Get { field, version } => report(commands::get(field, &version)),
    }
}

fn report<T: std::fmt::Display>(result: Result<T, UsageError>) -> anyhow::Result<ExitCode> {
    match result {
        Ok(output) => {
            println!("{output}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("error: {e}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn upgrade(args: &UpgradeArgs) -> anyhow::Result<ExitCode> {
    let mut config = UpgradeConfig::load_or_default(args.config.as_deref())?;
    args.apply(&mut config);
    debug!("Effective configuration: {:?}", config);

    let filter = config.filter();
    let client = PackageManagerClient::new(
        config.package_manager,
        config.target,
        SystemCommandRunner,
    );
    let options = RunOptions {
        dry_run: config.dry_run,
        confirm_each: config.confirm_each,
    };

    let summary = match run(&client, &client, &TerminalPrompter, &filter, options) {
        Ok(summary) => summary,
        Err(RunError::Prompt { source, summary }) => {
            print_summary(&summary);
            return Err(source.into());
        }
        Err(e) => return Err(e.into()),
    };
    print_summary(&summary);

    Ok(if summary.failed() > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn print_summary(summary: &RunSummary) {
    for outcome in &summary.outcomes {
        println!("{outcome}");
    }
    if summary.aborted {
        println!("aborted");
    }
    println!(
        "{} upgraded, {} skipped, {} failed",
        summary.upgraded(),
        summary.skipped(),
        summary.failed()
    );
}
