use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;

use crate::filter::PatternList;
use crate::manager::PackageManager;
use crate::version::DiffKind;

/// Directory name used under the config and data dirs
pub const APP_NAME: &str = "semver-upgrade";

/// Name of the JSON configuration file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Which version difference is allowed to be upgraded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UpgradeType {
    Major,
    Minor,
    Patch,
    /// The diff classifier never reports a bare release change, so this only
    /// exists for parity with the `get`/`bump` vocabulary and matches nothing
    Release,
    #[serde(alias = "prerelease")]
    #[value(name = "prerel", alias = "prerelease")]
    Prerel,
    Build,
    #[default]
    All,
}

impl UpgradeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpgradeType::Major => "major",
            UpgradeType::Minor => "minor",
            UpgradeType::Patch => "patch",
            UpgradeType::Release => "release",
            UpgradeType::Prerel => "prerel",
            UpgradeType::Build => "build",
            UpgradeType::All => "all",
        }
    }

    /// Whether an upgrade classified as `kind` passes this filter
    pub fn accepts(&self, kind: DiffKind) -> bool {
        match self {
            UpgradeType::All => true,
            UpgradeType::Major => kind == DiffKind::Major,
            UpgradeType::Minor => kind == DiffKind::Minor,
            UpgradeType::Patch => kind == DiffKind::Patch,
            UpgradeType::Prerel => kind == DiffKind::Prerelease,
            UpgradeType::Build => kind == DiffKind::Build,
            UpgradeType::Release => false,
        }
    }
}

/// Dependency group filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum PackageGroup {
    #[value(name = "dependencies")]
    Dependencies,
    #[value(name = "devDependencies")]
    DevDependencies,
    #[default]
    All,
}

impl PackageGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageGroup::Dependencies => "dependencies",
            PackageGroup::DevDependencies => "devDependencies",
            PackageGroup::All => "all",
        }
    }

    pub fn matches(&self, group: &str) -> bool {
        match self {
            PackageGroup::All => true,
            other => other.as_str() == group,
        }
    }
}

/// Which column of the outdated listing becomes the upgrade target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TargetColumn {
    #[default]
    Latest,
    Wanted,
}

/// Run configuration as read from the config file and command line
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct UpgradeConfig {
    pub upgrade_type: UpgradeType,
    pub package_group: PackageGroup,
    pub exclude: PatternList,
    pub include: PatternList,
    pub dry_run: bool,
    pub confirm_each: bool,
    pub package_manager: PackageManager,
    pub target: TargetColumn,
}

impl UpgradeConfig {
    /// Read a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read the configuration from `path`, or from the default location.
    /// A missing default file yields the default configuration.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = config_path();
                if default_path.is_file() {
                    Self::load(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Freeze the filtering part of the configuration for a run
    pub fn filter(&self) -> FilterConfig {
        FilterConfig {
            upgrade_type: self.upgrade_type,
            package_group: self.package_group,
            exclude: self.exclude.clone(),
            include: self.include.clone(),
        }
    }
}

/// Filters applied by the decision pipeline; built once per run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterConfig {
    pub upgrade_type: UpgradeType,
    pub package_group: PackageGroup,
    pub exclude: PatternList,
    pub include: PatternList,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Returns the path to the config directory for semver-upgrade.
/// Uses $XDG_CONFIG_HOME/semver-upgrade if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/semver-upgrade,
/// or ./semver-upgrade if neither is available.
pub fn config_dir() -> PathBuf {
    dir_with_env(
        std::env::var("XDG_CONFIG_HOME").ok(),
        dirs::home_dir(),
        ".config",
    )
}

/// Returns the path to the default config file.
pub fn config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

/// Returns the path to the data directory, used for log files.
pub fn data_dir() -> PathBuf {
    dir_with_env(
        std::env::var("XDG_DATA_HOME").ok(),
        dirs::home_dir(),
        ".local/share",
    )
}

/// Returns the path to the default log file.
pub fn log_path() -> PathBuf {
    data_dir().join("semver-upgrade.log")
}

fn dir_with_env(xdg_dir: Option<String>, home_dir: Option<PathBuf>, home_suffix: &str) -> PathBuf {
    let base = xdg_dir
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(home_suffix)))
        .unwrap_or_else(|| PathBuf::from("."));

    base.join(APP_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn upgrade_config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<UpgradeConfig>(json!({
            "upgradeType": "minor"
        }))
        .unwrap();

        assert_eq!(result.upgrade_type, UpgradeType::Minor);
        assert_eq!(result.package_group, PackageGroup::All);
        assert!(result.exclude.is_empty());
        assert!(!result.dry_run);
        assert_eq!(result.package_manager, PackageManager::Yarn);
    }

    #[test]
    fn upgrade_config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<UpgradeConfig>(json!({
            "upgradeType": "prerel",
            "packageGroup": "devDependencies",
            "exclude": "typescript,@types/*",
            "include": ["*eslint*"],
            "dryRun": true,
            "confirmEach": true,
            "packageManager": "npm",
            "target": "wanted"
        }))
        .unwrap();

        assert_eq!(
            result,
            UpgradeConfig {
                upgrade_type: UpgradeType::Prerel,
                package_group: PackageGroup::DevDependencies,
                exclude: PatternList::parse("typescript,@types/*"),
                include: PatternList::parse("*eslint*"),
                dry_run: true,
                confirm_each: true,
                package_manager: PackageManager::Npm,
                target: TargetColumn::Wanted,
            }
        );
    }

    #[test]
    fn upgrade_config_rejects_unknown_upgrade_type() {
        let result = serde_json::from_value::<UpgradeConfig>(json!({
            "upgradeType": "huge"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn load_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"packageGroup": "dependencies", "dryRun": true}}"#).unwrap();

        let config = UpgradeConfig::load(file.path()).unwrap();

        assert_eq!(config.package_group, PackageGroup::Dependencies);
        assert!(config.dry_run);
    }

    #[test]
    fn load_reports_invalid_json_with_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = UpgradeConfig::load(file.path()).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { ref path, .. } if path == file.path()));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = UpgradeConfig::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[rstest]
    #[case(UpgradeType::All, DiffKind::Major, true)]
    #[case(UpgradeType::All, DiffKind::None, true)]
    #[case(UpgradeType::Minor, DiffKind::Minor, true)]
    #[case(UpgradeType::Minor, DiffKind::Major, false)]
    #[case(UpgradeType::Prerel, DiffKind::Prerelease, true)]
    #[case(UpgradeType::Build, DiffKind::Build, true)]
    #[case(UpgradeType::Release, DiffKind::Patch, false)]
    fn upgrade_type_accepts(
        #[case] upgrade_type: UpgradeType,
        #[case] kind: DiffKind,
        #[case] expected: bool,
    ) {
        assert_eq!(upgrade_type.accepts(kind), expected);
    }

    #[rstest]
    #[case(PackageGroup::All, "peerDependencies", true)]
    #[case(PackageGroup::Dependencies, "dependencies", true)]
    #[case(PackageGroup::Dependencies, "devDependencies", false)]
    #[case(PackageGroup::DevDependencies, "devDependencies", true)]
    fn package_group_matches(
        #[case] group: PackageGroup,
        #[case] record_group: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(group.matches(record_group), expected);
    }

    #[test]
    fn dir_with_env_uses_xdg_dir_when_set() {
        let path = dir_with_env(
            Some("/tmp/test-config".to_string()),
            Some(PathBuf::from("/home/user")),
            ".config",
        );

        assert_eq!(path, PathBuf::from("/tmp/test-config/semver-upgrade"));
    }

    #[test]
    fn dir_with_env_falls_back_to_home_suffix() {
        let path = dir_with_env(None, Some(PathBuf::from("/home/user")), ".local/share");

        assert_eq!(path, PathBuf::from("/home/user/.local/share/semver-upgrade"));
    }

    #[test]
    fn dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = dir_with_env(None, None, ".config");
        assert_eq!(path, PathBuf::from("./semver-upgrade"));
    }
}
