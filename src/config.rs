use serde::Deserialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable that raises the default log level to debug when set
pub const DEBUG_ENV_VAR: &str = "STACK_VERSION_DEBUG";

/// Default log level when neither RUST_LOG nor the debug variable is set
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub log: LogConfig,
    pub registry: RegistryConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LogConfig {
    /// Filter directive, e.g. "info" or "stack_version=debug"
    pub level: String,
    /// Emit JSON lines instead of human readable output
    pub json: bool,
    /// Also write logs to this file
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json: false,
            file: None,
        }
    }
}

/// Tag source configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistryConfig {
    /// JSON file mapping image names to their tags
    pub tags_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a JSON file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Directory name used under the XDG data home
const APP_DIR: &str = "stack-version";

/// Environment variable that replaces the whole data directory
pub const HOME_ENV_VAR: &str = "STACK_VERSION_HOME";

/// Data directory, first match wins:
/// 1. `$STACK_VERSION_HOME`
/// 2. `$XDG_DATA_HOME/stack-version`
/// 3. `~/.local/share/stack-version`
/// 4. `stack-version` relative to the working directory
///
/// Empty variables count as unset.
pub fn data_dir() -> PathBuf {
    resolve_data_dir(|key| std::env::var_os(key), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("stack-version.log")
}

fn resolve_data_dir(
    env: impl Fn(&str) -> Option<OsString>,
    home_dir: Option<PathBuf>,
) -> PathBuf {
    let var = |key: &str| env(key).filter(|value| !value.is_empty()).map(PathBuf::from);

    if let Some(dir) = var(HOME_ENV_VAR) {
        return dir;
    }
    var("XDG_DATA_HOME")
        .or_else(|| home_dir.map(|home| home.join(".local").join("share")))
        .map_or_else(|| PathBuf::from(APP_DIR), |base| base.join(APP_DIR))
}
