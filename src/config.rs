use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

// =============================================================================
// Defaults
// =============================================================================

/// Timeout for remote changelog fetches in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// Changelog file read when no local path is configured
pub const DEFAULT_LOCAL_PATH: &str = "CHANGELOG.md";

const APP_DIR: &str = "changelog-resolver";

/// Resolver configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverConfig {
    pub source: SourceConfig,
    /// Version of the locally installed package, if known
    pub installed_version: Option<String>,
}

/// Where the changelog is read from
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceConfig {
    pub local_path: PathBuf,
    pub remote_url: Option<String>,
    /// Remote fetch timeout in milliseconds
    pub fetch_timeout_ms: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            local_path: PathBuf::from(DEFAULT_LOCAL_PATH),
            remote_url: None,
            fetch_timeout_ms: FETCH_TIMEOUT_MS,
        }
    }
}

impl SourceConfig {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load configuration from a JSON file.
///
/// A missing file at the default location yields defaults; a file passed
/// explicitly must exist.
pub fn load_config(explicit: Option<&Path>) -> Result<ResolverConfig, ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = config_path();
            if !path.exists() {
                return Ok(ResolverConfig::default());
            }
            path
        }
    };

    let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;

    serde_json::from_str(&text).map_err(|source| ConfigError::Parse { path, source })
}

/// Returns the path to the config directory for changelog-resolver.
/// Uses $XDG_CONFIG_HOME/changelog-resolver if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/changelog-resolver,
/// or ./changelog-resolver if neither is available.
pub fn config_dir() -> PathBuf {
    app_dir_with_env(
        std::env::var("XDG_CONFIG_HOME").ok(),
        dirs::home_dir(),
        ".config",
    )
}

/// Returns the path to the config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// Returns the path to the data directory for changelog-resolver.
/// Uses $XDG_DATA_HOME/changelog-resolver if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/changelog-resolver,
/// or ./changelog-resolver if neither is available.
pub fn data_dir() -> PathBuf {
    app_dir_with_env(
        std::env::var("XDG_DATA_HOME").ok(),
        dirs::home_dir(),
        ".local/share",
    )
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("changelog-resolver.log")
}

fn app_dir_with_env(
    xdg_home: Option<String>,
    home_dir: Option<PathBuf>,
    home_suffix: &str,
) -> PathBuf {
    let base_dir = xdg_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(home_suffix)))
        .unwrap_or_else(|| PathBuf::from("."));

    base_dir.join(APP_DIR)
}
