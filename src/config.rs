// src/config.rs
use crate::domain::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, trace};

/// Environment variable overriding the database location
pub const DB_URL_ENV: &str = "BOOKMARKER_DB_URL";

const APP_DIR: &str = "bookmarker";
const DB_FILE: &str = "bm.db";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    /// Path to the SQLite database file
    #[serde(default = "default_db_path")]
    pub db_url: String,

    /// Upper bound for fetching a page title when adding without a name
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

/// `<data dir>/bookmarker/bm.db`: `$XDG_DATA_HOME` or `~/.local/share` on
/// Linux, `%APPDATA%` on Windows, `~/Library/Application Support` on macOS
fn default_db_path() -> String {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(DB_FILE)
        .to_string_lossy()
        .to_string()
}

fn default_fetch_timeout_secs() -> u64 {
    10
}

fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(APP_DIR).join("config.toml"))
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            db_url: default_db_path(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

/// Load settings: defaults, then config file, then environment.
///
/// An explicitly given config file must exist and parse; the default
/// location is optional.
#[instrument(level = "debug")]
pub fn load_settings(config_file: Option<&Path>) -> DomainResult<Settings> {
    trace!("Loading settings");

    let mut settings = match config_file {
        Some(path) => read_config_file(path)?,
        None => match default_config_path() {
            Some(path) if path.exists() => read_config_file(&path)?,
            _ => Settings::default(),
        },
    };

    if let Ok(db_url) = std::env::var(DB_URL_ENV) {
        trace!("Using {} from environment: {}", DB_URL_ENV, db_url);
        settings.db_url = db_url;
    }

    settings.db_url = expand_path(&settings.db_url)?;

    debug!("Settings loaded: {:?}", settings);
    Ok(settings)
}

fn read_config_file(path: &Path) -> DomainResult<Settings> {
    trace!("Loading config from: {:?}", path);
    let text = std::fs::read_to_string(path).map_err(|e| {
        DomainError::Other(format!("Cannot read config file {}: {}", path.display(), e))
    })?;
    toml::from_str::<Settings>(&text).map_err(|e| {
        DomainError::Other(format!("Invalid config file {}: {}", path.display(), e))
    })
}

/// Expand `~` and environment variables in a configured path
fn expand_path(path: &str) -> DomainResult<String> {
    shellexpand::full(path)
        .map(|p| p.into_owned())
        .map_err(|e| DomainError::Other(format!("Cannot expand path {}: {}", path, e)))
}

pub fn generate_default_config() -> String {
    let default_settings = Settings::default();
    toml::to_string_pretty(&default_settings)
        .unwrap_or_else(|_| "# Error generating default configuration".to_string())
}
