//! Configuration management
//!
//! Settings live in `<roster_dir>/settings.json`:
//! ```json
//! {
//!   "seedFile": "users.json",
//!   "logLevel": "info"
//! }
//! ```
//! Keys this crate does not manage are kept when saving.
//!
//! A relative `seedFile` in settings.json resolves against the roster
//! directory. A seed path given at run time (`ROSTER_SEED_FILE` or the CLI
//! `--seed` flag) is used as given, so a relative one resolves against the
//! working directory.
//!
//! `logLevel` must be one of `off`, `error`, `warn`, `info`, `debug`, `trace`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::domain::result::{Error, Result};

const SETTINGS_FILE: &str = "settings.json";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    seed_file: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    log_level: Option<String>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Roster configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Seed document loaded at startup
    pub seed_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_file: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Load config from the roster directory
    ///
    /// `ROSTER_SEED_FILE` and `ROSTER_LOG_LEVEL` override the file.
    pub fn load(roster_dir: &Path) -> Result<Self> {
        let raw = read_settings(roster_dir)?;

        let runtime_seed = std::env::var_os("ROSTER_SEED_FILE")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        let seed_file = select_seed(runtime_seed, raw.seed_file, roster_dir);

        let log_level = std::env::var("ROSTER_LOG_LEVEL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or(raw.log_level)
            .map_or_else(|| Ok(DEFAULT_LOG_LEVEL.to_string()), |v| parse_log_level(&v))?;

        Ok(Self {
            seed_file,
            log_level,
        })
    }

    /// Level filter for the configured log level, `warn` if it does not parse
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::WARN)
    }

    /// Save config to the roster directory, keeping unmanaged keys
    pub fn save(&self, roster_dir: &Path) -> Result<()> {
        let mut settings = read_settings(roster_dir)?;
        settings.seed_file = self.seed_file.clone();
        settings.log_level = Some(self.log_level.clone());

        std::fs::create_dir_all(roster_dir)?;
        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(roster_dir.join(SETTINGS_FILE), content)?;
        Ok(())
    }
}

/// Roster directory from `ROSTER_DIR`, else `~/.roster`
pub fn roster_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("ROSTER_DIR").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".roster"))
        .ok_or_else(|| Error::config("could not find home directory, set ROSTER_DIR"))
}

fn read_settings(roster_dir: &Path) -> Result<SettingsFile> {
    let settings_path = roster_dir.join(SETTINGS_FILE);
    if !settings_path.exists() {
        return Ok(SettingsFile::default());
    }
    let content = std::fs::read_to_string(&settings_path)?;
    serde_json::from_str(&content)
        .map_err(|e| Error::config(format!("{}: {}", settings_path.display(), e)))
}

fn parse_log_level(level: &str) -> Result<String> {
    let level = level.trim();
    level
        .parse::<LevelFilter>()
        .map(|_| level.to_ascii_lowercase())
        .map_err(|_| {
            Error::config(format!(
                "invalid log level '{}', expected off, error, warn, info, debug or trace",
                level
            ))
        })
}

/// Pick the seed file: a run-time path as given, else the settings path
/// resolved against the roster directory
pub fn select_seed(
    runtime: Option<PathBuf>,
    configured: Option<PathBuf>,
    roster_dir: &Path,
) -> Option<PathBuf> {
    runtime.or_else(|| configured.map(|p| resolve(roster_dir, p)))
}

fn resolve(roster_dir: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        roster_dir.join(path)
    }
}
