use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use crate::{errors::LedgerError, ledger::DEFAULT_DATA_FILE};

const CONFIG_DIR_NAME: &str = "finance_tracker";
const CONFIG_FILE_NAME: &str = "config.json";

/// How a transaction added without an explicit date is dated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultDatePolicy {
    /// Today's date, read from the ledger clock on every add.
    #[default]
    CallTime,
    /// A single date captured once for the whole process.
    ProcessStart,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub data_file: PathBuf,
    pub default_date: DefaultDatePolicy,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            default_date: DefaultDatePolicy::default(),
        }
    }
}

/// Loads and stores [`TrackerConfig`] as a JSON file.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Uses `<platform config dir>/finance_tracker/config.json`.
    pub fn new() -> Result<Self, LedgerError> {
        let base = dirs::config_dir().ok_or_else(|| {
            LedgerError::Config("no configuration directory on this platform".into())
        })?;
        Ok(Self::with_path(
            base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME),
        ))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the stored configuration, or defaults when no file exists yet.
    pub fn load(&self) -> Result<TrackerConfig, LedgerError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(TrackerConfig::default()),
            Err(err) => return Err(err.into()),
        };
        serde_json::from_str(&data).map_err(|err| {
            LedgerError::Config(format!("{}: {}", self.path.display(), err))
        })
    }

    pub fn save(&self, config: &TrackerConfig) -> Result<(), LedgerError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(config)?;
        let mut file = File::create(&self.path)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        tracing::debug!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
