use crate::{APP_DATA_DIRNAME, ConfigError, ConfigErrorResult, DEFAULT_SESSION_DIRNAME};

use std::path::PathBuf;

use serde::Deserialize;

/// Where the persisted session keys live
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SessionConfig {
    /// Explicit directory override; None = per-user data directory
    pub storage_dir: Option<String>,
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(ref dir) = self.storage_dir
            && dir.is_empty()
        {
            return Err(ConfigError::session("session.storage_dir cannot be empty"));
        }

        Ok(())
    }

    /// Resolve the directory holding the session keys.
    /// Priority: storage_dir override > OS data dir
    pub fn storage_path(&self) -> ConfigErrorResult<PathBuf> {
        if let Some(ref dir) = self.storage_dir {
            return Ok(PathBuf::from(dir));
        }

        let data_dir = dirs::data_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(data_dir.join(APP_DATA_DIRNAME).join(DEFAULT_SESSION_DIRNAME))
    }
}
