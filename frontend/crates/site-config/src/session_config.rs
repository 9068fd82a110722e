use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORAGE_FILENAME, DEFAULT_STORAGE_KEY};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Key holding the serialized identity in local storage
    pub storage_key: String,
    /// Local storage file, relative to the config directory
    pub storage_file: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: String::from(DEFAULT_STORAGE_KEY),
            storage_file: String::from(DEFAULT_STORAGE_FILENAME),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::session("session.storage_key cannot be empty"));
        }

        if self.storage_file.trim().is_empty() {
            return Err(ConfigError::session("session.storage_file cannot be empty"));
        }

        Ok(())
    }
}
