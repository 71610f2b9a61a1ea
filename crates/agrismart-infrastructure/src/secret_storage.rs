//! Secret configuration file storage.
//!
//! Provides read-only loading of API keys from
//! `~/.config/agrismart/secret.json`.
//!
//! Responsibilities:
//! - Load secret.json and parse it into [`SecretConfig`]
//! - Report missing or invalid files without leaking secret values
//!
//! Does NOT:
//! - Write or modify secret files
//! - Validate API keys against the remote service
//! - Handle encryption (plaintext JSON storage)

use std::fs;
use std::path::PathBuf;

use agrismart_core::error::{AgriError, Result};
use serde::Deserialize;

use crate::paths::AgriPaths;

/// Root of secret.json.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecretConfig {
    #[serde(default)]
    pub weather: Option<WeatherSecret>,
}

/// Credentials for the weather provider.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherSecret {
    pub api_key: String,
}

/// Read-only storage for the secret configuration file.
pub struct SecretStorage {
    path: PathBuf,
}

impl SecretStorage {
    /// Creates storage pointing at the default secret file location.
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: AgriPaths::default_location()?.secret_file(),
        })
    }

    /// Creates storage under explicit paths, for tests.
    pub fn with_paths(paths: &AgriPaths) -> Self {
        Self {
            path: paths.secret_file(),
        }
    }

    /// Whether the secret file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads and parses the secret file.
    ///
    /// Error messages name the file, never its contents.
    pub fn load(&self) -> Result<SecretConfig> {
        if !self.path.exists() {
            return Err(AgriError::config(format!(
                "Configuration file not found at: {}",
                self.path.display()
            )));
        }

        let json = fs::read_to_string(&self.path)?;
        let config = serde_json::from_str(&json)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn loads_weather_key() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AgriPaths::new(temp_dir.path());
        fs::create_dir_all(paths.base_dir()).unwrap();
        fs::write(
            paths.secret_file(),
            r#"{"weather": {"api_key": "k-123"}}"#,
        )
        .unwrap();

        let storage = SecretStorage::with_paths(&paths);
        assert!(storage.exists());
        let config = storage.load().unwrap();
        assert_eq!(config.weather.unwrap().api_key, "k-123");
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let storage = SecretStorage::with_paths(&AgriPaths::new(temp_dir.path()));
        assert!(!storage.exists());
        assert!(storage.load().unwrap_err().is_config());
    }

    #[test]
    fn file_without_weather_section_parses() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AgriPaths::new(temp_dir.path());
        fs::create_dir_all(paths.base_dir()).unwrap();
        fs::write(paths.secret_file(), "{}").unwrap();

        let config = SecretStorage::with_paths(&paths).load().unwrap();
        assert!(config.weather.is_none());
    }
}
