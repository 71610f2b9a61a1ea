//! Unified path management for AgriSmart client files.
//!
//! All client state lives under a single config directory:
//!
//! ```text
//! ~/.config/agrismart/
//! ├── session.json   # persisted login session
//! └── secret.json    # API keys (read-only, user managed)
//! ```

use std::path::{Path, PathBuf};

use agrismart_core::error::{AgriError, Result};

/// Resolves file locations under the client's config directory.
///
/// A custom base directory can be supplied for tests; otherwise the
/// directory is `~/.config/agrismart`.
#[derive(Debug, Clone)]
pub struct AgriPaths {
    base_dir: PathBuf,
}

impl AgriPaths {
    /// Creates paths rooted at an explicit base directory.
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Creates paths rooted at the default location (~/.config/agrismart).
    pub fn default_location() -> Result<Self> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| AgriError::config("Cannot find home directory"))?;
        Ok(Self::new(home_dir.join(".config").join("agrismart")))
    }

    /// The config directory itself.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of the persisted session file.
    pub fn session_file(&self) -> PathBuf {
        self.base_dir.join("session.json")
    }

    /// Path of the secret configuration file.
    pub fn secret_file(&self) -> PathBuf {
        self.base_dir.join("secret.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_live_under_base_dir() {
        let paths = AgriPaths::new("/tmp/agri-test");
        assert_eq!(
            paths.session_file(),
            PathBuf::from("/tmp/agri-test/session.json")
        );
        assert_eq!(
            paths.secret_file(),
            PathBuf::from("/tmp/agri-test/secret.json")
        );
    }
}
