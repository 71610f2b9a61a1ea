//! File-backed session repository.
//!
//! The session is a single pretty-printed JSON file. An absent file means
//! "logged out"; a file that cannot be read or parsed is logged and treated
//! the same way, so restoration never fails loudly.

use std::fs;
use std::path::PathBuf;

use agrismart_core::error::Result;
use agrismart_core::session::{Session, SessionRepository};

use crate::paths::AgriPaths;

/// Stores the session at `<config dir>/session.json`.
pub struct FileSessionRepository {
    file_path: PathBuf,
}

impl FileSessionRepository {
    /// Creates a repository under the given paths, creating the config
    /// directory if needed.
    pub fn new(paths: &AgriPaths) -> Result<Self> {
        fs::create_dir_all(paths.base_dir())?;
        Ok(Self {
            file_path: paths.session_file(),
        })
    }

    /// Creates a repository at the default location (~/.config/agrismart).
    pub fn default_location() -> Result<Self> {
        Self::new(&AgriPaths::default_location()?)
    }
}

impl SessionRepository for FileSessionRepository {
    fn save(&self, session: &Session) -> Result<()> {
        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.file_path, json)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<Session>> {
        if !self.file_path.exists() {
            return Ok(None);
        }

        let json = match fs::read_to_string(&self.file_path) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(
                    "failed to read session file {:?}, treating as logged out: {}",
                    self.file_path,
                    err
                );
                return Ok(None);
            }
        };

        match serde_json::from_str(&json) {
            Ok(session) => Ok(Some(session)),
            Err(err) => {
                tracing::warn!(
                    "failed to parse session file {:?}, treating as logged out: {}",
                    self.file_path,
                    err
                );
                Ok(None)
            }
        }
    }

    fn clear(&self) -> Result<()> {
        if self.file_path.exists() {
            fs::remove_file(&self.file_path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn repository(dir: &TempDir) -> FileSessionRepository {
        FileSessionRepository::new(&AgriPaths::new(dir.path())).unwrap()
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);

        let session = Session::new("u1");
        repo.save(&session).unwrap();

        // A second repository simulates a process restart.
        let restarted = repository(&temp_dir);
        let loaded = restarted.load().unwrap().unwrap();
        assert_eq!(loaded.user_id, "u1");
        assert_eq!(loaded, session);
    }

    #[test]
    fn missing_file_means_logged_out() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);
        assert_eq!(repo.load().unwrap(), None);
    }

    #[test]
    fn corrupt_file_is_treated_as_absent() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);

        fs::write(temp_dir.path().join("session.json"), "{not json").unwrap();
        assert_eq!(repo.load().unwrap(), None);
    }

    #[test]
    fn clear_removes_the_file() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);

        repo.save(&Session::new("u1")).unwrap();
        repo.clear().unwrap();
        assert_eq!(repo.load().unwrap(), None);

        // Clearing again is not an error.
        repo.clear().unwrap();
    }

    #[test]
    fn save_overwrites_previous_session() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);

        repo.save(&Session::new("first")).unwrap();
        repo.save(&Session::new("second")).unwrap();
        assert_eq!(repo.load().unwrap().unwrap().user_id, "second");
    }
}
