//! Session context.
//!
//! The explicit context object holding the single logged-in identity. It is
//! handed to the router and the screens at construction; login and logout
//! are its only mutators, so the in-memory value and the durable store are
//! always written together.

use std::sync::Arc;

use agrismart_core::error::Result;
use agrismart_core::session::{Session, SessionRepository};

/// Process-wide session state backed by a durable repository.
pub struct SessionContext {
    repository: Arc<dyn SessionRepository>,
    current: Option<Session>,
}

impl SessionContext {
    /// Creates a context with no active session. Call [`restore`] to pick up
    /// a persisted one.
    ///
    /// [`restore`]: SessionContext::restore
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self {
            repository,
            current: None,
        }
    }

    /// Reads a persisted session back at process start.
    ///
    /// Restoration is trust-on-read: the stored identity is accepted without
    /// a server round-trip, so a stale or forged local value is
    /// indistinguishable from a real session. The backend exposes no
    /// verification endpoint; callers relying on the session for anything
    /// security-sensitive must not.
    pub fn restore(&mut self) -> Result<()> {
        self.current = self.repository.load()?;
        if let Some(session) = &self.current {
            tracing::debug!("restored session for user {}", session.user_id);
        }
        Ok(())
    }

    /// Records a successful login, writing memory and durable storage
    /// together. On a storage failure the in-memory state is left
    /// unauthenticated so the two sides never diverge.
    pub fn login(&mut self, user_id: impl Into<String>) -> Result<()> {
        let session = Session::new(user_id);
        self.repository.save(&session)?;
        self.current = Some(session);
        Ok(())
    }

    /// Clears the session from durable storage and memory.
    pub fn logout(&mut self) -> Result<()> {
        self.repository.clear()?;
        self.current = None;
        Ok(())
    }

    /// True iff a user identity is present.
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// The logged-in identity, if any.
    pub fn user_id(&self) -> Option<&str> {
        self.current.as_ref().map(|session| session.user_id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agrismart_infrastructure::{AgriPaths, FileSessionRepository};
    use tempfile::TempDir;

    fn context(dir: &TempDir) -> SessionContext {
        let repository = FileSessionRepository::new(&AgriPaths::new(dir.path())).unwrap();
        SessionContext::new(Arc::new(repository))
    }

    #[test]
    fn login_writes_memory_and_storage_together() {
        let dir = TempDir::new().unwrap();
        let mut session = context(&dir);

        session.login("u1").unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.user_id(), Some("u1"));

        // A fresh context over the same directory simulates a restart.
        let mut restarted = context(&dir);
        restarted.restore().unwrap();
        assert!(restarted.is_authenticated());
        assert_eq!(restarted.user_id(), Some("u1"));
    }

    #[test]
    fn logout_clears_both_sides() {
        let dir = TempDir::new().unwrap();
        let mut session = context(&dir);

        session.login("u1").unwrap();
        session.logout().unwrap();
        assert!(!session.is_authenticated());

        let mut restarted = context(&dir);
        restarted.restore().unwrap();
        assert!(!restarted.is_authenticated());
    }

    #[test]
    fn restore_with_no_stored_session_is_unauthenticated() {
        let dir = TempDir::new().unwrap();
        let mut session = context(&dir);
        session.restore().unwrap();
        assert!(!session.is_authenticated());
        assert_eq!(session.user_id(), None);
    }

    #[test]
    fn stored_identity_round_trips_untransformed() {
        let dir = TempDir::new().unwrap();
        let mut session = context(&dir);
        session.login("u-résumé 42").unwrap();

        let mut restarted = context(&dir);
        restarted.restore().unwrap();
        assert_eq!(restarted.user_id(), Some("u-résumé 42"));
    }
}
