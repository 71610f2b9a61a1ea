//! Session domain model.
//!
//! A session records the identity the backend returned at login. At most one
//! session exists per running client; the in-memory value and the durable
//! store must always be written together.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The single piece of durable client state identifying the logged-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Server-issued identity string, stored exactly as returned.
    pub user_id: String,
    /// When the login that produced this session succeeded.
    pub logged_in_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session for a freshly authenticated user.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            logged_in_at: Utc::now(),
        }
    }
}

/// Persistence boundary for the session.
///
/// `load` must return `Ok(None)` both when no session was ever saved and
/// when the stored data cannot be read back; session restoration never
/// fails loudly.
pub trait SessionRepository: Send + Sync {
    /// Persists the session, replacing any previous one.
    fn save(&self, session: &Session) -> Result<()>;

    /// Reads the persisted session back, if any.
    fn load(&self) -> Result<Option<Session>>;

    /// Removes the persisted session. Removing an absent session is not an
    /// error.
    fn clear(&self) -> Result<()>;
}
