//! Router over the session context.
//!
//! Reads the session (never writes it) and applies the route table plus
//! auth gating from the core state machine.

use agrismart_core::route::Route;

use crate::session_context::SessionContext;

/// Resolves requested paths to the screen that should actually be shown.
pub struct Router;

impl Router {
    /// Maps a path to a screen, applying session-based redirects.
    pub fn navigate(path: &str, session: &SessionContext) -> Route {
        Route::parse(path).resolve(session.is_authenticated())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agrismart_infrastructure::{AgriPaths, FileSessionRepository};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn context(dir: &TempDir) -> SessionContext {
        let repository = FileSessionRepository::new(&AgriPaths::new(dir.path())).unwrap();
        SessionContext::new(Arc::new(repository))
    }

    #[test]
    fn protected_path_redirects_to_login_when_logged_out() {
        let dir = TempDir::new().unwrap();
        let session = context(&dir);
        assert_eq!(Router::navigate("/AgriDashboard", &session), Route::Login);
    }

    #[test]
    fn protected_path_resolves_after_login() {
        let dir = TempDir::new().unwrap();
        let mut session = context(&dir);
        session.login("u1").unwrap();
        assert_eq!(Router::navigate("/AgriDashboard", &session), Route::Dashboard);
        assert_eq!(Router::navigate("/login", &session), Route::Dashboard);
    }

    #[test]
    fn logout_makes_protected_paths_redirect_again() {
        let dir = TempDir::new().unwrap();
        let mut session = context(&dir);
        session.login("u1").unwrap();
        session.logout().unwrap();
        assert_eq!(Router::navigate("/AgriDashboard", &session), Route::Login);
    }

    #[test]
    fn unknown_path_lands_on_landing() {
        let dir = TempDir::new().unwrap();
        let session = context(&dir);
        assert_eq!(Router::navigate("/no-such-page", &session), Route::Landing);
    }
}
