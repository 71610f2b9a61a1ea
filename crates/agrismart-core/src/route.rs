//! Route state machine.
//!
//! Maps URL paths to screens and applies session-based redirects. Unmatched
//! paths fall back to the landing screen; the machine has no terminal state.

/// The four screens a path can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Login,
    Signup,
    Dashboard,
}

impl Route {
    /// Maps a URL path to a screen. Unrecognized paths land on `Landing`.
    pub fn parse(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Route::Landing,
            "/login" => Route::Login,
            "/signup" => Route::Signup,
            "/AgriDashboard" | "/login/CropYield" => Route::Dashboard,
            _ => Route::Landing,
        }
    }

    /// Applies session gating to a requested route.
    ///
    /// The dashboard is protected: reaching it unauthenticated redirects to
    /// login. An authenticated user asking for login or signup is sent
    /// straight to the dashboard.
    pub fn resolve(self, authenticated: bool) -> Self {
        match (self, authenticated) {
            (Route::Dashboard, false) => Route::Login,
            (Route::Login, true) | (Route::Signup, true) => Route::Dashboard,
            (route, _) => route,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(Route::parse("/"), Route::Landing);
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/signup"), Route::Signup);
        assert_eq!(Route::parse("/AgriDashboard"), Route::Dashboard);
        assert_eq!(Route::parse("/login/CropYield"), Route::Dashboard);
    }

    #[test]
    fn unknown_paths_fall_back_to_landing() {
        assert_eq!(Route::parse("/nope"), Route::Landing);
        assert_eq!(Route::parse("/login/extra/deep"), Route::Landing);
    }

    #[test]
    fn dashboard_redirects_to_login_when_unauthenticated() {
        assert_eq!(Route::Dashboard.resolve(false), Route::Login);
        assert_eq!(Route::Dashboard.resolve(true), Route::Dashboard);
    }

    #[test]
    fn auth_screens_redirect_to_dashboard_when_authenticated() {
        assert_eq!(Route::Login.resolve(true), Route::Dashboard);
        assert_eq!(Route::Signup.resolve(true), Route::Dashboard);
        assert_eq!(Route::Login.resolve(false), Route::Login);
    }

    #[test]
    fn landing_is_always_reachable() {
        assert_eq!(Route::Landing.resolve(true), Route::Landing);
        assert_eq!(Route::Landing.resolve(false), Route::Landing);
    }
}
