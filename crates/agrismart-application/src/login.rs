//! Login screen controller.

use std::sync::Arc;

use agrismart_core::error::Result;
use agrismart_core::form::{FormFields, SubmitGuard, SubmitState, SubmitToken};
use agrismart_core::route::Route;
use agrismart_gateway::backend::{BackendApi, CredentialRequest, LoginOutcome};

use crate::session_context::SessionContext;

const REQUIRED_FIELDS: &[&str] = &["userId", "password"];

/// Drives the login form: validate, call `/login`, record the session on
/// success, and hand back the navigation target.
pub struct LoginController {
    backend: Arc<dyn BackendApi>,
    fields: FormFields,
    state: SubmitState<LoginOutcome>,
    guard: SubmitGuard,
}

impl LoginController {
    pub fn new(backend: Arc<dyn BackendApi>) -> Self {
        Self {
            backend,
            fields: FormFields::new(),
            state: SubmitState::Idle,
            guard: SubmitGuard::new(),
        }
    }

    pub fn set_field(&mut self, name: &str, value: &str) {
        self.fields.set(name, value);
    }

    pub fn state(&self) -> &SubmitState<LoginOutcome> {
        &self.state
    }

    /// Validates, submits, and applies the outcome. Returns the screen to
    /// navigate to on success.
    pub async fn submit(&mut self, session: &mut SessionContext) -> Option<Route> {
        let token = self.guard.begin();
        let result = self.perform().await;
        self.complete(token, result, session)
    }

    /// Starts a submission attempt, invalidating any outstanding one.
    pub fn begin(&mut self) -> SubmitToken {
        self.guard.begin()
    }

    /// Applies a completed submission. Stale completions are dropped and the
    /// session is only written for a current, successful one.
    pub fn complete(
        &mut self,
        token: SubmitToken,
        result: Result<LoginOutcome>,
        session: &mut SessionContext,
    ) -> Option<Route> {
        if !self.guard.is_current(token) {
            tracing::debug!("discarding stale login result");
            return None;
        }

        match result {
            Ok(outcome) => {
                if let Err(err) = session.login(&outcome.user_id) {
                    self.state = SubmitState::Error(err.user_message());
                    return None;
                }
                self.state = SubmitState::Success(outcome);
                Some(Route::Dashboard)
            }
            Err(err) => {
                self.state = SubmitState::Error(err.user_message());
                None
            }
        }
    }

    /// The request half of `submit`, usable with `begin`/`complete` by
    /// callers that manage the await themselves.
    pub async fn perform(&self) -> Result<LoginOutcome> {
        self.fields.require_all(REQUIRED_FIELDS)?;
        let request = CredentialRequest {
            user_id: self.fields.text("userId")?,
            password: self.fields.text("password")?,
        };
        self.backend.login(&request).await
    }
}
