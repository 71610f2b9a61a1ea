//! Signup screen controller.

use std::sync::Arc;

use agrismart_core::error::Result;
use agrismart_core::form::{FormFields, SubmitGuard, SubmitState, SubmitToken};
use agrismart_core::route::Route;
use agrismart_gateway::backend::{BackendApi, SignupOutcome, SignupRequest};

const REQUIRED_FIELDS: &[&str] = &["username", "userId", "password"];

/// Drives the registration form. Success navigates to the login screen; no
/// session is created until the user actually logs in.
pub struct SignupController {
    backend: Arc<dyn BackendApi>,
    fields: FormFields,
    state: SubmitState<SignupOutcome>,
    guard: SubmitGuard,
}

impl SignupController {
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

    pub fn state(&self) -> &SubmitState<SignupOutcome> {
        &self.state
    }

    pub async fn submit(&mut self) -> Option<Route> {
        let token = self.guard.begin();
        let result = self.perform().await;
        self.complete(token, result)
    }

    pub fn begin(&mut self) -> SubmitToken {
        self.guard.begin()
    }

    pub fn complete(&mut self, token: SubmitToken, result: Result<SignupOutcome>) -> Option<Route> {
        if !self.guard.is_current(token) {
            tracing::debug!("discarding stale signup result");
            return None;
        }

        match result {
            Ok(outcome) => {
                self.state = SubmitState::Success(outcome);
                Some(Route::Login)
            }
            Err(err) => {
                self.state = SubmitState::Error(err.user_message());
                None
            }
        }
    }

    pub async fn perform(&self) -> Result<SignupOutcome> {
        self.fields.require_all(REQUIRED_FIELDS)?;
        let request = SignupRequest {
            username: self.fields.text("username")?,
            user_id: self.fields.text("userId")?,
            password: self.fields.text("password")?,
        };
        self.backend.signup(&request).await
    }
}
