//! Crop recommendation screen controller.
//!
//! Sends the seven nutrient/climate fields exactly as typed; the backend
//! decides how to interpret them. "Phosporus" is the wire name the backend
//! expects (inherited misspelling).

use std::sync::Arc;

use agrismart_core::error::Result;
use agrismart_core::form::{FormFields, SubmitGuard, SubmitState, SubmitToken};
use agrismart_gateway::backend::BackendApi;

const REQUIRED_FIELDS: &[&str] = &[
    "Nitrogen",
    "Phosporus",
    "Potassium",
    "Temperature",
    "Humidity",
    "pH",
    "Rainfall",
];

const NO_RECOMMENDATION: &str = "No recommendation found";

pub struct CropRecommendationController {
    backend: Arc<dyn BackendApi>,
    fields: FormFields,
    state: SubmitState<String>,
    guard: SubmitGuard,
}

impl CropRecommendationController {
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

    /// Clears the form and result, as the screen's reset action does.
    pub fn reset(&mut self) {
        self.fields.reset();
        self.state = SubmitState::Idle;
    }

    pub fn state(&self) -> &SubmitState<String> {
        &self.state
    }

    pub async fn submit(&mut self) {
        let token = self.guard.begin();
        let result = self.perform().await;
        self.complete(token, result);
    }

    pub fn begin(&mut self) -> SubmitToken {
        self.guard.begin()
    }

    pub fn complete(&mut self, token: SubmitToken, result: Result<String>) {
        if !self.guard.is_current(token) {
            tracing::debug!("discarding stale recommendation result");
            return;
        }

        self.state = match result {
            Ok(recommendation) => SubmitState::Success(recommendation),
            Err(err) => SubmitState::Error(err.user_message()),
        };
    }

    pub async fn perform(&self) -> Result<String> {
        self.fields.require_all(REQUIRED_FIELDS)?;
        let outcome = self.backend.recommend_crop(&self.fields.as_map()).await?;
        Ok(outcome
            .recommendation
            .unwrap_or_else(|| NO_RECOMMENDATION.to_string()))
    }
}
