//! Crop yield prediction screen controller.

use std::sync::Arc;

use agrismart_core::error::Result;
use agrismart_core::form::{FormFields, SubmitGuard, SubmitState, SubmitToken};
use agrismart_gateway::backend::{BackendApi, YieldOutcome, YieldRequest};

const REQUIRED_FIELDS: &[&str] = &[
    "Year",
    "average_rain_fall_mm_per_year",
    "pesticides_tonnes",
    "avg_temp",
    "Area",
    "Item",
];

/// Drives the yield prediction form. All six features are mandatory and the
/// numeric ones are coerced before the request is built.
pub struct CropYieldController {
    backend: Arc<dyn BackendApi>,
    fields: FormFields,
    state: SubmitState<YieldOutcome>,
    guard: SubmitGuard,
}

impl CropYieldController {
    pub fn new(backend: Arc<dyn BackendApi>) -> Self {
        let mut fields = FormFields::new();
        // The year field starts prefilled, as on the original form.
        fields.set("Year", "2013");
        Self {
            backend,
            fields,
            state: SubmitState::Idle,
            guard: SubmitGuard::new(),
        }
    }

    pub fn set_field(&mut self, name: &str, value: &str) {
        self.fields.set(name, value);
    }

    pub fn state(&self) -> &SubmitState<YieldOutcome> {
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

    pub fn complete(&mut self, token: SubmitToken, result: Result<YieldOutcome>) {
        if !self.guard.is_current(token) {
            tracing::debug!("discarding stale yield prediction result");
            return;
        }

        self.state = match result {
            Ok(outcome) => SubmitState::Success(outcome),
            Err(err) => SubmitState::Error(err.user_message()),
        };
    }

    pub async fn perform(&self) -> Result<YieldOutcome> {
        self.fields.require_all(REQUIRED_FIELDS)?;
        let request = YieldRequest {
            year: self.fields.integer("Year")?,
            average_rain_fall_mm_per_year: self.fields.numeric("average_rain_fall_mm_per_year")?,
            pesticides_tonnes: self.fields.numeric("pesticides_tonnes")?,
            avg_temp: self.fields.numeric("avg_temp")?,
            area: self.fields.text("Area")?,
            item: self.fields.text("Item")?,
        };
        self.backend.predict_yield(&request).await
    }
}
