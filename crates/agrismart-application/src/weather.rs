//! Weather lookup screen controller.
//!
//! The provider is constructed up front so a missing API key surfaces as a
//! configuration error on submit, without any call being attempted.

use std::sync::Arc;

use agrismart_core::error::Result;
use agrismart_core::form::{FormFields, SubmitGuard, SubmitState, SubmitToken};
use agrismart_gateway::weather::{WeatherApi, WeatherReport};

pub struct WeatherController {
    provider: Result<Arc<dyn WeatherApi>>,
    fields: FormFields,
    state: SubmitState<WeatherReport>,
    guard: SubmitGuard,
}

impl WeatherController {
    /// Takes the result of provider construction; an `Err` here becomes the
    /// screen's error state on submit.
    pub fn new(provider: Result<Arc<dyn WeatherApi>>) -> Self {
        Self {
            provider,
            fields: FormFields::new(),
            state: SubmitState::Idle,
            guard: SubmitGuard::new(),
        }
    }

    pub fn set_field(&mut self, name: &str, value: &str) {
        self.fields.set(name, value);
    }

    pub fn state(&self) -> &SubmitState<WeatherReport> {
        &self.state
    }

    /// Fetches current weather for the city field. A blank city falls back
    /// to the provider's default; there are no required fields.
    pub async fn submit(&mut self) {
        let token = self.guard.begin();

        let provider = match &self.provider {
            Ok(provider) => Arc::clone(provider),
            Err(err) => {
                self.state = SubmitState::Error(err.user_message());
                return;
            }
        };

        let city = self.fields.get("city").unwrap_or("").to_string();
        let result = provider.current(&city).await;
        self.complete(token, result);
    }

    pub fn complete(&mut self, token: SubmitToken, result: Result<WeatherReport>) {
        if !self.guard.is_current(token) {
            tracing::debug!("discarding stale weather result");
            return;
        }

        self.state = match result {
            Ok(report) => SubmitState::Success(report),
            Err(err) => SubmitState::Error(err.user_message()),
        };
    }
}
