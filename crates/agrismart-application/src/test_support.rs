//! Hand-rolled fakes for controller tests: canned gateway responses plus
//! call counters, so tests can assert that validation failures never reach
//! the network.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use agrismart_core::error::{AgriError, Result};
use agrismart_gateway::backend::{
    BackendApi, CredentialRequest, ImageOutcome, LoginOutcome, RecommendationOutcome,
    SignupOutcome, SignupRequest, YieldOutcome, YieldRequest,
};
use agrismart_gateway::weather::{WeatherApi, WeatherReport};
use async_trait::async_trait;

fn unconfigured<T>() -> Result<T> {
    Err(AgriError::transport("mock: no response configured"))
}

pub(crate) struct MockBackend {
    pub login_response: Result<LoginOutcome>,
    pub signup_response: Result<SignupOutcome>,
    pub yield_response: Result<YieldOutcome>,
    pub recommend_response: Result<RecommendationOutcome>,
    pub image_response: Result<ImageOutcome>,
    pub calls: AtomicUsize,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self {
            login_response: unconfigured(),
            signup_response: unconfigured(),
            yield_response: unconfigured(),
            recommend_response: unconfigured(),
            image_response: unconfigured(),
            calls: AtomicUsize::new(0),
        }
    }
}

impl MockBackend {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BackendApi for MockBackend {
    async fn login(&self, _request: &CredentialRequest) -> Result<LoginOutcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.login_response.clone()
    }

    async fn signup(&self, _request: &SignupRequest) -> Result<SignupOutcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.signup_response.clone()
    }

    async fn predict_yield(&self, _request: &YieldRequest) -> Result<YieldOutcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.yield_response.clone()
    }

    async fn recommend_crop(
        &self,
        _form: &BTreeMap<String, String>,
    ) -> Result<RecommendationOutcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.recommend_response.clone()
    }

    async fn assess_image(&self, _image: &Path) -> Result<ImageOutcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.image_response.clone()
    }
}

pub(crate) struct MockWeather {
    pub response: Result<WeatherReport>,
    pub calls: AtomicUsize,
}

impl Default for MockWeather {
    fn default() -> Self {
        Self {
            response: unconfigured(),
            calls: AtomicUsize::new(0),
        }
    }
}

impl MockWeather {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WeatherApi for MockWeather {
    async fn current(&self, _city: &str) -> Result<WeatherReport> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}
