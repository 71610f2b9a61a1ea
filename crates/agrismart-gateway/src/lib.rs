//! Boundary layer: HTTP clients for the prediction backend and the weather
//! provider, with typed request and response records per endpoint.

pub mod backend;
pub mod weather;

pub use crate::backend::{
    BackendApi, BackendClient, CredentialRequest, DEFAULT_BASE_URL, ImageOutcome, LoginOutcome,
    RecommendationOutcome, SignupOutcome, SignupRequest, YieldOutcome, YieldRequest,
};
pub use crate::weather::{WeatherApi, WeatherClient, WeatherReport};
