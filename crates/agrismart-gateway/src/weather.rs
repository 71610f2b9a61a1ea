//! Weather provider client.
//!
//! Direct GET against the OpenWeather current-weather endpoint.
//! Configuration priority: ~/.config/agrismart/secret.json > environment
//! variables. A missing key is a configuration error raised before any call.

use agrismart_core::error::{AgriError, Result};
use agrismart_infrastructure::SecretStorage;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::env;

const BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Environment variable consulted when secret.json has no weather key.
pub const WEATHER_API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// City queried when the field is left blank.
pub const DEFAULT_CITY: &str = "Delhi";

/// Seam for the weather lookup, so screens can be tested offline.
#[async_trait]
pub trait WeatherApi: Send + Sync {
    async fn current(&self, city: &str) -> Result<WeatherReport>;
}

/// Client for the OpenWeather current-weather endpoint.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    /// Creates a client with the provided API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Loads the API key from secret.json or the environment.
    ///
    /// Priority:
    /// 1. ~/.config/agrismart/secret.json (`weather.api_key`)
    /// 2. `OPENWEATHER_API_KEY` environment variable
    pub fn try_from_env() -> Result<Self> {
        let env_key = env::var(WEATHER_API_KEY_ENV).ok();
        match SecretStorage::new() {
            Ok(storage) => Self::try_from_sources(&storage, env_key),
            // No resolvable home directory; the environment is all we have.
            Err(_) => env_key.map(Self::new).ok_or_else(missing_key_error),
        }
    }

    /// Resolves the API key from explicit sources, secret file first.
    pub fn try_from_sources(storage: &SecretStorage, env_key: Option<String>) -> Result<Self> {
        if let Ok(config) = storage.load() {
            if let Some(weather) = config.weather {
                return Ok(Self::new(weather.api_key));
            }
        }

        env_key.map(Self::new).ok_or_else(missing_key_error)
    }

    /// Overrides the endpoint after construction.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// The city actually queried; blank input falls back to [`DEFAULT_CITY`].
fn effective_city(city: &str) -> &str {
    let city = city.trim();
    if city.is_empty() { DEFAULT_CITY } else { city }
}

fn missing_key_error() -> AgriError {
    AgriError::config(format!(
        "{} not found in ~/.config/agrismart/secret.json or environment variables",
        WEATHER_API_KEY_ENV
    ))
}

#[async_trait]
impl WeatherApi for WeatherClient {
    async fn current(&self, city: &str) -> Result<WeatherReport> {
        let city = effective_city(city);

        tracing::debug!("GET {} for city {}", self.base_url, city);
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await
            .map_err(|err| AgriError::transport(format!("weather request failed: {}", err)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_weather_error(status, &body));
        }

        response
            .json()
            .await
            .map_err(|err| AgriError::transport(format!("failed to parse weather response: {}", err)))
    }
}

/// Current conditions for a city, limited to the fields the screen consumes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherReport {
    pub name: String,
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
    pub main: WeatherMain,
    pub wind: WeatherWind,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherCondition {
    pub main: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherMain {
    pub temp: f64,
    pub humidity: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherWind {
    pub speed: f64,
}

/// OpenWeather reports failures as `{cod, message}` rather than `{error}`.
#[derive(Deserialize)]
struct WeatherErrorResponse {
    message: String,
}

fn map_weather_error(status: StatusCode, body: &str) -> AgriError {
    let message = serde_json::from_str::<WeatherErrorResponse>(body)
        .map(|wrapper| wrapper.message)
        .unwrap_or_else(|_| body.to_string());

    AgriError::backend(status.as_u16(), message)
}
