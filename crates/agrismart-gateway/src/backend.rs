//! Prediction backend client.
//!
//! One operation per screen, each a single request/response exchange over
//! the backend's JSON contract. No retries, no caching, no explicit timeout;
//! the transport default applies. Any non-2xx status is mapped uniformly to
//! a backend error carrying the body's `error` field when present.

use std::collections::BTreeMap;
use std::path::Path;

use agrismart_core::error::{AgriError, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Address the original backend listens on.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Login credentials, field names fixed by the backend contract.
#[derive(Debug, Clone, Serialize)]
pub struct CredentialRequest {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub password: String,
}

/// Registration payload.
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub username: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub password: String,
}

/// Crop yield prediction features. Numeric fields are coerced before this
/// struct is built; the wire names match the model's training columns.
#[derive(Debug, Clone, Serialize)]
pub struct YieldRequest {
    #[serde(rename = "Year")]
    pub year: i64,
    pub average_rain_fall_mm_per_year: f64,
    pub pesticides_tonnes: f64,
    pub avg_temp: f64,
    #[serde(rename = "Area")]
    pub area: String,
    #[serde(rename = "Item")]
    pub item: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginOutcome {
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SignupOutcome {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct YieldOutcome {
    pub prediction: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecommendationOutcome {
    #[serde(default)]
    pub recommendation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageOutcome {
    #[serde(default)]
    pub quality: Option<String>,
    #[serde(default)]
    pub price_suggestion: Option<f64>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// The boundary the form controllers submit through. One operation per
/// screen; implementations must not retry or cache.
#[async_trait]
pub trait BackendApi: Send + Sync {
    async fn login(&self, request: &CredentialRequest) -> Result<LoginOutcome>;
    async fn signup(&self, request: &SignupRequest) -> Result<SignupOutcome>;
    async fn predict_yield(&self, request: &YieldRequest) -> Result<YieldOutcome>;
    async fn recommend_crop(
        &self,
        form: &BTreeMap<String, String>,
    ) -> Result<RecommendationOutcome>;
    async fn assess_image(&self, image: &Path) -> Result<ImageOutcome>;
}

/// HTTP implementation of [`BackendApi`] over a shared reqwest client.
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    /// Creates a client against the given base URL. A trailing slash is
    /// stripped so joining with the endpoint paths never doubles it.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!("POST {}{}", self.base_url, path);
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await
            .map_err(|err| AgriError::transport(format!("request to {} failed: {}", path, err)))?;

        Self::read_response(path, response).await
    }

    async fn read_response<T>(path: &str, response: Response) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_http_error(status, &body));
        }

        response.json().await.map_err(|err| {
            AgriError::transport(format!("failed to parse response from {}: {}", path, err))
        })
    }
}

impl Default for BackendClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl BackendApi for BackendClient {
    async fn login(&self, request: &CredentialRequest) -> Result<LoginOutcome> {
        self.post_json("/login", request).await
    }

    async fn signup(&self, request: &SignupRequest) -> Result<SignupOutcome> {
        self.post_json("/signup", request).await
    }

    async fn predict_yield(&self, request: &YieldRequest) -> Result<YieldOutcome> {
        self.post_json("/predict", request).await
    }

    async fn recommend_crop(
        &self,
        form: &BTreeMap<String, String>,
    ) -> Result<RecommendationOutcome> {
        // The recommendation screen sends its fields exactly as typed.
        self.post_json("/predict", form).await
    }

    async fn assess_image(&self, image: &Path) -> Result<ImageOutcome> {
        // A bad local path is the user's input, not a transport fault.
        let bytes = tokio::fs::read(image).await.map_err(|err| {
            AgriError::validation(format!("Cannot read image file {}: {}", image.display(), err))
        })?;
        let file_name = image
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        let mime = mime_guess::from_path(image).first_or_octet_stream();

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime.essence_str())
            .map_err(|err| AgriError::io(format!("invalid mime type for upload: {}", err)))?;
        let form = Form::new().part("image", part);

        let path = "/assess-image";
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .multipart(form)
            .send()
            .await
            .map_err(|err| AgriError::transport(format!("request to {} failed: {}", path, err)))?;

        Self::read_response(path, response).await
    }
}

/// Error body shape the backend uses for every failure.
#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Maps a non-2xx response to a backend error, extracting the `error` field
/// when the body parses and falling back to the raw body text.
fn map_http_error(status: StatusCode, body: &str) -> AgriError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|wrapper| wrapper.error)
        .unwrap_or_else(|_| body.to_string());

    AgriError::backend(status.as_u16(), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_in_base_url_is_stripped() {
        let client = BackendClient::new("http://127.0.0.1:5000/");
        assert_eq!(client.base_url, "http://127.0.0.1:5000");

        let client = BackendClient::new(DEFAULT_BASE_URL);
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[tokio::test]
    async fn unreadable_image_is_a_validation_error_naming_the_file() {
        let client = BackendClient::default();
        let err = client
            .assess_image(Path::new("/no/such/leaf.jpg"))
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert!(err.user_message().contains("/no/such/leaf.jpg"));
    }

    #[test]
    fn error_body_message_is_extracted() {
        let err = map_http_error(StatusCode::BAD_REQUEST, r#"{"error": "Invalid credentials"}"#);
        assert!(err.is_backend());
        assert_eq!(err.user_message(), "Invalid credentials");
    }

    #[test]
    fn unparsable_error_body_falls_back_to_raw_text() {
        let err = map_http_error(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert_eq!(err.user_message(), "boom");
    }

    #[test]
    fn empty_error_body_uses_generic_fallback() {
        let err = map_http_error(StatusCode::BAD_GATEWAY, "");
        assert_eq!(
            err.user_message(),
            agrismart_core::error::BACKEND_FALLBACK_MESSAGE
        );
    }

    #[test]
    fn request_wire_names_match_backend_contract() {
        let request = YieldRequest {
            year: 2013,
            average_rain_fall_mm_per_year: 1485.0,
            pesticides_tonnes: 121.0,
            avg_temp: 16.37,
            area: "Albania".to_string(),
            item: "Maize".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["Year"], 2013);
        assert_eq!(json["average_rain_fall_mm_per_year"], 1485.0);
        assert_eq!(json["Area"], "Albania");
        assert_eq!(json["Item"], "Maize");

        let creds = CredentialRequest {
            user_id: "u1".to_string(),
            password: "p".to_string(),
        };
        let json = serde_json::to_value(&creds).unwrap();
        assert_eq!(json["userId"], "u1");
    }

    #[test]
    fn outcome_parsing_tolerates_missing_optional_fields() {
        let outcome: RecommendationOutcome = serde_json::from_str("{}").unwrap();
        assert_eq!(outcome.recommendation, None);

        let outcome: ImageOutcome =
            serde_json::from_str(r#"{"quality": "Good", "confidence": 0.87}"#).unwrap();
        assert_eq!(outcome.quality.as_deref(), Some("Good"));
        assert_eq!(outcome.price_suggestion, None);
        assert_eq!(outcome.confidence, Some(0.87));
    }
}
