use crate::config::Config;
use crate::models::{
    advice::AdviceResponse,
    error::AppError,
    form::{AdviceRequest, FormInput},
};
use serde_json::Value;

// API CONFIGURATION
/// Configuration for the advice backend client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
    query_path: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Full URL of the advice query endpoint.
    pub fn query_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.query_path.trim_start_matches('/')
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
    query_path: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the query endpoint path.
    pub fn query_path(mut self, path: impl Into<String>) -> Self {
        self.query_path = Some(path.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| Config::BACKEND_URL.to_string()),
            query_path: self
                .query_path
                .unwrap_or_else(|| Config::QUERY_PATH.to_string()),
        }
    }
}

// ADVICE CLIENT
/// HTTP client for the advice backend.
pub struct AdviceClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl AdviceClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Sends one advice request for the given form and waits for the answer.
    ///
    /// No retry and no timeout: a hung backend keeps the future pending.
    pub async fn request_advice(&self, form: &FormInput) -> Result<AdviceResponse, AppError> {
        let request = AdviceRequest::from(form);
        let url = self.config.query_url();
        gloo::console::log!(format!("Requesting advice from {url}"));

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read response body: {e}")))?;

        if !status.is_success() {
            return Err(error_for_status(status.as_u16(), &body));
        }

        decode_reply(&body)
    }

    /// Converts a reqwest error into an appropriate `AppError`.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::Network(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::Network(format!("Request error: {error}"))
        } else {
            AppError::Network(format!("Network error: {error}"))
        }
    }
}

// RESPONSE DECODING
/// Decodes a 2xx response body.
///
/// A non-empty `error` field wins over any advice content in the same body.
pub fn decode_reply(body: &str) -> Result<AdviceResponse, AppError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| AppError::Parse(format!("Failed to parse response: {e}")))?;

    if let Some(message) = backend_error(&value) {
        return Err(AppError::Backend(message));
    }

    serde_json::from_value(value)
        .map_err(|e| AppError::Parse(format!("Unexpected response shape: {e}")))
}

/// Creates an error for a non-2xx response, preferring a structured backend message.
pub fn error_for_status(status: u16, body: &str) -> AppError {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| backend_error(&value))
        .map_or_else(
            || AppError::Status {
                status,
                body: body.to_string(),
            },
            AppError::Backend,
        )
}

fn backend_error(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

// CONVENIENCE FUNCTIONS
/// Requests advice using default configuration.
pub async fn fetch_advice(form: &FormInput) -> Result<AdviceResponse, AppError> {
    AdviceClient::new()?.request_advice(form).await
}
