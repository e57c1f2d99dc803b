//! HTTP dispatcher implementation.
//!
//! Every domain client funnels its single request through [`Dispatcher`],
//! which owns the base URL, the bearer credential and one persistent
//! `reqwest::Client`.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde_json::{Map, Value};

use super::config::ClientConfig;
use super::error::{ApiError, ClientError};
use crate::error::SdkError;

/// Sends requests to the FURY API and normalizes their outcome.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    config: ClientConfig,
    http: reqwest::Client,
}

impl Dispatcher {
    /// Creates a new dispatcher with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(ref api_key) = config.api_key {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|_| {
                SdkError::InvalidConfig("api_key contains invalid header characters".to_string())
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| SdkError::InvalidConfig(e.to_string()))?;

        Ok(Self { config, http })
    }

    /// Creates a new dispatcher with the given base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::new(ClientConfig::new(base_url))
    }

    /// Returns the dispatcher configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Joins the base URL and `path` with exactly one `/` between them.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{}/{}", base, path)
        }
    }

    /// Sends one request and returns the decoded JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] if the request could not be delivered,
    /// the response body could not be read, or the API answered with a
    /// non-success status, and
    /// [`ClientError::Sdk`] if a success body is not valid JSON.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ClientError> {
        let url = self.url(path);
        tracing::debug!(%method, %url, "dispatching request");

        let mut request = self.http.request(method, &url);
        if let Some(body) = body {
            tracing::trace!(%body, "request body");
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), %url, "received response");

        // A body cut short is a transport failure, whatever the status.
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::with_status(status.as_u16(), e.to_string(), Map::new()))?;

        if !status.is_success() {
            return Err(error_from_response(status, &body).into());
        }

        let value =
            serde_json::from_str(&body).map_err(|e| SdkError::Deserialization(e.to_string()))?;
        Ok(value)
    }

    /// Serializes `body` and sends it with `method` to `path`.
    ///
    /// # Errors
    ///
    /// Same as [`Dispatcher::request`], plus [`SdkError::Serialization`] if
    /// the body cannot be converted to JSON.
    pub async fn request_json<B>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Value, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body).map_err(|e| SdkError::Serialization(e.to_string()))?;
        self.request(method, path, Some(&body)).await
    }

    /// Makes a GET request to the given path.
    pub(crate) async fn get(&self, path: &str) -> Result<Value, ClientError> {
        self.request(Method::GET, path, None).await
    }

    /// Makes a POST request with a JSON body to the given path.
    pub(crate) async fn post<B>(&self, path: &str, body: &B) -> Result<Value, ClientError>
    where
        B: Serialize + ?Sized,
    {
        self.request_json(Method::POST, path, body).await
    }
}

/// Builds the [`ApiError`] for a non-success response.
///
/// A JSON object body becomes the payload and supplies `message` when it has
/// one. Any other body is used verbatim as the message.
fn error_from_response(status: StatusCode, body: &str) -> ApiError {
    let status_line = status.to_string();

    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(payload)) => {
            let message = payload
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_owned)
                .unwrap_or(status_line);
            ApiError::with_status(status.as_u16(), message, payload)
        }
        _ => {
            let message = if body.trim().is_empty() {
                status_line
            } else {
                body.to_string()
            };
            ApiError::with_status(status.as_u16(), message, Map::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_dispatcher_new() {
        let dispatcher = Dispatcher::with_base_url("https://api.example.com");
        assert!(dispatcher.is_ok());
    }

    #[test]
    fn test_dispatcher_invalid_config() {
        let result = Dispatcher::new(ClientConfig::new(""));
        assert!(matches!(
            result,
            Err(ClientError::Sdk(SdkError::InvalidConfig(_)))
        ));
    }

    #[test]
    fn test_dispatcher_rejects_unprintable_key() {
        let config = ClientConfig::new("https://api.example.com").with_api_key("bad\nkey");
        assert!(Dispatcher::new(config).is_err());
    }

    #[test]
    fn test_url_joining() {
        for base in ["https://api.example.com", "https://api.example.com/"] {
            let dispatcher = Dispatcher::with_base_url(base).expect("dispatcher");
            assert_eq!(dispatcher.url("/health"), "https://api.example.com/health");
            assert_eq!(
                dispatcher.url("api/tokens/buy"),
                "https://api.example.com/api/tokens/buy"
            );
        }
    }

    #[test]
    fn test_url_keeps_base_path() {
        let dispatcher = Dispatcher::with_base_url("https://example.com/fury/").expect("dispatcher");
        assert_eq!(
            dispatcher.url("/api/utilities/generate-mint"),
            "https://example.com/fury/api/utilities/generate-mint"
        );
    }

    #[test]
    fn test_error_from_json_body() {
        let err = error_from_response(
            StatusCode::BAD_REQUEST,
            r#"{"message": "insufficient balance"}"#,
        );
        assert_eq!(err.status, Some(400));
        assert_eq!(err.message, "insufficient balance");
        assert_eq!(Value::Object(err.payload), json!({"message": "insufficient balance"}));
    }

    #[test]
    fn test_error_from_json_body_without_message() {
        let err = error_from_response(StatusCode::UNPROCESSABLE_ENTITY, r#"{"error": "bad"}"#);
        assert_eq!(err.status, Some(422));
        assert_eq!(err.message, "422 Unprocessable Entity");
        assert_eq!(err.payload.get("error"), Some(&json!("bad")));
    }

    #[test]
    fn test_error_from_text_body() {
        let err = error_from_response(StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded");
        assert_eq!(err.status, Some(500));
        assert_eq!(err.message, "upstream exploded");
        assert!(err.payload.is_empty());
    }

    #[test]
    fn test_error_from_empty_body() {
        let err = error_from_response(StatusCode::BAD_GATEWAY, "");
        assert_eq!(err.message, "502 Bad Gateway");
        assert!(err.payload.is_empty());
    }

    #[test]
    fn test_error_from_json_array_body() {
        let err = error_from_response(StatusCode::BAD_REQUEST, "[1,2]");
        assert_eq!(err.message, "[1,2]");
        assert!(err.payload.is_empty());
    }
}
