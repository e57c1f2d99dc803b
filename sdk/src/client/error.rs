//! Client error types.
//!
//! Every network-facing operation fails with [`ClientError`], which separates
//! local problems ([`SdkError`]) from failures reported by, or on the way to,
//! the remote API ([`ApiError`]).

use std::fmt;

use serde_json::{Map, Value};

use crate::error::SdkError;

/// Error raised when the API rejects a request or cannot be reached.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// HTTP status code. `None` when no response was received.
    pub status: Option<u16>,

    /// Human-readable message.
    pub message: String,

    /// Decoded error body. Empty when the body was not a JSON object.
    pub payload: Map<String, Value>,
}

impl ApiError {
    /// Creates an error for a request that never produced a response.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
            payload: Map::new(),
        }
    }

    /// Creates an error for a non-success response.
    #[must_use]
    pub fn with_status(status: u16, message: impl Into<String>, payload: Map<String, Value>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
            payload,
        }
    }

    /// Returns true if the API answered with a 4xx status.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self.status, Some(400..=499))
    }

    /// Returns true if the API answered with a 5xx status.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self.status, Some(500..=599))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "API error ({}): {}", status, self.message),
            None => write!(f, "API error: {}", self.message),
        }
    }
}

impl std::error::Error for ApiError {}

/// Client errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Local validation, configuration or decoding failure.
    Sdk(SdkError),

    /// The API rejected the request or the transport failed.
    Api(ApiError),
}

impl ClientError {
    /// Returns the API error, if this is one.
    #[must_use]
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            Self::Sdk(_) => None,
        }
    }

    /// Returns the HTTP status code carried by an API error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.as_api().and_then(|err| err.status)
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sdk(e) => write!(f, "{}", e),
            Self::Api(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Sdk(e) => Some(e),
            Self::Api(e) => Some(e),
        }
    }
}

impl From<SdkError> for ClientError {
    fn from(err: SdkError) -> Self {
        Self::Sdk(err)
    }
}

impl From<ApiError> for ClientError {
    fn from(err: ApiError) -> Self {
        Self::Api(err)
    }
}
