//! Utility endpoints.

use std::sync::Arc;

use serde_json::Value;

use crate::client::{ClientError, Dispatcher};

/// Path for mint key generation.
pub const GENERATE_MINT_PATH: &str = "/api/utilities/generate-mint";

/// Client for utility operations.
#[derive(Debug, Clone)]
pub struct UtilitiesClient {
    dispatcher: Arc<Dispatcher>,
}

impl UtilitiesClient {
    /// Creates a client bound to `dispatcher`.
    #[must_use]
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Generates a fresh mint public key for token creation.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn generate_mint(&self) -> Result<Value, ClientError> {
        self.dispatcher.get(GENERATE_MINT_PATH).await
    }
}
