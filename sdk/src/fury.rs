//! Entry point bundling the dispatcher and every domain client.

use std::sync::Arc;

use serde_json::Value;

use crate::api::{AnalyticsClient, TokensClient, TransactionsClient, UtilitiesClient, WalletsClient};
use crate::client::{ClientConfig, ClientError, Dispatcher};

/// Path of the health endpoint.
pub const HEALTH_PATH: &str = "/health";

/// FURY API SDK.
///
/// All domain clients share one [`Dispatcher`], so cloning the SDK or any of
/// its clients reuses the same connection pool and credential.
#[derive(Debug, Clone)]
pub struct FurySdk {
    dispatcher: Arc<Dispatcher>,
    tokens: TokensClient,
    transactions: TransactionsClient,
    analytics: AnalyticsClient,
    utilities: UtilitiesClient,
    wallets: WalletsClient,
}

impl FurySdk {
    /// Creates an SDK for `base_url`, authenticating with `api_key` if given.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL or key is invalid.
    pub fn new(base_url: impl Into<String>, api_key: Option<&str>) -> Result<Self, ClientError> {
        let mut config = ClientConfig::new(base_url);
        if let Some(key) = api_key {
            config = config.with_api_key(key);
        }
        Self::with_config(config)
    }

    /// Creates an SDK from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_config(config: ClientConfig) -> Result<Self, ClientError> {
        let dispatcher = Arc::new(Dispatcher::new(config)?);

        Ok(Self {
            tokens: TokensClient::new(Arc::clone(&dispatcher)),
            transactions: TransactionsClient::new(Arc::clone(&dispatcher)),
            analytics: AnalyticsClient::new(Arc::clone(&dispatcher)),
            utilities: UtilitiesClient::new(Arc::clone(&dispatcher)),
            wallets: WalletsClient::new(Arc::clone(&dispatcher)),
            dispatcher,
        })
    }

    /// Creates an SDK configured from the environment.
    ///
    /// See [`ClientConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Returns an error if the environment holds an invalid configuration.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::with_config(ClientConfig::from_env()?)
    }

    /// Token operations.
    #[must_use]
    pub fn tokens(&self) -> &TokensClient {
        &self.tokens
    }

    /// Transaction submission.
    #[must_use]
    pub fn transactions(&self) -> &TransactionsClient {
        &self.transactions
    }

    /// Analytics.
    #[must_use]
    pub fn analytics(&self) -> &AnalyticsClient {
        &self.analytics
    }

    /// Utilities.
    #[must_use]
    pub fn utilities(&self) -> &UtilitiesClient {
        &self.utilities
    }

    /// Wallet operations.
    #[must_use]
    pub fn wallets(&self) -> &WalletsClient {
        &self.wallets
    }

    /// The shared dispatcher, for endpoints without a typed wrapper.
    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Checks that the API is up.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn health_check(&self) -> Result<Value, ClientError> {
        self.dispatcher.get(HEALTH_PATH).await
    }
}
