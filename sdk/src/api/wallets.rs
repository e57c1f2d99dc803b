//! Wallet endpoints.

use std::sync::Arc;

use serde_json::Value;

use crate::client::{ClientError, Dispatcher};
use crate::types::wallet::DistributeRequest;
use crate::types::{ConsolidateParams, Recipient};

/// Path for distributing funds.
pub const DISTRIBUTE_PATH: &str = "/api/wallets/distribute";
/// Path for consolidating funds.
pub const CONSOLIDATE_PATH: &str = "/api/wallets/consolidate";

/// Client for moving funds between wallets.
#[derive(Debug, Clone)]
pub struct WalletsClient {
    dispatcher: Arc<Dispatcher>,
}

impl WalletsClient {
    /// Creates a client bound to `dispatcher`.
    #[must_use]
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Sends funds from `sender` to each recipient.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Sdk`] when the sender or recipient list is
    /// empty and [`ClientError::Api`] if the request fails.
    pub async fn distribute(
        &self,
        sender: impl Into<String>,
        recipients: Vec<Recipient>,
    ) -> Result<Value, ClientError> {
        let body = DistributeRequest::new(sender.into(), recipients)?;
        self.dispatcher.post(DISTRIBUTE_PATH, &body).await
    }

    /// Moves a share of each source balance into one wallet.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Sdk`] for missing addresses or a percentage
    /// outside 1-100, and [`ClientError::Api`] if the request fails.
    pub async fn consolidate(&self, params: ConsolidateParams) -> Result<Value, ClientError> {
        let body = params.into_request()?;
        self.dispatcher.post(CONSOLIDATE_PATH, &body).await
    }
}
