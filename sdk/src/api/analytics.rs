//! Analytics endpoints.

use std::sync::Arc;

use serde_json::Value;

use crate::client::{ClientError, Dispatcher};
use crate::types::PnlParams;

/// Path for PnL calculation.
pub const PNL_PATH: &str = "/api/analytics/pnl";

/// Client for analytics.
#[derive(Debug, Clone)]
pub struct AnalyticsClient {
    dispatcher: Arc<Dispatcher>,
}

impl AnalyticsClient {
    /// Creates a client bound to `dispatcher`.
    #[must_use]
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Calculates profit and loss for wallets, optionally for one token.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Sdk`] when no address is given and
    /// [`ClientError::Api`] if the request fails.
    pub async fn calculate_pnl(&self, params: PnlParams) -> Result<Value, ClientError> {
        let body = params.into_request()?;
        self.dispatcher.post(PNL_PATH, &body).await
    }
}
