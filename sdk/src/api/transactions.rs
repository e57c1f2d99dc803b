//! Transaction submission endpoint.

use std::sync::Arc;

use serde_json::Value;

use crate::client::{ClientError, Dispatcher};
use crate::types::transaction::SendTransactionsRequest;
use crate::types::SignedTransaction;

/// Path for submitting a bundle.
pub const SEND_PATH: &str = "/api/transactions/send";

/// Client for submitting signed transactions.
#[derive(Debug, Clone)]
pub struct TransactionsClient {
    dispatcher: Arc<Dispatcher>,
}

impl TransactionsClient {
    /// Creates a client bound to `dispatcher`.
    #[must_use]
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Submits a bundle of signed transactions.
    ///
    /// With `use_rpc` unset the bundle goes through the bundle service
    /// instead of plain RPC submission.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Sdk`] for an empty bundle and
    /// [`ClientError::Api`] if the request fails.
    pub async fn send(
        &self,
        transactions: Vec<SignedTransaction>,
        use_rpc: bool,
    ) -> Result<Value, ClientError> {
        let body = SendTransactionsRequest::new(transactions, use_rpc)?;
        self.dispatcher.post(SEND_PATH, &body).await
    }
}
