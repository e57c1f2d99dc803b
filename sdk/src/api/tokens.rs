//! Token endpoints.

use std::sync::Arc;

use serde_json::Value;

use crate::client::{ClientError, Dispatcher};
use crate::types::{
    BurnRequest, BuyParams, CleanerRequest, CreateTokenRequest, SellParams, TransferRequest,
};

/// Path for buying tokens.
pub const BUY_PATH: &str = "/api/tokens/buy";
/// Path for selling tokens.
pub const SELL_PATH: &str = "/api/tokens/sell";
/// Path for transferring tokens.
pub const TRANSFER_PATH: &str = "/api/tokens/transfer";
/// Path for creating a token.
pub const CREATE_PATH: &str = "/api/tokens/create";
/// Path for burning tokens.
pub const BURN_PATH: &str = "/api/tokens/burn";
/// Path for the combined sell/buy operation.
pub const CLEANER_PATH: &str = "/api/tokens/cleaner";

/// Client for token operations.
///
/// Trading endpoints return unsigned transactions; signing and submission are
/// up to the caller (see [`TransactionsClient`](crate::api::TransactionsClient)).
#[derive(Debug, Clone)]
pub struct TokensClient {
    dispatcher: Arc<Dispatcher>,
}

impl TokensClient {
    /// Creates a client bound to `dispatcher`.
    #[must_use]
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Buys a token from one or more wallets.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Sdk`] for an unknown protocol or missing
    /// parameters, without sending anything, and [`ClientError::Api`] if the
    /// request fails.
    pub async fn buy(&self, params: BuyParams) -> Result<Value, ClientError> {
        let body = params.into_request()?;
        self.dispatcher.post(BUY_PATH, &body).await
    }

    /// Sells a share of a token balance from one or more wallets.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Sdk`] for an unknown protocol, a percentage
    /// outside 1-100 or missing parameters, and [`ClientError::Api`] if the
    /// request fails.
    pub async fn sell(&self, params: SellParams) -> Result<Value, ClientError> {
        let body = params.into_request()?;
        self.dispatcher.post(SELL_PATH, &body).await
    }

    /// Transfers a token, or SOL when the token address is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is empty or the request fails.
    pub async fn transfer(&self, request: TransferRequest) -> Result<Value, ClientError> {
        request.validate()?;
        self.dispatcher.post(TRANSFER_PATH, &request).await
    }

    /// Creates a new token and buys it from the given wallets.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is empty or the request fails.
    pub async fn create(&self, request: CreateTokenRequest) -> Result<Value, ClientError> {
        request.validate()?;
        self.dispatcher.post(CREATE_PATH, &request).await
    }

    /// Burns tokens held by a wallet.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is empty or the request fails.
    pub async fn burn(&self, request: BurnRequest) -> Result<Value, ClientError> {
        request.validate()?;
        self.dispatcher.post(BURN_PATH, &request).await
    }

    /// Sells from one wallet and buys from another in a single call.
    ///
    /// # Errors
    ///
    /// Returns an error if a field is missing, a percentage is outside
    /// (0, 100], or the request fails.
    pub async fn cleaner(&self, request: CleanerRequest) -> Result<Value, ClientError> {
        request.validate()?;
        self.dispatcher.post(CLEANER_PATH, &request).await
    }
}
