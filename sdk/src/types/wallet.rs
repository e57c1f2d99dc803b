//! Wallet distribution and consolidation types.

use serde::{Deserialize, Serialize};

use crate::error::{require, require_all, require_percentage, SdkError};

/// Recipient of a distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    /// Destination wallet.
    pub address: String,

    /// Amount, as a decimal string.
    pub amount: String,
}

impl Recipient {
    /// Creates a recipient.
    pub fn new(address: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            amount: amount.into(),
        }
    }
}

/// Wire body for `POST /api/wallets/distribute`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct DistributeRequest {
    sender: String,
    recipients: Vec<Recipient>,
}

impl DistributeRequest {
    pub(crate) fn new(sender: String, recipients: Vec<Recipient>) -> Result<Self, SdkError> {
        require("sender", &sender)?;
        if recipients.is_empty() {
            return Err(SdkError::MissingParameter("recipients"));
        }
        for recipient in &recipients {
            require("recipients.address", &recipient.address)?;
            require("recipients.amount", &recipient.amount)?;
        }
        Ok(Self { sender, recipients })
    }
}

/// Parameters for consolidating balances into one wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsolidateParams {
    /// Wallets to drain.
    pub source_addresses: Vec<String>,

    /// Wallet receiving the funds.
    pub receiver_address: String,

    /// Share of each source balance to move, 1-100.
    pub percentage: u8,

    /// Token to consolidate. SOL when unset.
    pub token_address: Option<String>,
}

impl ConsolidateParams {
    /// Creates parameters that move the full balance.
    pub fn new<I, S>(source_addresses: I, receiver_address: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            source_addresses: source_addresses.into_iter().map(Into::into).collect(),
            receiver_address: receiver_address.into(),
            percentage: 100,
            token_address: None,
        }
    }

    /// Sets the percentage to move.
    #[must_use]
    pub fn with_percentage(mut self, percentage: u8) -> Self {
        self.percentage = percentage;
        self
    }

    /// Sets the token to consolidate.
    #[must_use]
    pub fn with_token_address(mut self, token_address: impl Into<String>) -> Self {
        self.token_address = Some(token_address.into());
        self
    }

    pub(crate) fn into_request(self) -> Result<ConsolidateRequest, SdkError> {
        require_all("sourceAddresses", &self.source_addresses)?;
        require("receiverAddress", &self.receiver_address)?;
        require_percentage("percentage", self.percentage)?;

        Ok(ConsolidateRequest {
            source_addresses: self.source_addresses,
            receiver_address: self.receiver_address,
            percentage: self.percentage,
            token_address: self.token_address.filter(|t| !t.is_empty()),
        })
    }
}

/// Wire body for `POST /api/wallets/consolidate`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ConsolidateRequest {
    source_addresses: Vec<String>,
    receiver_address: String,
    percentage: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    token_address: Option<String>,
}
