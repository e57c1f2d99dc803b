//! Signed transaction submission types.

use serde::{Deserialize, Serialize};

use crate::error::SdkError;

/// Commitment level used for preflight simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    /// Processed by the node.
    Processed,
    /// Voted on by a supermajority.
    #[default]
    Confirmed,
    /// Rooted.
    Finalized,
}

/// Per-transaction submission options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendOptions {
    /// Skip the preflight simulation.
    pub skip_preflight: bool,

    /// Commitment for preflight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preflight_commitment: Option<Commitment>,
}

/// A transaction signed by the caller, ready to submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedTransaction {
    /// Serialized, signed transaction as returned to the signer.
    pub transaction: String,

    /// Submission options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<SendOptions>,
}

impl SignedTransaction {
    /// Wraps an encoded transaction without options.
    pub fn new(transaction: impl Into<String>) -> Self {
        Self {
            transaction: transaction.into(),
            options: None,
        }
    }

    /// Sets the submission options.
    #[must_use]
    pub fn with_options(mut self, options: SendOptions) -> Self {
        self.options = Some(options);
        self
    }
}

/// Wire body for `POST /api/transactions/send`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SendTransactionsRequest {
    transactions: Vec<SignedTransaction>,
    use_rpc: bool,
}

impl SendTransactionsRequest {
    pub(crate) fn new(transactions: Vec<SignedTransaction>, use_rpc: bool) -> Result<Self, SdkError> {
        if transactions.is_empty() || transactions.iter().any(|tx| tx.transaction.is_empty()) {
            return Err(SdkError::MissingParameter("transactions"));
        }
        Ok(Self {
            transactions,
            use_rpc,
        })
    }
}
