//! PnL analytics request types.

use serde::Serialize;

use crate::error::{require_all, SdkError};

/// Parameters for a PnL calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PnlParams {
    /// Wallets to include.
    pub addresses: Vec<String>,

    /// Restrict the calculation to one token.
    pub token_address: Option<String>,

    /// Ask the API to timestamp the result.
    pub include_timestamp: bool,
}

impl PnlParams {
    /// Creates parameters covering all tokens held by `addresses`.
    pub fn new<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            addresses: addresses.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Restricts the calculation to one token.
    #[must_use]
    pub fn with_token_address(mut self, token_address: impl Into<String>) -> Self {
        self.token_address = Some(token_address.into());
        self
    }

    /// Requests a timestamp in the response.
    #[must_use]
    pub fn with_timestamp(mut self) -> Self {
        self.include_timestamp = true;
        self
    }

    pub(crate) fn into_request(self) -> Result<PnlRequest, SdkError> {
        require_all("addresses", &self.addresses)?;

        Ok(PnlRequest {
            addresses: self.addresses.join(","),
            token_address: self.token_address.filter(|t| !t.is_empty()),
            options: self.include_timestamp.then_some(PnlOptions {
                include_timestamp: true,
            }),
        })
    }
}

/// Wire body for `POST /api/analytics/pnl`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PnlRequest {
    addresses: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    token_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<PnlOptions>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
struct PnlOptions {
    include_timestamp: bool,
}
