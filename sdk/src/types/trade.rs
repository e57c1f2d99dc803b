//! Token trading request types.
//!
//! Buy and sell take a protocol *name* so that callers can pass through
//! user input; it is validated when the request is built, before anything is
//! sent. The remaining token operations use plain wire records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::protocol::Protocol;
use crate::error::{require, require_all, require_percentage, SdkError};

/// Upper bound for slippage tolerance (100%).
pub const MAX_SLIPPAGE_BPS: u16 = 10_000;

/// Optional settings shared by buy and sell.
///
/// Unset fields are left out of the request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeOptions {
    /// Affiliate wallet that receives a share of the fee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliate_address: Option<String>,

    /// Affiliate fee percentage, e.g. `"2"` for 2%.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliate_fee: Option<String>,

    /// Jito tip in lamports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jito_tip_lamports: Option<u64>,

    /// Slippage tolerance in basis points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slippage_bps: Option<u16>,
}

impl TradeOptions {
    /// Sets the affiliate address.
    #[must_use]
    pub fn with_affiliate_address(mut self, address: impl Into<String>) -> Self {
        self.affiliate_address = Some(address.into());
        self
    }

    /// Sets the affiliate fee.
    #[must_use]
    pub fn with_affiliate_fee(mut self, fee: impl Into<String>) -> Self {
        self.affiliate_fee = Some(fee.into());
        self
    }

    /// Sets the Jito tip.
    #[must_use]
    pub fn with_jito_tip_lamports(mut self, lamports: u64) -> Self {
        self.jito_tip_lamports = Some(lamports);
        self
    }

    /// Sets the slippage tolerance.
    #[must_use]
    pub fn with_slippage_bps(mut self, bps: u16) -> Self {
        self.slippage_bps = Some(bps);
        self
    }

    fn validate(&self) -> Result<(), SdkError> {
        if let Some(bps) = self.slippage_bps {
            if bps > MAX_SLIPPAGE_BPS {
                return Err(SdkError::invalid(
                    "slippageBps",
                    format!("{bps} exceeds {MAX_SLIPPAGE_BPS}"),
                ));
            }
        }
        Ok(())
    }
}

/// Parameters for buying a token.
#[derive(Debug, Clone, PartialEq)]
pub struct BuyParams {
    /// Wallets that perform the buy.
    pub wallet_addresses: Vec<String>,

    /// Mint of the token to buy.
    pub token_address: String,

    /// SOL to spend per wallet.
    pub sol_amount: Decimal,

    /// Protocol name, validated case-insensitively.
    pub protocol: String,

    /// Optional settings.
    pub options: TradeOptions,
}

impl BuyParams {
    /// Creates buy parameters routed through [`Protocol::Auto`].
    pub fn new<I, S>(wallet_addresses: I, token_address: impl Into<String>, sol_amount: Decimal) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            wallet_addresses: wallet_addresses.into_iter().map(Into::into).collect(),
            token_address: token_address.into(),
            sol_amount,
            protocol: Protocol::Auto.to_string(),
            options: TradeOptions::default(),
        }
    }

    /// Sets the protocol, either as a [`Protocol`] or a name.
    #[must_use]
    pub fn with_protocol(mut self, protocol: impl AsRef<str>) -> Self {
        self.protocol = protocol.as_ref().to_string();
        self
    }

    /// Sets the optional settings.
    #[must_use]
    pub fn with_options(mut self, options: TradeOptions) -> Self {
        self.options = options;
        self
    }

    pub(crate) fn into_request(self) -> Result<BuyRequest, SdkError> {
        require_all("walletAddresses", &self.wallet_addresses)?;
        require("tokenAddress", &self.token_address)?;
        if self.sol_amount <= Decimal::ZERO {
            return Err(SdkError::invalid("solAmount", "must be positive"));
        }
        let protocol = Protocol::parse(&self.protocol)?;
        self.options.validate()?;

        Ok(BuyRequest {
            wallet_addresses: self.wallet_addresses,
            token_address: self.token_address,
            sol_amount: self.sol_amount,
            protocol,
            options: self.options,
        })
    }
}

/// Wire body for `POST /api/tokens/buy`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BuyRequest {
    wallet_addresses: Vec<String>,
    token_address: String,
    sol_amount: Decimal,
    protocol: Protocol,
    #[serde(flatten)]
    options: TradeOptions,
}

/// Parameters for selling a token.
#[derive(Debug, Clone, PartialEq)]
pub struct SellParams {
    /// Wallets that perform the sell.
    pub wallet_addresses: Vec<String>,

    /// Mint of the token to sell.
    pub token_address: String,

    /// Share of each wallet's balance to sell, 1-100.
    pub percentage: u8,

    /// Protocol name, validated case-insensitively.
    pub protocol: String,

    /// Optional settings.
    pub options: TradeOptions,
}

impl SellParams {
    /// Creates parameters that sell the full balance through [`Protocol::Auto`].
    pub fn new<I, S>(wallet_addresses: I, token_address: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            wallet_addresses: wallet_addresses.into_iter().map(Into::into).collect(),
            token_address: token_address.into(),
            percentage: 100,
            protocol: Protocol::Auto.to_string(),
            options: TradeOptions::default(),
        }
    }

    /// Sets the percentage to sell.
    #[must_use]
    pub fn with_percentage(mut self, percentage: u8) -> Self {
        self.percentage = percentage;
        self
    }

    /// Sets the protocol, either as a [`Protocol`] or a name.
    #[must_use]
    pub fn with_protocol(mut self, protocol: impl AsRef<str>) -> Self {
        self.protocol = protocol.as_ref().to_string();
        self
    }

    /// Sets the optional settings.
    #[must_use]
    pub fn with_options(mut self, options: TradeOptions) -> Self {
        self.options = options;
        self
    }

    pub(crate) fn into_request(self) -> Result<SellRequest, SdkError> {
        require_all("walletAddresses", &self.wallet_addresses)?;
        require("tokenAddress", &self.token_address)?;
        require_percentage("percentage", self.percentage)?;
        let protocol = Protocol::parse(&self.protocol)?;
        self.options.validate()?;

        Ok(SellRequest {
            wallet_addresses: self.wallet_addresses,
            token_address: self.token_address,
            percentage: self.percentage,
            protocol,
            options: self.options,
        })
    }
}

/// Wire body for `POST /api/tokens/sell`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SellRequest {
    wallet_addresses: Vec<String>,
    token_address: String,
    percentage: u8,
    protocol: Protocol,
    #[serde(flatten)]
    options: TradeOptions,
}

/// Body for `POST /api/tokens/transfer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    /// Source wallet.
    pub sender_public_key: String,

    /// Destination wallet.
    pub receiver: String,

    /// Mint to transfer. Empty for native SOL.
    pub token_address: String,

    /// Amount, as a decimal string.
    pub amount: String,
}

impl TransferRequest {
    /// Creates a token transfer.
    pub fn new(
        sender_public_key: impl Into<String>,
        receiver: impl Into<String>,
        token_address: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            sender_public_key: sender_public_key.into(),
            receiver: receiver.into(),
            token_address: token_address.into(),
            amount: amount.into(),
        }
    }

    /// Creates a native SOL transfer.
    pub fn sol(
        sender_public_key: impl Into<String>,
        receiver: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self::new(sender_public_key, receiver, String::new(), amount)
    }

    pub(crate) fn validate(&self) -> Result<(), SdkError> {
        require("senderPublicKey", &self.sender_public_key)?;
        require("receiver", &self.receiver)?;
        require("amount", &self.amount)
    }
}

/// Body for `POST /api/tokens/burn`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BurnRequest {
    /// Wallet holding the tokens.
    pub wallet_public_key: String,

    /// Mint to burn.
    pub token_address: String,

    /// Amount, as a decimal string.
    pub amount: String,
}

impl BurnRequest {
    /// Creates a burn request.
    pub fn new(
        wallet_public_key: impl Into<String>,
        token_address: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            wallet_public_key: wallet_public_key.into(),
            token_address: token_address.into(),
            amount: amount.into(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), SdkError> {
        require("walletPublicKey", &self.wallet_public_key)?;
        require("tokenAddress", &self.token_address)?;
        require("amount", &self.amount)
    }
}

/// Body for `POST /api/tokens/cleaner`: sell from one wallet and buy from
/// another in a single call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanerRequest {
    /// Wallet that sells.
    pub seller_address: String,

    /// Wallet that buys.
    pub buyer_address: String,

    /// Mint to trade.
    pub token_address: String,

    /// Share of the seller's tokens to sell.
    pub sell_percentage: Decimal,

    /// Share of the buyer's SOL to spend.
    pub buy_percentage: Decimal,
}

impl CleanerRequest {
    /// Creates a cleaner request.
    pub fn new(
        seller_address: impl Into<String>,
        buyer_address: impl Into<String>,
        token_address: impl Into<String>,
        sell_percentage: Decimal,
        buy_percentage: Decimal,
    ) -> Self {
        Self {
            seller_address: seller_address.into(),
            buyer_address: buyer_address.into(),
            token_address: token_address.into(),
            sell_percentage,
            buy_percentage,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), SdkError> {
        require("sellerAddress", &self.seller_address)?;
        require("buyerAddress", &self.buyer_address)?;
        require("tokenAddress", &self.token_address)?;
        check_fraction("sellPercentage", self.sell_percentage)?;
        check_fraction("buyPercentage", self.buy_percentage)
    }
}

fn check_fraction(name: &'static str, value: Decimal) -> Result<(), SdkError> {
    if value <= Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(SdkError::invalid(name, format!("{value} is not within (0, 100]")));
    }
    Ok(())
}
