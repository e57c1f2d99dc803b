//! Token creation types.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{require, require_all, SdkError};

/// Default SOL amount used when creating a token.
pub const DEFAULT_CREATION_SOL_AMOUNT: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

/// Token metadata shown on launchpads and explorers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMetadata {
    /// Token name.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Description.
    pub description: String,
    /// Logo image URL.
    pub file: String,
    /// Telegram link.
    pub telegram: Option<String>,
    /// Twitter link.
    pub twitter: Option<String>,
    /// Website link.
    pub website: Option<String>,
}

impl TokenMetadata {
    /// Creates metadata without social links.
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        description: impl Into<String>,
        file: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            description: description.into(),
            file: file.into(),
            telegram: None,
            twitter: None,
            website: None,
        }
    }

    /// Sets the Telegram link.
    #[must_use]
    pub fn with_telegram(mut self, url: impl Into<String>) -> Self {
        self.telegram = Some(url.into());
        self
    }

    /// Sets the Twitter link.
    #[must_use]
    pub fn with_twitter(mut self, url: impl Into<String>) -> Self {
        self.twitter = Some(url.into());
        self
    }

    /// Sets the website link.
    #[must_use]
    pub fn with_website(mut self, url: impl Into<String>) -> Self {
        self.website = Some(url.into());
        self
    }
}

/// Configuration for token creation.
///
/// Serializes to `{"tokenCreation": {"metadata": {..}, "defaultSolAmount": n}}`
/// with absent social links sent as empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenCreationConfig {
    /// Token metadata.
    pub metadata: TokenMetadata,
    /// SOL amount used when a wallet has no explicit amount.
    pub default_sol_amount: Decimal,
}

impl TokenCreationConfig {
    /// Creates a configuration with [`DEFAULT_CREATION_SOL_AMOUNT`].
    #[must_use]
    pub fn new(metadata: TokenMetadata) -> Self {
        Self {
            metadata,
            default_sol_amount: DEFAULT_CREATION_SOL_AMOUNT,
        }
    }

    /// Sets the default SOL amount.
    #[must_use]
    pub fn with_default_sol_amount(mut self, amount: Decimal) -> Self {
        self.default_sol_amount = amount;
        self
    }
}

#[derive(Serialize)]
struct WireMetadata<'a> {
    name: &'a str,
    symbol: &'a str,
    description: &'a str,
    file: &'a str,
    telegram: &'a str,
    twitter: &'a str,
    website: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireTokenCreation<'a> {
    metadata: WireMetadata<'a>,
    default_sol_amount: Decimal,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireCreationConfig<'a> {
    token_creation: WireTokenCreation<'a>,
}

impl Serialize for TokenCreationConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let m = &self.metadata;
        WireCreationConfig {
            token_creation: WireTokenCreation {
                metadata: WireMetadata {
                    name: &m.name,
                    symbol: &m.symbol,
                    description: &m.description,
                    file: &m.file,
                    telegram: m.telegram.as_deref().unwrap_or_default(),
                    twitter: m.twitter.as_deref().unwrap_or_default(),
                    website: m.website.as_deref().unwrap_or_default(),
                },
                default_sol_amount: self.default_sol_amount,
            },
        }
        .serialize(serializer)
    }
}

/// Body for `POST /api/tokens/create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTokenRequest {
    /// Wallets that receive the initial distribution.
    pub wallet_addresses: Vec<String>,

    /// Public key of the new mint, see
    /// [`UtilitiesClient::generate_mint`](crate::api::UtilitiesClient::generate_mint).
    pub mint_pubkey: String,

    /// Creation settings.
    pub config: TokenCreationConfig,

    /// SOL to spend per wallet, in the order of `wallet_addresses`.
    pub amounts: Vec<Decimal>,
}

impl CreateTokenRequest {
    /// Creates a token creation request.
    pub fn new<I, S>(
        wallet_addresses: I,
        mint_pubkey: impl Into<String>,
        config: TokenCreationConfig,
        amounts: Vec<Decimal>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            wallet_addresses: wallet_addresses.into_iter().map(Into::into).collect(),
            mint_pubkey: mint_pubkey.into(),
            config,
            amounts,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), SdkError> {
        require_all("walletAddresses", &self.wallet_addresses)?;
        require("mintPubkey", &self.mint_pubkey)?;
        require("config.metadata.name", &self.config.metadata.name)?;
        require("config.metadata.symbol", &self.config.metadata.symbol)?;
        if self.amounts.is_empty() {
            return Err(SdkError::MissingParameter("amounts"));
        }
        Ok(())
    }
}
