//! FURY SDK - Rust client library for the FURY trading automation API.
//!
//! The API builds Solana transactions for token trading, transfers, token
//! creation and wallet management; this crate wraps each endpoint in a typed
//! method. Signing and submitting to the chain are left to the caller.
//!
//! # Modules
//!
//! - [`client`] — [`Dispatcher`], [`ClientConfig`] and error types
//! - [`api`] — one client per endpoint group
//! - [`types`] — request types such as [`BuyParams`] and [`Protocol`]
//!
//! # Errors
//!
//! Every call returns [`ClientError`]: `Sdk` for problems caught locally
//! (nothing is sent), `Api` for transport failures and non-success responses.
//!
//! # Example
//!
//! ```rust,ignore
//! use fury_sdk::{BuyParams, FurySdk, Protocol};
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fury = FurySdk::new("https://api.fury.bot", None)?;
//!
//!     let health = fury.health_check().await?;
//!     println!("{health}");
//!
//!     let params = BuyParams::new(
//!         ["FuRytmqsoo4mKQAhNXoB64JD4SsiVqxYkUKC6i1VaBot"],
//!         "Bq5nFQ82jBYcFKRzUSximpCmCg5t8L8tVMqsn612pump",
//!         Decimal::new(15, 1),
//!     )
//!     .with_protocol(Protocol::Pumpfun);
//!     let result = fury.tokens().buy(params).await?;
//!     println!("{}", result["transactions"]);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod fury;
pub mod types;

pub use client::{ApiError, ClientConfig, ClientError, Dispatcher};
pub use error::SdkError;
pub use fury::FurySdk;
pub use types::{
    BurnRequest, BuyParams, CleanerRequest, Commitment, ConsolidateParams, CreateTokenRequest,
    PnlParams, Protocol, Recipient, SellParams, SendOptions, SignedTransaction, TokenCreationConfig,
    TokenMetadata, TradeOptions, TransferRequest,
};
