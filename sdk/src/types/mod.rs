//! Request types for the FURY API.
//!
//! Public types are what callers build. Each endpoint's wire body is derived
//! from them after local validation, with camelCase keys and unset optional
//! fields left out entirely.

pub mod analytics;
pub mod protocol;
pub mod token;
pub mod trade;
pub mod transaction;
pub mod wallet;

pub use analytics::PnlParams;
pub use protocol::Protocol;
pub use token::{CreateTokenRequest, TokenCreationConfig, TokenMetadata};
pub use trade::{BurnRequest, BuyParams, CleanerRequest, SellParams, TradeOptions, TransferRequest};
pub use transaction::{Commitment, SendOptions, SignedTransaction};
pub use wallet::{ConsolidateParams, Recipient};
