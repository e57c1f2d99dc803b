//! Domain clients for the FURY API.
//!
//! Each client maps its methods one-to-one onto API endpoints. A method
//! validates its input, sends exactly one request through the shared
//! [`Dispatcher`](crate::client::Dispatcher) and returns the decoded JSON body
//! unchanged.

pub mod analytics;
pub mod tokens;
pub mod transactions;
pub mod utilities;
pub mod wallets;

pub use analytics::AnalyticsClient;
pub use tokens::TokensClient;
pub use transactions::TransactionsClient;
pub use utilities::UtilitiesClient;
pub use wallets::WalletsClient;
