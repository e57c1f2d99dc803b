//! HTTP plumbing for the FURY REST API.
//!
//! [`Dispatcher`] is the only component that talks to the network. Domain
//! clients in [`crate::api`] build typed bodies and hand them to it.
//!
//! # Example
//!
//! ```rust,ignore
//! use fury_sdk::client::{ClientConfig, Dispatcher};
//! use reqwest::Method;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("https://api.fury.bot").with_api_key("my-key");
//!     let dispatcher = Dispatcher::new(config)?;
//!
//!     let health = dispatcher.request(Method::GET, "/health", None).await?;
//!     println!("{health}");
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ApiError, ClientError};
pub use http::Dispatcher;
