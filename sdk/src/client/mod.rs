//! Transport layer for the EventSquare store API.
//!
//! [`Transport`] is the seam the store session talks through;
//! [`EventSquareClient`] is the `reqwest` implementation of it.
//!
//! # Example
//!
//! ```rust,ignore
//! use eventsquare_sdk::client::{ClientConfig, EventSquareClient};
//! use eventsquare_sdk::StoreSession;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EventSquareClient::new(
//!         ClientConfig::new("https://api.eventsquare.io/1.0").with_api_key("key"),
//!     )?;
//!
//!     let mut store = StoreSession::new(client);
//!     store.set_language("en");
//!     store.load("expo", "2024", Some("public"), None).await?;
//!     println!("queued: {}", store.is_queue());
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod http;
#[cfg(test)]
pub(crate) mod mock;
pub mod transport;

pub use config::ClientConfig;
pub use error::ClientError;
pub use http::EventSquareClient;
pub use transport::{Method, Parameters, Transport};
