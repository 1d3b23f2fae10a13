//! EventSquare SDK - Rust client library for the EventSquare store API.
//!
//! This crate provides a store session that follows one visitor through an
//! event store: loading events and editions, keeping track of the visitor's
//! queue position and cart, and changing cart contents.
//!
//! # Session
//!
//! - [`StoreSession`] — Visitor session on top of a [`Transport`]
//! - [`CartItemUpdate`] — Quantity change for a ticket type
//! - [`UriSegments`] — Explicit parts of a store URI
//!
//! # Response Types
//!
//! - [`Event`], [`Edition`], [`Channel`] — Store catalogue
//! - [`Cart`] — Visitor cart
//! - [`Show`], [`Seatmap`] — Performances and seating
//!
//! # Example
//!
//! ```rust
//! use eventsquare_sdk::UriSegments;
//!
//! let uri = UriSegments::new()
//!     .with_host("eventsquare.store", "expo")
//!     .with_language("en")
//!     .with_edition("2024")
//!     .to_uri();
//! assert_eq!(uri, "expo.eventsquare.store/en/2024");
//! ```

pub mod client;
pub mod error;
pub mod store;
pub mod types;

pub use client::{ClientConfig, ClientError, EventSquareClient, Method, Parameters, Transport};
pub use error::SdkError;
pub use store::{CartItemUpdate, StoreSession, UriSegments};
pub use types::{Cart, CartRef, Channel, Edition, Event, QueueRef, Seatmap, Show};
