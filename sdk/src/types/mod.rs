//! Response types for the EventSquare store API.
//!
//! Each type names the fields the store session reads and keeps everything
//! else in an `extra` map, so payloads round-trip without loss.

pub mod cart;
pub mod edition;
pub mod event;
pub mod fields;
pub mod show;

pub use cart::Cart;
pub use edition::{CartRef, Channel, Edition, QueueRef};
pub use event::Event;
pub use show::{Seatmap, Show};
