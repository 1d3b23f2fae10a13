//! Store session and URI helpers.

pub mod session;
pub mod uri;

pub use session::{CartItemUpdate, StoreSession};
pub use uri::UriSegments;
