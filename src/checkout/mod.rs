//! Checkout: the per-customer session that turns a cart into a placed order.

pub mod error;
pub mod gateway;
pub mod submission;
pub mod session;

pub use error::*;
pub use gateway::*;
pub use submission::*;
pub use session::*;
