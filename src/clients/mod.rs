//! Typed clients for the registry and order actors.

#[macro_use]
pub mod macros;
pub mod water_type_client;
pub mod order_client;

pub use water_type_client::*;
pub use order_client::*;
