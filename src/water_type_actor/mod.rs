//! Water-type registry entity: the catalog the ordering flow reads from.

pub mod entity;
pub mod error;

pub use error::*;
