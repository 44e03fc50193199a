//! Order store entity. Orders are written once and never edited.

pub mod entity;
pub mod error;

pub use error::*;
