//! Water-type management screens: access guard and delete confirmation.

pub mod auth_gate;
pub mod delete_dialog;

pub use auth_gate::*;
pub use delete_dialog::*;
