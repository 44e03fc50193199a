pub mod water_type;
pub mod line_item;
pub mod customer;
pub mod station;
pub mod order;

pub use water_type::*;
pub use line_item::*;
pub use customer::*;
pub use station::*;
pub use order::*;
