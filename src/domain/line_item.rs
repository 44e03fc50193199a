use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use super::WaterType;

/// One water type and the requested quantity. Quantity is always at least 1
/// while the item sits in a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub water_type: WaterType,
    pub quantity: u32,
}

impl LineItem {
    pub fn new(water_type: WaterType, quantity: u32) -> Self {
        Self { water_type, quantity }
    }

    pub fn id(&self) -> &str {
        &self.water_type.id
    }

    /// `unit price * quantity`
    pub fn subtotal(&self) -> BigDecimal {
        &self.water_type.price * &BigDecimal::from(self.quantity)
    }
}
