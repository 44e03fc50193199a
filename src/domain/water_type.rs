use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// A water product offered by a refilling station, priced per unit (litre or gallon).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterType {
    pub id: String,
    pub name: String,
    pub price: BigDecimal,
}

/// Payload for registering a new water type.
#[derive(Debug, Clone)]
pub struct WaterTypeCreate {
    pub name: String,
    pub price: BigDecimal,
}

/// Payload for editing an existing water type.
#[derive(Debug, Clone, Default)]
pub struct WaterTypePatch {
    pub name: Option<String>,
    pub price: Option<BigDecimal>,
}

impl WaterType {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: BigDecimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}
