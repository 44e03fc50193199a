use bigdecimal::BigDecimal;
use crate::actor_framework::{Entity, FrameworkError};
use crate::domain::{WaterType, WaterTypeCreate, WaterTypePatch};

fn validate_name(name: &str) -> Result<String, FrameworkError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(FrameworkError::Validation("Name is required".to_string()));
    }
    Ok(name.to_string())
}

fn validate_price(price: BigDecimal) -> Result<BigDecimal, FrameworkError> {
    if price < BigDecimal::from(0) {
        return Err(FrameworkError::Validation(format!("Price must not be negative: {}", price)));
    }
    Ok(price)
}

impl Entity for WaterType {
    type Id = String;
    type CreateParams = WaterTypeCreate;
    type Patch = WaterTypePatch;

    fn id(&self) -> &String { &self.id }

    /// Registers a water type.
    ///
    /// # Errors
    /// Rejects a blank name or a negative price.
    fn from_create_params(id: String, params: WaterTypeCreate) -> Result<Self, FrameworkError> {
        Ok(Self {
            id,
            name: validate_name(&params.name)?,
            price: validate_price(params.price)?,
        })
    }

    /// Applies whichever of name and price are present, with the same rules as creation.
    fn on_update(&mut self, patch: WaterTypePatch) -> Result<(), FrameworkError> {
        if let Some(name) = patch.name {
            self.name = validate_name(&name)?;
        }
        if let Some(price) = patch.price {
            self.price = validate_price(price)?;
        }
        Ok(())
    }
}
