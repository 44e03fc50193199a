use bigdecimal::BigDecimal;
use tracing::{debug, instrument};
use crate::domain::{WaterType, WaterTypeCreate, WaterTypePatch};
use crate::water_type_actor::RegistryError;
use crate::actor_framework::ResourceClient;

/// Client for the water-type registry.
#[derive(Clone)]
pub struct WaterTypeClient {
    inner: ResourceClient<WaterType>,
}

impl_basic_client!(WaterTypeClient, WaterType, RegistryError, water_type);

impl WaterTypeClient {
    #[instrument(skip(self))]
    pub async fn create_water_type(&self, name: String, price: BigDecimal) -> Result<String, RegistryError> {
        debug!("Sending request");
        self.inner.create(WaterTypeCreate { name, price }).await.map_err(RegistryError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_water_type(&self, id: String, patch: WaterTypePatch) -> Result<WaterType, RegistryError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(RegistryError::from)
    }

    /// Catalog listing, sorted by name then id.
    #[instrument(skip(self))]
    pub async fn catalog(&self) -> Result<Vec<WaterType>, RegistryError> {
        let mut water_types = self.list_water_types().await?;
        water_types.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(water_types)
    }
}
