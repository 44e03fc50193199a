use async_trait::async_trait;
use tracing::{debug, error, info, instrument};
use crate::cart::{compute_total, format_amount};
use crate::checkout::OrderGateway;
use crate::domain::{Order, OrderDraft, OrderReceipt};
use crate::order_actor::OrderError;
use crate::actor_framework::ResourceClient;
use crate::clients::WaterTypeClient;

/// Client for interacting with the order store.
///
/// Placing an order checks every line against the registry before the
/// order is recorded.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    water_type_client: WaterTypeClient,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, water_type_client: WaterTypeClient) -> Self {
        Self {
            inner,
            water_type_client,
        }
    }

    #[instrument(
        skip(self, draft),
        fields(station_id = %draft.station.station_id, lines = draft.lines.len(), total = %draft.total)
    )]
    pub async fn create_order(&self, draft: OrderDraft) -> Result<OrderReceipt, OrderError> {
        info!("Processing create_order request (Client Side)");
        debug!(fields = ?draft.form_fields(), "Order form");

        // Step 1: Reject empty orders
        if draft.lines.is_empty() {
            error!("Order has no items");
            return Err(OrderError::Validation("Order has no items".to_string()));
        }

        // Step 2: Check each line against the catalog
        for line in &draft.lines {
            match self.water_type_client.get_water_type(line.id().to_string()).await {
                Ok(Some(current)) if current.price != line.water_type.price => {
                    error!(water_type_id = %current.id, "Price changed since it was added");
                    return Err(OrderError::Conflict(format!(
                        "Price of {} changed from {} to {}",
                        current.name,
                        format_amount(&line.water_type.price),
                        format_amount(&current.price)
                    )));
                }
                Ok(Some(current)) => info!(water_type = %current.name, "Water type validation successful"),
                Ok(None) => {
                    error!(water_type_id = %line.id(), "Water type not found");
                    return Err(OrderError::NotFound(format!("water type {}", line.id())));
                }
                Err(e) => {
                    error!(error = %e, "Water type validation failed");
                    return Err(e.into());
                }
            }
        }

        // Step 3: The submitted total must match the lines
        let expected = compute_total(&draft.lines);
        if expected != draft.total {
            error!(expected = %expected, "Total does not match items");
            return Err(OrderError::Conflict(format!(
                "Total {} does not match items ({})",
                format_amount(&draft.total),
                format_amount(&expected)
            )));
        }

        // Step 4: Record the order
        let station_name = draft.station.station_name.clone();
        let order_id = self.inner.create(draft).await.map_err(OrderError::from)?;
        info!(order_id = %order_id, "Order created successfully");

        Ok(OrderReceipt {
            message: format!("Order {} sent to {}", order_id, station_name),
            order_id,
        })
    }
}

// Placed orders are never deleted
impl_client_reads!(OrderClient, Order, OrderError, order);

#[async_trait]
impl OrderGateway for OrderClient {
    async fn place_order(&self, draft: OrderDraft) -> Result<OrderReceipt, OrderError> {
        self.create_order(draft).await
    }
}
