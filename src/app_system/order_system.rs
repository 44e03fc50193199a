use tracing::{info, error};
use crate::clients::{OrderClient, WaterTypeClient};
use crate::actor_framework::ResourceActor;
use crate::domain::{Order, WaterType};
use super::AppConfig;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

fn id_sequence(prefix: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(1));
    move || format!("{}_{}", prefix, counter.fetch_add(1, Ordering::SeqCst))
}

/// Starts the registry and order actors and hands out their clients.
pub struct OrderSystem {
    pub water_type_client: WaterTypeClient,
    pub order_client: OrderClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    pub fn new(config: &AppConfig) -> Self {
        info!(mailbox_size = config.mailbox_size, "Starting order system");

        // 1. Water-type registry
        let (water_type_actor, water_type_inner) =
            ResourceActor::<WaterType>::new("water_type_registry", config.mailbox_size, id_sequence("water_type"));
        let water_type_client = WaterTypeClient::new(water_type_inner);
        let water_type_handle = tokio::spawn(water_type_actor.run());

        // 2. Order store, validating against the registry
        let (order_actor, order_inner) =
            ResourceActor::<Order>::new("order_store", config.mailbox_size, id_sequence("order"));
        let order_client = OrderClient::new(order_inner, water_type_client.clone());
        let order_handle = tokio::spawn(order_actor.run());

        Self {
            water_type_client,
            order_client,
            handles: vec![water_type_handle, order_handle],
        }
    }

    /// Drops this system's clients and waits for the actors to drain.
    ///
    /// Clones handed out elsewhere keep their actor alive until they are dropped too.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.water_type_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
