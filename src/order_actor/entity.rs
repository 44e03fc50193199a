use chrono::Utc;
use tracing::debug;
use crate::actor_framework::{Entity, FrameworkError};
use crate::domain::{Order, OrderDraft};

impl Entity for Order {
    type Id = String;
    type CreateParams = OrderDraft;
    type Patch = (); // Orders are immutable

    fn id(&self) -> &String { &self.id }

    /// Records the draft under `id`, stamped with the current time.
    ///
    /// # Notes
    /// The draft is checked by the order client before it reaches the store;
    /// only an empty draft is rejected here.
    fn from_create_params(id: String, params: OrderDraft) -> Result<Self, FrameworkError> {
        if params.lines.is_empty() {
            return Err(FrameworkError::Validation("Order has no items".to_string()));
        }
        Ok(Order::from_draft(id, params, Utc::now()))
    }

    fn on_create(&mut self) -> Result<(), FrameworkError> {
        let json = self.to_json().map_err(|e| FrameworkError::Validation(e.to_string()))?;
        debug!(order = %json, "Order recorded");
        Ok(())
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), FrameworkError> {
        Err(FrameworkError::Validation(format!("Order {} cannot be edited", self.id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::draft;

    #[test]
    fn test_recorded_order_serializes() {
        let mut order = Order::from_create_params("order_1".into(), draft()).unwrap();
        assert_eq!(order.on_create(), Ok(()));
        assert!(order.to_json().unwrap().contains("\"id\":\"order_1\""));
    }

    #[test]
    fn test_empty_draft_and_edits_rejected() {
        let mut empty = draft();
        empty.lines.clear();
        assert!(matches!(
            Order::from_create_params("order_1".into(), empty),
            Err(FrameworkError::Validation(_))
        ));

        let mut order = Order::from_create_params("order_2".into(), draft()).unwrap();
        assert!(order.on_update(()).is_err());
    }
}
