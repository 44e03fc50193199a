use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::{CustomerInfo, LineItem, StationRef};

/// A placed order. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub lines: Vec<LineItem>,
    pub total: BigDecimal,
    pub customer: CustomerInfo,
    pub station: StationRef,
    pub placed_at: DateTime<Utc>,
}

/// Everything needed to place an order: a snapshot of the cart, its total,
/// the validated customer and the station it goes to.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub lines: Vec<LineItem>,
    pub total: BigDecimal,
    pub customer: CustomerInfo,
    pub station: StationRef,
}

/// Returned by the order store once an order has been recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderReceipt {
    pub order_id: String,
    pub message: String,
}

impl OrderDraft {
    /// Customer and station fields in the form encoding the order endpoint accepts.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let customer = &self.customer;
        vec![
            ("firstName", customer.first_name.clone()),
            ("lastName", customer.last_name.clone()),
            ("contact_no", customer.contact_no.to_string()),
            ("email", customer.email.to_string()),
            ("address", customer.address.clone()),
            ("delivery_mode", customer.delivery_mode.to_string()),
            ("remarks", customer.remarks.clone().unwrap_or_default()),
            ("water_station_id", self.station.station_id.clone()),
            ("refilling_station_user_id", self.station.owner_id.clone()),
            ("refilling_station_name", self.station.station_name.clone()),
        ]
    }
}

impl Order {
    pub fn from_draft(id: impl Into<String>, draft: OrderDraft, placed_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            lines: draft.lines,
            total: draft.total,
            customer: draft.customer,
            station: draft.station,
            placed_at,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
