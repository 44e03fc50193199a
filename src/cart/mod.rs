//! The cart a customer builds while browsing the catalog.

pub mod pricing;

use bigdecimal::BigDecimal;
use tracing::debug;
use crate::domain::{LineItem, WaterType};

pub use pricing::{compute_total, format_amount};

/// Ordered line items, at most one per water type id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `water_type`, appending a new line if it is not in the cart yet.
    ///
    /// An existing line takes the given name and price.
    pub fn add(&mut self, water_type: &WaterType) {
        match self.position(&water_type.id) {
            Some(index) => {
                let line = &mut self.lines[index];
                line.water_type = water_type.clone();
                line.quantity = line.quantity.saturating_add(1);
            }
            None => self.lines.push(LineItem::new(water_type.clone(), 1)),
        }
        debug!(water_type_id = %water_type.id, "Added to cart");
    }

    /// Unknown ids are ignored.
    pub fn increment(&mut self, water_type_id: &str) {
        if let Some(index) = self.position(water_type_id) {
            let line = &mut self.lines[index];
            line.quantity = line.quantity.saturating_add(1);
        }
    }

    /// Lines that reach zero are dropped. Unknown ids are ignored.
    pub fn decrement(&mut self, water_type_id: &str) {
        if let Some(index) = self.position(water_type_id) {
            let line = &mut self.lines[index];
            line.quantity = line.quantity.saturating_sub(1);
            if line.quantity == 0 {
                self.lines.remove(index);
            }
        }
    }

    /// Unknown ids are ignored.
    pub fn remove(&mut self, water_type_id: &str) {
        self.lines.retain(|line| line.id() != water_type_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn quantity_of(&self, water_type_id: &str) -> u32 {
        self.position(water_type_id)
            .map(|index| self.lines[index].quantity)
            .unwrap_or(0)
    }

    /// Recomputed on every call; carts are small.
    pub fn total(&self) -> BigDecimal {
        compute_total(&self.lines)
    }

    fn position(&self, water_type_id: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.id() == water_type_id)
    }
}
