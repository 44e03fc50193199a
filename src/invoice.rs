//! Invoice documents for placed orders.
//!
//! Rendering works on a read-only [`Order`] snapshot and never touches the
//! session that produced it.

use crate::cart::format_amount;
use crate::domain::Order;

/// A downloadable document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDocument {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Turns a placed order into a document. PDF backends plug in here.
pub trait InvoiceRenderer {
    fn render(&self, order: &Order) -> InvoiceDocument;
}

/// Plain-text receipt.
#[derive(Debug, Clone)]
pub struct TextInvoiceRenderer {
    currency: String,
    file_stem: String,
}

impl TextInvoiceRenderer {
    pub fn new(currency: impl Into<String>, file_stem: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            file_stem: file_stem.into(),
        }
    }

    fn body(&self, order: &Order) -> String {
        let customer = &order.customer;
        let mut lines = vec![
            format!("INVOICE {}", order.id),
            format!("Date: {}", order.placed_at.format("%Y-%m-%d %H:%M UTC")),
            format!("Station: {}", order.station.station_name),
            String::new(),
            format!("Customer: {}", customer.full_name()),
            format!("Contact No: {}", customer.contact_no),
            format!("Email: {}", customer.email),
            format!("Address: {}", customer.address),
            format!("Delivery mode: {}", customer.delivery_mode),
        ];
        if let Some(remarks) = &customer.remarks {
            lines.push(format!("Remarks: {}", remarks));
        }
        lines.push(String::new());

        lines.extend(order.lines.iter().map(|line| {
            format!(
                "{} x{} @ {} {} = {} {}",
                line.water_type.name,
                line.quantity,
                self.currency,
                format_amount(&line.water_type.price),
                self.currency,
                format_amount(&line.subtotal()),
            )
        }));
        lines.push(String::new());
        lines.push(format!("Total: {} {}", self.currency, format_amount(&order.total)));

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

impl InvoiceRenderer for TextInvoiceRenderer {
    fn render(&self, order: &Order) -> InvoiceDocument {
        InvoiceDocument {
            file_name: format!("{}.txt", self.file_stem),
            content_type: "text/plain; charset=utf-8",
            bytes: self.body(order).into_bytes(),
        }
    }
}
