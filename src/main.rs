mod domain;
mod cart;
mod checkout;
mod clients;
mod invoice;
mod water_types;

mod app_system;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod water_type_actor;
mod order_actor;

use std::str::FromStr;
use anyhow::Context;
use bigdecimal::BigDecimal;
use tracing::{error, info, warn, Instrument};
use crate::app_system::{AppConfig, OrderSystem, setup_tracing};
use crate::cart::format_amount;
use crate::checkout::OrderSession;
use crate::domain::{FormField, RefillingStation};
use crate::invoice::TextInvoiceRenderer;
use crate::water_types::{require_session, DeleteDialog, SessionProvider};

/// The demo runs as the signed-in station owner.
struct OwnerSession;

impl SessionProvider for OwnerSession {
    fn has_session(&self) -> bool {
        true
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    setup_tracing(&config);

    info!("Starting refill order demo");

    let system = OrderSystem::new(&config);
    let registry = system.water_type_client.clone();

    // Seed the catalog
    for (name, price) in [("Mineral", "25.00"), ("Alkaline", "40.00"), ("Purified", "20.00")] {
        let price = BigDecimal::from_str(price).context("seed price")?;
        let id = registry.create_water_type(name.to_string(), price).await?;
        info!(water_type_id = %id, name, "Water type registered");
    }
    let catalog = registry.catalog().await?;

    let station = RefillingStation {
        id: "station_1".into(),
        owner_id: "owner_1".into(),
        station_name: "Aqua Fresh Refilling".into(),
        address: Some("45 Mabini Ave".into()),
        barangay: Some("Poblacion".into()),
        landmark: Some("Across the public market".into()),
        contact_no: Some("09181234567".into()),
        tel_no: None,
        delivery_mode: Some("Delivery, Pick-up".into()),
    };
    for line in station.details() {
        info!("{}", line);
    }

    let mut session = OrderSession::new(Some(station));
    let span = tracing::info_span!("order_processing");
    let receipt = async {
        for water_type in catalog.iter().filter(|w| w.name != "Purified") {
            session.add_to_cart(water_type);
        }
        if let Some(mineral) = catalog.iter().find(|w| w.name == "Mineral") {
            session.increment(&mineral.id);
            session.increment(&mineral.id);
        }
        info!(total = %format_amount(&session.total()), items = session.cart().len(), "Cart ready");

        session.set_field(FormField::FirstName, "Maria");
        session.set_field(FormField::LastName, "Santos");
        session.set_field(FormField::ContactNo, "0917 123 4567");
        session.set_field(FormField::Email, "maria@example.com");
        session.set_field(FormField::Address, "12 Rizal St, San Roque");
        session.set_field(FormField::DeliveryMode, "Delivery");
        session.set_field(FormField::Remarks, "Please call on arrival");

        session.submit(&system.order_client).await
    }
    .instrument(span)
    .await;

    match receipt {
        Ok(receipt) => {
            info!(order_id = %receipt.order_id, message = %receipt.message, "Order processed successfully");
            let renderer = TextInvoiceRenderer::new(config.currency.clone(), config.invoice_file_stem.clone());
            let document = session.render_invoice(&renderer)?;
            info!(file_name = %document.file_name, bytes = document.bytes.len(), "Invoice ready");
            println!("{}", String::from_utf8_lossy(&document.bytes));
        }
        Err(e) => error!(error = %e, message = %e.user_message(), "Order processing failed"),
    }

    // Remove a water type through the confirmation dialog
    require_session(&OwnerSession)?;
    if let Some(purified) = catalog.iter().find(|w| w.name == "Purified") {
        let mut dialog = DeleteDialog::new(purified.id.clone(), purified.name.clone());
        dialog.toggle();
        info!("{}", dialog.prompt());
        match dialog.confirm(&registry).await {
            Ok(outcome) => {
                let remaining = registry.catalog().await?.len();
                info!(?outcome, remaining, "Catalog refreshed");
            }
            Err(e) => warn!(error = %e, "Water type not deleted"),
        }
    }

    drop(registry);
    system.shutdown().await.map_err(anyhow::Error::msg)?;

    info!("Application completed successfully");
    Ok(())
}
