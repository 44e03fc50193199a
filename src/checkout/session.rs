use bigdecimal::BigDecimal;
use chrono::Utc;
use tracing::{info, instrument, warn};
use crate::cart::Cart;
use crate::domain::{
    CustomerForm, CustomerInfo, FormField, Order, OrderDraft, OrderReceipt, RefillingStation, WaterType,
};
use crate::invoice::{InvoiceDocument, InvoiceRenderer};
use crate::order_actor::OrderError;
use super::{CheckoutError, OrderGateway, SubmissionState};

/// State owned by one customer while they order from one station.
///
/// # Reset contract
/// After a successful submission the cart is empty, the form is blank, the
/// placed order is kept for the invoice and `ready_to_print` is set. After a
/// failed submission the cart and form are exactly as they were.
#[derive(Debug, Default)]
pub struct OrderSession {
    station: Option<RefillingStation>,
    cart: Cart,
    form: CustomerForm,
    submission: SubmissionState,
    message: Option<String>,
    ready_to_print: bool,
    placed_order: Option<Order>,
}

impl OrderSession {
    pub fn new(station: Option<RefillingStation>) -> Self {
        Self {
            station,
            ..Default::default()
        }
    }

    pub fn station(&self) -> Option<&RefillingStation> {
        self.station.as_ref()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn form(&self) -> &CustomerForm {
        &self.form
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn ready_to_print(&self) -> bool {
        self.ready_to_print
    }

    pub fn placed_order(&self) -> Option<&Order> {
        self.placed_order.as_ref()
    }

    pub fn total(&self) -> BigDecimal {
        self.cart.total()
    }

    // --- Cart events ---

    pub fn add_to_cart(&mut self, water_type: &WaterType) {
        self.cart.add(water_type);
    }

    pub fn increment(&mut self, water_type_id: &str) {
        self.cart.increment(water_type_id);
    }

    pub fn decrement(&mut self, water_type_id: &str) {
        self.cart.decrement(water_type_id);
    }

    pub fn remove_from_cart(&mut self, water_type_id: &str) {
        self.cart.remove(water_type_id);
    }

    // --- Form events ---

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    // --- Submission ---

    /// Validates the session and moves it to `Submitting`.
    ///
    /// Validation failures leave the submission state untouched; they are not
    /// submissions.
    pub fn begin_submission(&mut self) -> Result<OrderDraft, CheckoutError> {
        if self.submission.is_submitting() {
            warn!("Submission already in progress");
            return Err(CheckoutError::SubmissionInProgress);
        }
        let draft = match self.draft() {
            Ok(draft) => draft,
            Err(e) => {
                warn!(error = %e, "Order rejected before submission");
                self.message = Some(e.user_message());
                return Err(e);
            }
        };
        self.submission.start()?;
        Ok(draft)
    }

    /// Applies the gateway's answer to a submission started with
    /// [`begin_submission`](Self::begin_submission).
    ///
    /// # Errors
    /// `NotSubmitting` when no submission is in flight; the session is left as is.
    pub fn finish_submission(
        &mut self,
        draft: OrderDraft,
        result: Result<OrderReceipt, OrderError>,
    ) -> Result<OrderReceipt, CheckoutError> {
        if !self.submission.is_submitting() {
            warn!("Reply arrived with no submission in progress");
            return Err(CheckoutError::NotSubmitting);
        }
        match result {
            Ok(receipt) => {
                info!(order_id = %receipt.order_id, "Order placed");
                self.placed_order = Some(Order::from_draft(receipt.order_id.clone(), draft, Utc::now()));
                self.cart.clear();
                self.form = CustomerForm::default();
                self.ready_to_print = true;
                self.message = Some(receipt.message.clone());
                self.submission.finish(Ok(receipt.clone()));
                Ok(receipt)
            }
            Err(e) => {
                let error = CheckoutError::from(e);
                warn!(error = %error, "Order submission failed");
                self.message = Some(error.user_message());
                self.submission.finish(Err(error.clone()));
                Err(error)
            }
        }
    }

    /// Sends the current cart and form as one order. No retries.
    #[instrument(skip(self, gateway), fields(lines = self.cart.len()))]
    pub async fn submit<G: OrderGateway + ?Sized>(&mut self, gateway: &G) -> Result<OrderReceipt, CheckoutError> {
        let draft = self.begin_submission()?;
        let result = gateway.place_order(draft.clone()).await;
        self.finish_submission(draft, result)
    }

    /// Renders the most recently placed order.
    pub fn render_invoice<R: InvoiceRenderer + ?Sized>(&self, renderer: &R) -> Result<InvoiceDocument, CheckoutError> {
        match (&self.placed_order, self.ready_to_print) {
            (Some(order), true) => Ok(renderer.render(order)),
            _ => Err(CheckoutError::NothingToPrint),
        }
    }

    fn draft(&self) -> Result<OrderDraft, CheckoutError> {
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let station = self.station.as_ref().ok_or(CheckoutError::MissingStation)?;
        let customer = CustomerInfo::parse(&self.form)?;
        Ok(OrderDraft {
            lines: self.cart.lines().to_vec(),
            total: self.cart.total(),
            customer,
            station: station.reference(),
        })
    }
}
