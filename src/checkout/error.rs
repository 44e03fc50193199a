use thiserror::Error;
use crate::domain::ValidationError;
use crate::order_actor::OrderError;

/// Errors surfaced by the checkout session.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    #[error("Cart is empty")]
    EmptyCart,
    #[error("No refilling station selected")]
    MissingStation,
    #[error(transparent)]
    InvalidCustomer(#[from] ValidationError),
    #[error("An order is already being submitted")]
    SubmissionInProgress,
    #[error("No order is being submitted")]
    NotSubmitting,
    #[error("There is no placed order to print")]
    NothingToPrint,
    #[error(transparent)]
    Order(#[from] OrderError),
}

impl CheckoutError {
    /// Text shown to the customer next to the form.
    pub fn user_message(&self) -> String {
        match self {
            CheckoutError::EmptyCart => "You must add waters for your orders".to_string(),
            CheckoutError::MissingStation => "Please choose a refilling station first.".to_string(),
            CheckoutError::InvalidCustomer(e) => e.to_string(),
            CheckoutError::SubmissionInProgress => "Your order is still being submitted.".to_string(),
            CheckoutError::NotSubmitting => "There is no order waiting for a reply.".to_string(),
            CheckoutError::NothingToPrint => "Place an order before downloading an invoice.".to_string(),
            CheckoutError::Order(OrderError::Network(_)) => "Unable to save.".to_string(),
            CheckoutError::Order(OrderError::Conflict(msg)) => {
                format!("Your cart is out of date: {}. Please review it and try again.", msg)
            }
            CheckoutError::Order(OrderError::NotFound(what)) => {
                format!("Some items are no longer available ({}).", what)
            }
            CheckoutError::Order(OrderError::Validation(msg)) => msg.clone(),
        }
    }
}
