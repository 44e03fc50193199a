use crate::domain::OrderReceipt;
use super::CheckoutError;

/// Where the current order submission stands.
///
/// `Idle -> Submitting -> Succeeded | Failed`. Starting again is allowed from
/// any state except `Submitting`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded(OrderReceipt),
    Failed(CheckoutError),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub(crate) fn start(&mut self) -> Result<(), CheckoutError> {
        if self.is_submitting() {
            return Err(CheckoutError::SubmissionInProgress);
        }
        *self = SubmissionState::Submitting;
        Ok(())
    }

    pub(crate) fn finish(&mut self, outcome: Result<OrderReceipt, CheckoutError>) {
        *self = match outcome {
            Ok(receipt) => SubmissionState::Succeeded(receipt),
            Err(e) => SubmissionState::Failed(e),
        };
    }
}
