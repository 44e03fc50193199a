use tracing::{info, instrument, warn};
use crate::clients::WaterTypeClient;
use crate::water_type_actor::RegistryError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    Confirming { message: Option<String> },
}

/// What the caller should do after a confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The row is gone; reload the listing.
    Deleted,
    /// The dialog was not open, nothing was sent.
    Ignored,
}

/// Confirmation dialog guarding the deletion of one water type.
#[derive(Debug, Clone)]
pub struct DeleteDialog {
    water_type_id: String,
    water_type_name: String,
    state: DialogState,
}

impl DeleteDialog {
    pub fn new(water_type_id: impl Into<String>, water_type_name: impl Into<String>) -> Self {
        Self {
            water_type_id: water_type_id.into(),
            water_type_name: water_type_name.into(),
            state: DialogState::Closed,
        }
    }

    pub fn state(&self) -> &DialogState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, DialogState::Confirming { .. })
    }

    pub fn message(&self) -> Option<&str> {
        match &self.state {
            DialogState::Confirming { message } => message.as_deref(),
            DialogState::Closed => None,
        }
    }

    pub fn prompt(&self) -> String {
        format!(
            "Are you sure you want to delete {}? This action cannot be undone.",
            self.water_type_name
        )
    }

    /// Opens a closed dialog, closes an open one.
    pub fn toggle(&mut self) {
        self.state = match self.state {
            DialogState::Closed => DialogState::Confirming { message: None },
            DialogState::Confirming { .. } => DialogState::Closed,
        };
    }

    pub fn cancel(&mut self) {
        self.state = DialogState::Closed;
    }

    /// Deletes the water type. On failure the registry's message is shown
    /// as-is and the dialog stays open.
    #[instrument(skip(self, registry), fields(water_type_id = %self.water_type_id))]
    pub async fn confirm(&mut self, registry: &WaterTypeClient) -> Result<DeleteOutcome, RegistryError> {
        if !self.is_open() {
            return Ok(DeleteOutcome::Ignored);
        }

        match registry.delete_water_type(self.water_type_id.clone()).await {
            Ok(()) => {
                info!(water_type = %self.water_type_name, "Water type deleted");
                self.state = DialogState::Closed;
                Ok(DeleteOutcome::Deleted)
            }
            Err(e) => {
                warn!(error = %e, "Delete failed");
                self.state = DialogState::Confirming { message: Some(e.to_string()) };
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::ResourceActor;
    use crate::domain::fixtures::price;
    use crate::domain::WaterType;

    fn spawn_registry() -> WaterTypeClient {
        let (actor, inner) = ResourceActor::<WaterType>::new("water_types", 8, || "wt_1".to_string());
        tokio::spawn(actor.run());
        WaterTypeClient::new(inner)
    }

    #[test]
    fn test_toggle_and_cancel() {
        let mut dialog = DeleteDialog::new("wt_1", "Mineral");
        assert!(!dialog.is_open());

        dialog.toggle();
        assert_eq!(dialog.state(), &DialogState::Confirming { message: None });
        assert_eq!(dialog.prompt(), "Are you sure you want to delete Mineral? This action cannot be undone.");

        dialog.cancel();
        assert_eq!(dialog.state(), &DialogState::Closed);

        dialog.toggle();
        dialog.toggle();
        assert!(!dialog.is_open());
    }

    #[tokio::test]
    async fn test_confirm_deletes_and_closes() {
        let registry = spawn_registry();
        let id = registry.create_water_type("Mineral".into(), price("25")).await.unwrap();

        let mut dialog = DeleteDialog::new(id.clone(), "Mineral");
        dialog.toggle();
        assert_eq!(dialog.confirm(&registry).await, Ok(DeleteOutcome::Deleted));
        assert!(!dialog.is_open());
        assert_eq!(registry.get_water_type(id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_dialog_open_with_message() {
        let registry = spawn_registry();
        let mut dialog = DeleteDialog::new("wt_404", "Ghost");
        dialog.toggle();

        let err = dialog.confirm(&registry).await.unwrap_err();
        assert_eq!(err, RegistryError::NotFound("wt_404".into()));
        assert!(dialog.is_open());
        assert_eq!(dialog.message(), Some("Water type not found: wt_404"));

        // Closing clears the message
        dialog.toggle();
        assert_eq!(dialog.message(), None);
    }

    #[tokio::test]
    async fn test_confirm_on_closed_dialog_sends_nothing() {
        let registry = spawn_registry();
        let id = registry.create_water_type("Mineral".into(), price("25")).await.unwrap();

        let mut dialog = DeleteDialog::new(id.clone(), "Mineral");
        assert_eq!(dialog.confirm(&registry).await, Ok(DeleteOutcome::Ignored));
        assert!(registry.get_water_type(id).await.unwrap().is_some());
    }
}
