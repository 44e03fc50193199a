use std::collections::HashMap;
use std::hash::Hash;
use std::fmt::{Debug, Display};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks and Params)
// =============================================================================

/// Errors raised by the generic resource layer.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Ord + Clone + Send + Sync + Display + Debug;
    type CreateParams: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and creation params
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, FrameworkError>;

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) -> Result<(), FrameworkError> { Ok(()) }
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), FrameworkError>;
    fn on_delete(&self) -> Result<(), FrameworkError> { Ok(()) }
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    name: &'static str,
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        name: &'static str,
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            name,
            receiver,
            store: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        (actor, ResourceClient::new(sender))
    }

    pub async fn run(mut self) {
        info!(actor = self.name, "Actor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let id = (self.next_id_fn)();
                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create() {
                                let _ = respond_to.send(Err(e));
                                continue;
                            }
                            debug!(actor = self.name, id = %id, "Item created");
                            self.store.insert(id.clone(), item);
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => { let _ = respond_to.send(Err(e)); }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let mut items: Vec<T> = self.store.values().cloned().collect();
                    items.sort_by(|a, b| a.id().cmp(b.id()));
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    if let Some(item) = self.store.get_mut(&id) {
                        // Apply to a copy so a rejected patch leaves the stored item intact
                        let mut updated = item.clone();
                        if let Err(e) = updated.on_update(patch) {
                            let _ = respond_to.send(Err(e));
                            continue;
                        }
                        *item = updated.clone();
                        let _ = respond_to.send(Ok(updated));
                    } else {
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete() {
                            let _ = respond_to.send(Err(e));
                            continue;
                        }
                        self.store.remove(&id);
                        debug!(actor = self.name, id = %id, "Item deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }
        info!(actor = self.name, "Actor stopped");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(build(respond_to))
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T::Id, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { respond_to }).await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update { id, patch, respond_to }).await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Debug, PartialEq)]
    struct Tank {
        id: String,
        label: String,
    }

    #[derive(Debug)]
    struct TankCreate {
        label: String,
    }

    #[derive(Debug)]
    struct TankPatch {
        label: Option<String>,
    }

    impl Entity for Tank {
        type Id = String;
        type CreateParams = TankCreate;
        type Patch = TankPatch;

        fn id(&self) -> &String { &self.id }

        fn from_create_params(id: String, params: TankCreate) -> Result<Self, FrameworkError> {
            if params.label.is_empty() {
                return Err(FrameworkError::Validation("label required".into()));
            }
            Ok(Self { id, label: params.label })
        }

        fn on_update(&mut self, patch: TankPatch) -> Result<(), FrameworkError> {
            if let Some(label) = patch.label {
                if label.is_empty() {
                    return Err(FrameworkError::Validation("label required".into()));
                }
                self.label = label;
            }
            Ok(())
        }
    }

    fn spawn_tanks() -> ResourceClient<Tank> {
        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || format!("tank_{}", counter.fetch_add(1, Ordering::SeqCst));
        let (actor, client) = ResourceActor::new("tanks", 10, next_id);
        tokio::spawn(actor.run());
        client
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let client = spawn_tanks();

        let id = client.create(TankCreate { label: "Main".into() }).await.unwrap();
        assert_eq!(id, "tank_1");
        assert_eq!(client.get(id).await.unwrap().unwrap().label, "Main");

        let err = client.create(TankCreate { label: String::new() }).await.unwrap_err();
        assert!(matches!(err, FrameworkError::Validation(_)));
        assert_eq!(client.get("tank_2".into()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_rejected_update_keeps_stored_item() {
        let client = spawn_tanks();
        let id = client.create(TankCreate { label: "Main".into() }).await.unwrap();

        let err = client.update(id.clone(), TankPatch { label: Some(String::new()) }).await.unwrap_err();
        assert!(matches!(err, FrameworkError::Validation(_)));
        assert_eq!(client.get(id).await.unwrap().unwrap().label, "Main");
    }

    #[tokio::test]
    async fn test_list_and_delete() {
        let client = spawn_tanks();
        client.create(TankCreate { label: "A".into() }).await.unwrap();
        let second = client.create(TankCreate { label: "B".into() }).await.unwrap();

        let listed: Vec<String> = client.list().await.unwrap().into_iter().map(|t| t.id).collect();
        assert_eq!(listed, vec!["tank_1".to_string(), "tank_2".to_string()]);

        client.delete(second.clone()).await.unwrap();
        assert_eq!(client.list().await.unwrap().len(), 1);
        assert_eq!(client.delete(second).await, Err(FrameworkError::NotFound("tank_2".into())));
    }

    #[tokio::test]
    async fn test_closed_actor_reports_error() {
        let (actor, client) = ResourceActor::<Tank>::new("tanks", 1, || "tank".to_string());
        drop(actor);
        let err = client.get("tank".into()).await.unwrap_err();
        assert_eq!(err, FrameworkError::ActorClosed);
    }
}
