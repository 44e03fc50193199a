//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_get`] to assert behavior
//! and script the actor's reply.

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use tokio::sync::{mpsc, oneshot};

type Responder<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Creates a mock client and a receiver for asserting requests.
///
/// The client sends to a channel the test controls instead of a running
/// `ResourceActor`, so replies (success, failure, a dropped responder) are
/// chosen per test.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::CreateParams, Responder<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, Responder<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<Responder<Vec<T>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, Responder<()>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::WaterTypeClient;
    use crate::domain::fixtures::{alkaline, mineral, price};
    use crate::domain::WaterType;
    use crate::water_type_actor::RegistryError;

    #[tokio::test]
    async fn test_mock_client() {
        let (inner, mut receiver) = create_mock_client::<WaterType>(10);
        let client = WaterTypeClient::new(inner);

        let create_task = tokio::spawn({
            let client = client.clone();
            async move { client.create_water_type("Mineral".into(), price("25")).await }
        });

        let (params, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(params.name, "Mineral");
        responder.send(Ok("wt_1".to_string())).unwrap();
        assert_eq!(create_task.await.unwrap(), Ok("wt_1".to_string()));

        let catalog_task = tokio::spawn(async move { client.catalog().await });
        let responder = expect_list(&mut receiver).await.expect("Expected List request");
        responder.send(Ok(vec![mineral(), alkaline()])).unwrap();

        let names: Vec<String> = catalog_task.await.unwrap().unwrap().into_iter().map(|w| w.name).collect();
        assert_eq!(names, vec!["Alkaline".to_string(), "Mineral".to_string()]);
    }

    #[tokio::test]
    async fn test_dropped_responder_is_network_error() {
        let (inner, mut receiver) = create_mock_client::<WaterType>(10);
        let client = WaterTypeClient::new(inner);

        let delete_task = tokio::spawn(async move { client.delete_water_type("wt_1".into()).await });
        let (id, responder) = expect_delete(&mut receiver).await.expect("Expected Delete request");
        assert_eq!(id, "wt_1");
        drop(responder);

        assert_eq!(
            delete_task.await.unwrap(),
            Err(RegistryError::Network("Actor dropped".to_string()))
        );
    }
}
