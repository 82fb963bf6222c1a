//! # Mock Framework & Testing Guide
//!
//! The `MockClient<T>` type hands out a real `ResourceClient<T>` whose requests are
//! answered from a queue of expectations instead of a running actor. It lets you test
//! code that *consumes* a client (view controllers, domain clients) quickly and
//! deterministically.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Raw helpers | Real Actor |
//! |---------|------------|-------------|------------|
//! | **Speed** | Instant | Instant | Fast (tokio spawn) |
//! | **Reply timing** | Immediate | **You decide** | Immediate |
//! | **Error Injection** | Easy (`return_err`) | Easy | Hard |
//! | **Use Case** | Logic around the client | Ordering / stale replies | Full system |
//!
//! ## Pattern 0: Fluent Expectations
//!
//! ```rust
//! use resource_actor::mock::MockClient;
//! use resource_actor::{ActorEntity, FrameworkError};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Item { id: u32 }
//! impl ActorEntity for Item {
//!     type Id = u32;
//!     fn id(&self) -> u32 { self.id }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Item>::new();
//!     mock.expect_list().return_ok(vec![Item { id: 1 }]);
//!     mock.expect_get(7).return_ok(None);
//!     mock.expect_get(8).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.list().await.unwrap().len(), 1);
//!     assert!(client.get(7).await.unwrap().is_none());
//!     assert!(matches!(client.get(8).await, Err(FrameworkError::ActorClosed)));
//!
//!     mock.verify();
//! }
//! ```
//!
//! ## Pattern 1: Deferred Replies
//!
//! [`create_mock_client`] returns the client together with the request receiver. Pull
//! requests off with [`expect_get`] / [`expect_list`] and answer them through the returned
//! responder *whenever you like*, including out of order. This is how to test that a
//! consumer copes with replies arriving late or after it has moved on.
//!
//! ```rust
//! use resource_actor::mock::{create_mock_client, expect_get};
//! use resource_actor::ActorEntity;
//!
//! #[derive(Clone, Debug)]
//! struct Item { id: u32 }
//! impl ActorEntity for Item {
//!     type Id = u32;
//!     fn id(&self) -> u32 { self.id }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (client, mut receiver) = create_mock_client::<Item>(4);
//!     let pending = tokio::spawn(async move { client.get(1).await });
//!
//!     let (id, responder) = expect_get(&mut receiver).await.unwrap();
//!     assert_eq!(id, 1);
//!     responder.send(Ok(Some(Item { id: 1 }))).unwrap();
//!
//!     assert!(pending.await.unwrap().unwrap().is_some());
//! }
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock client.
enum Expectation<T: ActorEntity> {
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in the order they were registered. A request that does not
/// match the next expectation (wrong kind or wrong ID) makes the background task panic,
/// which surfaces in the test as `ActorDropped` on the caller side and a failed
/// [`MockClient::verify`].
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "Get issued for an unexpected id");
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `get` operation for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Number of expectations not yet consumed.
    pub fn remaining(&self) -> usize {
        self.expectations.lock().unwrap().len()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.remaining();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<T: ActorEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> ListExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, items: Vec<T>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::List { response: Ok(items) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::List {
                response: Err(error),
            });
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: Option<T>) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            id: self.id,
            response: Ok(value),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            id: self.id,
            response: Err(error),
        });
    }
}

// =============================================================================
// RAW HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Nothing answers the requests until the test does, which makes this the tool for
/// exercising deferred and out-of-order replies.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Waits for the next request and returns its responder if it is a `List`.
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<oneshot::Sender<Result<Vec<T>, FrameworkError>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Waits for the next request and returns its ID and responder if it is a `Get`.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Book {
        id: u32,
        title: String,
    }

    impl ActorEntity for Book {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }
    }

    impl Book {
        fn new(id: u32, title: &str) -> Self {
            Self {
                id,
                title: title.to_string(),
            }
        }
    }

    #[tokio::test]
    async fn test_raw_helpers_answer_out_of_order() {
        let (client, mut receiver) = create_mock_client::<Book>(10);

        let first_client = client.clone();
        let first = tokio::spawn(async move { first_client.get(1).await });
        let (first_id, first_responder) = expect_get(&mut receiver).await.expect("Expected Get");
        assert_eq!(first_id, 1);

        let second = tokio::spawn(async move { client.list().await });
        let list_responder = expect_list(&mut receiver).await.expect("Expected List");

        // Answer the later request first.
        list_responder.send(Ok(vec![Book::new(2, "Dune")])).unwrap();
        let listed = second.await.unwrap().unwrap();
        assert_eq!(listed, vec![Book::new(2, "Dune")]);
        assert!(!first.is_finished());

        first_responder.send(Ok(None)).unwrap();
        assert_eq!(first.await.unwrap().unwrap(), None);
    }

    #[tokio::test]
    async fn test_dropped_responder_surfaces_as_actor_dropped() {
        let (client, mut receiver) = create_mock_client::<Book>(10);
        let pending = tokio::spawn(async move { client.get(5).await });

        let (_, responder) = expect_get(&mut receiver).await.unwrap();
        drop(responder);

        assert_eq!(pending.await.unwrap(), Err(FrameworkError::ActorDropped));
    }

    #[tokio::test]
    async fn test_closed_receiver_surfaces_as_actor_closed() {
        let (client, receiver) = create_mock_client::<Book>(10);
        drop(receiver);

        assert!(client.is_closed());
        assert_eq!(client.list().await, Err(FrameworkError::ActorClosed));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Book>::new();
        mock.expect_list().return_ok(vec![Book::new(1, "Emma")]);
        mock.expect_get(1).return_ok(Some(Book::new(1, "Emma")));
        mock.expect_get(2).return_ok(None);
        assert_eq!(mock.remaining(), 3);

        let client = mock.client();
        assert_eq!(client.list().await.unwrap().len(), 1);
        assert_eq!(client.get(1).await.unwrap().unwrap().title, "Emma");
        assert!(client.get(2).await.unwrap().is_none());

        mock.verify();
    }
}
