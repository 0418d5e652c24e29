//! # Mock Framework
//!
//! Utilities for testing clients in isolation, without spawning a `ResourceActor`.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | No real state (expectations) | Real store and pipelines |
//! | **Use Case** | Logic *around* the client | The handlers themselves or the full system |
//! | **Error Injection** | Easy (`return_err`) | Requires specific state |
//!
//! Two styles are available:
//!
//! - [`create_mock_client`] returns a client and the raw receiver; helpers like
//!   [`expect_create`] pull the next request off the channel so a test can inspect it
//!   and answer through its responder.
//! - [`MockClient`] answers requests from a queue of expectations set up front and
//!   panics on any request it did not expect.
//!
//! ```rust
//! use restaurant_recipe::framework::mock::MockClient;
//! use restaurant_recipe::framework::ResourceError;
//! use restaurant_recipe::model::Order;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Order>::new();
//!     mock.expect_delete("3").return_err(ResourceError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.delete("3".into()).await, Err(ResourceError::ActorClosed));
//!     mock.verify();
//! }
//! ```

use crate::framework::message::{ResourceRequest, Response};
use crate::framework::{Resource, ResourceClient, ResourceError};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the response the mock will send back.
enum Expectation<T: Resource> {
    List(Result<Vec<T>, ResourceError>),
    Create(Result<T, ResourceError>),
    Read {
        id: String,
        response: Result<T, ResourceError>,
    },
    Update {
        id: String,
        response: Result<T, ResourceError>,
    },
    Delete {
        id: String,
        response: Result<(), ResourceError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in the order they were declared. A request that does
/// not match the next expectation (wrong operation or wrong id) panics the
/// background task, which the test observes as `ActorDropped`.
pub struct MockClient<T: Resource> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Resource> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (ResourceRequest::List { respond_to, .. }, Some(Expectation::List(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Read { id, respond_to }, Some(Expectation::Read { id: expected, response })) => {
                        assert_eq!(id, expected, "Read for unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Update { id, respond_to, .. }, Some(Expectation::Update { id: expected, response })) => {
                        assert_eq!(id, expected, "Update for unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Delete { id, respond_to }, Some(Expectation::Delete { id: expected, response })) => {
                        assert_eq!(id, expected, "Delete for unexpected id");
                        let _ = respond_to.send(response);
                    }
                    _ => panic!("Unexpected request or expectation mismatch"),
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

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(self.expectations.clone(), Expectation::List)
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), Expectation::Create)
    }

    pub fn expect_read(&mut self, id: impl Into<String>) -> ExpectationBuilder<T, T> {
        let id = id.into();
        ExpectationBuilder::new(self.expectations.clone(), move |response| Expectation::Read {
            id,
            response,
        })
    }

    pub fn expect_update(&mut self, id: impl Into<String>) -> ExpectationBuilder<T, T> {
        let id = id.into();
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Update { id, response }
        })
    }

    pub fn expect_delete(&mut self, id: impl Into<String>) -> ExpectationBuilder<T, ()> {
        let id = id.into();
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Delete { id, response }
        })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

impl<T: Resource> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Completes an expectation by choosing its response.
pub struct ExpectationBuilder<T: Resource, V> {
    expectations: Expectations<T>,
    make: Box<dyn FnOnce(Result<V, ResourceError>) -> Expectation<T> + Send>,
}

impl<T: Resource, V> ExpectationBuilder<T, V> {
    fn new(
        expectations: Expectations<T>,
        make: impl FnOnce(Result<V, ResourceError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations,
            make: Box::new(make),
        }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: V) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ResourceError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<V, ResourceError>) {
        let expectation = (self.make)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// RECEIVER HELPERS
// =============================================================================

/// Creates a client whose requests arrive on the returned receiver.
///
/// Use it with [`expect_create`], [`expect_update`] and [`expect_delete`] to assert
/// exactly what a client wrapper sends and to answer it deterministically.
pub fn create_mock_client<T: Resource>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Resource>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Payload, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create {
            payload,
            respond_to,
        }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: Resource>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(String, T::Payload, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            payload,
            respond_to,
        }) => Some((id, payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: Resource>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(String, Response<()>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}
