//! # Generic Client
//!
//! This module defines the generic client for communicating with actors.

use crate::framework::message::ResourceRequest;
use crate::framework::{Resource, ResourceError};
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `ResourceActor`.
///
/// Holds only the channel sender, so cloning is cheap and clones can be shared
/// across tasks. Every method resolves to the actor's reply, or to
/// `ActorClosed`/`ActorDropped` if the actor is gone.
pub struct ResourceClient<T: Resource> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Resource> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Resource> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn list(&self, filter: Option<String>) -> Result<Vec<T>, ResourceError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::List { filter, respond_to })
            .await
            .map_err(|_| ResourceError::ActorClosed)?;
        response.await.map_err(|_| ResourceError::ActorDropped)?
    }

    pub async fn create(&self, payload: T::Payload) -> Result<T, ResourceError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Create {
                payload,
                respond_to,
            })
            .await
            .map_err(|_| ResourceError::ActorClosed)?;
        response.await.map_err(|_| ResourceError::ActorDropped)?
    }

    pub async fn read(&self, id: String) -> Result<T, ResourceError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Read { id, respond_to })
            .await
            .map_err(|_| ResourceError::ActorClosed)?;
        response.await.map_err(|_| ResourceError::ActorDropped)?
    }

    pub async fn update(&self, id: String, payload: T::Payload) -> Result<T, ResourceError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Update {
                id,
                payload,
                respond_to,
            })
            .await
            .map_err(|_| ResourceError::ActorClosed)?;
        response.await.map_err(|_| ResourceError::ActorDropped)?
    }

    pub async fn delete(&self, id: String) -> Result<(), ResourceError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Delete { id, respond_to })
            .await
            .map_err(|_| ResourceError::ActorClosed)?;
        response.await.map_err(|_| ResourceError::ActorDropped)?
    }
}
