//! # Generic Messages
//!
//! The requests a [`ResourceClient`](crate::framework::ResourceClient) sends to a
//! [`ResourceActor`](crate::framework::ResourceActor), one variant per operation.

use crate::framework::{Resource, ResourceError};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, ResourceError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map to the five resource operations. Create and Update carry the
/// resource's own [`Resource::Payload`] type, so a dish payload can never reach
/// the order actor.
#[derive(Debug)]
pub enum ResourceRequest<T: Resource> {
    List {
        filter: Option<String>,
        respond_to: Response<Vec<T>>,
    },
    Create {
        payload: T::Payload,
        respond_to: Response<T>,
    },
    Read {
        id: String,
        respond_to: Response<T>,
    },
    Update {
        id: String,
        payload: T::Payload,
        respond_to: Response<T>,
    },
    Delete {
        id: String,
        respond_to: Response<()>,
    },
}
