//! Order-specific resource logic and entity implementation.

pub mod entity;
pub mod rules;

use crate::clients::OrderClient;
use crate::framework::{IdGenerator, ResourceActor, ResourceStore};
use crate::model::Order;

/// Creates a new Order actor and its client.
pub fn new(
    buffer_size: usize,
    store: impl ResourceStore<Order> + 'static,
    ids: IdGenerator,
) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, store, ids);
    (actor, OrderClient::new(generic_client))
}
