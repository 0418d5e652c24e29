//! Dish-specific resource logic: the rules and the [`Resource`](crate::framework::Resource)
//! implementation that plug [`Dish`] into the generic actor.

pub mod entity;
pub mod rules;

use crate::clients::DishClient;
use crate::framework::{IdGenerator, ResourceActor, ResourceStore};
use crate::model::Dish;

/// Creates a new Dish actor and its client.
pub fn new(
    buffer_size: usize,
    store: impl ResourceStore<Dish> + 'static,
    ids: IdGenerator,
) -> (ResourceActor<Dish>, DishClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, store, ids);
    (actor, DishClient::new(generic_client))
}
