use super::macros::impl_resource_client;
use crate::framework::ResourceClient;
use crate::model::{Dish, DishPayload};

/// Client for interacting with the Dish actor.
///
/// Dishes are never deleted, so this client has no delete method.
#[derive(Clone)]
pub struct DishClient {
    inner: ResourceClient<Dish>,
}

impl_resource_client!(DishClient, Dish, DishPayload, dish);
