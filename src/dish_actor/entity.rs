//! Resource trait implementation for the Dish domain type.
//!
//! This module contains the [`Resource`] trait implementation
//! that enables [`Dish`] to be managed by the generic [`crate::framework::ResourceActor`].
//!
//! See the trait implementation on [`Dish`] for method documentation.

use super::rules::{self, has_description, has_image, has_name, has_price, id_matches_route};
use crate::framework::{Pipeline, Resource, ResourceError, Submission};
use crate::model::{Dish, DishPayload};

impl Resource for Dish {
    const KIND: &'static str = "Dish";
    const COLLECTION: &'static str = "dishes";

    type Payload = DishPayload;

    fn id(&self) -> &str {
        &self.id
    }

    /// has-name → has-description → has-price → has-image.
    fn create_pipeline<'a>() -> Pipeline<Submission<'a, Self>> {
        Pipeline::new("dish-create")
            .check("has-name", has_name)
            .check("has-description", has_description)
            .check("has-price", has_price)
            .check("has-image", has_image)
    }

    /// id-matches-route, then the create checks.
    fn update_pipeline<'a>() -> Pipeline<Submission<'a, Self>> {
        Pipeline::new("dish-update")
            .check("id-matches-route", id_matches_route)
            .check("has-name", has_name)
            .check("has-description", has_description)
            .check("has-price", has_price)
            .check("has-image", has_image)
    }

    fn from_payload(id: String, payload: DishPayload) -> Result<Self, ResourceError> {
        Ok(Self {
            name: rules::name(&payload)?.to_string(),
            description: rules::description(&payload)?.to_string(),
            price: rules::price(&payload)?,
            image_url: rules::image_url(&payload)?.to_string(),
            id,
        })
    }
}
