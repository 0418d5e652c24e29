//! Resource trait implementation for the Order domain type.
//!
//! This module contains the [`Resource`] trait implementation
//! that enables [`Order`] to be managed by the generic [`crate::framework::ResourceActor`].
//!
//! See the trait implementation on [`Order`] for method documentation.

use super::rules::{self, *};
use crate::framework::{Pipeline, Resource, ResourceError, Submission};
use crate::model::{Order, OrderPayload};

impl Resource for Order {
    const KIND: &'static str = "Order";
    const COLLECTION: &'static str = "orders";

    type Payload = OrderPayload;

    fn id(&self) -> &str {
        &self.id
    }

    /// has-deliverTo → has-mobileNumber → has-dishes → has-valid-dish-quantities,
    /// then a present status must be a known one.
    fn create_pipeline<'a>() -> Pipeline<Submission<'a, Self>> {
        Pipeline::new("order-create")
            .check("has-deliverTo", has_deliver_to)
            .check("has-mobileNumber", has_mobile_number)
            .check("has-dishes", has_dishes)
            .check("has-valid-dish-quantities", has_valid_dish_quantities)
            .check("has-known-status", has_known_status)
    }

    fn update_pipeline<'a>() -> Pipeline<Submission<'a, Self>> {
        Pipeline::new("order-update")
            .check("id-matches-route", id_matches_route)
            .check("status-is-valid-and-mutable", status_is_valid_and_mutable)
            .check("has-deliverTo", has_deliver_to)
            .check("has-mobileNumber", has_mobile_number)
            .check("has-dishes", has_dishes)
            .check("has-valid-dish-quantities", has_valid_dish_quantities)
    }

    /// Only pending orders may be deleted.
    fn delete_pipeline() -> Pipeline<Self> {
        Pipeline::new("order-delete").check("status-is-pending", status_is_pending)
    }

    fn from_payload(id: String, payload: OrderPayload) -> Result<Self, ResourceError> {
        Ok(Self {
            deliver_to: rules::deliver_to(&payload)?.to_string(),
            mobile_number: rules::mobile_number(&payload)?.to_string(),
            status: requested_status(&payload)?,
            dishes: dish_line_items(line_items(&payload)?)?,
            id,
        })
    }
}
