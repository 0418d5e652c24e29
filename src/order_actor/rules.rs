//! Validation checks for order payloads and the status state machine.
//!
//! Status transitions: any status may move to any non-delivered status, a
//! `delivered` order is frozen, and only a `pending` order may be deleted.

use crate::framework::pipeline::{self, Submission};
use crate::framework::{Resource, ResourceError};
use crate::model::{
    is_blank, non_empty_str, positive_integer, DishLineItem, Order, OrderPayload, OrderStatus,
};
use serde_json::{Map, Value};

type OrderSubmission<'a> = Submission<'a, Order>;

const INVALID_STATUS: &str =
    "Order must have a status of pending, preparing, out-for-delivery, delivered";
const DELIVERED_IS_FINAL: &str = "A delivered order cannot be changed";

/// Only a non-empty string counts as supplied.
fn non_empty<'p>(value: Option<&'p Value>, field: &str) -> Result<&'p str, ResourceError> {
    non_empty_str(value)
        .ok_or_else(|| ResourceError::validation(format!("Order must include a {field}")))
}

pub fn deliver_to(payload: &OrderPayload) -> Result<&str, ResourceError> {
    non_empty(payload.deliver_to.as_ref(), "deliverTo")
}

pub fn mobile_number(payload: &OrderPayload) -> Result<&str, ResourceError> {
    non_empty(payload.mobile_number.as_ref(), "mobileNumber")
}

/// A blank `dishes` is missing; anything but a non-empty array has no dishes.
pub fn line_items(payload: &OrderPayload) -> Result<&[Value], ResourceError> {
    let raw = payload.dishes.as_ref();
    if is_blank(raw) {
        return Err(ResourceError::validation("Order must include a dish"));
    }
    match raw {
        Some(Value::Array(items)) if !items.is_empty() => Ok(items),
        _ => Err(ResourceError::validation(
            "Order must include at least one dish",
        )),
    }
}

/// Converts line items, reporting the first one that is not an object with a
/// positive integer quantity.
///
/// A string or numeric `dishId` becomes the line item's dish id; any other
/// value is kept untouched among the extra fields.
pub fn dish_line_items(items: &[Value]) -> Result<Vec<DishLineItem>, ResourceError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let invalid = || {
                ResourceError::validation(format!(
                    "Dish {index} must have a quantity that is an integer greater than 0"
                ))
            };
            let object = item.as_object().ok_or_else(invalid)?;
            let quantity = object
                .get("quantity")
                .and_then(positive_integer)
                .ok_or_else(invalid)?;
            Ok(line_item(object, quantity))
        })
        .collect()
}

fn line_item(object: &Map<String, Value>, quantity: u64) -> DishLineItem {
    let mut extra = object.clone();
    extra.remove("quantity");
    let dish_id = match extra.remove("dishId") {
        Some(Value::String(id)) => Some(id),
        Some(Value::Number(id)) => Some(id.to_string()),
        Some(Value::Null) | None => None,
        Some(other) => {
            extra.insert("dishId".to_string(), other);
            None
        }
    };
    DishLineItem {
        dish_id,
        quantity,
        extra,
    }
}

/// The status a payload asks for; `pending` when none is given.
pub fn requested_status(payload: &OrderPayload) -> Result<OrderStatus, ResourceError> {
    match payload.status.as_ref() {
        None | Some(Value::Null) => Ok(OrderStatus::Pending),
        Some(status) => parse_status(status),
    }
}

fn parse_status(status: &Value) -> Result<OrderStatus, ResourceError> {
    non_empty_str(Some(status))
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| ResourceError::validation(INVALID_STATUS))
}

pub fn has_deliver_to(submission: &OrderSubmission<'_>) -> Result<(), ResourceError> {
    deliver_to(submission.payload).map(drop)
}

pub fn has_mobile_number(submission: &OrderSubmission<'_>) -> Result<(), ResourceError> {
    mobile_number(submission.payload).map(drop)
}

pub fn has_dishes(submission: &OrderSubmission<'_>) -> Result<(), ResourceError> {
    line_items(submission.payload).map(drop)
}

pub fn has_valid_dish_quantities(submission: &OrderSubmission<'_>) -> Result<(), ResourceError> {
    dish_line_items(line_items(submission.payload)?).map(drop)
}

/// A present status on create must be one of the known values.
pub fn has_known_status(submission: &OrderSubmission<'_>) -> Result<(), ResourceError> {
    requested_status(submission.payload).map(drop)
}

pub fn id_matches_route(submission: &OrderSubmission<'_>) -> Result<(), ResourceError> {
    pipeline::id_matches_route(
        Order::KIND,
        submission.payload.id.as_ref(),
        submission.route_id,
    )
}

/// A frozen order fails before the payload is looked at. Otherwise the payload
/// must name a known status, and that status may not be `delivered`.
pub fn status_is_valid_and_mutable(submission: &OrderSubmission<'_>) -> Result<(), ResourceError> {
    if submission
        .current
        .is_some_and(|order| order.status == OrderStatus::Delivered)
    {
        return Err(ResourceError::validation(DELIVERED_IS_FINAL));
    }

    let target = match submission.payload.status.as_ref() {
        Some(status) => parse_status(status)?,
        None => return Err(ResourceError::validation(INVALID_STATUS)),
    };

    if target == OrderStatus::Delivered {
        return Err(ResourceError::validation(DELIVERED_IS_FINAL));
    }
    Ok(())
}

pub fn status_is_pending(order: &Order) -> Result<(), ResourceError> {
    if order.status == OrderStatus::Pending {
        Ok(())
    } else {
        Err(ResourceError::validation(
            "An order cannot be deleted unless it is pending",
        ))
    }
}
