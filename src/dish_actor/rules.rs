//! Validation checks for dish payloads.
//!
//! Each check inspects one field of the submitted [`DishPayload`]. The accessors
//! (`name`, `price`, ...) are shared with [`Dish::from_payload`](crate::framework::Resource::from_payload)
//! so a record is only ever built from values that a check accepted.

use crate::framework::pipeline::{self, Submission};
use crate::framework::{Resource, ResourceError};
use crate::model::{is_blank, non_empty_str, positive_integer, Dish, DishPayload};
use serde_json::Value;

type DishSubmission<'a> = Submission<'a, Dish>;

/// Only a non-empty string counts as supplied.
fn non_empty<'p>(value: Option<&'p Value>, field: &str) -> Result<&'p str, ResourceError> {
    non_empty_str(value)
        .ok_or_else(|| ResourceError::validation(format!("Dish must include a {field}")))
}

pub fn name(payload: &DishPayload) -> Result<&str, ResourceError> {
    non_empty(payload.name.as_ref(), "name")
}

pub fn description(payload: &DishPayload) -> Result<&str, ResourceError> {
    non_empty(payload.description.as_ref(), "description")
}

pub fn image_url(payload: &DishPayload) -> Result<&str, ResourceError> {
    non_empty(payload.image_url.as_ref(), "image_url")
}

/// A blank price is "missing"; anything else must be a whole number above zero.
pub fn price(payload: &DishPayload) -> Result<u64, ResourceError> {
    let raw = payload.price.as_ref();
    if is_blank(raw) {
        return Err(ResourceError::validation("Dish must include a price"));
    }
    raw.and_then(positive_integer).ok_or_else(|| {
        ResourceError::validation("Dish must have a price that is an integer greater than 0")
    })
}

pub fn has_name(submission: &DishSubmission<'_>) -> Result<(), ResourceError> {
    name(submission.payload).map(drop)
}

pub fn has_description(submission: &DishSubmission<'_>) -> Result<(), ResourceError> {
    description(submission.payload).map(drop)
}

pub fn has_price(submission: &DishSubmission<'_>) -> Result<(), ResourceError> {
    price(submission.payload).map(drop)
}

pub fn has_image(submission: &DishSubmission<'_>) -> Result<(), ResourceError> {
    image_url(submission.payload).map(drop)
}

pub fn id_matches_route(submission: &DishSubmission<'_>) -> Result<(), ResourceError> {
    pipeline::id_matches_route(
        Dish::KIND,
        submission.payload.id.as_ref(),
        submission.route_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn taco() -> DishPayload {
        DishPayload::new("Taco", "Spicy", 8, "http://x")
    }

    fn message(result: Result<(), ResourceError>) -> String {
        result.unwrap_err().to_string()
    }

    #[test]
    fn test_complete_payload_passes_every_check() {
        let payload = taco();
        let submission = Submission::new(&payload);
        assert!(has_name(&submission).is_ok());
        assert!(has_description(&submission).is_ok());
        assert!(has_price(&submission).is_ok());
        assert!(has_image(&submission).is_ok());
    }

    #[test]
    fn test_missing_fields() {
        let payload = DishPayload {
            name: Some(json!("")),
            ..Default::default()
        };
        let submission = Submission::new(&payload);
        assert_eq!(message(has_name(&submission)), "Dish must include a name");
        assert_eq!(
            message(has_description(&submission)),
            "Dish must include a description"
        );
        assert_eq!(message(has_price(&submission)), "Dish must include a price");
        assert_eq!(
            message(has_image(&submission)),
            "Dish must include a image_url"
        );
    }

    #[test]
    fn test_price_must_be_positive_integer() {
        for bad in [json!(-1), json!(2.5), json!("8"), json!(true), json!([8])] {
            let payload = DishPayload {
                price: Some(bad.clone()),
                ..taco()
            };
            assert_eq!(
                message(has_price(&Submission::new(&payload))),
                "Dish must have a price that is an integer greater than 0",
                "price {bad} should be rejected"
            );
        }

        for blank in [json!(0), json!(null), json!(""), json!(false)] {
            let payload = DishPayload {
                price: Some(blank),
                ..taco()
            };
            assert_eq!(
                message(has_price(&Submission::new(&payload))),
                "Dish must include a price"
            );
        }

        let payload = DishPayload {
            price: Some(json!(1)),
            ..taco()
        };
        assert_eq!(price(&payload), Ok(1));
    }

    #[test]
    fn test_id_must_match_route() {
        let current = Dish {
            id: "1".into(),
            name: "Taco".into(),
            description: "Spicy".into(),
            price: 8,
            image_url: "http://x".into(),
        };

        let payload = taco().with_id("2");
        assert_eq!(
            message(id_matches_route(&Submission::bound(&payload, "1", &current))),
            "Dish id does not match route id. Dish: 2, Route: 1"
        );

        let payload = taco().with_id("1");
        assert!(id_matches_route(&Submission::bound(&payload, "1", &current)).is_ok());
        assert!(id_matches_route(&Submission::bound(&taco(), "1", &current)).is_ok());
    }

    #[test]
    fn test_wrongly_typed_fields_count_as_missing() {
        let payload = DishPayload {
            name: Some(json!("")),
            description: Some(json!(5)),
            image_url: Some(json!(["http://x"])),
            ..taco()
        };
        let submission = Submission::new(&payload);
        assert_eq!(message(has_name(&submission)), "Dish must include a name");
        assert_eq!(
            message(has_description(&submission)),
            "Dish must include a description"
        );
        assert_eq!(
            message(has_image(&submission)),
            "Dish must include a image_url"
        );
    }
}
