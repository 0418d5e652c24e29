use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::Display;
use std::str::FromStr;

/// Represents a customer order.
///
/// # Actor Framework
/// This struct implements the [`Resource`](crate::framework::Resource) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl Resource for Order`](#impl-Resource-for-Order) for the create, update
/// and delete pipelines, including the status rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<DishLineItem>,
}

/// Lifecycle of an order. A `Delivered` order is frozen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown order status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// One (dish, quantity) pair of an order.
///
/// Any other fields the client sends with the line item (a copy of the dish's name
/// or price, say) are kept as-is in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishLineItem {
    #[serde(rename = "dishId", default, skip_serializing_if = "Option::is_none")]
    pub dish_id: Option<String>,
    pub quantity: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request body for creating or replacing an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    /// Only meaningful on update, where it must match the route id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default)]
    pub deliver_to: Option<Value>,
    #[serde(default)]
    pub mobile_number: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,
    /// Expected to be a non-empty array of line item objects.
    #[serde(default)]
    pub dishes: Option<Value>,
}

/// Builder for one submitted line item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineItemPayload {
    pub dish_id: Option<Value>,
    pub quantity: Option<Value>,
    pub extra: Map<String, Value>,
}

impl LineItemPayload {
    pub fn new(dish_id: impl Into<String>, quantity: impl Into<Value>) -> Self {
        Self {
            dish_id: Some(Value::String(dish_id.into())),
            quantity: Some(quantity.into()),
            extra: Map::new(),
        }
    }
}

impl From<LineItemPayload> for Value {
    fn from(item: LineItemPayload) -> Self {
        let mut object = item.extra;
        if let Some(dish_id) = item.dish_id {
            object.insert("dishId".to_string(), dish_id);
        }
        if let Some(quantity) = item.quantity {
            object.insert("quantity".to_string(), quantity);
        }
        Value::Object(object)
    }
}

impl OrderPayload {
    /// A payload with the required fields set and no status.
    pub fn new(
        deliver_to: impl Into<String>,
        mobile_number: impl Into<String>,
        dishes: Vec<LineItemPayload>,
    ) -> Self {
        Self {
            id: None,
            deliver_to: Some(Value::String(deliver_to.into())),
            mobile_number: Some(Value::String(mobile_number.into())),
            status: None,
            dishes: Some(Value::Array(dishes.into_iter().map(Value::from).collect())),
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(Value::String(status.into()));
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(Value::String(id.into()));
        self
    }

    pub fn with_dishes(mut self, dishes: Value) -> Self {
        self.dishes = Some(dishes);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_value(OrderStatus::OutForDelivery).unwrap(),
            json!("out-for-delivery")
        );
        assert_eq!(
            "out-for-delivery".parse::<OrderStatus>(),
            Ok(OrderStatus::OutForDelivery)
        );
        assert_eq!("pending".parse::<OrderStatus>(), Ok(OrderStatus::Pending));
        assert!("invalid".parse::<OrderStatus>().is_err());
        assert!("".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_payload_accepts_camel_case_and_any_field_type() {
        let payload: OrderPayload = serde_json::from_value(json!({
            "deliverTo": "308 Negra Arroyo Lane",
            "mobileNumber": 5051433369u64,
            "status": 3,
            "dishes": [{ "dishId": 1, "quantity": 2 }, 5]
        }))
        .unwrap();

        assert_eq!(payload.deliver_to, Some(json!("308 Negra Arroyo Lane")));
        assert_eq!(payload.mobile_number, Some(json!(5051433369u64)));
        assert_eq!(payload.status, Some(json!(3)));
        assert_eq!(payload.dishes, Some(json!([{ "dishId": 1, "quantity": 2 }, 5])));
    }

    #[test]
    fn test_line_item_builder_renders_object() {
        let mut item = LineItemPayload::new("1", 2);
        item.extra.insert("name".into(), json!("Taco"));
        assert_eq!(
            Value::from(item),
            json!({ "dishId": "1", "quantity": 2, "name": "Taco" })
        );
    }
}
