use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Represents a dish on the menu.
///
/// # Actor Framework
/// This struct implements the [`Resource`](crate::framework::Resource) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl Resource for Dish`](#impl-Resource-for-Dish) for the create and
/// update pipelines. Dishes cannot be deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

/// Request body for creating or replacing a dish.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DishPayload {
    /// Only meaningful on update, where it must match the route id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub image_url: Option<Value>,
}

impl DishPayload {
    /// A complete payload, convenient for seeding and tests.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: u64,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: Some(Value::String(name.into())),
            description: Some(Value::String(description.into())),
            price: Some(Value::from(price)),
            image_url: Some(Value::String(image_url.into())),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(Value::String(id.into()));
        self
    }
}
