//! # Dispatch Layer
//!
//! Maps transport-agnostic requests (method, path, `{ data }` body) onto the Dish
//! and Order clients and renders their results as `{ data }` / `{ error }`
//! envelopes with a status code. An HTTP server only needs to translate its own
//! request and response types to [`ApiRequest`] and [`ApiResponse`].
//!
//! | Path | GET | POST | PUT | DELETE |
//! |------|-----|------|-----|--------|
//! | `/dishes` | list | create | 405 | 405 |
//! | `/dishes/:dishId` | read | 405 | update | 405 |
//! | `/orders` | list (`?id=` filter) | create | 405 | 405 |
//! | `/orders/:orderId` | read | 405 | update | delete |
//!
//! Any other path answers 404 "Path not found: <path>".

mod route;

pub use route::Route;

use crate::clients::{DishClient, OrderClient, ResourceHandler};
use crate::framework::{Resource, ResourceError};
use crate::model::{Dish, Order};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, instrument};

/// A request as seen by the dispatch layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: String,
    /// Path, optionally followed by `?query`.
    pub path: String,
    /// The full body, i.e. `{ "data": ... }`.
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: impl Into<String>, path: impl Into<String>, body: Option<Value>) -> Self {
        Self {
            method: method.into().to_ascii_uppercase(),
            path: path.into(),
            body,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new("GET", path, None)
    }

    /// A POST whose body wraps `data` in the `{ data }` envelope.
    pub fn post(path: impl Into<String>, data: Value) -> Self {
        Self::new("POST", path, Some(json!({ "data": data })))
    }

    pub fn put(path: impl Into<String>, data: Value) -> Self {
        Self::new("PUT", path, Some(json!({ "data": data })))
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new("DELETE", path, None)
    }

    /// The `data` member of the body, or an empty object when it is missing or
    /// not an object.
    fn data(&self) -> Value {
        match self.body.as_ref().and_then(|body| body.get("data")) {
            Some(data @ Value::Object(_)) => data.clone(),
            _ => Value::Object(Default::default()),
        }
    }
}

/// A rendered response: status code and optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Option<Value>,
}

impl ApiResponse {
    fn data(status: u16, data: impl Serialize) -> Result<Self, ResourceError> {
        let data = serde_json::to_value(data)
            .map_err(|e| ResourceError::validation(format!("Unserializable response: {e}")))?;
        Ok(Self {
            status,
            body: Some(json!({ "data": data })),
        })
    }

    fn no_content() -> Self {
        Self {
            status: 204,
            body: None,
        }
    }

    fn error(error: &ResourceError) -> Self {
        Self {
            status: error.status_code(),
            body: Some(json!({ "error": error.to_string() })),
        }
    }

    /// The `data` member of a successful response.
    pub fn data_value(&self) -> Option<&Value> {
        self.body.as_ref().and_then(|body| body.get("data"))
    }

    /// The message of a failed response.
    pub fn error_message(&self) -> Option<&str> {
        self.body
            .as_ref()
            .and_then(|body| body.get("error"))
            .and_then(Value::as_str)
    }
}

/// Routes requests to the resource clients.
#[derive(Clone)]
pub struct Api {
    dishes: DishClient,
    orders: OrderClient,
}

impl Api {
    pub fn new(dishes: DishClient, orders: OrderClient) -> Self {
        Self { dishes, orders }
    }

    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    pub async fn dispatch(&self, request: ApiRequest) -> ApiResponse {
        let response = match self.handle(&request).await {
            Ok(response) => response,
            Err(e) => ApiResponse::error(&e),
        };
        debug!(status = response.status, "Dispatched");
        response
    }

    async fn handle(&self, request: &ApiRequest) -> Result<ApiResponse, ResourceError> {
        let route = Route::parse(&request.path)?;
        let method = request.method.as_str();

        match (&route, method) {
            (Route::Dishes, "GET") => ApiResponse::data(200, self.dishes.list().await?),
            (Route::Dishes, "POST") => {
                let payload = decode::<Dish, _>(request)?;
                ApiResponse::data(201, self.dishes.create_dish(payload).await?)
            }
            (Route::Dish(id), "GET") => ApiResponse::data(200, self.dishes.read(id.clone()).await?),
            (Route::Dish(id), "PUT") => {
                let payload = decode::<Dish, _>(request)?;
                ApiResponse::data(200, self.dishes.update_dish(id.clone(), payload).await?)
            }
            (Route::Orders { filter }, "GET") => {
                ApiResponse::data(200, self.orders.list_orders(filter.clone()).await?)
            }
            (Route::Orders { .. }, "POST") => {
                let payload = decode::<Order, _>(request)?;
                ApiResponse::data(201, self.orders.create_order(payload).await?)
            }
            (Route::Order(id), "GET") => ApiResponse::data(200, self.orders.read(id.clone()).await?),
            (Route::Order(id), "PUT") => {
                let payload = decode::<Order, _>(request)?;
                ApiResponse::data(200, self.orders.update_order(id.clone(), payload).await?)
            }
            (Route::Order(id), "DELETE") => {
                self.orders.delete_order(id.clone()).await?;
                Ok(ApiResponse::no_content())
            }
            _ => Err(ResourceError::method_not_allowed(method, route.path())),
        }
    }
}

/// Reads the `{ data }` member as `R`'s payload. Payload fields hold raw JSON,
/// so a wrongly typed field is left for the pipeline to report in check order.
fn decode<R, P>(request: &ApiRequest) -> Result<P, ResourceError>
where
    R: Resource<Payload = P>,
    P: DeserializeOwned,
{
    serde_json::from_value(request.data())
        .map_err(|e| ResourceError::validation(format!("Invalid {} payload: {e}", R::KIND)))
}
