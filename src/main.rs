//! # Restaurant Recipe
//!
//! Demo entry point: starts the Dish and Order actors with sample data and walks a
//! dish and an order through their lifecycle via the dispatch layer.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use restaurant_recipe::api::{ApiRequest, ApiResponse};
use restaurant_recipe::config::SystemConfig;
use restaurant_recipe::lifecycle::{setup_tracing, RestaurantSystem, SeedData};
use serde_json::json;
use tracing::{info, warn, Instrument};

fn report(step: &str, response: &ApiResponse) {
    match response.error_message() {
        Some(error) => warn!(step, status = response.status, error, "Request rejected"),
        None => info!(step, status = response.status, "Request succeeded"),
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = SystemConfig::from_env();
    info!(?config, "Starting restaurant backend");

    let system = RestaurantSystem::with_config(config, SeedData::sample());
    let api = system.api();

    let span = tracing::info_span!("dish_lifecycle");
    let dish_id = async {
        let created = api
            .dispatch(ApiRequest::post(
                "/dishes",
                json!({
                    "name": "Taco",
                    "description": "Spicy",
                    "price": 8,
                    "image_url": "http://x"
                }),
            ))
            .await;
        report("create dish", &created);

        let rejected = api
            .dispatch(ApiRequest::post(
                "/dishes",
                json!({ "name": "Burrito", "description": "Big", "price": 2.5, "image_url": "http://y" }),
            ))
            .await;
        report("create dish with fractional price", &rejected);

        report("delete dish", &api.dispatch(ApiRequest::delete("/dishes/1")).await);

        created
            .data_value()
            .and_then(|dish| dish["id"].as_str())
            .map(str::to_string)
            .ok_or_else(|| "Dish was not created".to_string())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("order_lifecycle");
    async {
        let created = api
            .dispatch(ApiRequest::post(
                "/orders",
                json!({
                    "deliverTo": "Rua Vieira de Castro, 262",
                    "mobileNumber": "(415) 555-1234",
                    "dishes": [{ "dishId": dish_id, "quantity": 2 }]
                }),
            ))
            .await;
        report("create order", &created);

        let order_id = created
            .data_value()
            .and_then(|order| order["id"].as_str())
            .unwrap_or_default()
            .to_string();
        let path = format!("/orders/{order_id}");

        let updated = api
            .dispatch(ApiRequest::put(
                &path,
                json!({
                    "id": order_id,
                    "deliverTo": "Rua Vieira de Castro, 262",
                    "mobileNumber": "(415) 555-1234",
                    "status": "preparing",
                    "dishes": [{ "dishId": dish_id, "quantity": 3 }]
                }),
            ))
            .await;
        report("update order", &updated);

        report("delete preparing order", &api.dispatch(ApiRequest::delete(&path)).await);
        report(
            "update order with missing fields",
            &api.dispatch(ApiRequest::put("/orders/1", json!({ "status": "pending" })))
                .await,
        );
        report("delete pending order", &api.dispatch(ApiRequest::delete("/orders/2")).await);
        report("unknown path", &api.dispatch(ApiRequest::get("/menu")).await);
    }
    .instrument(span)
    .await;

    drop(api);
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
