use crate::api::Api;
use crate::clients::{DishClient, OrderClient};
use crate::config::SystemConfig;
use crate::framework::{IdGenerator, MemoryStore};
use crate::lifecycle::SeedData;
use tracing::{error, info};

/// The main runtime orchestrator for the restaurant backend.
///
/// `RestaurantSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the Dish and Order actors
/// - **Seeding**: Loading initial records into each actor's store
/// - **Identifier Coordination**: Starting each id sequence above the seeded ids
///
/// # Example
///
/// ```rust
/// use restaurant_recipe::clients::ResourceHandler;
/// use restaurant_recipe::lifecycle::RestaurantSystem;
/// use restaurant_recipe::model::DishPayload;
///
/// #[tokio::main]
/// async fn main() -> Result<(), String> {
///     let system = RestaurantSystem::new();
///
///     let dish = system
///         .dish_client
///         .create_dish(DishPayload::new("Taco", "Spicy", 8, "http://x"))
///         .await
///         .map_err(|e| e.to_string())?;
///     assert_eq!(system.dish_client.read(dish.id.clone()).await, Ok(dish));
///
///     system.shutdown().await
/// }
/// ```
pub struct RestaurantSystem {
    /// Client for interacting with the Dish actor
    pub dish_client: DishClient,

    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl RestaurantSystem {
    /// Starts both actors with default configuration and empty stores.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        Self::with_config(SystemConfig::default(), SeedData::empty())
    }

    /// Starts both actors with the given configuration, seeding their stores.
    ///
    /// Each id sequence starts at the configured value or just past the highest
    /// numeric seeded id, whichever is larger.
    pub fn with_config(config: SystemConfig, seed: SeedData) -> Self {
        let dish_ids = IdGenerator::starting_at(config.dish_id_start.max(seed.next_dish_id()));
        let order_ids = IdGenerator::starting_at(config.order_id_start.max(seed.next_order_id()));
        let channel_buffer = config.channel_capacity();

        let (dish_actor, dish_client) = crate::dish_actor::new(
            channel_buffer,
            MemoryStore::with_records(seed.dishes),
            dish_ids,
        );
        let (order_actor, order_client) = crate::order_actor::new(
            channel_buffer,
            MemoryStore::with_records(seed.orders),
            order_ids,
        );

        let dish_handle = tokio::spawn(dish_actor.run());
        let order_handle = tokio::spawn(order_actor.run());
        info!(channel_buffer, "System started");

        Self {
            dish_client,
            order_client,
            handles: vec![dish_handle, order_handle],
        }
    }

    /// A dispatch layer backed by clones of this system's clients.
    pub fn api(&self) -> Api {
        Api::new(self.dish_client.clone(), self.order_client.clone())
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the channels once every clone (including those
    /// held by an [`Api`]) is gone; each actor then exits its loop.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.dish_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for RestaurantSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ResourceHandler;
    use crate::model::DishPayload;

    #[tokio::test]
    async fn test_seeded_ids_do_not_collide() {
        let system = RestaurantSystem::with_config(SystemConfig::default(), SeedData::sample());

        let dish = system
            .dish_client
            .create_dish(DishPayload::new("Taco", "Spicy", 8, "http://x"))
            .await
            .unwrap();
        assert_eq!(dish.id, "4");
        assert_eq!(system.dish_client.list().await.unwrap().len(), 4);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_configured_start_wins_when_higher() {
        let config = SystemConfig {
            dish_id_start: 100,
            ..Default::default()
        };
        let system = RestaurantSystem::with_config(config, SeedData::sample());

        let dish = system
            .dish_client
            .create_dish(DishPayload::new("Taco", "Spicy", 8, "http://x"))
            .await
            .unwrap();
        assert_eq!(dish.id, "100");

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_zero_channel_buffer_starts() {
        let config = SystemConfig {
            channel_buffer: 0,
            ..Default::default()
        };
        let system = RestaurantSystem::with_config(config, SeedData::default());

        let dish = system
            .dish_client
            .create_dish(DishPayload::new("Taco", "Spicy", 8, "http://x"))
            .await
            .unwrap();
        assert_eq!(dish.id, "1");

        system.shutdown().await.unwrap();
    }
}
