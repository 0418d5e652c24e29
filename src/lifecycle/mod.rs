//! Runtime orchestration and lifecycle management.
//!
//! # Main Components
//!
//! - [`RestaurantSystem`] - Starts the Dish and Order actors, hands out their clients
//!   and shuts them down
//! - [`SeedData`] - Records loaded into the stores at startup
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod restaurant_system;
pub mod seed;
pub mod tracing;

pub use restaurant_system::*;
pub use seed::*;
pub use self::tracing::*;
