//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

mod macros;

pub mod dish_client;
pub mod handler;
pub mod order_client;

pub use dish_client::*;
pub use handler::*;
pub use order_client::*;
