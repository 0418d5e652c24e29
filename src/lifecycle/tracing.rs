//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing`
//! crate. Every actor tags its events with `entity_type` (`Dish` or `Order`), so the
//! module path is left out of each line.
//!
//! ## Levels
//!
//! - `info`: actor start and shutdown with store size, and every successful
//!   create, update and delete with the record id
//! - `warn`: every rejected create, update or delete with the error message
//! - `debug`: each request with its full payload, client spans, and the name of
//!   the pipeline check that failed
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run
//!
//! # Show payloads and the failing check of each rejected request
//! RUST_LOG=debug cargo run
//!
//! # Only the framework
//! RUST_LOG=restaurant_recipe::framework=debug cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`**, creating a dish and rejecting a delivered order update:
//!
//! ```text
//! INFO Actor started entity_type="Dish" size=3
//! INFO Actor started entity_type="Order" size=2
//! INFO Created entity_type="Dish" id=4 size=4
//! WARN Update failed entity_type="Order" id=1 error=A delivered order cannot be changed
//! ```
//!
//! **With `RUST_LOG=debug`** the failing check is named as well:
//!
//! ```text
//! DEBUG Validation failed pipeline="order-update" check="status-is-valid-and-mutable" error=A delivered order cannot be changed
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
