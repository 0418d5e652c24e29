#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Restaurant Recipe
//!
//! > **A restaurant backend built from resource-oriented actors.**
//!
//! Dishes and Orders are each owned by one actor. Every mutating request passes an
//! ordered, fail-fast validation pipeline before the store is touched, and orders
//! move through a small status state machine.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One handler flow, two resources
//!
//! The generic [`ResourceActor<T>`](framework::ResourceActor) implements
//! list/create/read/update/delete once. A resource only supplies its rules through the
//! [`Resource`](framework::Resource) trait: which checks guard each operation and how
//! a validated payload becomes a record.
//!
//! ### Resolve → validate → mutate
//!
//! Record-bound operations look the record up first (`NotFound` wins over every
//! payload problem), run the pipeline, then write. The actor handles one message at
//! a time, so no other write can slip in between the lookup and the mutation.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Role**: Actor loop, client, store seam, identifier generator, pipelines, errors.
//! - **Key items**: [`ResourceActor`](framework::ResourceActor),
//!   [`Pipeline`](framework::Pipeline), [`ResourceError`](framework::ResourceError).
//!
//! ### 2. The Rules ([`dish_actor`], [`order_actor`])
//! - **Role**: The checks of each pipeline and the `Resource` implementations.
//!
//! ### 3. The Interface ([`clients`], [`api`])
//! - **Role**: Typed clients per resource, and a dispatch layer that maps
//!   method + path + `{ data }` bodies onto them.
//!
//! ### 4. The Orchestrator ([`lifecycle`], [`config`])
//! - **Role**: Spins up the actors with seed data, hands out clients, shuts down.
//! - **Key items**: [`RestaurantSystem`](lifecycle::RestaurantSystem),
//!   [`SystemConfig`](config::SystemConfig).
//!
//! ## 🧪 Testing
//!
//! See [`framework::mock`] for utilities to test clients without spawning full actors.
//!
//! ```bash
//! cargo test
//! ```

pub mod api;
pub mod clients;
pub mod config;
pub mod dish_actor;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
