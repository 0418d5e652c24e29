//! Generic resource framework.
//!
//! This module provides the building blocks shared by every resource: a generic
//! actor that serves CRUD requests over a store, the client that talks to it, and
//! the fail-fast validation pipeline that guards each operation.
//!
//! # Main Components
//!
//! - [`Resource`] - Trait that record types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns a store and runs the resource handlers
//! - [`ResourceClient`] - Type-safe, cloneable client for an actor
//! - [`ResourceStore`] / [`MemoryStore`] - The storage seam and its in-process implementation
//! - [`Pipeline`] - Ordered, fail-fast validation checks
//! - [`ResourceError`] - Every failure a request can produce
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod ids;
pub mod message;
pub mod mock;
pub mod pipeline;
pub mod store;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::Resource;
pub use error::ResourceError;
pub use ids::IdGenerator;
pub use message::{ResourceRequest, Response};
pub use pipeline::{Check, Pipeline, Submission};
pub use store::{MemoryStore, ResourceStore};
