//! # Resource Trait
//!
//! [`Resource`] is the contract every record type (Dish, Order) implements to be
//! served by the generic [`ResourceActor`](crate::framework::ResourceActor).
//!
//! # Architecture Note
//! The actor owns the plumbing: channel loop, store access, identifier generation,
//! logging. The resource owns the rules: which checks guard each operation and how
//! a validated payload becomes a record. Writing the handler flow once and plugging
//! the rules in per type keeps Dishes and Orders on exactly the same
//! "resolve → validate → mutate" path.
//!
//! Pipelines are plain values built on demand, so a resource's rules can be
//! inspected and tested without an actor.

use crate::framework::pipeline::{Pipeline, Submission};
use crate::framework::ResourceError;
use std::fmt::Debug;

/// Trait that any record type must implement to be managed by a `ResourceActor`.
pub trait Resource: Clone + Debug + Send + Sync + 'static {
    /// Name used in user-visible messages, e.g. `"Dish"`.
    const KIND: &'static str;

    /// Path segment of the collection, e.g. `"dishes"`.
    const COLLECTION: &'static str;

    /// The untrusted request body for create and update.
    type Payload: Debug + Send + Sync;

    fn id(&self) -> &str;

    /// Checks run before a new record is built.
    fn create_pipeline<'a>() -> Pipeline<Submission<'a, Self>>;

    /// Checks run after the record is resolved and before it is replaced.
    fn update_pipeline<'a>() -> Pipeline<Submission<'a, Self>>;

    /// Checks run against the resolved record before it is removed.
    ///
    /// Resources without a delete operation keep the default, which rejects
    /// every request with `MethodNotAllowed`.
    fn delete_pipeline() -> Pipeline<Self> {
        Pipeline::new("delete").check("delete-supported", reject_delete::<Self>)
    }

    /// Builds the full record from a payload that passed its pipeline.
    ///
    /// Every field except `id` comes from the payload.
    fn from_payload(id: String, payload: Self::Payload) -> Result<Self, ResourceError>;
}

fn reject_delete<R: Resource>(record: &R) -> Result<(), ResourceError> {
    Err(ResourceError::method_not_allowed(
        "DELETE",
        format!("/{}/{}", R::COLLECTION, record.id()),
    ))
}
