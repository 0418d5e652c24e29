//! # Validation Pipelines
//!
//! A [`Pipeline`] is an ordered list of named checks. [`Pipeline::run`] executes
//! them in declaration order and stops at the first failure, which becomes the
//! sole outcome of the request. Checks are plain functions with no side effects.
//!
//! ```rust
//! use restaurant_recipe::framework::{Pipeline, ResourceError};
//!
//! fn positive(n: &i64) -> Result<(), ResourceError> {
//!     if *n > 0 { Ok(()) } else { Err(ResourceError::validation("must be positive")) }
//! }
//! fn even(n: &i64) -> Result<(), ResourceError> {
//!     if n % 2 == 0 { Ok(()) } else { Err(ResourceError::validation("must be even")) }
//! }
//!
//! let pipeline = Pipeline::new("number").check("positive", positive).check("even", even);
//! assert!(pipeline.run(&4).is_ok());
//! assert_eq!(pipeline.run(&-3).unwrap_err().to_string(), "must be positive");
//! ```

use crate::framework::{Resource, ResourceError};
use crate::model::is_blank;
use serde_json::Value;
use tracing::debug;

/// A single validation check.
pub type Check<C> = fn(&C) -> Result<(), ResourceError>;

/// Ordered, fail-fast sequence of checks over a context `C`.
pub struct Pipeline<C> {
    name: &'static str,
    checks: Vec<(&'static str, Check<C>)>,
}

impl<C> Pipeline<C> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            checks: Vec::new(),
        }
    }

    /// Appends a check; it runs after every check added before it.
    pub fn check(mut self, label: &'static str, check: Check<C>) -> Self {
        self.checks.push((label, check));
        self
    }

    /// Names of the checks in execution order.
    pub fn labels(&self) -> Vec<&'static str> {
        self.checks.iter().map(|(label, _)| *label).collect()
    }

    pub fn run(&self, context: &C) -> Result<(), ResourceError> {
        for (label, check) in &self.checks {
            if let Err(e) = check(context) {
                debug!(pipeline = self.name, check = label, error = %e, "Validation failed");
                return Err(e);
            }
        }
        Ok(())
    }
}

/// The input of a payload pipeline.
///
/// For record-bound operations the route identifier and the record resolved
/// from the store are bound alongside the payload.
#[derive(Debug)]
pub struct Submission<'a, R: Resource> {
    pub payload: &'a R::Payload,
    pub route_id: Option<&'a str>,
    pub current: Option<&'a R>,
}

impl<'a, R: Resource> Submission<'a, R> {
    pub fn new(payload: &'a R::Payload) -> Self {
        Self {
            payload,
            route_id: None,
            current: None,
        }
    }

    pub fn bound(payload: &'a R::Payload, route_id: &'a str, current: &'a R) -> Self {
        Self {
            payload,
            route_id: Some(route_id),
            current: Some(current),
        }
    }
}

/// Resolves the record addressed by `id`, failing with `NotFound`.
///
/// This is the `record-exists` step that precedes every record-bound pipeline.
pub fn record_exists<'s, R: Resource>(
    record: Option<&'s R>,
    id: &str,
) -> Result<&'s R, ResourceError> {
    record.ok_or_else(|| ResourceError::not_found(R::KIND, id))
}

/// Shared `id-matches-route` check: a supplied payload id must be the route id.
///
/// A blank id (absent, `null`, `""`, `0`, `false`) is not supplied. Any other
/// value that is not the route id as a string is a mismatch, numbers included.
pub fn id_matches_route(
    kind: &str,
    payload_id: Option<&Value>,
    route_id: Option<&str>,
) -> Result<(), ResourceError> {
    let (Some(id), Some(route)) = (payload_id, route_id) else {
        return Ok(());
    };
    if is_blank(Some(id)) || id.as_str() == Some(route) {
        return Ok(());
    }

    let shown = match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    Err(ResourceError::validation(format!(
        "{kind} id does not match route id. {kind}: {shown}, Route: {route}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static LATE_CHECK_CALLS: AtomicUsize = AtomicUsize::new(0);

    fn fail_a(_: &()) -> Result<(), ResourceError> {
        Err(ResourceError::validation("a"))
    }

    fn fail_b(_: &()) -> Result<(), ResourceError> {
        Err(ResourceError::validation("b"))
    }

    fn pass(_: &()) -> Result<(), ResourceError> {
        Ok(())
    }

    fn counting(_: &()) -> Result<(), ResourceError> {
        LATE_CHECK_CALLS.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    #[test]
    fn test_first_failure_wins() {
        let pipeline = Pipeline::new("test")
            .check("pass", pass)
            .check("a", fail_a)
            .check("b", fail_b);
        assert_eq!(pipeline.run(&()), Err(ResourceError::validation("a")));
        assert_eq!(pipeline.labels(), vec!["pass", "a", "b"]);
    }

    #[test]
    fn test_checks_after_failure_do_not_run() {
        let pipeline = Pipeline::new("test").check("a", fail_a).check("counting", counting);
        assert!(pipeline.run(&()).is_err());
        assert_eq!(LATE_CHECK_CALLS.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_empty_pipeline_passes() {
        let pipeline: Pipeline<()> = Pipeline::new("empty");
        assert!(pipeline.run(&()).is_ok());
    }

    #[test]
    fn test_id_matches_route() {
        assert!(id_matches_route("Dish", None, Some("1")).is_ok());
        assert!(id_matches_route("Dish", Some(&json!("")), Some("1")).is_ok());
        assert!(id_matches_route("Dish", Some(&json!(null)), Some("1")).is_ok());
        assert!(id_matches_route("Dish", Some(&json!("1")), Some("1")).is_ok());

        let err = id_matches_route("Dish", Some(&json!("2")), Some("1")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Dish id does not match route id. Dish: 2, Route: 1"
        );
    }

    #[test]
    fn test_non_string_id_is_a_mismatch() {
        let err = id_matches_route("Order", Some(&json!(7)), Some("7")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Order id does not match route id. Order: 7, Route: 7"
        );
        assert!(id_matches_route("Order", Some(&json!([1])), Some("1")).is_err());
    }
}
