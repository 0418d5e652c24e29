//! Pure data structures: the records the stores hold and the payloads clients submit.
//!
//! Records are strongly typed and only ever built from a payload that passed its
//! pipeline. Payloads mirror untrusted request bodies: every field is optional raw
//! JSON, so any body decodes and the rules alone decide what is missing, of the
//! wrong type or out of range, in pipeline order.

pub mod dish;
pub mod order;

pub use dish::*;
pub use order::*;

use serde_json::Value;

/// Returns the value as an integer if it is a whole number greater than zero.
///
/// `8` and `8.0` qualify; `0`, `-1`, `8.5`, `"8"` and `true` do not.
pub fn positive_integer(value: &Value) -> Option<u64> {
    match value.as_u64() {
        Some(n) => (n > 0).then_some(n),
        None => value
            .as_f64()
            .filter(|f| *f >= 1.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
            .map(|f| f as u64),
    }
}

/// Returns the value as a string slice if it is a non-empty JSON string.
///
/// Numbers, booleans and other non-string values never qualify.
pub fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Whether a raw value counts as "not supplied": `null`, `false`, `0`, `""`.
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}
