//! Identifier generation for new records.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Hands out identifiers that are never repeated for the lifetime of the process.
///
/// Backed by a shared atomic counter, so clones draw from the same sequence.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    counter: Arc<AtomicU64>,
}

impl IdGenerator {
    /// Starts the sequence at `first`. Pick a value above any seeded identifier.
    pub fn starting_at(first: u64) -> Self {
        Self {
            counter: Arc::new(AtomicU64::new(first)),
        }
    }

    pub fn next(&self) -> String {
        self.counter.fetch_add(1, Ordering::SeqCst).to_string()
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}
