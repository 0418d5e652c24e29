//! # Resource Stores
//!
//! The storage seam of the framework. A [`ResourceActor`](crate::framework::ResourceActor)
//! owns exactly one store and is the only code that touches it, so implementations
//! need no internal locking.
//!
//! [`MemoryStore`] keeps records in insertion order, which is the order `list`
//! reports them in.

use crate::framework::Resource;
use tracing::warn;

/// Ordered collection of records keyed by their identifier.
///
/// `replace` and `remove` expect the caller to have found the record first.
pub trait ResourceStore<T: Resource>: Send {
    fn list(&self) -> &[T];

    fn find(&self, id: &str) -> Option<&T>;

    fn insert(&mut self, record: T) -> T;

    fn replace(&mut self, id: &str, record: T) -> T;

    fn remove(&mut self, id: &str);

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Transient in-process store.
#[derive(Debug, Clone)]
pub struct MemoryStore<T> {
    records: Vec<T>,
}

impl<T: Resource> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Creates a store pre-populated with `records`, kept in the given order.
    pub fn with_records(records: Vec<T>) -> Self {
        Self { records }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }
}

impl<T: Resource> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Resource> ResourceStore<T> for MemoryStore<T> {
    fn list(&self) -> &[T] {
        &self.records
    }

    fn find(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    fn insert(&mut self, record: T) -> T {
        self.records.push(record.clone());
        record
    }

    fn replace(&mut self, id: &str, record: T) -> T {
        match self.position(id) {
            Some(index) => self.records[index] = record.clone(),
            None => warn!(entity_type = T::KIND, %id, "Replace of missing record ignored"),
        }
        record
    }

    fn remove(&mut self, id: &str) {
        match self.position(id) {
            Some(index) => {
                self.records.remove(index);
            }
            None => warn!(entity_type = T::KIND, %id, "Remove of missing record ignored"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Dish;

    fn dish(id: &str, name: &str) -> Dish {
        Dish {
            id: id.to_string(),
            name: name.to_string(),
            description: "Tasty".to_string(),
            price: 10,
            image_url: "http://img".to_string(),
        }
    }

    #[test]
    fn test_basic_operations() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());

        store.insert(dish("1", "Taco"));
        store.insert(dish("2", "Burrito"));
        store.insert(dish("3", "Nachos"));

        let names: Vec<&str> = store.list().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Taco", "Burrito", "Nachos"]);

        assert_eq!(store.find("2").map(|d| d.name.as_str()), Some("Burrito"));
        assert!(store.find("9").is_none());

        store.replace("2", dish("2", "Big Burrito"));
        assert_eq!(store.list()[1].name, "Big Burrito");

        store.remove("1");
        assert_eq!(store.len(), 2);
        assert!(store.find("1").is_none());
        assert_eq!(store.list()[0].id, "2");
    }

    #[test]
    fn test_missing_ids_leave_store_unchanged() {
        let mut store = MemoryStore::with_records(vec![dish("1", "Taco")]);

        store.replace("7", dish("7", "Ghost"));
        store.remove("8");

        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].name, "Taco");
    }
}
