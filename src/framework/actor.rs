//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the server side of each resource. It owns
//! the store and the identifier generator, and runs the resource handlers for every
//! request it receives, one request at a time.

use crate::framework::client::ResourceClient;
use crate::framework::ids::IdGenerator;
use crate::framework::message::ResourceRequest;
use crate::framework::pipeline::{record_exists, Submission};
use crate::framework::store::ResourceStore;
use crate::framework::{Resource, ResourceError};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages the records of one resource type.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// Requests are processed *sequentially* in a loop. A request's lookup, validation
/// and mutation all finish before the next message is received, so the
/// "record exists, then mutate it" sequence of update and delete can never
/// interleave with another write. No `Mutex` or `RwLock` is needed around the store.
///
/// ## Operations
///
/// * **List**: every record in store order, or only the one matching the id filter.
/// * **Create**: create pipeline → next id → [`Resource::from_payload`] → insert.
/// * **Read**: resolve the record or fail with `NotFound`.
/// * **Update**: resolve → update pipeline → rebuild with the original id → replace.
/// * **Delete**: resolve → delete pipeline → remove.
///
/// ```rust
/// use restaurant_recipe::framework::{IdGenerator, MemoryStore, ResourceActor};
/// use restaurant_recipe::model::{Dish, DishPayload};
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Dish>::new(10, MemoryStore::new(), IdGenerator::default());
///     tokio::spawn(actor.run());
///
///     let payload = DishPayload {
///         name: Some("Taco".into()),
///         description: Some("Spicy".into()),
///         price: Some(8.into()),
///         image_url: Some("http://x".into()),
///         ..Default::default()
///     };
///     let dish = client.create(payload).await.unwrap();
///     assert_eq!(client.read(dish.id.clone()).await.unwrap(), dish);
/// }
/// ```
pub struct ResourceActor<T: Resource> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Box<dyn ResourceStore<T>>,
    ids: IdGenerator,
}

impl<T: Resource> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `store` - Where the records live. May already hold seeded records.
    /// * `ids` - Source of identifiers for created records.
    pub fn new(
        buffer_size: usize,
        store: impl ResourceStore<T> + 'static,
        ids: IdGenerator,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Box::new(store),
            ids,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self) {
        let entity_type = T::KIND;
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { filter, respond_to } => {
                    let records = self.list(filter.as_deref());
                    debug!(entity_type, ?filter, count = records.len(), "List");
                    let _ = respond_to.send(Ok(records));
                }
                ResourceRequest::Create {
                    payload,
                    respond_to,
                } => {
                    debug!(entity_type, ?payload, "Create");
                    let result = self.create(payload);
                    match &result {
                        Ok(record) => {
                            info!(entity_type, id = %record.id(), size = self.store.len(), "Created")
                        }
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Read { id, respond_to } => {
                    let result = self.read(&id);
                    debug!(entity_type, %id, found = result.is_ok(), "Read");
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Update {
                    id,
                    payload,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?payload, "Update");
                    let result = self.update(&id, payload);
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(&id);
                    match &result {
                        Ok(()) => info!(entity_type, %id, size = self.store.len(), "Deleted"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn list(&self, filter: Option<&str>) -> Vec<T> {
        self.store
            .list()
            .iter()
            .filter(|record| filter.map_or(true, |id| record.id() == id))
            .cloned()
            .collect()
    }

    fn create(&mut self, payload: T::Payload) -> Result<T, ResourceError> {
        T::create_pipeline().run(&Submission::new(&payload))?;
        let record = T::from_payload(self.ids.next(), payload)?;
        Ok(self.store.insert(record))
    }

    fn read(&self, id: &str) -> Result<T, ResourceError> {
        record_exists(self.store.find(id), id).cloned()
    }

    fn update(&mut self, id: &str, payload: T::Payload) -> Result<T, ResourceError> {
        let current = record_exists(self.store.find(id), id)?;
        T::update_pipeline().run(&Submission::bound(&payload, id, current))?;

        let record_id = current.id().to_string();
        let record = T::from_payload(record_id, payload)?;
        Ok(self.store.replace(id, record))
    }

    fn delete(&mut self, id: &str) -> Result<(), ResourceError> {
        let current = record_exists(self.store.find(id), id)?;
        T::delete_pipeline().run(current)?;
        self.store.remove(id);
        Ok(())
    }
}
