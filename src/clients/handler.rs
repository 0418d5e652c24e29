use crate::framework::{Resource, ResourceClient, ResourceError};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the read-only operations.
///
/// Listing and reading look the same for every resource, so they are provided
/// here; the mutating operations live on each client with its own naming.
#[async_trait]
pub trait ResourceHandler<T: Resource>: Send + Sync {
    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Fetch every record in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, ResourceError> {
        tracing::debug!("Sending request");
        self.inner().list(None).await
    }

    /// Fetch a record by ID.
    #[tracing::instrument(skip(self))]
    async fn read(&self, id: String) -> Result<T, ResourceError> {
        tracing::debug!("Sending request");
        self.inner().read(id).await
    }
}
