/// Implements the constructor, [`ResourceHandler`](crate::clients::ResourceHandler)
/// and the `create_<name>` / `update_<name>` methods for a client wrapping
/// `ResourceClient<$entity>` in a field named `inner`.
macro_rules! impl_resource_client {
    ($client_name:ident, $entity:ty, $payload:ty, $entity_name_snake:ident) => {
        paste::paste! {
            impl $client_name {
                pub fn new(inner: $crate::framework::ResourceClient<$entity>) -> Self {
                    Self { inner }
                }

                #[tracing::instrument(skip(self))]
                pub async fn [<create_ $entity_name_snake>](
                    &self,
                    payload: $payload,
                ) -> Result<$entity, $crate::framework::ResourceError> {
                    tracing::debug!("Sending request");
                    self.inner.create(payload).await
                }

                #[tracing::instrument(skip(self))]
                pub async fn [<update_ $entity_name_snake>](
                    &self,
                    id: String,
                    payload: $payload,
                ) -> Result<$entity, $crate::framework::ResourceError> {
                    tracing::debug!("Sending request");
                    self.inner.update(id, payload).await
                }
            }

            #[async_trait::async_trait]
            impl $crate::clients::ResourceHandler<$entity> for $client_name {
                fn inner(&self) -> &$crate::framework::ResourceClient<$entity> {
                    &self.inner
                }
            }
        }
    };
}

pub(crate) use impl_resource_client;
