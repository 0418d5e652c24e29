use super::macros::impl_resource_client;
use crate::framework::{ResourceClient, ResourceError};
use crate::model::{Order, OrderPayload};
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl_resource_client!(OrderClient, Order, OrderPayload, order);

impl OrderClient {
    /// Lists orders, optionally only the one with the given id.
    #[instrument(skip(self))]
    pub async fn list_orders(&self, filter: Option<String>) -> Result<Vec<Order>, ResourceError> {
        debug!("Sending request");
        self.inner.list(filter).await
    }

    /// Deletes a pending order.
    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: String) -> Result<(), ResourceError> {
        debug!("Sending request");
        self.inner.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_delete, MockClient};
    use crate::framework::ResourceRequest;
    use crate::model::{LineItemPayload, OrderStatus};

    #[tokio::test]
    async fn test_list_orders_passes_filter() {
        let (inner, mut receiver) = create_mock_client::<Order>(10);
        let client = OrderClient::new(inner);

        let task = tokio::spawn(async move { client.list_orders(Some("3".into())).await });

        match receiver.recv().await {
            Some(ResourceRequest::List { filter, respond_to }) => {
                assert_eq!(filter.as_deref(), Some("3"));
                respond_to.send(Ok(vec![])).unwrap();
            }
            other => panic!("Expected List request, got {:?}", other),
        }

        assert_eq!(task.await.unwrap(), Ok(vec![]));
    }

    #[tokio::test]
    async fn test_delete_order_sends_id() {
        let (inner, mut receiver) = create_mock_client::<Order>(10);
        let client = OrderClient::new(inner);

        let task = tokio::spawn(async move { client.delete_order("5".into()).await });

        let (id, responder) = expect_delete(&mut receiver)
            .await
            .expect("Expected Delete request");
        assert_eq!(id, "5");
        responder
            .send(Err(ResourceError::validation(
                "An order cannot be deleted unless it is pending",
            )))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap_err().status_code(), 400);
    }

    #[tokio::test]
    async fn test_create_order_when_actor_is_gone() {
        let (inner, receiver) = create_mock_client::<Order>(1);
        drop(receiver);
        let client = OrderClient::new(inner);

        let payload = OrderPayload::new("A", "555", vec![LineItemPayload::new("1", 2)]);
        assert_eq!(
            client.create_order(payload).await,
            Err(ResourceError::ActorClosed)
        );
    }

    #[tokio::test]
    async fn test_update_order_with_mock() {
        let mut mock = MockClient::<Order>::new();
        let updated = Order {
            id: "1".into(),
            deliver_to: "B".into(),
            mobile_number: "555".into(),
            status: OrderStatus::Preparing,
            dishes: vec![],
        };
        mock.expect_update("1").return_ok(updated.clone());

        let client = OrderClient::new(mock.client());
        let payload = OrderPayload::new("B", "555", vec![LineItemPayload::new("1", 1)])
            .with_status("preparing");
        assert_eq!(client.update_order("1".into(), payload).await, Ok(updated));
        mock.verify();
    }
}
