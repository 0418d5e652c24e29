use restaurant_recipe::clients::ResourceHandler;
use restaurant_recipe::framework::{IdGenerator, MemoryStore, ResourceError};
use restaurant_recipe::model::{LineItemPayload, Order, OrderPayload, OrderStatus};

fn payload() -> OrderPayload {
    OrderPayload::new("A", "555", vec![LineItemPayload::new("1", 2)])
}

fn seeded(id: &str, status: OrderStatus) -> Order {
    Order {
        id: id.to_string(),
        deliver_to: "A".to_string(),
        mobile_number: "555".to_string(),
        status,
        dishes: vec![],
    }
}

/// Real Order actor over a pre-seeded store.
/// Exercises the status state machine without the rest of the system.
#[tokio::test]
async fn test_order_status_state_machine() {
    let store = MemoryStore::with_records(vec![
        seeded("10", OrderStatus::Delivered),
        seeded("11", OrderStatus::Preparing),
    ]);
    let (order_actor, order_client) =
        restaurant_recipe::order_actor::new(8, store, IdGenerator::starting_at(100));
    let actor_handle = tokio::spawn(order_actor.run());

    // A new order starts pending and can move forward.
    let created = order_client.create_order(payload()).await.unwrap();
    assert_eq!(created.id, "100");
    assert_eq!(created.status, OrderStatus::Pending);

    let moved = order_client
        .update_order(created.id.clone(), payload().with_status("out-for-delivery"))
        .await
        .unwrap();
    assert_eq!(moved.status, OrderStatus::OutForDelivery);

    // Moving back is allowed; only delivered is final.
    let back = order_client
        .update_order(created.id.clone(), payload().with_status("pending"))
        .await
        .unwrap();
    assert_eq!(back.status, OrderStatus::Pending);

    // Delivered orders are frozen, even for otherwise invalid payloads.
    let err = order_client
        .update_order("10".into(), OrderPayload::default())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "A delivered order cannot be changed");

    // A non-pending order cannot be deleted and stays in the store.
    let err = order_client.delete_order("11".into()).await.unwrap_err();
    assert_eq!(
        err,
        ResourceError::validation("An order cannot be deleted unless it is pending")
    );
    assert_eq!(
        order_client.read("11".into()).await.unwrap().status,
        OrderStatus::Preparing
    );

    // The pending one can.
    order_client.delete_order(created.id.clone()).await.unwrap();
    assert_eq!(
        order_client.read(created.id.clone()).await,
        Err(ResourceError::not_found("Order", "100"))
    );

    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_create_rejects_unknown_status() {
    let (order_actor, order_client) =
        restaurant_recipe::order_actor::new(8, MemoryStore::new(), IdGenerator::default());
    let actor_handle = tokio::spawn(order_actor.run());

    let err = order_client
        .create_order(payload().with_status("invalid"))
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Order must have a status of pending, preparing, out-for-delivery, delivered"
    );

    let preparing = order_client
        .create_order(payload().with_status("preparing"))
        .await
        .unwrap();
    assert_eq!(preparing.status, OrderStatus::Preparing);
    assert_eq!(order_client.list().await.unwrap().len(), 1);

    drop(order_client);
    actor_handle.await.unwrap();
}

/// Failed validation leaves the record untouched.
#[tokio::test]
async fn test_rejected_update_is_not_applied() {
    let store = MemoryStore::with_records(vec![seeded("5", OrderStatus::Pending)]);
    let (order_actor, order_client) =
        restaurant_recipe::order_actor::new(8, store, IdGenerator::starting_at(6));
    let actor_handle = tokio::spawn(order_actor.run());

    let bad = OrderPayload::new(
        "B",
        "777",
        vec![LineItemPayload::new("1", 1), LineItemPayload::new("2", -4)],
    )
    .with_status("preparing");
    let err = order_client.update_order("5".into(), bad).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Dish 1 must have a quantity that is an integer greater than 0"
    );

    let unchanged = order_client.read("5".into()).await.unwrap();
    assert_eq!(unchanged, seeded("5", OrderStatus::Pending));

    drop(order_client);
    actor_handle.await.unwrap();
}
