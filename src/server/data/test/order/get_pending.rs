use super::*;

/// Tests the pending view of a merchant without orders.
///
/// Expected: Ok with both lists empty
#[tokio::test]
async fn returns_empty_lists_without_orders() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pending = repository(db).get_pending(MERCHANT, None).await?;

    assert!(pending.orders.is_empty());
    assert!(pending.delivery_sessions.is_empty());

    Ok(())
}

/// Tests an open order with two lines, the first carrying one extra and one without.
///
/// Expected: one order, both lines in insertion order, modifiers only on the first line
#[tokio::test]
async fn assembles_lines_with_their_modifiers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (order, first) = factory::helpers::create_order_with_item(db, MERCHANT).await?;
    let product = factory::helpers::create_product_with_dependencies(db, MERCHANT).await?;
    let second = factory::create_order_item(db, &order, product.product_id).await?;

    let cheese = factory::component::create_component(db, MERCHANT, None, "Cheese").await?;
    let onion = factory::component::create_component(db, MERCHANT, None, "Onion").await?;
    factory::modifier::create_extra(db, &first, cheese.component_id, 1.5).await?;
    factory::modifier::create_without(db, &first, onion.component_id).await?;

    let pending = repository(db).get_pending(MERCHANT, None).await?;

    assert_eq!(pending.orders.len(), 1);
    let products = &pending.orders[0].products;
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].order_item_id, first.order_item_id);
    assert_eq!(products[1].order_item_id, second.order_item_id);
    assert_eq!(products[0].extra.len(), 1);
    assert_eq!(products[0].extra[0].name, "Cheese");
    assert_eq!(products[0].without.len(), 1);
    assert_eq!(products[0].without[0].name, "Onion");
    assert!(products[1].extra.is_empty());
    assert!(products[1].without.is_empty());

    Ok(())
}

/// Tests an order attached to an active delivery session.
///
/// Expected: the session lists the order, which carries the session id and priority
#[tokio::test]
async fn attaches_orders_to_their_active_session() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::create_user(db, MERCHANT).await?;
    let (order, _) = factory::helpers::create_order_with_item(db, MERCHANT).await?;
    let session =
        factory::delivery_session::create_delivery_session(db, MERCHANT, driver.user_id, "PENDING")
            .await?;
    factory::delivery_session::add_order_to_session(db, session.id, order.order_id, 2).await?;

    let pending = repository(db).get_pending(MERCHANT, None).await?;

    assert_eq!(pending.orders.len(), 1);
    assert_eq!(pending.orders[0].delivery_session_id, Some(session.id));
    assert_eq!(pending.orders[0].priority, Some(2));

    assert_eq!(pending.delivery_sessions.len(), 1);
    let listed = &pending.delivery_sessions[0];
    assert_eq!(listed.delivery_session_id, session.id);
    assert_eq!(listed.delivery_man.user_id, driver.user_id);
    assert_eq!(listed.orders, pending.orders);

    Ok(())
}

/// Tests that orders still attached to an active session stay pending once closed.
///
/// Expected: the closed order is listed, a closed order outside any session is not
#[tokio::test]
async fn keeps_closed_orders_of_active_sessions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::create_user(db, MERCHANT).await?;
    let delivering = factory::order::OrderFactory::new(db, MERCHANT)
        .state("CLOSED")
        .build()
        .await?;
    factory::order::OrderFactory::new(db, MERCHANT)
        .state("CLOSED")
        .build()
        .await?;
    let session =
        factory::delivery_session::create_delivery_session(db, MERCHANT, driver.user_id, "1")
            .await?;
    factory::delivery_session::add_order_to_session(db, session.id, delivering.order_id, 1)
        .await?;

    let pending = repository(db).get_pending(MERCHANT, None).await?;

    assert_eq!(pending.orders.len(), 1);
    assert_eq!(pending.orders[0].order_id, delivering.order_id);

    Ok(())
}

/// Tests that orders awaiting an online payment are not pending.
///
/// Expected: Ok with no orders
#[tokio::test]
async fn skips_orders_awaiting_online_payment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::order::OrderFactory::new(db, MERCHANT)
        .brand_status("ONLINE_PAYMENT_PENDING")
        .build()
        .await?;

    let pending = repository(db).get_pending(MERCHANT, None).await?;

    assert!(pending.orders.is_empty());

    Ok(())
}

/// Tests that another merchant's orders never show up.
///
/// Expected: only the caller's merchant orders
#[tokio::test]
async fn only_reads_the_callers_merchant() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_order_with_item(db, MERCHANT).await?;
    factory::helpers::create_order_with_item(db, MERCHANT + 1).await?;

    let pending = repository(db).get_pending(MERCHANT, None).await?;

    assert_eq!(pending.orders.len(), 1);
    assert!(pending.orders.iter().all(|order| order.products.len() == 1));

    Ok(())
}

/// Tests the channel restriction of the delivery and waiter apps.
///
/// Expected: delivery sees restaurant deliveries only, waiter sees dine-in only,
/// reception sees everything
#[tokio::test]
async fn restricts_orders_by_channel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dine_in = factory::create_order(db, MERCHANT).await?;
    let delivery = factory::order::OrderFactory::new(db, MERCHANT)
        .order_type("DELIVERY")
        .fulfillment_type("DELIVERY_BY_RESTAURANT")
        .build()
        .await?;
    factory::order::OrderFactory::new(db, MERCHANT)
        .order_type("TAKE_AWAY")
        .build()
        .await?;

    let repository = repository(db);

    let reception = repository
        .get_pending(MERCHANT, Some(Channel::Reception))
        .await?;
    assert_eq!(reception.orders.len(), 3);

    let drivers = repository
        .get_pending(MERCHANT, Some(Channel::Delivery))
        .await?;
    assert_eq!(drivers.orders.len(), 1);
    assert_eq!(drivers.orders[0].order_id, delivery.order_id);

    let waiters = repository.get_pending(MERCHANT, Some(Channel::Waiter)).await?;
    assert_eq!(waiters.orders.len(), 1);
    assert_eq!(waiters.orders[0].order_id, dine_in.order_id);

    Ok(())
}
