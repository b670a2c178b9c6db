use super::*;

/// Tests the session view with one loaded and one empty active session.
///
/// Expected: both sessions, the empty one with an empty order list, the finished one absent
#[tokio::test]
async fn lists_active_sessions_with_their_orders() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::create_user(db, MERCHANT).await?;
    let (order, _) = factory::helpers::create_order_with_item(db, MERCHANT).await?;
    let loaded =
        factory::delivery_session::create_delivery_session(db, MERCHANT, driver.user_id, "PENDING")
            .await?;
    let empty =
        factory::delivery_session::create_delivery_session(db, MERCHANT, driver.user_id, "1")
            .await?;
    let finished =
        factory::delivery_session::create_delivery_session(db, MERCHANT, driver.user_id, "DONE")
            .await?;
    factory::delivery_session::add_order_to_session(db, loaded.id, order.order_id, 1).await?;

    let sessions = repository(db).get_pending_delivery_sessions(MERCHANT).await?;

    let ids: Vec<i32> = sessions.iter().map(|s| s.delivery_session_id).collect();
    assert_eq!(ids, vec![loaded.id, empty.id]);
    assert!(!ids.contains(&finished.id));
    assert_eq!(sessions[0].orders.len(), 1);
    assert_eq!(sessions[0].orders[0].order_id, order.order_id);
    assert!(sessions[1].orders.is_empty());

    Ok(())
}

/// Tests that session orders equal the by-id aggregate.
///
/// Expected: field-identical orders
#[tokio::test]
async fn session_orders_match_lookup_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::create_user(db, MERCHANT).await?;
    let (order, item) = factory::helpers::create_order_with_item(db, MERCHANT).await?;
    factory::order_detail::create_payment(db, order.order_id, "CASH", 10.0).await?;
    factory::order_detail::create_comment(db, order.order_id, Some(item.order_item_id), None, "Hot")
        .await?;
    let session =
        factory::delivery_session::create_delivery_session(db, MERCHANT, driver.user_id, "PENDING")
            .await?;
    factory::delivery_session::add_order_to_session(db, session.id, order.order_id, 3).await?;

    let repository = repository(db);
    let sessions = repository.get_pending_delivery_sessions(MERCHANT).await?;
    let by_id = repository.get_by_id(MERCHANT, order.order_id).await?;

    assert_eq!(Some(&sessions[0].orders[0]), by_id.as_ref());

    Ok(())
}

/// Tests a merchant without active sessions.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_list_without_sessions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_order_with_item(db, MERCHANT).await?;

    let sessions = repository(db).get_pending_delivery_sessions(MERCHANT).await?;

    assert!(sessions.is_empty());

    Ok(())
}
