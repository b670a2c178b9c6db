use super::*;

/// Tests listing the payments of an order, disabled ones included.
///
/// Expected: Ok(Some) with every payment in id order
#[tokio::test]
async fn lists_every_payment_of_the_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let order = factory::create_order(db, MERCHANT).await?;
    let cash = factory::order_detail::create_payment(db, order.order_id, "CASH", 5.0).await?;
    let card = factory::order_detail::create_payment(db, order.order_id, "CB", 10.0).await?;

    let repository = PaymentRepository::new(db);
    repository.disable(MERCHANT, cash.payment_id).await?;

    let payments = repository.get_by_order(MERCHANT, order.order_id).await?.unwrap();

    assert_eq!(payments.len(), 2);
    assert_eq!(payments[0].payment_id, cash.payment_id);
    assert_eq!(payments[0].enabled, 0);
    assert_eq!(payments[1].payment_id, card.payment_id);
    assert_eq!(payments[1].enabled, 1);

    Ok(())
}

/// Tests an order without payments.
///
/// Expected: Ok(Some) with an empty list
#[tokio::test]
async fn returns_empty_list_without_payments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let order = factory::create_order(db, MERCHANT).await?;

    let payments = PaymentRepository::new(db)
        .get_by_order(MERCHANT, order.order_id)
        .await?;

    assert_eq!(payments, Some(Vec::new()));

    Ok(())
}

/// Tests an order of another merchant.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_other_merchants_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let order = factory::create_order(db, MERCHANT + 1).await?;
    factory::order_detail::create_payment(db, order.order_id, "CB", 10.0).await?;

    let payments = PaymentRepository::new(db)
        .get_by_order(MERCHANT, order.order_id)
        .await?;

    assert!(payments.is_none());

    Ok(())
}
