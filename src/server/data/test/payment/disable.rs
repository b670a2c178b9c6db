use super::*;

/// Tests disabling a payment of the merchant.
///
/// Expected: Ok(true), the row is disabled and other payments are untouched
#[tokio::test]
async fn disables_the_payment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let order = factory::create_order(db, MERCHANT).await?;
    let payment = factory::order_detail::create_payment(db, order.order_id, "CB", 10.0).await?;
    let other = factory::order_detail::create_payment(db, order.order_id, "CASH", 2.0).await?;

    let disabled = PaymentRepository::new(db)
        .disable(MERCHANT, payment.payment_id)
        .await?;

    assert!(disabled);
    let row = entity::prelude::Payment::find_by_id(payment.payment_id)
        .one(db)
        .await?
        .unwrap();
    assert!(!row.enabled);
    let untouched = entity::prelude::Payment::find_by_id(other.payment_id)
        .one(db)
        .await?
        .unwrap();
    assert!(untouched.enabled);

    Ok(())
}

/// Tests disabling a payment twice.
///
/// Expected: Ok(true) both times
#[tokio::test]
async fn disabling_twice_succeeds() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let order = factory::create_order(db, MERCHANT).await?;
    let payment = factory::order_detail::create_payment(db, order.order_id, "CB", 10.0).await?;

    let repository = PaymentRepository::new(db);
    assert!(repository.disable(MERCHANT, payment.payment_id).await?);
    assert!(repository.disable(MERCHANT, payment.payment_id).await?);

    Ok(())
}

/// Tests disabling another merchant's payment or an unknown one.
///
/// Expected: Ok(false) and the row stays enabled
#[tokio::test]
async fn refuses_foreign_or_unknown_payment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let order = factory::create_order(db, MERCHANT + 1).await?;
    let payment = factory::order_detail::create_payment(db, order.order_id, "CB", 10.0).await?;

    let repository = PaymentRepository::new(db);
    assert!(!repository.disable(MERCHANT, payment.payment_id).await?);
    assert!(!repository.disable(MERCHANT, 999_999).await?);

    let row = entity::prelude::Payment::find_by_id(payment.payment_id)
        .one(db)
        .await?
        .unwrap();
    assert!(row.enabled);

    Ok(())
}
