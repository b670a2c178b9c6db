use chrono::NaiveDate;
use sea_orm::ConnectionTrait;

use super::*;

fn strategy(db: &DatabaseConnection, strategy: FetchStrategy) -> OrderRepository<'_> {
    OrderRepository::new(
        db,
        AggregationOptions {
            strategy,
            ..AggregationOptions::default()
        },
        CancelSignal::never(),
    )
}

/// Tests that both fetch strategies assemble the same pending orders.
///
/// Expected: identical results
#[tokio::test]
async fn direct_and_narrowed_agree() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::create_user(db, MERCHANT).await?;
    let (first, item) = factory::helpers::create_order_with_item(db, MERCHANT).await?;
    let (second, _) = factory::helpers::create_order_with_item(db, MERCHANT).await?;
    let extra = factory::component::create_component(db, MERCHANT, None, "Bacon").await?;
    factory::modifier::create_extra(db, &item, extra.component_id, 2.0).await?;
    factory::order_detail::create_payment(db, first.order_id, "CB", 12.0).await?;
    let session =
        factory::delivery_session::create_delivery_session(db, MERCHANT, driver.user_id, "PENDING")
            .await?;
    factory::delivery_session::add_order_to_session(db, session.id, second.order_id, 1).await?;

    let direct = strategy(db, FetchStrategy::Direct)
        .get_pending(MERCHANT, None)
        .await?;
    let narrowed = strategy(db, FetchStrategy::Narrowed)
        .get_pending(MERCHANT, None)
        .await?;

    assert_eq!(direct.orders.len(), 2);
    assert_eq!(direct.orders, narrowed.orders);
    assert_eq!(direct.delivery_sessions, narrowed.delivery_sessions);

    Ok(())
}

/// Tests a history range covering more orders than SQLite binds parameters per statement.
///
/// Expected: both strategies return every order, oldest first, with children attached
#[tokio::test]
async fn narrowed_handles_more_ids_than_bind_parameters() -> Result<(), AppError> {
    const ORDERS: usize = 33_000;

    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    db.execute_unprepared(&format!(
        "WITH RECURSIVE seq(n) AS (SELECT 1 UNION ALL SELECT n + 1 FROM seq WHERE n < {ORDERS}) \
         INSERT INTO orders (merchant_id, state, scheduled, price, is_paid, is_distributed, \
         is_delivery, use_customer_temporary_address, creation_date) \
         SELECT {MERCHANT}, 'CLOSED', 0, 0, 0, 0, 0, 0, \
         datetime('2025-03-01 00:00:00', '+' || n || ' seconds') FROM seq"
    ))
    .await?;

    let from = NaiveDate::from_ymd_opt(2025, 3, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let to = NaiveDate::from_ymd_opt(2025, 3, 31)
        .unwrap()
        .and_hms_opt(23, 59, 59)
        .unwrap();
    let newest = factory::order::OrderFactory::new(db, MERCHANT)
        .state("CLOSED")
        .creation_date(to)
        .build()
        .await?;
    factory::order_detail::create_payment(db, newest.order_id, "CB", 15.0).await?;

    let direct = strategy(db, FetchStrategy::Direct)
        .get_history(MERCHANT, from, to)
        .await?;
    let narrowed = strategy(db, FetchStrategy::Narrowed)
        .get_history(MERCHANT, from, to)
        .await?;

    assert_eq!(direct.len(), ORDERS + 1);
    assert_eq!(direct, narrowed);
    let last = narrowed.last().unwrap();
    assert_eq!(last.order_id, newest.order_id);
    assert_eq!(last.payments.len(), 1);

    Ok(())
}
