use chrono::NaiveDate;

use super::*;

fn at(day: u32, hour: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

/// Tests the history view over a date range, closed orders included.
///
/// Expected: orders created within the inclusive range, oldest first
#[tokio::test]
async fn returns_orders_within_range_oldest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let late = factory::order::OrderFactory::new(db, MERCHANT)
        .state("CLOSED")
        .creation_date(at(12, 23))
        .build()
        .await?;
    let early = factory::order::OrderFactory::new(db, MERCHANT)
        .state("CLOSED")
        .creation_date(at(10, 0))
        .build()
        .await?;
    factory::order::OrderFactory::new(db, MERCHANT)
        .creation_date(at(13, 0))
        .build()
        .await?;

    let history = repository(db)
        .get_history(MERCHANT, at(10, 0), at(12, 23))
        .await?;

    let ids: Vec<i32> = history.iter().map(|order| order.order_id).collect();
    assert_eq!(ids, vec![early.order_id, late.order_id]);

    Ok(())
}

/// Tests a range without any order.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_list_for_empty_range() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::order::OrderFactory::new(db, MERCHANT)
        .creation_date(at(1, 12))
        .build()
        .await?;

    let history = repository(db)
        .get_history(MERCHANT, at(20, 0), at(21, 0))
        .await?;

    assert!(history.is_empty());

    Ok(())
}
