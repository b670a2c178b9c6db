use std::time::Duration;

use chrono::NaiveDate;
use entity::prelude::{Customer, Order, User};
use sea_orm::DbErr;

use super::*;
use crate::server::{data::batch::BatchContext, error::aggregation::AggregationError};

fn march(day: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Tests a step outliving the configured step timeout.
///
/// Expected: Err(StepTimeout) naming the step and carrying the timeout
#[tokio::test]
async fn slow_step_times_out() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Order).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let options = AggregationOptions {
        step_timeout: Duration::from_millis(5),
        ..AggregationOptions::default()
    };
    let ctx = BatchContext::begin(db, &options, CancelSignal::never()).await?;

    let result = ctx
        .step("slow", async {
            tokio::time::sleep(Duration::from_secs(4)).await;
            Ok::<_, DbErr>(Vec::<i32>::new())
        })
        .await;

    match result {
        Err(AggregationError::StepTimeout { step, timeout }) => {
            assert_eq!(step, "slow");
            assert_eq!(timeout, Duration::from_millis(5));
        }
        other => panic!("expected a step timeout, got {other:?}"),
    }

    Ok(())
}

/// Tests a query failing after the headers already loaded.
///
/// Only the header tables exist, so the first child step fails.
///
/// Expected: Err(Storage) naming that step under both strategies, no partial order
#[tokio::test]
async fn failing_child_step_fails_the_whole_batch() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Customer)
        .with_table(Order)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let order = factory::create_order(db, MERCHANT).await?;

    for strategy in [FetchStrategy::Direct, FetchStrategy::Narrowed] {
        let result = OrderRepository::new(
            db,
            AggregationOptions {
                strategy,
                ..AggregationOptions::default()
            },
            CancelSignal::never(),
        )
        .get_by_id(MERCHANT, order.order_id)
        .await;

        assert!(
            matches!(
                result,
                Err(AggregationError::Storage {
                    step: "session_memberships",
                    ..
                })
            ),
            "{strategy:?}: {result:?}"
        );
    }

    Ok(())
}

/// Tests a narrowed read whose view resolves to no order.
///
/// Only `orders` exists: any query past id resolution would fail on a missing table.
///
/// Expected: Ok(empty) when narrowed, Err(Storage) at headers when direct
#[tokio::test]
async fn narrowed_empty_view_stops_after_resolving_ids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Order).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let narrowed = repository(db).get_history(MERCHANT, march(1), march(31)).await?;
    assert!(narrowed.is_empty());

    let direct = OrderRepository::new(
        db,
        AggregationOptions {
            strategy: FetchStrategy::Direct,
            ..AggregationOptions::default()
        },
        CancelSignal::never(),
    )
    .get_history(MERCHANT, march(1), march(31))
    .await;
    assert!(matches!(
        direct,
        Err(AggregationError::Storage {
            step: "headers",
            ..
        })
    ));

    Ok(())
}
