use std::time::Duration;

use sea_orm::DbErr;

use super::*;
use crate::server::{data::batch::BatchContext, error::aggregation::AggregationError};

/// Tests a batch whose caller already went away.
///
/// Expected: Err(Cancelled) and no result
#[tokio::test]
async fn cancelled_batch_fails_fast() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_order_with_item(db, MERCHANT).await?;

    let (handle, signal) = CancelSignal::channel();
    handle.cancel();

    let result = OrderRepository::new(db, AggregationOptions::default(), signal)
        .get_pending(MERCHANT, None)
        .await;

    assert!(matches!(result, Err(AggregationError::Cancelled { .. })));

    // The pool connection is released; a fresh batch still runs.
    let pending = repository(db).get_pending(MERCHANT, None).await?;
    assert_eq!(pending.orders.len(), 1);

    Ok(())
}

/// Tests cancellation firing while a step is still running.
///
/// Expected: Err(Cancelled) naming the running step, the snapshot rolled back
#[tokio::test]
async fn cancel_during_step_interrupts_it() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_order(db, MERCHANT).await?;

    let (handle, signal) = CancelSignal::channel();
    let ctx = BatchContext::begin(db, &AggregationOptions::default(), signal).await?;

    let slow = ctx.step("slow", async {
        tokio::time::sleep(Duration::from_secs(4)).await;
        Ok::<_, DbErr>(Vec::<i32>::new())
    });
    let fire = async {
        tokio::time::sleep(Duration::from_millis(20)).await;
        handle.cancel();
    };
    let (result, ()) = tokio::join!(slow, fire);

    assert!(matches!(
        result,
        Err(AggregationError::Cancelled { step: "slow" })
    ));

    drop(ctx);
    let pending = repository(db).get_pending(MERCHANT, None).await?;
    assert_eq!(pending.orders.len(), 1);

    Ok(())
}
