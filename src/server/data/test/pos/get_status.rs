use crate::model::pos::{POS_STATUS_CLOSED, POS_STATUS_OPEN};

use super::*;

/// Tests the status inside a lunch slot of a Paris merchant.
///
/// Expected: OPEN evaluated on Paris time, next slot is the evening one
#[tokio::test]
async fn open_during_a_slot_in_merchant_time() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pos_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::merchant::create_merchant(db, MERCHANT, "Europe/Paris").await?;
    factory::merchant::create_opening_slot(db, MERCHANT, 1, 7, hm(12, 0), hm(14, 0)).await?;
    factory::merchant::create_opening_slot(db, MERCHANT, 1, 7, hm(19, 0), hm(23, 0)).await?;

    // 11:30 UTC is 12:30 in Paris.
    let status = repository(db)
        .get_status(MERCHANT, friday_utc(11, 30))
        .await?
        .unwrap();

    assert_eq!(status.wello_resto.status, POS_STATUS_OPEN);
    assert_eq!(status.wello_resto.is_open, 0);
    assert_eq!(status.wello_resto.next_start, Some(friday_local(19, 0)));
    assert_eq!(status.wello_resto.next_end, Some(friday_local(23, 0)));
    assert_eq!(status.uber_eats, None);

    Ok(())
}

/// Tests a merchant without opening hours.
///
/// Expected: CLOSED with no next slot
#[tokio::test]
async fn closed_without_opening_hours() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pos_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::merchant::create_merchant(db, MERCHANT, "Europe/Paris").await?;

    let status = repository(db)
        .get_status(MERCHANT, friday_utc(12, 0))
        .await?
        .unwrap();

    assert_eq!(status.wello_resto.status, POS_STATUS_CLOSED);
    assert_eq!(status.wello_resto.next_start, None);
    assert_eq!(status.wello_resto.next_end, None);

    Ok(())
}

/// Tests the Uber Eats block.
///
/// Expected: the enabled integration's busy mode is reported, a disabled one ignored
#[tokio::test]
async fn reports_the_enabled_uber_eats_integration() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pos_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::merchant::create_merchant(db, MERCHANT, "Europe/Paris").await?;
    factory::merchant::create_uber_eats_integration(db, MERCHANT, false, None).await?;
    let busy_until = friday_local(20, 30);
    factory::merchant::create_uber_eats_integration(db, MERCHANT, true, Some(busy_until)).await?;

    let status = repository(db)
        .get_status(MERCHANT, friday_utc(18, 0))
        .await?
        .unwrap();

    let uber_eats = status.uber_eats.unwrap();
    assert_eq!(uber_eats.busy_mode_delay_until, Some(busy_until));
    assert_eq!(uber_eats.busy_mode_delay_duration.as_deref(), Some("10"));
    assert_eq!(uber_eats.estimated_preparation_time.as_deref(), Some("15"));

    Ok(())
}

/// Tests an unknown merchant.
///
/// Expected: Ok(None), no hours queried
#[tokio::test]
async fn unknown_merchant_has_no_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Merchant)
        .with_table(entity::prelude::MerchantParameters)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let status = repository(db).get_status(MERCHANT, friday_utc(12, 0)).await?;

    assert_eq!(status, None);

    Ok(())
}
