use super::*;

/// Tests the manual switch of an existing merchant.
///
/// Expected: Ok(true) and the next status read reports it
#[tokio::test]
async fn switch_is_persisted() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pos_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::merchant::create_merchant(db, MERCHANT, "Europe/Paris").await?;
    factory::merchant::create_merchant(db, 2, "Europe/Paris").await?;

    assert!(repository(db).set_open(MERCHANT, true).await?);

    let own = repository(db).get_status(MERCHANT, friday_utc(12, 0)).await?;
    let other = repository(db).get_status(2, friday_utc(12, 0)).await?;
    assert_eq!(own.unwrap().wello_resto.is_open, 1);
    assert_eq!(other.unwrap().wello_resto.is_open, 0);

    Ok(())
}

/// Tests the switch of a merchant without a parameter row.
///
/// Expected: Ok(false)
#[tokio::test]
async fn unknown_merchant_is_not_switched() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pos_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!repository(db).set_open(MERCHANT, true).await?);

    Ok(())
}
