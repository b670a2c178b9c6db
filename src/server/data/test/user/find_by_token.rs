use super::*;

/// Tests resolving a known token.
///
/// Expected: Ok(Some(Identity)) with the user's merchant and permissions
#[tokio::test]
async fn resolves_identity_of_known_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db, 7)
        .token("secret")
        .access_delivery(false)
        .build()
        .await?;

    let identity = UserRepository::new(db)
        .find_by_token("secret")
        .await?
        .unwrap();

    assert_eq!(identity.user_id, user.user_id);
    assert_eq!(identity.merchant_id, 7);
    assert!(identity.access_reception);
    assert!(!identity.access_delivery);
    assert!(identity.access_waiter);

    Ok(())
}

/// Tests an unknown token.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db, 1).await?;

    let identity = UserRepository::new(db).find_by_token("nope").await?;

    assert!(identity.is_none());

    Ok(())
}
