//! Factories for the per-order collections: payments, comments, locations and
//! scan-and-order attributions.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an enabled payment on `order_id`.
pub async fn create_payment(
    db: &DatabaseConnection,
    order_id: i32,
    mop: &str,
    amount: f64,
) -> Result<entity::payment::Model, DbErr> {
    entity::payment::ActiveModel {
        order_id: ActiveValue::Set(order_id),
        mop: ActiveValue::Set(mop.to_string()),
        amount: ActiveValue::Set(amount),
        payment_date: ActiveValue::Set(Some(Utc::now().naive_utc())),
        enabled: ActiveValue::Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a comment on an order, or on one of its items when `order_item_id` is set.
pub async fn create_comment(
    db: &DatabaseConnection,
    order_id: i32,
    order_item_id: Option<i32>,
    user_id: Option<i32>,
    content: &str,
) -> Result<entity::order_comment::Model, DbErr> {
    entity::order_comment::ActiveModel {
        order_id: ActiveValue::Set(order_id),
        order_item_id: ActiveValue::Set(order_item_id),
        user_id: ActiveValue::Set(user_id),
        content: ActiveValue::Set(content.to_string()),
        creation_date: ActiveValue::Set(Some(Utc::now().naive_utc())),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a location and places `order_id` at it.
pub async fn create_order_location(
    db: &DatabaseConnection,
    merchant_id: i32,
    order_id: i32,
    name: &str,
) -> Result<entity::location::Model, DbErr> {
    let location = crate::factory::floor_plan::create_location(db, merchant_id, name, 0).await?;

    entity::order_location::ActiveModel {
        order_id: ActiveValue::Set(order_id),
        location_id: ActiveValue::Set(location.location_id),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(location)
}

/// Creates a scan-and-order guest and attributes `quantity` of `order_item_id` to them.
pub async fn create_sno_client(
    db: &DatabaseConnection,
    merchant_id: i32,
    order_item_id: i32,
    user_code: &str,
    user_name: &str,
    quantity: i32,
) -> Result<entity::session_order_item::Model, DbErr> {
    entity::scannorder_session::ActiveModel {
        user_code: ActiveValue::Set(user_code.to_string()),
        merchant_id: ActiveValue::Set(merchant_id),
        user_name: ActiveValue::Set(Some(user_name.to_string())),
    }
    .insert(db)
    .await?;

    entity::session_order_item::ActiveModel {
        order_item_id: ActiveValue::Set(order_item_id),
        user_code: ActiveValue::Set(user_code.to_string()),
        quantity: ActiveValue::Set(quantity),
        ..Default::default()
    }
    .insert(db)
    .await
}
