//! Delivery session factories.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a delivery session driven by `driver_id` with the given status.
///
/// # Arguments
/// - `db` - Database connection
/// - `merchant_id` - Merchant owning the session
/// - `driver_id` - `users.user_id` of the driver
/// - `status` - `"PENDING"` or `"1"` for an active run
pub async fn create_delivery_session(
    db: &DatabaseConnection,
    merchant_id: i32,
    driver_id: i32,
    status: &str,
) -> Result<entity::delivery_session::Model, DbErr> {
    entity::delivery_session::ActiveModel {
        merchant_id: ActiveValue::Set(merchant_id),
        user_id: ActiveValue::Set(driver_id),
        status: ActiveValue::Set(status.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Attaches `order_id` to `session_id` with a drop-off priority.
pub async fn add_order_to_session(
    db: &DatabaseConnection,
    session_id: i32,
    order_id: i32,
    priority: i64,
) -> Result<entity::delivery_session_order::Model, DbErr> {
    entity::delivery_session_order::ActiveModel {
        delivery_session_id: ActiveValue::Set(session_id),
        order_id: ActiveValue::Set(order_id),
        priority: ActiveValue::Set(Some(priority)),
        ..Default::default()
    }
    .insert(db)
    .await
}
