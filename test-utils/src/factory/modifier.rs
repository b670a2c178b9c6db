//! Extra, without and discount factories.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Adds `component_id` as an extra on `item`.
pub async fn create_extra(
    db: &DatabaseConnection,
    item: &entity::order_item::Model,
    component_id: i32,
    price: f64,
) -> Result<entity::extra::Model, DbErr> {
    entity::extra::ActiveModel {
        order_item_id: ActiveValue::Set(item.order_item_id),
        order_id: ActiveValue::Set(item.order_id),
        product_id: ActiveValue::Set(item.product_id),
        component_id: ActiveValue::Set(component_id),
        price: ActiveValue::Set(price),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Removes `component_id` from `item`.
pub async fn create_without(
    db: &DatabaseConnection,
    item: &entity::order_item::Model,
    component_id: i32,
) -> Result<entity::without::Model, DbErr> {
    entity::without::ActiveModel {
        order_item_id: ActiveValue::Set(item.order_item_id),
        order_id: ActiveValue::Set(item.order_id),
        product_id: ActiveValue::Set(item.product_id),
        component_id: ActiveValue::Set(component_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a named discount.
pub async fn create_discount(
    db: &DatabaseConnection,
    merchant_id: i32,
    name: &str,
) -> Result<entity::discount::Model, DbErr> {
    entity::discount::ActiveModel {
        merchant_id: ActiveValue::Set(merchant_id),
        discount_name: ActiveValue::Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}
