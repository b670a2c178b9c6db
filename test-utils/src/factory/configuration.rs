//! Configurable attribute factories: templates, product links and order selections.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an enabled single-choice attribute.
pub async fn create_attribute(
    db: &DatabaseConnection,
    merchant_id: i32,
    title: &str,
) -> Result<entity::configurable_attribute::Model, DbErr> {
    entity::configurable_attribute::ActiveModel {
        merchant_id: ActiveValue::Set(merchant_id),
        title: ActiveValue::Set(title.to_string()),
        max_options: ActiveValue::Set(1),
        min_options: ActiveValue::Set(0),
        attribute_type: ActiveValue::Set("SINGLE".to_string()),
        enabled: ActiveValue::Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates an option of `attribute_id`.
pub async fn create_option(
    db: &DatabaseConnection,
    attribute_id: i32,
    title: &str,
    enabled: bool,
) -> Result<entity::configurable_attribute_option::Model, DbErr> {
    entity::configurable_attribute_option::ActiveModel {
        configurable_attribute_id: ActiveValue::Set(attribute_id),
        title: ActiveValue::Set(title.to_string()),
        extra_price: ActiveValue::Set(0),
        max_quantity: ActiveValue::Set(1),
        enabled: ActiveValue::Set(enabled),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Attaches `attribute_id` to `product_id` at display position `num_order`.
pub async fn attach_attribute(
    db: &DatabaseConnection,
    product_id: i32,
    attribute_id: i32,
    num_order: i32,
) -> Result<entity::product_configurable_attribute::Model, DbErr> {
    entity::product_configurable_attribute::ActiveModel {
        product_id: ActiveValue::Set(product_id),
        configurable_attribute_id: ActiveValue::Set(attribute_id),
        num_order: ActiveValue::Set(num_order),
        enabled: ActiveValue::Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Records that `option_id` was picked `quantity` times for `order_item_id`.
pub async fn select_option(
    db: &DatabaseConnection,
    order_item_id: i32,
    option_id: i32,
    quantity: i32,
) -> Result<entity::order_item_configuration::Model, DbErr> {
    entity::order_item_configuration::ActiveModel {
        order_item_id: ActiveValue::Set(order_item_id),
        configuration_attribute_option_id: ActiveValue::Set(option_id),
        quantity: ActiveValue::Set(quantity),
        ..Default::default()
    }
    .insert(db)
    .await
}
