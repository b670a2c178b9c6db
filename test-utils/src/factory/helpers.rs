//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules, including ID
//! generation and convenience methods for creating rows with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a root product with its VAT rate and category.
///
/// This is a convenience method that creates:
/// 1. VAT category (10%)
/// 2. Product category
/// 3. Product in that category using the VAT rate for all three modes
///
/// # Arguments
/// - `db` - Database connection
/// - `merchant_id` - Merchant owning the rows
///
/// # Returns
/// - `Ok(entity::product::Model)` - Created product
/// - `Err(DbErr)` - Database error during creation
pub async fn create_product_with_dependencies(
    db: &DatabaseConnection,
    merchant_id: i32,
) -> Result<entity::product::Model, DbErr> {
    let tva = crate::factory::product::create_tva_category(db, 10.0).await?;
    let category = crate::factory::product::create_product_category(db, merchant_id).await?;

    crate::factory::product::ProductFactory::new(db, merchant_id, tva.tva_id)
        .category(category.merchant_categ_id)
        .build()
        .await
}

/// Creates an open order holding one line of a freshly created product.
///
/// # Arguments
/// - `db` - Database connection
/// - `merchant_id` - Merchant owning the rows
///
/// # Returns
/// - `Ok((order, item))` - Created order header and its single item
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_with_item(
    db: &DatabaseConnection,
    merchant_id: i32,
) -> Result<(entity::order::Model, entity::order_item::Model), DbErr> {
    let product = create_product_with_dependencies(db, merchant_id).await?;
    let order = crate::factory::order::create_order(db, merchant_id).await?;
    let item = crate::factory::order_item::create_order_item(db, &order, product.product_id).await?;

    Ok((order, item))
}
