//! Product, product category and VAT rate factories.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for catalog products.
///
/// # Example
///
/// ```rust,ignore
/// let sub = ProductFactory::new(&db, 1, tva.tva_id)
///     .category(category.merchant_categ_id)
///     .by_product_of(parent.product_id)
///     .name("Large")
///     .build()
///     .await?;
/// ```
pub struct ProductFactory<'a> {
    db: &'a DatabaseConnection,
    merchant_id: i32,
    tva_id: i32,
    name: String,
    category: Option<i32>,
    by_product_of: Option<i32>,
    price: i64,
    available: bool,
    enabled: bool,
}

impl<'a> ProductFactory<'a> {
    /// Creates a new ProductFactory.
    ///
    /// Defaults:
    /// - name: `"Product {id}"`
    /// - no category, root product (no parent)
    /// - price: `1000` for all three modes
    /// - available and enabled
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `merchant_id` - Merchant owning the product
    /// - `tva_id` - VAT category used for dine-in, delivery and take-away
    pub fn new(db: &'a DatabaseConnection, merchant_id: i32, tva_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            merchant_id,
            tva_id,
            name: format!("Product {}", id),
            category: None,
            by_product_of: None,
            price: 1000,
            available: true,
            enabled: true,
        }
    }

    /// Sets the product name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Places the product in a category.
    pub fn category(mut self, category: i32) -> Self {
        self.category = Some(category);
        self
    }

    /// Makes the product a sub-product of `parent_id`.
    pub fn by_product_of(mut self, parent_id: i32) -> Self {
        self.by_product_of = Some(parent_id);
        self
    }

    /// Sets the price for all three modes.
    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    /// Sets the `available` flag.
    pub fn available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Sets the `enabled` flag.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Builds and inserts the product.
    ///
    /// # Returns
    /// - `Ok(entity::product::Model)` - Created product
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::product::Model, DbErr> {
        entity::product::ActiveModel {
            merchant_id: ActiveValue::Set(self.merchant_id),
            by_product_of: ActiveValue::Set(self.by_product_of),
            category: ActiveValue::Set(self.category),
            name: ActiveValue::Set(self.name),
            product_desc: ActiveValue::Set(None),
            price: ActiveValue::Set(self.price),
            price_take_away: ActiveValue::Set(self.price),
            price_delivery: ActiveValue::Set(self.price),
            tva_in_id: ActiveValue::Set(self.tva_id),
            tva_delivery_id: ActiveValue::Set(self.tva_id),
            tva_take_away_id: ActiveValue::Set(self.tva_id),
            bg_color: ActiveValue::Set(None),
            is_product_group: ActiveValue::Set(false),
            status: ActiveValue::Set(1),
            is_available_on_sno: ActiveValue::Set(true),
            is_popular: ActiveValue::Set(false),
            image_url: ActiveValue::Set(None),
            production_color: ActiveValue::Set(None),
            available_in: ActiveValue::Set(true),
            available_take_away: ActiveValue::Set(true),
            available_delivery: ActiveValue::Set(true),
            available: ActiveValue::Set(self.available),
            enabled: ActiveValue::Set(self.enabled),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a VAT category with the given rate.
pub async fn create_tva_category(
    db: &DatabaseConnection,
    rate: f64,
) -> Result<entity::tva_category::Model, DbErr> {
    entity::tva_category::ActiveModel {
        tva_rate: ActiveValue::Set(rate),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates an available product category placed at position `0`.
pub async fn create_product_category(
    db: &DatabaseConnection,
    merchant_id: i32,
) -> Result<entity::product_category::Model, DbErr> {
    create_product_category_with_order(db, merchant_id, &format!("Category {}", next_id()), 0).await
}

/// Creates an available product category with an explicit name and display position.
pub async fn create_product_category_with_order(
    db: &DatabaseConnection,
    merchant_id: i32,
    name: &str,
    categ_order: i32,
) -> Result<entity::product_category::Model, DbErr> {
    entity::product_category::ActiveModel {
        merchant_id: ActiveValue::Set(merchant_id),
        categ_name: ActiveValue::Set(name.to_string()),
        categ_order: ActiveValue::Set(categ_order),
        bg_color: ActiveValue::Set(None),
        available: ActiveValue::Set(true),
        enabled: ActiveValue::Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
}
