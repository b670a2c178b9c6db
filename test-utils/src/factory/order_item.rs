//! Order item factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for order lines. Merchant and order come from the parent order.
pub struct OrderItemFactory<'a> {
    db: &'a DatabaseConnection,
    order_id: i32,
    merchant_id: i32,
    product_id: i32,
    quantity: i32,
    price: i64,
    discount_id: Option<i32>,
}

impl<'a> OrderItemFactory<'a> {
    /// Creates a factory for one unit of `product_id` priced at `1000`.
    pub fn new(db: &'a DatabaseConnection, order: &entity::order::Model, product_id: i32) -> Self {
        Self {
            db,
            order_id: order.order_id,
            merchant_id: order.merchant_id,
            product_id,
            quantity: 1,
            price: 1000,
            discount_id: None,
        }
    }

    /// Sets the ordered quantity.
    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the line price in cents.
    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    /// Applies a discount to the line.
    pub fn discount_id(mut self, discount_id: i32) -> Self {
        self.discount_id = Some(discount_id);
        self
    }

    /// Builds and inserts the order item.
    pub async fn build(self) -> Result<entity::order_item::Model, DbErr> {
        entity::order_item::ActiveModel {
            order_id: ActiveValue::Set(self.order_id),
            merchant_id: ActiveValue::Set(self.merchant_id),
            product_id: ActiveValue::Set(self.product_id),
            quantity: ActiveValue::Set(self.quantity),
            paid_quantity: ActiveValue::Set(0),
            distributed_quantity: ActiveValue::Set(0),
            ready_for_distribution_quantity: ActiveValue::Set(0),
            is_paid: ActiveValue::Set(false),
            is_distributed: ActiveValue::Set(false),
            price: ActiveValue::Set(self.price),
            discount_id: ActiveValue::Set(self.discount_id),
            ordered_on: ActiveValue::Set(None),
            production_status: ActiveValue::Set(Some("WAITING".to_string())),
            production_status_done_quantity: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a single-unit order item for `product_id` in `order`.
pub async fn create_order_item(
    db: &DatabaseConnection,
    order: &entity::order::Model,
    product_id: i32,
) -> Result<entity::order_item::Model, DbErr> {
    OrderItemFactory::new(db, order, product_id).build().await
}
