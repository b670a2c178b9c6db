//! Order factory for creating test order headers.
//!
//! Defaults describe an open dine-in order created now, which the pending view includes.

use crate::factory::helpers::next_id;
use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::order::OrderFactory;
///
/// let order = OrderFactory::new(&db, 1)
///     .order_type("DELIVERY")
///     .fulfillment_type("DELIVERY_BY_RESTAURANT")
///     .customer_id(customer.customer_id)
///     .build()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    merchant_id: i32,
    order_num: String,
    state: Option<String>,
    brand_status: Option<String>,
    order_type: Option<String>,
    fulfillment_type: Option<String>,
    customer_id: Option<i32>,
    responsible: Option<String>,
    use_customer_temporary_address: bool,
    price: i64,
    creation_date: NaiveDateTime,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory with default values.
    ///
    /// Defaults:
    /// - order_num: `"{id}"` where id is auto-incremented
    /// - state: `"OPEN"`, brand_status: `None`
    /// - order_type: `"IN"`, fulfillment_type: `None`
    /// - responsible: `"0"` (unassigned)
    /// - price: `1500`
    /// - creation_date: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `merchant_id` - Merchant owning the order
    ///
    /// # Returns
    /// - `OrderFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, merchant_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            merchant_id,
            order_num: id.to_string(),
            state: Some("OPEN".to_string()),
            brand_status: None,
            order_type: Some("IN".to_string()),
            fulfillment_type: None,
            customer_id: None,
            responsible: Some("0".to_string()),
            use_customer_temporary_address: false,
            price: 1500,
            creation_date: Utc::now().naive_utc(),
        }
    }

    /// Sets the order state (`OPEN`, `CLOSED`, ...).
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Sets the brand status reported by the ordering platform.
    pub fn brand_status(mut self, brand_status: impl Into<String>) -> Self {
        self.brand_status = Some(brand_status.into());
        self
    }

    /// Sets the order type (`IN`, `TAKE_AWAY`, `DELIVERY`).
    pub fn order_type(mut self, order_type: impl Into<String>) -> Self {
        self.order_type = Some(order_type.into());
        self
    }

    /// Sets the fulfillment type.
    pub fn fulfillment_type(mut self, fulfillment_type: impl Into<String>) -> Self {
        self.fulfillment_type = Some(fulfillment_type.into());
        self
    }

    /// Links the order to a customer.
    pub fn customer_id(mut self, customer_id: i32) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    /// Sets the raw `responsible` value (`"0"`, `"-1"` or a user id).
    pub fn responsible(mut self, responsible: impl Into<String>) -> Self {
        self.responsible = Some(responsible.into());
        self
    }

    /// Selects the customer's temporary address for this order.
    pub fn use_customer_temporary_address(mut self, enabled: bool) -> Self {
        self.use_customer_temporary_address = enabled;
        self
    }

    /// Sets the order total in cents.
    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    /// Sets the creation timestamp.
    pub fn creation_date(mut self, creation_date: NaiveDateTime) -> Self {
        self.creation_date = creation_date;
        self
    }

    /// Builds and inserts the order into the database.
    ///
    /// # Returns
    /// - `Ok(entity::order::Model)` - Created order
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        entity::order::ActiveModel {
            merchant_id: ActiveValue::Set(self.merchant_id),
            customer_id: ActiveValue::Set(self.customer_id),
            order_num: ActiveValue::Set(Some(self.order_num)),
            order_type: ActiveValue::Set(self.order_type),
            state: ActiveValue::Set(self.state),
            scheduled: ActiveValue::Set(false),
            brand: ActiveValue::Set(None),
            brand_status: ActiveValue::Set(self.brand_status),
            price: ActiveValue::Set(self.price),
            tva: ActiveValue::Set(Some(self.price / 11)),
            ht: ActiveValue::Set(Some(self.price - self.price / 11)),
            is_paid: ActiveValue::Set(false),
            is_distributed: ActiveValue::Set(false),
            is_delivery: ActiveValue::Set(false),
            fulfillment_type: ActiveValue::Set(self.fulfillment_type),
            use_customer_temporary_address: ActiveValue::Set(self.use_customer_temporary_address),
            responsible: ActiveValue::Set(self.responsible),
            creation_date: ActiveValue::Set(Some(self.creation_date)),
            last_update: ActiveValue::Set(Some(self.creation_date)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open order with default values.
///
/// Shorthand for `OrderFactory::new(db, merchant_id).build().await`.
pub async fn create_order(
    db: &DatabaseConnection,
    merchant_id: i32,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, merchant_id).build().await
}
