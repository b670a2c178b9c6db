//! Payment data repository.
//!
//! Reads the payment list of one order and carries the single write path of the service:
//! disabling a payment.

use entity::{order, payment};
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};

use crate::{model::order::PaymentDto, server::data::order::assemble::payment_dto};

pub struct PaymentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentRepository<'a> {
    /// Creates a new PaymentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PaymentRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every payment of an order, enabled or not, in payment id order.
    ///
    /// # Arguments
    /// - `merchant_id` - Merchant the order must belong to
    /// - `order_id` - Order whose payments are listed
    ///
    /// # Returns
    /// - `Ok(Some(Vec<PaymentDto>))` - The order exists; its payments, possibly none
    /// - `Ok(None)` - No such order for this merchant
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_order(
        &self,
        merchant_id: i32,
        order_id: i32,
    ) -> Result<Option<Vec<PaymentDto>>, DbErr> {
        let order = order::Entity::find_by_id(order_id)
            .filter(order::Column::MerchantId.eq(merchant_id))
            .one(self.db)
            .await?;

        if order.is_none() {
            return Ok(None);
        }

        let payments = payment::Entity::find()
            .filter(payment::Column::OrderId.eq(order_id))
            .order_by_asc(payment::Column::PaymentId)
            .all(self.db)
            .await?;

        Ok(Some(payments.into_iter().map(payment_dto).collect()))
    }

    /// Disables a payment.
    ///
    /// Disabling an already disabled payment succeeds.
    ///
    /// # Arguments
    /// - `merchant_id` - Merchant the payment's order must belong to
    /// - `payment_id` - Payment to disable
    ///
    /// # Returns
    /// - `Ok(true)` - Payment found and disabled
    /// - `Ok(false)` - No such payment for this merchant
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn disable(&self, merchant_id: i32, payment_id: i32) -> Result<bool, DbErr> {
        let owned = payment::Entity::find_by_id(payment_id)
            .join(JoinType::InnerJoin, payment::Relation::Order.def())
            .filter(order::Column::MerchantId.eq(merchant_id))
            .one(self.db)
            .await?;

        if owned.is_none() {
            return Ok(false);
        }

        payment::Entity::update_many()
            .col_expr(payment::Column::Enabled, Expr::value(false))
            .filter(payment::Column::PaymentId.eq(payment_id))
            .exec(self.db)
            .await?;

        Ok(true)
    }
}
