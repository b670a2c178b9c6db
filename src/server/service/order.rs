use chrono::NaiveDateTime;
use sea_orm::DatabaseConnection;

use crate::{
    model::order::{OrderDto, PaymentDto},
    server::{
        data::{batch::CancelSignal, order::OrderRepository, payment::PaymentRepository},
        error::AppError,
        model::order::{AggregationOptions, Channel, PendingOrders},
    },
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
    options: AggregationOptions,
    cancel: CancelSignal,
}

impl<'a> OrderService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        options: AggregationOptions,
        cancel: CancelSignal,
    ) -> Self {
        Self {
            db,
            options,
            cancel,
        }
    }

    fn repository(&self) -> OrderRepository<'a> {
        OrderRepository::new(self.db, self.options, self.cancel.clone())
    }

    /// Gets the pending orders and active delivery sessions of a merchant
    pub async fn get_pending(
        &self,
        merchant_id: i32,
        channel: Option<Channel>,
    ) -> Result<PendingOrders, AppError> {
        Ok(self.repository().get_pending(merchant_id, channel).await?)
    }

    /// Gets a single order, `NotFound` when the merchant has no such order
    pub async fn get_by_id(&self, merchant_id: i32, order_id: i32) -> Result<OrderDto, AppError> {
        self.repository()
            .get_by_id(merchant_id, order_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", order_id)))
    }

    /// Gets the orders created within a date range
    pub async fn get_history(
        &self,
        merchant_id: i32,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<OrderDto>, AppError> {
        if from > to {
            return Err(AppError::BadRequest(
                "date_from must not be after date_to".to_string(),
            ));
        }

        Ok(self.repository().get_history(merchant_id, from, to).await?)
    }

    /// Gets the payments of an order
    pub async fn get_payments(
        &self,
        merchant_id: i32,
        order_id: i32,
    ) -> Result<Vec<PaymentDto>, AppError> {
        PaymentRepository::new(self.db)
            .get_by_order(merchant_id, order_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", order_id)))
    }

    /// Disables a payment of the merchant
    pub async fn disable_payment(&self, merchant_id: i32, payment_id: i32) -> Result<(), AppError> {
        let disabled = PaymentRepository::new(self.db)
            .disable(merchant_id, payment_id)
            .await?;

        if !disabled {
            return Err(AppError::NotFound(format!(
                "Payment {} not found",
                payment_id
            )));
        }

        tracing::info!(merchant_id, payment_id, "payment disabled");

        Ok(())
    }
}
