use sea_orm::DatabaseConnection;

use crate::{
    model::order::DeliverySessionDto,
    server::{
        data::{batch::CancelSignal, order::OrderRepository},
        error::AppError,
        model::order::AggregationOptions,
    },
};

pub struct DeliverySessionService<'a> {
    db: &'a DatabaseConnection,
    options: AggregationOptions,
    cancel: CancelSignal,
}

impl<'a> DeliverySessionService<'a> {
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

    /// Gets the merchant's active delivery sessions with their orders
    pub async fn get_pending(&self, merchant_id: i32) -> Result<Vec<DeliverySessionDto>, AppError> {
        let repo = OrderRepository::new(self.db, self.options, self.cancel.clone());

        Ok(repo.get_pending_delivery_sessions(merchant_id).await?)
    }
}
