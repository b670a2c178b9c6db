use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::floor_plan::FloorPlanDto,
    server::{
        data::{batch::CancelSignal, floor_plan::FloorPlanRepository},
        error::AppError,
        model::order::AggregationOptions,
    },
};

pub struct FloorPlanService<'a> {
    db: &'a DatabaseConnection,
    options: AggregationOptions,
    cancel: CancelSignal,
}

impl<'a> FloorPlanService<'a> {
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

    /// Gets the merchant's floor plan as of now
    pub async fn get(&self, merchant_id: i32) -> Result<FloorPlanDto, AppError> {
        let repo = FloorPlanRepository::new(self.db, self.options, self.cancel.clone());

        Ok(repo.get(merchant_id, Utc::now().naive_utc()).await?)
    }
}
