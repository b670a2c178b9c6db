use chrono::NaiveDateTime;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{batch::CancelSignal, menu::MenuRepository},
    error::AppError,
    model::{menu::MenuOutcome, order::AggregationOptions},
};

pub struct MenuService<'a> {
    db: &'a DatabaseConnection,
    options: AggregationOptions,
    cancel: CancelSignal,
}

impl<'a> MenuService<'a> {
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

    /// Gets the merchant's menu, or `NoUpdate` when `last_known_version` is current
    pub async fn get_menu(
        &self,
        merchant_id: i32,
        last_known_version: Option<NaiveDateTime>,
    ) -> Result<MenuOutcome, AppError> {
        let repo = MenuRepository::new(self.db, self.options, self.cancel.clone());

        let outcome = repo.get_menu(merchant_id, last_known_version).await?;

        if let MenuOutcome::NoUpdate { .. } = outcome {
            tracing::debug!(merchant_id, "menu already up to date");
        }

        Ok(outcome)
    }
}
