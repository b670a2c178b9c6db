use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::pos::PosStatusDto,
    server::{
        data::{batch::CancelSignal, pos::PosRepository},
        error::AppError,
        model::order::AggregationOptions,
    },
};

pub struct PosService<'a> {
    db: &'a DatabaseConnection,
    options: AggregationOptions,
    cancel: CancelSignal,
}

impl<'a> PosService<'a> {
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

    fn repository(&self) -> PosRepository<'a> {
        PosRepository::new(self.db, self.options, self.cancel.clone())
    }

    /// Gets the merchant's POS status, `NotFound` for an unknown merchant
    pub async fn get_status(&self, merchant_id: i32) -> Result<PosStatusDto, AppError> {
        self.repository()
            .get_status(merchant_id, Utc::now())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Merchant {} not found", merchant_id)))
    }

    /// Opens or closes the POS by hand, then reads the resulting status
    pub async fn set_open(
        &self,
        merchant_id: i32,
        is_open: bool,
    ) -> Result<PosStatusDto, AppError> {
        let updated = self.repository().set_open(merchant_id, is_open).await?;

        if !updated {
            return Err(AppError::NotFound(format!(
                "Merchant {} not found",
                merchant_id
            )));
        }

        tracing::info!(merchant_id, is_open, "pos open switch changed");

        self.get_status(merchant_id).await
    }
}

#[cfg(test)]
mod tests {
    use test_utils::{builder::TestBuilder, factory};

    use super::*;

    fn service(db: &DatabaseConnection) -> PosService<'_> {
        PosService::new(db, AggregationOptions::default(), CancelSignal::never())
    }

    #[tokio::test]
    async fn unknown_merchant_is_not_found() {
        let test = TestBuilder::new().with_pos_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        assert!(matches!(
            service(db).get_status(1).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service(db).set_open(1, true).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn open_switch_is_reflected_in_the_status() {
        let test = TestBuilder::new().with_pos_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        factory::merchant::create_merchant(db, 1, "Europe/Paris").await.unwrap();

        let opened = service(db).set_open(1, true).await.unwrap();
        assert_eq!(opened.wello_resto.is_open, 1);

        let closed = service(db).set_open(1, false).await.unwrap();
        assert_eq!(closed.wello_resto.is_open, 0);
    }
}
