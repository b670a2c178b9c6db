use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(IntegrationUberEats::Table)
                    .if_not_exists()
                    .col(pk_auto(IntegrationUberEats::Id))
                    .col(integer(IntegrationUberEats::MerchantId))
                    .col(boolean(IntegrationUberEats::Enabled).default(true))
                    .col(string_null(IntegrationUberEats::EstimatedPreparationTime))
                    .col(string_null(IntegrationUberEats::DelayDuration))
                    .col(date_time_null(IntegrationUberEats::DelayUntil))
                    .col(date_time_null(IntegrationUberEats::ClosedUntil))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(IntegrationUberEats::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum IntegrationUberEats {
    Table,
    Id,
    MerchantId,
    Enabled,
    EstimatedPreparationTime,
    DelayDuration,
    DelayUntil,
    ClosedUntil,
}
