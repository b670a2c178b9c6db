use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MerchantParameters::Table)
                    .if_not_exists()
                    .col(integer(MerchantParameters::MerchantId).primary_key())
                    .col(date_time_null(MerchantParameters::LastMenuUpdate))
                    .col(boolean(MerchantParameters::IsOpen).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MerchantParameters::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MerchantParameters {
    Table,
    MerchantId,
    LastMenuUpdate,
    IsOpen,
}
