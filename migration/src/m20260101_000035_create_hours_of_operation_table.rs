use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HoursOfOperation::Table)
                    .if_not_exists()
                    .col(pk_auto(HoursOfOperation::Id))
                    .col(integer(HoursOfOperation::MerchantId))
                    .col(integer(HoursOfOperation::DayOfWeekFrom))
                    .col(integer(HoursOfOperation::DayOfWeekTo))
                    .col(time(HoursOfOperation::HourFrom))
                    .col(time(HoursOfOperation::HourTo))
                    .col(boolean(HoursOfOperation::Enabled).default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HoursOfOperation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HoursOfOperation {
    Table,
    Id,
    MerchantId,
    DayOfWeekFrom,
    DayOfWeekTo,
    HourFrom,
    HourTo,
    Enabled,
}
