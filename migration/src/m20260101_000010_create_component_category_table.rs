use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ComponentCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(ComponentCategory::MerchantCategId))
                    .col(integer(ComponentCategory::MerchantId))
                    .col(string(ComponentCategory::Name))
                    .col(integer(ComponentCategory::CategOrder).default(0))
                    .col(boolean(ComponentCategory::Available).default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ComponentCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ComponentCategory {
    Table,
    MerchantCategId,
    MerchantId,
    Name,
    CategOrder,
    Available,
}
