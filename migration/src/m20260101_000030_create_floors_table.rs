use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Floors::Table)
                    .if_not_exists()
                    .col(pk_auto(Floors::Id))
                    .col(integer(Floors::MerchantId))
                    .col(string(Floors::Name))
                    .col(boolean(Floors::Enabled).default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Floors::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Floors {
    Table,
    Id,
    MerchantId,
    Name,
    Enabled,
}
