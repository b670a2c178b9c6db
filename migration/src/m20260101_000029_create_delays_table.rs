use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Delays::Table)
                    .if_not_exists()
                    .col(pk_auto(Delays::Id))
                    .col(string(Delays::ShortDescription))
                    .col(integer(Delays::Duration))
                    .col(boolean(Delays::Enabled).default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Delays::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Delays {
    Table,
    Id,
    ShortDescription,
    Duration,
    Enabled,
}
