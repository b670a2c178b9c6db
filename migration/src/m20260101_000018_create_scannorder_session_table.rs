use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ScannorderSession::Table)
                    .if_not_exists()
                    .col(string(ScannorderSession::UserCode).primary_key())
                    .col(integer(ScannorderSession::MerchantId))
                    .col(string_null(ScannorderSession::UserName))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ScannorderSession::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ScannorderSession {
    Table,
    UserCode,
    MerchantId,
    UserName,
}
