use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ConfigurableAttributes::Table)
                    .if_not_exists()
                    .col(pk_auto(ConfigurableAttributes::Id))
                    .col(integer(ConfigurableAttributes::MerchantId))
                    .col(string(ConfigurableAttributes::Title))
                    .col(integer(ConfigurableAttributes::MaxOptions).default(1))
                    .col(integer(ConfigurableAttributes::MinOptions).default(0))
                    .col(string(ConfigurableAttributes::AttributeType))
                    .col(boolean(ConfigurableAttributes::Enabled).default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ConfigurableAttributes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ConfigurableAttributes {
    Table,
    Id,
    MerchantId,
    Title,
    MaxOptions,
    MinOptions,
    AttributeType,
    Enabled,
}
