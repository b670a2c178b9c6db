use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000022_create_configurable_attributes_table::ConfigurableAttributes;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ConfigurableAttributeOptions::Table)
                    .if_not_exists()
                    .col(pk_auto(ConfigurableAttributeOptions::Id))
                    .col(integer(ConfigurableAttributeOptions::ConfigurableAttributeId))
                    .col(string(ConfigurableAttributeOptions::Title))
                    .col(big_integer(ConfigurableAttributeOptions::ExtraPrice).default(0))
                    .col(integer(ConfigurableAttributeOptions::MaxQuantity).default(1))
                    .col(boolean(ConfigurableAttributeOptions::Enabled).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_configurable_attribute_options_attribute_id")
                            .from(ConfigurableAttributeOptions::Table, ConfigurableAttributeOptions::ConfigurableAttributeId)
                            .to(ConfigurableAttributes::Table, ConfigurableAttributes::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ConfigurableAttributeOptions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ConfigurableAttributeOptions {
    Table,
    Id,
    ConfigurableAttributeId,
    Title,
    ExtraPrice,
    MaxQuantity,
    Enabled,
}
