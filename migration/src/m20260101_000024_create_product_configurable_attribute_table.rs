use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000006_create_products_table::Products,
    m20260101_000022_create_configurable_attributes_table::ConfigurableAttributes,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductConfigurableAttribute::Table)
                    .if_not_exists()
                    .col(pk_auto(ProductConfigurableAttribute::Id))
                    .col(integer(ProductConfigurableAttribute::ProductId))
                    .col(integer(ProductConfigurableAttribute::ConfigurableAttributeId))
                    .col(integer(ProductConfigurableAttribute::NumOrder).default(0))
                    .col(boolean(ProductConfigurableAttribute::Enabled).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_configurable_attribute_product_id")
                            .from(ProductConfigurableAttribute::Table, ProductConfigurableAttribute::ProductId)
                            .to(Products::Table, Products::ProductId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_configurable_attribute_attribute_id")
                            .from(ProductConfigurableAttribute::Table, ProductConfigurableAttribute::ConfigurableAttributeId)
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
            .drop_table(Table::drop().table(ProductConfigurableAttribute::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProductConfigurableAttribute {
    Table,
    Id,
    ProductId,
    ConfigurableAttributeId,
    NumOrder,
    Enabled,
}
