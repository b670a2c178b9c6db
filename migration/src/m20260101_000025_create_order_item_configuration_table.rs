use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000008_create_orderitems_table::Orderitems,
    m20260101_000023_create_configurable_attribute_options_table::ConfigurableAttributeOptions,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderItemConfiguration::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderItemConfiguration::Id))
                    .col(integer(OrderItemConfiguration::OrderItemId))
                    .col(integer(OrderItemConfiguration::ConfigurationAttributeOptionId))
                    .col(integer(OrderItemConfiguration::Quantity).default(1))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_item_configuration_order_item_id")
                            .from(OrderItemConfiguration::Table, OrderItemConfiguration::OrderItemId)
                            .to(Orderitems::Table, Orderitems::OrderItemId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_item_configuration_option_id")
                            .from(OrderItemConfiguration::Table, OrderItemConfiguration::ConfigurationAttributeOptionId)
                            .to(ConfigurableAttributeOptions::Table, ConfigurableAttributeOptions::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderItemConfiguration::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderItemConfiguration {
    Table,
    Id,
    OrderItemId,
    ConfigurationAttributeOptionId,
    Quantity,
}
