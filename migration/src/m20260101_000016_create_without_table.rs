use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000008_create_orderitems_table::Orderitems,
    m20260101_000011_create_components_table::Components,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Without::Table)
                    .if_not_exists()
                    .col(pk_auto(Without::Id))
                    .col(integer(Without::OrderItemId))
                    .col(integer(Without::OrderId))
                    .col(integer(Without::ProductId))
                    .col(integer(Without::ComponentId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_without_order_item_id")
                            .from(Without::Table, Without::OrderItemId)
                            .to(Orderitems::Table, Orderitems::OrderItemId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_without_component_id")
                            .from(Without::Table, Without::ComponentId)
                            .to(Components::Table, Components::ComponentId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Without::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Without {
    Table,
    Id,
    OrderItemId,
    OrderId,
    ProductId,
    ComponentId,
}
