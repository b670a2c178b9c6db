use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000003_create_orders_table::Orders,
    m20260101_000020_create_locations_table::Locations,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderLocation::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderLocation::Id))
                    .col(integer(OrderLocation::OrderId))
                    .col(integer(OrderLocation::LocationId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_location_order_id")
                            .from(OrderLocation::Table, OrderLocation::OrderId)
                            .to(Orders::Table, Orders::OrderId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_location_location_id")
                            .from(OrderLocation::Table, OrderLocation::LocationId)
                            .to(Locations::Table, Locations::LocationId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderLocation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderLocation {
    Table,
    Id,
    OrderId,
    LocationId,
}
