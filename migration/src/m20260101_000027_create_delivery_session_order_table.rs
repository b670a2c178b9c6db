use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000003_create_orders_table::Orders,
    m20260101_000026_create_delivery_session_table::DeliverySession,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DeliverySessionOrder::Table)
                    .if_not_exists()
                    .col(pk_auto(DeliverySessionOrder::Id))
                    .col(integer(DeliverySessionOrder::DeliverySessionId))
                    .col(integer(DeliverySessionOrder::OrderId))
                    .col(big_integer_null(DeliverySessionOrder::Priority))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_delivery_session_order_session_id")
                            .from(DeliverySessionOrder::Table, DeliverySessionOrder::DeliverySessionId)
                            .to(DeliverySession::Table, DeliverySession::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_delivery_session_order_order_id")
                            .from(DeliverySessionOrder::Table, DeliverySessionOrder::OrderId)
                            .to(Orders::Table, Orders::OrderId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DeliverySessionOrder::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DeliverySessionOrder {
    Table,
    Id,
    DeliverySessionId,
    OrderId,
    Priority,
}
