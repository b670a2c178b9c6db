use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000003_create_orders_table::Orders;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(pk_auto(Payments::PaymentId))
                    .col(integer(Payments::OrderId))
                    .col(string(Payments::Mop))
                    .col(double(Payments::Amount).default(0.0))
                    .col(date_time_null(Payments::PaymentDate))
                    .col(boolean(Payments::Enabled).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payments_order_id")
                            .from(Payments::Table, Payments::OrderId)
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
            .drop_table(Table::drop().table(Payments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Payments {
    Table,
    PaymentId,
    OrderId,
    Mop,
    Amount,
    PaymentDate,
    Enabled,
}
