use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000003_create_orders_table::Orders,
    m20260101_000006_create_products_table::Products,
    m20260101_000007_create_discounts_table::Discounts,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orderitems::Table)
                    .if_not_exists()
                    .col(pk_auto(Orderitems::OrderItemId))
                    .col(integer(Orderitems::OrderId))
                    .col(integer(Orderitems::MerchantId))
                    .col(integer(Orderitems::ProductId))
                    .col(integer(Orderitems::Quantity).default(1))
                    .col(integer(Orderitems::PaidQuantity).default(0))
                    .col(integer(Orderitems::DistributedQuantity).default(0))
                    .col(integer(Orderitems::ReadyForDistributionQuantity).default(0))
                    .col(boolean(Orderitems::IsPaid).default(false))
                    .col(boolean(Orderitems::IsDistributed).default(false))
                    .col(big_integer(Orderitems::Price).default(0))
                    .col(integer_null(Orderitems::DiscountId))
                    .col(date_time_null(Orderitems::OrderedOn))
                    .col(string_null(Orderitems::ProductionStatus))
                    .col(integer(Orderitems::ProductionStatusDoneQuantity).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orderitems_order_id")
                            .from(Orderitems::Table, Orderitems::OrderId)
                            .to(Orders::Table, Orders::OrderId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orderitems_product_id")
                            .from(Orderitems::Table, Orderitems::ProductId)
                            .to(Products::Table, Products::ProductId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orderitems_discount_id")
                            .from(Orderitems::Table, Orderitems::DiscountId)
                            .to(Discounts::Table, Discounts::DiscountId)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orderitems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Orderitems {
    Table,
    OrderItemId,
    OrderId,
    MerchantId,
    ProductId,
    Quantity,
    PaidQuantity,
    DistributedQuantity,
    ReadyForDistributionQuantity,
    IsPaid,
    IsDistributed,
    Price,
    DiscountId,
    OrderedOn,
    ProductionStatus,
    ProductionStatusDoneQuantity,
}
