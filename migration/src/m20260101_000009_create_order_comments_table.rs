use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000001_create_users_table::Users,
    m20260101_000003_create_orders_table::Orders,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderComments::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderComments::Id))
                    .col(integer(OrderComments::OrderId))
                    .col(integer_null(OrderComments::OrderItemId))
                    .col(integer_null(OrderComments::UserId))
                    .col(text(OrderComments::Content))
                    .col(date_time_null(OrderComments::CreationDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_comments_order_id")
                            .from(OrderComments::Table, OrderComments::OrderId)
                            .to(Orders::Table, Orders::OrderId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_comments_user_id")
                            .from(OrderComments::Table, OrderComments::UserId)
                            .to(Users::Table, Users::UserId)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderComments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderComments {
    Table,
    Id,
    OrderId,
    OrderItemId,
    UserId,
    Content,
    CreationDate,
}
