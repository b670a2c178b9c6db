use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000008_create_orderitems_table::Orderitems,
    m20260101_000018_create_scannorder_session_table::ScannorderSession,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SessionOrderitem::Table)
                    .if_not_exists()
                    .col(pk_auto(SessionOrderitem::Id))
                    .col(integer(SessionOrderitem::OrderItemId))
                    .col(string(SessionOrderitem::UserCode))
                    .col(integer(SessionOrderitem::Quantity).default(1))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_session_orderitem_order_item_id")
                            .from(SessionOrderitem::Table, SessionOrderitem::OrderItemId)
                            .to(Orderitems::Table, Orderitems::OrderItemId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_session_orderitem_user_code")
                            .from(SessionOrderitem::Table, SessionOrderitem::UserCode)
                            .to(ScannorderSession::Table, ScannorderSession::UserCode)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SessionOrderitem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SessionOrderitem {
    Table,
    Id,
    OrderItemId,
    UserCode,
    Quantity,
}
