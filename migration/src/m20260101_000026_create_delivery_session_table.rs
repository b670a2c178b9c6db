use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DeliverySession::Table)
                    .if_not_exists()
                    .col(pk_auto(DeliverySession::Id))
                    .col(integer(DeliverySession::MerchantId))
                    .col(integer(DeliverySession::UserId))
                    .col(string(DeliverySession::Status))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_delivery_session_user_id")
                            .from(DeliverySession::Table, DeliverySession::UserId)
                            .to(Users::Table, Users::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DeliverySession::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DeliverySession {
    Table,
    Id,
    MerchantId,
    UserId,
    Status,
}
