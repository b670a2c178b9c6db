use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::UserId))
                    .col(integer(Users::MerchantId))
                    .col(string(Users::UserName))
                    .col(string_null(Users::FirstName))
                    .col(string_null(Users::LastName))
                    .col(string_null(Users::Tel))
                    .col(double_null(Users::Lat))
                    .col(double_null(Users::Lng))
                    .col(string_null(Users::ProfilePicture))
                    .col(string_null(Users::PlanningColor))
                    .col(string_uniq(Users::Token))
                    .col(boolean(Users::AccessReception).default(false))
                    .col(boolean(Users::AccessDelivery).default(false))
                    .col(boolean(Users::AccessWaiter).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Users {
    Table,
    UserId,
    MerchantId,
    UserName,
    FirstName,
    LastName,
    Tel,
    Lat,
    Lng,
    ProfilePicture,
    PlanningColor,
    Token,
    AccessReception,
    AccessDelivery,
    AccessWaiter,
}
