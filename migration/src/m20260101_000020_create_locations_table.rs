use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Locations::Table)
                    .if_not_exists()
                    .col(pk_auto(Locations::LocationId))
                    .col(integer(Locations::MerchantId))
                    .col(string(Locations::LocationName))
                    .col(string_null(Locations::LocationDesc))
                    .col(integer(Locations::Seats).default(0))
                    .col(integer(Locations::LocationOrder).default(0))
                    .col(integer_null(Locations::FloorId))
                    .col(string_null(Locations::Shape))
                    .col(double_null(Locations::CurrentX))
                    .col(double_null(Locations::CurrentY))
                    .col(double_null(Locations::CurrentWidth))
                    .col(double_null(Locations::CurrentHeight))
                    .col(double_null(Locations::Angle))
                    .col(boolean(Locations::Enabled).default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Locations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Locations {
    Table,
    LocationId,
    MerchantId,
    LocationName,
    LocationDesc,
    Seats,
    LocationOrder,
    FloorId,
    Shape,
    CurrentX,
    CurrentY,
    CurrentWidth,
    CurrentHeight,
    Angle,
    Enabled,
}
