use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Productcateg::Table)
                    .if_not_exists()
                    .col(pk_auto(Productcateg::MerchantCategId))
                    .col(integer(Productcateg::MerchantId))
                    .col(string(Productcateg::CategName))
                    .col(integer(Productcateg::CategOrder).default(0))
                    .col(string_null(Productcateg::BgColor))
                    .col(boolean(Productcateg::Available).default(true))
                    .col(boolean(Productcateg::Enabled).default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Productcateg::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Productcateg {
    Table,
    MerchantCategId,
    MerchantId,
    CategName,
    CategOrder,
    BgColor,
    Available,
    Enabled,
}
